// CareCompanion — Library root
//
// Re-exports the store, forms, config, and CLI modules.

pub mod cli;
pub mod config;
pub mod error;
pub mod forms;
pub mod store;

pub use error::{CareCompanionError, Result};
