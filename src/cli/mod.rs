// CareCompanion — CLI Module
//
// Command-line interface using clap derive macros.
// Subcommands: register, login, whoami, logout, accounts, strength.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{execute, run};

/// CareCompanion — local account and session store.
#[derive(Parser, Debug)]
#[command(name = "carecompanion")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the account database.
    #[arg(long, global = true, env = "CARECOMPANION_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Fail on corrupted storage instead of treating it as empty.
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new account.
    Register {
        /// Display name, at least 2 characters.
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        /// At least 6 characters.
        #[arg(long)]
        password: String,

        /// Repeat the password. Defaults to `--password`.
        #[arg(long)]
        confirm_password: Option<String>,

        /// Accept the terms of service.
        #[arg(long, default_value = "false")]
        accept_terms: bool,
    },

    /// Log in with an email or username.
    Login {
        /// Email address or username.
        identifier: String,

        #[arg(long)]
        password: String,
    },

    /// Show who is currently logged in.
    Whoami,

    /// End the current session.
    Logout,

    /// List registered accounts (passwords are never shown).
    Accounts,

    /// Rate a password the way the registration screen does.
    Strength {
        password: String,
    },
}

// ─── Tests ───────────────────────────────────────────────────────────────────
