// CareCompanion — Forms Module
//
// Input rules the login and registration screens apply before calling the
// store. The store itself only enforces uniqueness; format checks live here.

mod error;
mod strength;
mod validation;

pub use error::FormError;
pub use strength::{PasswordChecks, PasswordStrength};
pub use validation::{
    LoginForm, RegistrationForm, MIN_PASSWORD_LEN, MIN_USERNAME_LEN,
};
