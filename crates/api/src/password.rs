//! Password storage for user accounts.
//!
//! Only an Argon2id PHC string (algorithm, parameters and salt embedded) is
//! persisted. The plaintext never reaches the repository layer.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use pollroom_core::error::CoreError;

use crate::error::{AppError, AppResult};

/// Shortest password the users API accepts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Reject passwords shorter than [`MIN_PASSWORD_LENGTH`] characters.
pub fn check_strength(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}

/// Check strength, then hash with a fresh salt.
pub fn hash_password(password: &str) -> AppResult<String> {
    check_strength(password)?;
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))
}
