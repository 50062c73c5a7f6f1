//! Well-known user role names.
//!
//! `users.role` is free text in the database; these are the values the API
//! accepts.

use crate::error::CoreError;

pub const ROLE_TEACHER: &str = "teacher";
pub const ROLE_ADMIN: &str = "admin";

/// Role assigned when a user is created without one.
pub const DEFAULT_ROLE: &str = ROLE_TEACHER;

pub const VALID_ROLES: &[&str] = &[ROLE_TEACHER, ROLE_ADMIN];

pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown role: '{role}'. Valid roles: {}",
            VALID_ROLES.join(", ")
        )))
    }
}
