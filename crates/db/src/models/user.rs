//! User entity model and DTOs.
//!
//! The password hash is written but never read back: [`User`] has no
//! `password_hash` field and the repository never selects the column.

use pollroom_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A user row from the `users` table, without the password hash.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub avatar_url: Option<String>,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub avatar_url: Option<String>,
    /// Defaults to `teacher` if omitted.
    pub role: Option<String>,
}

/// DTO replacing every mutable user field.
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub email: String,
    pub password_hash: String,
    pub avatar_url: Option<String>,
    pub role: String,
}

/// DTO for a partial user update. Only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct PatchUser {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Option<String>,
}
