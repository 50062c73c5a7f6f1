//! Presentation entity model and DTOs.

use pollroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A presentation row from the `presentations` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Presentation {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Presentation joined with its owner's email, used by listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PresentationWithOwner {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub presentation: Presentation,
    pub owner_email: String,
}

/// DTO for creating a new presentation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePresentation {
    pub owner_id: DbId,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
}

/// DTO replacing every mutable presentation field.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePresentation {
    pub owner_id: DbId,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
}

/// DTO for a partial presentation update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PatchPresentation {
    pub owner_id: Option<DbId>,
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
}
