//! Question entity model and DTOs.

use pollroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A question row from the `questions` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub presentation_id: DbId,
    pub type_code: String,
    pub text: String,
    pub media_url: Option<String>,
    pub order_index: i32,
    /// Caller-owned JSON document; stored and returned untouched.
    pub settings: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Question joined with its type label, used by listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuestionWithType {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub question: Question,
    pub type_label: String,
}

/// DTO for creating a question. The presentation comes from the route.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(length(min = 1, max = 50))]
    pub type_code: String,
    #[validate(length(min = 1))]
    pub text: String,
    pub media_url: Option<String>,
    /// Defaults to 0 if omitted.
    #[validate(range(min = 0))]
    pub order_index: Option<i32>,
    /// Defaults to `{}` if omitted.
    pub settings: Option<serde_json::Value>,
}

/// DTO replacing every mutable question field.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuestion {
    pub presentation_id: DbId,
    #[validate(length(min = 1, max = 50))]
    pub type_code: String,
    #[validate(length(min = 1))]
    pub text: String,
    pub media_url: Option<String>,
    #[validate(range(min = 0))]
    pub order_index: i32,
    /// Omitted or `null` resets to `{}`.
    pub settings: Option<serde_json::Value>,
}

/// DTO for a partial question update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PatchQuestion {
    #[validate(length(min = 1, max = 50))]
    pub type_code: Option<String>,
    #[validate(length(min = 1))]
    pub text: Option<String>,
    pub media_url: Option<String>,
    #[validate(range(min = 0))]
    pub order_index: Option<i32>,
    pub settings: Option<serde_json::Value>,
}

/// Result of a guarded question delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionDeletion {
    Deleted,
    NotFound,
    /// The question is the current question of a live session.
    InUse,
}
