//! Answer option model and DTOs (`options` table).

use pollroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An answer option row from the `options` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct QuestionOption {
    pub id: DbId,
    pub question_id: DbId,
    pub text: String,
    pub is_correct: bool,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an option. The question comes from the route.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionOption {
    #[validate(length(min = 1))]
    pub text: String,
    /// Defaults to `false` if omitted.
    pub is_correct: Option<bool>,
    /// Defaults to 0 if omitted.
    #[validate(range(min = 0))]
    pub order_index: Option<i32>,
}

/// DTO replacing every mutable option field.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuestionOption {
    pub question_id: DbId,
    #[validate(length(min = 1))]
    pub text: String,
    pub is_correct: bool,
    #[validate(range(min = 0))]
    pub order_index: i32,
}

/// DTO for a partial option update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PatchQuestionOption {
    #[validate(length(min = 1))]
    pub text: Option<String>,
    pub is_correct: Option<bool>,
    #[validate(range(min = 0))]
    pub order_index: Option<i32>,
}
