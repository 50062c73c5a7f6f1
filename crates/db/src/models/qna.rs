//! Q&A message and upvote models and DTOs.

use pollroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `qna_messages` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct QnaMessage {
    pub id: DbId,
    pub session_id: DbId,
    /// `None` for anonymous messages.
    pub participant_id: Option<DbId>,
    pub text: String,
    pub is_answered: bool,
    pub is_hidden: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Message with author nickname and upvote count, used by listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QnaMessageWithStats {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub message: QnaMessage,
    pub nickname: Option<String>,
    pub upvote_count: i64,
}

/// DTO for posting a message. The session comes from the route.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQnaMessage {
    pub participant_id: Option<DbId>,
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
}

/// DTO for moderating a message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchQnaMessage {
    pub is_answered: Option<bool>,
    pub is_hidden: Option<bool>,
}

/// A row from the `qna_upvotes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct QnaUpvote {
    pub id: DbId,
    pub message_id: DbId,
    pub participant_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for upvoting a message. The message comes from the route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQnaUpvote {
    pub participant_id: DbId,
}
