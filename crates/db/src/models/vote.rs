//! Vote model and DTOs.

use pollroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `votes` table. Exactly one of `option_id` and
/// `text_answer` is set.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Vote {
    pub id: DbId,
    pub session_id: DbId,
    pub participant_id: DbId,
    pub question_id: DbId,
    pub option_id: Option<DbId>,
    pub text_answer: Option<String>,
    pub created_at: Timestamp,
}

/// Vote joined with the voter's nickname and the question text.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VoteDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub vote: Vote,
    pub nickname: String,
    pub question_text: String,
}

/// DTO for casting a vote. The session comes from the route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVote {
    pub participant_id: DbId,
    pub question_id: DbId,
    pub option_id: Option<DbId>,
    pub text_answer: Option<String>,
}
