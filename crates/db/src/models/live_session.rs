//! Live session model and DTOs.

use pollroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `live_sessions` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct LiveSession {
    pub id: DbId,
    pub presentation_id: DbId,
    pub access_code: String,
    /// One of `pollroom_core::session::VALID_STATUSES`.
    pub status: String,
    pub current_question_id: Option<DbId>,
    pub created_at: Timestamp,
    /// Stamped the first time the session goes live.
    pub started_at: Option<Timestamp>,
    /// Stamped the first time the session ends.
    pub ended_at: Option<Timestamp>,
    pub updated_at: Timestamp,
}

/// Session joined with its presentation title, used by listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LiveSessionWithPresentation {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub session: LiveSession,
    pub presentation_title: String,
}

/// DTO for creating a session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLiveSession {
    pub presentation_id: DbId,
    /// Generated if omitted.
    pub access_code: Option<String>,
    /// Defaults to `created` if omitted.
    pub status: Option<String>,
    pub current_question_id: Option<DbId>,
}

/// DTO replacing every mutable session field.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLiveSession {
    pub presentation_id: DbId,
    pub access_code: String,
    pub status: String,
    pub current_question_id: Option<DbId>,
}

/// DTO for a partial session update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchLiveSession {
    pub status: Option<String>,
    pub current_question_id: Option<DbId>,
}
