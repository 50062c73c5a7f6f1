//! Participant model and DTOs.

use pollroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `participants` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Participant {
    pub id: DbId,
    pub session_id: DbId,
    pub nickname: String,
    pub joined_at: Timestamp,
}

/// DTO for joining a session. The session comes from the route.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateParticipant {
    #[validate(length(min = 1, max = 60))]
    pub nickname: String,
}
