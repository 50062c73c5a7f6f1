//! Live session status lifecycle.
//!
//! A session moves `created -> live -> ended`. A session that never went
//! live may be ended directly. Nothing leaves `ended`.
//!
//! The status strings must match the `ck_live_sessions_status` check
//! constraint in the live sessions migration.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Session exists but participants are not being shown questions yet.
pub const STATUS_CREATED: &str = "created";
/// Session is running.
pub const STATUS_LIVE: &str = "live";
/// Session is over. Terminal.
pub const STATUS_ENDED: &str = "ended";

/// Status assigned when a session is created without one.
pub const DEFAULT_STATUS: &str = STATUS_CREATED;

/// All valid session statuses, in lifecycle order.
pub const VALID_STATUSES: &[&str] = &[STATUS_CREATED, STATUS_LIVE, STATUS_ENDED];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown session status: '{status}'. Valid statuses: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Whether a session may move from `from` to `to`.
///
/// Staying in the same status is always allowed.
pub fn can_transition(from: &str, to: &str) -> bool {
    if from == to {
        return true;
    }
    matches!(
        (from, to),
        (STATUS_CREATED, STATUS_LIVE) | (STATUS_LIVE, STATUS_ENDED) | (STATUS_CREATED, STATUS_ENDED)
    )
}

/// Validate a status change, returning [`CoreError::Conflict`] for a move the
/// lifecycle does not allow.
pub fn validate_transition(from: &str, to: &str) -> Result<(), CoreError> {
    validate_status(to)?;
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::Conflict(format!(
            "Session cannot move from '{from}' to '{to}'"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
