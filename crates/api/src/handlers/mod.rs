//! HTTP handlers, one module per resource.

pub mod participant;
pub mod presentation;
pub mod qna;
pub mod question;
pub mod question_option;
pub mod question_type;
pub mod session;
pub mod user;
pub mod vote;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pollroom_core::error::CoreError;
use pollroom_core::types::DbId;
use pollroom_db::PatchOutcome;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Shorthand for a 404 on `entity` with `id`.
pub(crate) fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// Render a patch outcome: 200 with the row, 204 when nothing was supplied,
/// 404 when the row does not exist.
pub(crate) fn patch_response<T: Serialize>(
    outcome: PatchOutcome<T>,
    entity: &'static str,
    id: DbId,
) -> AppResult<Response> {
    match outcome {
        PatchOutcome::Updated(row) => Ok(Json(row).into_response()),
        PatchOutcome::Unchanged => Ok(StatusCode::NO_CONTENT.into_response()),
        PatchOutcome::NotFound => Err(not_found(entity, id)),
    }
}

/// Render a delete result: 204 if the row existed, 404 otherwise.
pub(crate) fn delete_response(deleted: bool, entity: &'static str, id: DbId) -> AppResult<StatusCode> {
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(entity, id))
    }
}
