//! Handlers for the `/sessions` resource.
//!
//! Sessions follow the `created -> live -> ended` lifecycle; illegal moves
//! are refused with 409. Access codes are normalized to uppercase before
//! they are stored or looked up.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use pollroom_core::error::CoreError;
use pollroom_core::types::DbId;
use pollroom_core::{access_code, session};
use pollroom_db::models::live_session::{
    CreateLiveSession, LiveSession, LiveSessionWithPresentation, PatchLiveSession,
    UpdateLiveSession,
};
use pollroom_db::repositories::{LiveSessionRepo, QuestionRepo};
use pollroom_db::PatchOutcome;

use super::{delete_response, not_found, patch_response};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Load a session or fail with 404.
pub(crate) async fn load_session(state: &AppState, id: DbId) -> AppResult<LiveSession> {
    LiveSessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("LiveSession", id))
}

/// Normalize and validate a caller-supplied access code.
fn checked_access_code(raw: &str) -> Result<String, CoreError> {
    let code = access_code::normalize(raw);
    access_code::validate(&code)?;
    Ok(code)
}

/// The current question must be one of the presentation's questions.
async fn check_current_question(
    state: &AppState,
    presentation_id: DbId,
    question_id: Option<DbId>,
) -> AppResult<()> {
    let Some(question_id) = question_id else {
        return Ok(());
    };
    match QuestionRepo::find_by_id(&state.pool, question_id).await? {
        Some(question) if question.presentation_id == presentation_id => Ok(()),
        _ => Err(AppError::Core(CoreError::Validation(format!(
            "Question {question_id} does not belong to presentation {presentation_id}"
        )))),
    }
}

/// POST /api/v1/sessions
///
/// Generates an access code when none is supplied.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateLiveSession>,
) -> AppResult<(StatusCode, Json<LiveSession>)> {
    let code = match input.access_code.as_deref() {
        Some(raw) => checked_access_code(raw)?,
        None => access_code::generate(),
    };
    if let Some(status) = &input.status {
        session::validate_status(status)?;
    }
    check_current_question(&state, input.presentation_id, input.current_question_id).await?;

    let created = LiveSessionRepo::create(&state.pool, &input, &code).await?;
    tracing::info!(
        session_id = created.id,
        presentation_id = created.presentation_id,
        access_code = %created.access_code,
        status = %created.status,
        "Live session created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/sessions
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<LiveSessionWithPresentation>>> {
    let sessions = LiveSessionRepo::list(&state.pool).await?;
    Ok(Json(sessions))
}

/// GET /api/v1/sessions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<LiveSession>> {
    Ok(Json(load_session(&state, id).await?))
}

/// GET /api/v1/sessions/by-code/{access_code}
///
/// Matching is case-insensitive.
pub async fn get_by_access_code(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<Json<LiveSession>> {
    let code = access_code::normalize(&raw);
    let found = LiveSessionRepo::find_by_access_code(&state.pool, &code).await?;
    let live_session = found.ok_or(AppError::Core(CoreError::NotFoundByKey {
        entity: "LiveSession",
        key: code,
    }))?;
    Ok(Json(live_session))
}

/// PUT /api/v1/sessions/{id}
///
/// Switching presentation is refused with 409 once anyone has joined.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateLiveSession>,
) -> AppResult<Json<LiveSession>> {
    let current = load_session(&state, id).await?;
    if current.presentation_id != input.presentation_id
        && LiveSessionRepo::has_activity(&state.pool, id).await?
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Session {id} has participants or votes and cannot change presentation"
        ))));
    }
    session::validate_transition(&current.status, &input.status)?;
    let access_code = checked_access_code(&input.access_code)?;
    check_current_question(&state, input.presentation_id, input.current_question_id).await?;

    let input = UpdateLiveSession {
        access_code,
        ..input
    };
    let updated = LiveSessionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found("LiveSession", id))?;

    if updated.status != current.status {
        tracing::info!(
            session_id = id,
            from = %current.status,
            to = %updated.status,
            "Live session status changed"
        );
    }
    Ok(Json(updated))
}

/// PATCH /api/v1/sessions/{id}
///
/// Only `status` and `current_question_id` can be patched. A status-only
/// patch keeps the current question.
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<PatchLiveSession>,
) -> AppResult<Response> {
    let mut previous_status = None;
    if input.status.is_some() || input.current_question_id.is_some() {
        let current = load_session(&state, id).await?;
        if let Some(status) = &input.status {
            session::validate_transition(&current.status, status)?;
        }
        check_current_question(&state, current.presentation_id, input.current_question_id)
            .await?;
        previous_status = Some(current.status);
    }

    let outcome = LiveSessionRepo::patch(&state.pool, id, &input).await?;
    if let (PatchOutcome::Updated(updated), Some(from)) = (&outcome, &previous_status) {
        if updated.status != *from {
            tracing::info!(
                session_id = id,
                from = %from,
                to = %updated.status,
                "Live session status changed"
            );
        }
    }
    patch_response(outcome, "LiveSession", id)
}

/// DELETE /api/v1/sessions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = LiveSessionRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(session_id = id, "Live session deleted");
    }
    delete_response(deleted, "LiveSession", id)
}
