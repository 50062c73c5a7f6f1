//! Handlers for session participants.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pollroom_core::error::CoreError;
use pollroom_core::types::DbId;
use pollroom_db::models::participant::{CreateParticipant, Participant};
use pollroom_db::repositories::ParticipantRepo;

use super::session::load_session;
use super::{delete_response, not_found};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// GET /api/v1/sessions/{id}/participants
pub async fn list_by_session(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
) -> AppResult<Json<Vec<Participant>>> {
    load_session(&state, session_id).await?;
    let participants = ParticipantRepo::list_by_session(&state.pool, session_id).await?;
    Ok(Json(participants))
}

/// POST /api/v1/sessions/{id}/participants
///
/// The nickname is trimmed and must be unique within the session.
pub async fn join(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateParticipant>,
) -> AppResult<(StatusCode, Json<Participant>)> {
    if input.nickname.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "nickname must not be blank".to_string(),
        )));
    }
    load_session(&state, session_id).await?;

    let participant = ParticipantRepo::create(&state.pool, session_id, &input).await?;
    tracing::info!(
        participant_id = participant.id,
        session_id,
        nickname = %participant.nickname,
        "Participant joined"
    );
    Ok((StatusCode::CREATED, Json(participant)))
}

/// GET /api/v1/participants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Participant>> {
    let participant = ParticipantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("Participant", id))?;
    Ok(Json(participant))
}

/// DELETE /api/v1/participants/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ParticipantRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(participant_id = id, "Participant left");
    }
    delete_response(deleted, "Participant", id)
}
