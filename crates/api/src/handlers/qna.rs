//! Handlers for audience Q&A messages and their upvotes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use pollroom_core::error::CoreError;
use pollroom_core::types::DbId;
use pollroom_db::models::qna::{
    CreateQnaMessage, CreateQnaUpvote, PatchQnaMessage, QnaMessage, QnaMessageWithStats,
    QnaUpvote,
};
use pollroom_db::repositories::{ParticipantRepo, QnaMessageRepo, QnaUpvoteRepo};

use super::session::load_session;
use super::{delete_response, not_found, patch_response};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, ValidatedJson};
use crate::state::AppState;

async fn load_message(state: &AppState, id: DbId) -> AppResult<QnaMessage> {
    QnaMessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("QnaMessage", id))
}

/// 400 unless `participant_id` belongs to `session_id`.
async fn check_participant_in_session(
    state: &AppState,
    participant_id: DbId,
    session_id: DbId,
) -> AppResult<()> {
    let participant = ParticipantRepo::find_by_id(&state.pool, participant_id).await?;
    if participant.map(|p| p.session_id) == Some(session_id) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "Participant {participant_id} is not part of session {session_id}"
        ))))
    }
}

/// GET /api/v1/sessions/{id}/qna-messages
///
/// Newest first, with author nickname and upvote count.
pub async fn list_by_session(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
) -> AppResult<Json<Vec<QnaMessageWithStats>>> {
    load_session(&state, session_id).await?;
    let messages = QnaMessageRepo::list_by_session(&state.pool, session_id).await?;
    Ok(Json(messages))
}

/// POST /api/v1/sessions/{id}/qna-messages
///
/// Omitting `participant_id` posts anonymously.
pub async fn post_message(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateQnaMessage>,
) -> AppResult<(StatusCode, Json<QnaMessage>)> {
    if input.text.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "text must not be blank".to_string(),
        )));
    }
    load_session(&state, session_id).await?;
    if let Some(participant_id) = input.participant_id {
        check_participant_in_session(&state, participant_id, session_id).await?;
    }

    let message = QnaMessageRepo::create(&state.pool, session_id, &input).await?;
    tracing::info!(message_id = message.id, session_id, "Q&A message posted");
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/v1/qna-messages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<QnaMessage>> {
    Ok(Json(load_message(&state, id).await?))
}

/// PATCH /api/v1/qna-messages/{id}
pub async fn moderate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<PatchQnaMessage>,
) -> AppResult<Response> {
    let outcome = QnaMessageRepo::patch(&state.pool, id, &input).await?;
    patch_response(outcome, "QnaMessage", id)
}

/// DELETE /api/v1/qna-messages/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = QnaMessageRepo::delete(&state.pool, id).await?;
    delete_response(deleted, "QnaMessage", id)
}

/// GET /api/v1/qna-messages/{id}/upvotes
pub async fn list_upvotes(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<QnaUpvote>>> {
    load_message(&state, id).await?;
    let upvotes = QnaUpvoteRepo::list_by_message(&state.pool, id).await?;
    Ok(Json(upvotes))
}

/// POST /api/v1/qna-messages/{id}/upvotes
pub async fn upvote(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<CreateQnaUpvote>,
) -> AppResult<(StatusCode, Json<QnaUpvote>)> {
    let message = load_message(&state, id).await?;
    check_participant_in_session(&state, input.participant_id, message.session_id).await?;

    let upvote = QnaUpvoteRepo::create(&state.pool, id, input.participant_id).await?;
    Ok((StatusCode::CREATED, Json(upvote)))
}

/// DELETE /api/v1/qna-messages/{id}/upvotes/{participant_id}
pub async fn remove_upvote(
    State(state): State<AppState>,
    Path((id, participant_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if QnaUpvoteRepo::delete(&state.pool, id, participant_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "QnaUpvote",
            key: format!("message {id}, participant {participant_id}"),
        }))
    }
}
