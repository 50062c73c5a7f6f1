//! Handlers for the `/presentations` resource and its nested questions and
//! sessions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use pollroom_core::types::DbId;
use pollroom_db::models::live_session::LiveSession;
use pollroom_db::models::presentation::{
    CreatePresentation, PatchPresentation, Presentation, PresentationWithOwner,
    UpdatePresentation,
};
use pollroom_db::models::question::{CreateQuestion, Question, QuestionWithType};
use pollroom_db::repositories::{LiveSessionRepo, PresentationRepo, QuestionRepo};

use super::{delete_response, not_found, patch_response};
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// 404 unless the presentation exists.
async fn ensure_exists(state: &AppState, id: DbId) -> AppResult<Presentation> {
    PresentationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("Presentation", id))
}

/// POST /api/v1/presentations
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePresentation>,
) -> AppResult<(StatusCode, Json<Presentation>)> {
    let presentation = PresentationRepo::create(&state.pool, &input).await?;
    tracing::info!(
        presentation_id = presentation.id,
        owner_id = presentation.owner_id,
        "Presentation created"
    );
    Ok((StatusCode::CREATED, Json(presentation)))
}

/// GET /api/v1/presentations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PresentationWithOwner>>> {
    let presentations = PresentationRepo::list(&state.pool).await?;
    Ok(Json(presentations))
}

/// GET /api/v1/presentations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Presentation>> {
    Ok(Json(ensure_exists(&state, id).await?))
}

/// PUT /api/v1/presentations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdatePresentation>,
) -> AppResult<Json<Presentation>> {
    let presentation = PresentationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found("Presentation", id))?;
    Ok(Json(presentation))
}

/// PATCH /api/v1/presentations/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<PatchPresentation>,
) -> AppResult<Response> {
    let outcome = PresentationRepo::patch(&state.pool, id, &input).await?;
    patch_response(outcome, "Presentation", id)
}

/// DELETE /api/v1/presentations/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PresentationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(presentation_id = id, "Presentation deleted");
    }
    delete_response(deleted, "Presentation", id)
}

/// GET /api/v1/presentations/{id}/questions
pub async fn list_questions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<QuestionWithType>>> {
    ensure_exists(&state, id).await?;
    let questions = QuestionRepo::list_by_presentation(&state.pool, id).await?;
    Ok(Json(questions))
}

/// POST /api/v1/presentations/{id}/questions
pub async fn create_question(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateQuestion>,
) -> AppResult<(StatusCode, Json<Question>)> {
    ensure_exists(&state, id).await?;
    let question = QuestionRepo::create(&state.pool, id, &input).await?;
    tracing::info!(
        question_id = question.id,
        presentation_id = id,
        type_code = %question.type_code,
        "Question created"
    );
    Ok((StatusCode::CREATED, Json(question)))
}

/// GET /api/v1/presentations/{id}/sessions
pub async fn list_sessions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<LiveSession>>> {
    ensure_exists(&state, id).await?;
    let sessions = LiveSessionRepo::list_by_presentation(&state.pool, id).await?;
    Ok(Json(sessions))
}
