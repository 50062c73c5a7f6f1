//! Handlers for the `/options` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use pollroom_core::error::CoreError;
use pollroom_core::types::DbId;
use pollroom_db::models::question_option::{
    PatchQuestionOption, QuestionOption, UpdateQuestionOption,
};
use pollroom_db::repositories::QuestionOptionRepo;

use super::{delete_response, not_found, patch_response};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// GET /api/v1/options/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<QuestionOption>> {
    let option = QuestionOptionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("Option", id))?;
    Ok(Json(option))
}

/// PUT /api/v1/options/{id}
///
/// An option with votes cannot move to another question (409).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateQuestionOption>,
) -> AppResult<Json<QuestionOption>> {
    let current = QuestionOptionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("Option", id))?;
    if current.question_id != input.question_id
        && QuestionOptionRepo::has_votes(&state.pool, id).await?
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Option {id} has votes and cannot move to another question"
        ))));
    }

    let option = QuestionOptionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found("Option", id))?;
    Ok(Json(option))
}

/// PATCH /api/v1/options/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<PatchQuestionOption>,
) -> AppResult<Response> {
    let outcome = QuestionOptionRepo::patch(&state.pool, id, &input).await?;
    patch_response(outcome, "Option", id)
}

/// DELETE /api/v1/options/{id}
///
/// Votes that chose this option are removed with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = QuestionOptionRepo::delete(&state.pool, id).await?;
    delete_response(deleted, "Option", id)
}
