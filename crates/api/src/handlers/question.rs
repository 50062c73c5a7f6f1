//! Handlers for the `/questions` resource and its nested options.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use pollroom_core::error::CoreError;
use pollroom_core::types::DbId;
use pollroom_db::models::question::{PatchQuestion, Question, QuestionDeletion, UpdateQuestion};
use pollroom_db::models::question_option::{CreateQuestionOption, QuestionOption};
use pollroom_db::repositories::{QuestionOptionRepo, QuestionRepo};

use super::{not_found, patch_response};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// GET /api/v1/questions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Question>> {
    let question = QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("Question", id))?;
    Ok(Json(question))
}

/// PUT /api/v1/questions/{id}
///
/// Moving the question to another presentation is refused with 409 once a
/// session shows it or a vote answers it.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateQuestion>,
) -> AppResult<Json<Question>> {
    let current = QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("Question", id))?;
    if current.presentation_id != input.presentation_id
        && QuestionRepo::is_referenced(&state.pool, id).await?
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Question {id} is in use by a session and cannot change presentation"
        ))));
    }

    let question = QuestionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found("Question", id))?;
    Ok(Json(question))
}

/// PATCH /api/v1/questions/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<PatchQuestion>,
) -> AppResult<Response> {
    let outcome = QuestionRepo::patch(&state.pool, id, &input).await?;
    patch_response(outcome, "Question", id)
}

/// DELETE /api/v1/questions/{id}
///
/// Refused with 409 while the question is on screen in a live session.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    match QuestionRepo::delete(&state.pool, id).await? {
        QuestionDeletion::Deleted => {
            tracing::info!(question_id = id, "Question deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        QuestionDeletion::NotFound => Err(not_found("Question", id)),
        QuestionDeletion::InUse => Err(AppError::Core(CoreError::Conflict(format!(
            "Question {id} is the current question of a live session"
        )))),
    }
}

/// GET /api/v1/questions/{id}/options
pub async fn list_options(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<QuestionOption>>> {
    QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("Question", id))?;
    let options = QuestionOptionRepo::list_by_question(&state.pool, id).await?;
    Ok(Json(options))
}

/// POST /api/v1/questions/{id}/options
pub async fn create_option(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateQuestionOption>,
) -> AppResult<(StatusCode, Json<QuestionOption>)> {
    QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("Question", id))?;
    let option = QuestionOptionRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(option)))
}
