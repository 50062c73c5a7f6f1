//! Handlers for the `/question-types` lookup resource.

use axum::extract::{Path, State};
use axum::Json;
use pollroom_core::error::CoreError;
use pollroom_db::models::question_type::QuestionType;
use pollroom_db::repositories::QuestionTypeRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/question-types
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<QuestionType>>> {
    let types = QuestionTypeRepo::list(&state.pool).await?;
    Ok(Json(types))
}

/// GET /api/v1/question-types/{code}
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<QuestionType>> {
    let found = QuestionTypeRepo::find_by_code(&state.pool, &code).await?;
    let question_type = found.ok_or(AppError::Core(CoreError::NotFoundByKey {
        entity: "QuestionType",
        key: code,
    }))?;
    Ok(Json(question_type))
}
