//! Handlers for votes.
//!
//! Casting a vote checks that every referenced row belongs to the session
//! before inserting. One vote per participant per question is enforced by
//! the database.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pollroom_core::error::CoreError;
use pollroom_core::types::DbId;
use pollroom_core::vote::{check_answer_allowed, classify_answer, Answer};
use pollroom_db::models::vote::{CreateVote, Vote, VoteDetail};
use pollroom_db::repositories::{
    ParticipantRepo, QuestionOptionRepo, QuestionRepo, QuestionTypeRepo, VoteRepo,
};
use serde::Deserialize;

use super::session::load_session;
use super::{delete_response, not_found};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Query parameters for `GET /sessions/{id}/votes`.
#[derive(Debug, Deserialize)]
pub struct VoteListParams {
    pub question_id: Option<DbId>,
}

fn invalid(msg: String) -> AppError {
    AppError::Core(CoreError::Validation(msg))
}

/// GET /api/v1/sessions/{id}/votes[?question_id=]
pub async fn list_by_session(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
    Query(params): Query<VoteListParams>,
) -> AppResult<Json<Vec<VoteDetail>>> {
    load_session(&state, session_id).await?;
    let votes = match params.question_id {
        Some(question_id) => VoteRepo::list_by_question(&state.pool, session_id, question_id).await?,
        None => VoteRepo::list_by_session(&state.pool, session_id).await?,
    };
    Ok(Json(votes))
}

/// POST /api/v1/sessions/{id}/votes
pub async fn cast(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
    AppJson(input): AppJson<CreateVote>,
) -> AppResult<(StatusCode, Json<Vote>)> {
    let answer = classify_answer(input.option_id, input.text_answer.as_deref())?;
    let live_session = load_session(&state, session_id).await?;

    let participant = ParticipantRepo::find_by_id(&state.pool, input.participant_id).await?;
    if participant.map(|p| p.session_id) != Some(session_id) {
        return Err(invalid(format!(
            "Participant {} is not part of session {session_id}",
            input.participant_id
        )));
    }

    let question = QuestionRepo::find_by_id(&state.pool, input.question_id)
        .await?
        .filter(|q| q.presentation_id == live_session.presentation_id)
        .ok_or_else(|| {
            invalid(format!(
                "Question {} is not part of this session's presentation",
                input.question_id
            ))
        })?;

    let question_type = QuestionTypeRepo::find_by_code(&state.pool, &question.type_code)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("Unknown question type '{}'", question.type_code))
        })?;
    check_answer_allowed(
        &answer,
        &question_type.code,
        question_type.uses_options,
        question_type.allows_text_answer,
    )?;

    if let Answer::Option(option_id) = answer {
        let option = QuestionOptionRepo::find_by_id(&state.pool, option_id).await?;
        if option.map(|o| o.question_id) != Some(question.id) {
            return Err(invalid(format!(
                "Option {option_id} does not belong to question {}",
                question.id
            )));
        }
    }

    let vote = VoteRepo::create(&state.pool, session_id, &input).await?;
    tracing::info!(
        vote_id = vote.id,
        session_id,
        question_id = vote.question_id,
        participant_id = vote.participant_id,
        "Vote cast"
    );
    Ok((StatusCode::CREATED, Json(vote)))
}

/// GET /api/v1/votes/{id}
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Vote>> {
    let vote = VoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("Vote", id))?;
    Ok(Json(vote))
}

/// DELETE /api/v1/votes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = VoteRepo::delete(&state.pool, id).await?;
    delete_response(deleted, "Vote", id)
}
