//! Route definitions for the `/presentations` resource.
//!
//! Also nests the presentation's questions and sessions.

use axum::routing::get;
use axum::Router;

use crate::handlers::presentation;
use crate::state::AppState;

/// Routes mounted at `/presentations`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// PATCH  /{id}                   -> patch
/// DELETE /{id}                   -> delete
/// GET    /{id}/questions         -> list_questions
/// POST   /{id}/questions         -> create_question
/// GET    /{id}/sessions          -> list_sessions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(presentation::list).post(presentation::create))
        .route(
            "/{id}",
            get(presentation::get_by_id)
                .put(presentation::update)
                .patch(presentation::patch)
                .delete(presentation::delete),
        )
        .route(
            "/{id}/questions",
            get(presentation::list_questions).post(presentation::create_question),
        )
        .route("/{id}/sessions", get(presentation::list_sessions))
}
