//! Route definitions for the `/qna-messages` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::qna;
use crate::state::AppState;

/// Routes mounted at `/qna-messages`.
///
/// ```text
/// GET    /{id}                               -> get_by_id
/// PATCH  /{id}                               -> moderate
/// DELETE /{id}                               -> delete
/// GET    /{id}/upvotes                       -> list_upvotes
/// POST   /{id}/upvotes                       -> upvote
/// DELETE /{id}/upvotes/{participant_id}      -> remove_upvote
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(qna::get_by_id).patch(qna::moderate).delete(qna::delete),
        )
        .route("/{id}/upvotes", get(qna::list_upvotes).post(qna::upvote))
        .route("/{id}/upvotes/{participant_id}", delete(qna::remove_upvote))
}
