//! Route definitions for the `/sessions` resource.
//!
//! Participants, votes and Q&A messages are created under their session.

use axum::routing::get;
use axum::Router;

use crate::handlers::{participant, qna, session, vote};
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /by-code/{access_code}         -> get_by_access_code
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// PATCH  /{id}                          -> patch
/// DELETE /{id}                          -> delete
///
/// GET    /{id}/participants             -> participant::list_by_session
/// POST   /{id}/participants             -> participant::join
/// GET    /{id}/votes                    -> vote::list_by_session
/// POST   /{id}/votes                    -> vote::cast
/// GET    /{id}/qna-messages             -> qna::list_by_session
/// POST   /{id}/qna-messages             -> qna::post_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(session::list).post(session::create))
        .route("/by-code/{access_code}", get(session::get_by_access_code))
        .route(
            "/{id}",
            get(session::get_by_id)
                .put(session::update)
                .patch(session::patch)
                .delete(session::delete),
        )
        .route(
            "/{id}/participants",
            get(participant::list_by_session).post(participant::join),
        )
        .route("/{id}/votes", get(vote::list_by_session).post(vote::cast))
        .route(
            "/{id}/qna-messages",
            get(qna::list_by_session).post(qna::post_message),
        )
}
