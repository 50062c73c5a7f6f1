use axum::routing::get;
use axum::Router;

use crate::handlers::vote;
use crate::state::AppState;

/// Routes mounted at `/votes`.
///
/// ```text
/// GET    /{id}                   -> get_by_id
/// DELETE /{id}                   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(vote::get_by_id).delete(vote::delete))
}
