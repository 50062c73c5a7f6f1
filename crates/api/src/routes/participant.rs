use axum::routing::get;
use axum::Router;

use crate::handlers::participant;
use crate::state::AppState;

/// Routes mounted at `/participants`.
///
/// ```text
/// GET    /{id}                   -> get_by_id
/// DELETE /{id}                   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(participant::get_by_id).delete(participant::delete),
    )
}
