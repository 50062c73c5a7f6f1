//! Route definitions for the `/question-types` lookup.

use axum::routing::get;
use axum::Router;

use crate::handlers::question_type;
use crate::state::AppState;

/// Routes mounted at `/question-types`.
///
/// ```text
/// GET    /                -> list
/// GET    /{code}          -> get_by_code
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(question_type::list))
        .route("/{code}", get(question_type::get_by_code))
}
