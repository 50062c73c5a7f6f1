//! Route definitions for the `/options` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::question_option;
use crate::state::AppState;

/// Routes mounted at `/options`.
///
/// ```text
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// PATCH  /{id}                   -> patch
/// DELETE /{id}                   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(question_option::get_by_id)
            .put(question_option::update)
            .patch(question_option::patch)
            .delete(question_option::delete),
    )
}
