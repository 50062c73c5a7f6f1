//! Route definitions for the `/questions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::question;
use crate::state::AppState;

/// Routes mounted at `/questions`. Questions are created under
/// `/presentations/{id}/questions`.
///
/// ```text
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// PATCH  /{id}                   -> patch
/// DELETE /{id}                   -> delete
/// GET    /{id}/options           -> list_options
/// POST   /{id}/options           -> create_option
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(question::get_by_id)
                .put(question::update)
                .patch(question::patch)
                .delete(question::delete),
        )
        .route(
            "/{id}/options",
            get(question::list_options).post(question::create_option),
        )
}
