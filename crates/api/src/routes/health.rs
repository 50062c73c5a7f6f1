//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use pollroom_core::question_type::CATALOG;
use pollroom_db::repositories::QuestionTypeRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable or the question
    /// type catalog is incomplete.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Question types present in the database.
    pub question_types: usize,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = pollroom_db::health_check(&state.pool).await.is_ok();
    let question_types = if db_healthy {
        match QuestionTypeRepo::list(&state.pool).await {
            Ok(types) => types.len(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read question type catalog");
                0
            }
        }
    } else {
        0
    };

    let status = if db_healthy && question_types >= CATALOG.len() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        question_types,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
