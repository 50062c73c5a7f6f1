#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use pollroom_api::config::ServerConfig;
use pollroom_api::router::build_app_router;
use pollroom_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a user through the API and return its id.
pub async fn create_user(pool: &PgPool, email: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users",
        serde_json::json!({"email": email, "password": "correct-horse"}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a presentation owned by `owner_id` and return its id.
pub async fn create_presentation(pool: &PgPool, owner_id: i64, title: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/presentations",
        serde_json::json!({"owner_id": owner_id, "title": title}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a question of `type_code` under a presentation and return its id.
pub async fn create_question(pool: &PgPool, presentation_id: i64, type_code: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/presentations/{presentation_id}/questions"),
        serde_json::json!({"type_code": type_code, "text": "Question?"}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create an option under a question and return its id.
pub async fn create_option(pool: &PgPool, question_id: i64, text: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/questions/{question_id}/options"),
        serde_json::json!({"text": text}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Open a session with the given access code and return the session JSON.
pub async fn create_session(
    pool: &PgPool,
    presentation_id: i64,
    access_code: &str,
) -> serde_json::Value {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/sessions",
        serde_json::json!({"presentation_id": presentation_id, "access_code": access_code}),
    )
    .await;
    body_json(response).await
}

/// Join a session and return the participant id.
pub async fn join(pool: &PgPool, session_id: i64, nickname: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/sessions/{session_id}/participants"),
        serde_json::json!({"nickname": nickname}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
