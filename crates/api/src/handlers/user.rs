//! Handlers for the `/users` resource.
//!
//! Requests carry a plaintext `password`; only its Argon2id hash is stored.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use pollroom_core::roles::validate_role;
use pollroom_core::types::DbId;
use pollroom_db::models::presentation::Presentation;
use pollroom_db::models::user::{CreateUser, PatchUser, UpdateUser, User};
use pollroom_db::repositories::{PresentationRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use super::{delete_response, not_found, patch_response};
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::password::hash_password;
use crate::state::AppState;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email, length(max = 255))]
    pub email: String,
    pub password: String,
    pub avatar_url: Option<String>,
    pub role: Option<String>,
}

/// Request body for `PUT /users/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email, length(max = 255))]
    pub email: String,
    pub password: String,
    pub avatar_url: Option<String>,
    pub role: String,
}

/// Request body for `PATCH /users/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PatchUserRequest {
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Option<String>,
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    if let Some(role) = &input.role {
        validate_role(role)?;
    }
    let password_hash = hash_password(&input.password)?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            password_hash,
            avatar_url: input.avatar_url,
            role: input.role,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, role = %user.role, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("User", id))?;
    Ok(Json(user))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<User>> {
    validate_role(&input.role)?;
    let password_hash = hash_password(&input.password)?;

    let user = UserRepo::update(
        &state.pool,
        id,
        &UpdateUser {
            email: input.email,
            password_hash,
            avatar_url: input.avatar_url,
            role: input.role,
        },
    )
    .await?
    .ok_or(not_found("User", id))?;

    tracing::info!(user_id = id, "User updated");
    Ok(Json(user))
}

/// PATCH /api/v1/users/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<PatchUserRequest>,
) -> AppResult<Response> {
    if let Some(role) = &input.role {
        validate_role(role)?;
    }
    let password_hash = input.password.as_deref().map(hash_password).transpose()?;

    let outcome = UserRepo::patch(
        &state.pool,
        id,
        &PatchUser {
            email: input.email,
            password_hash,
            avatar_url: input.avatar_url,
            role: input.role,
        },
    )
    .await?;
    patch_response(outcome, "User", id)
}

/// DELETE /api/v1/users/{id}
///
/// Removes the user's presentations and everything under them.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(user_id = id, "User deleted");
    }
    delete_response(deleted, "User", id)
}

/// GET /api/v1/users/{id}/presentations
pub async fn list_presentations(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Presentation>>> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found("User", id))?;
    let presentations = PresentationRepo::list_by_owner(&state.pool, id).await?;
    Ok(Json(presentations))
}
