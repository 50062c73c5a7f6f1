//! Repository for the `users` table.

use pollroom_core::roles::DEFAULT_ROLE;
use pollroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, PatchUser, UpdateUser, User};
use crate::patch::{PatchOutcome, SetClauses};

/// Column list shared across queries. `password_hash` is deliberately absent.
const COLUMNS: &str = "id, email, avatar_url, role, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// If `role` is `None`, defaults to `teacher`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, avatar_url, role)
             VALUES ($1, $2, $3, COALESCE($4, '{DEFAULT_ROLE}'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.avatar_url)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Replace every mutable field of a user.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                email = $2,
                password_hash = $3,
                avatar_url = $4,
                role = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.avatar_url)
            .bind(&input.role)
            .fetch_optional(pool)
            .await
    }

    /// Apply only the supplied fields of `input`.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchUser,
    ) -> Result<PatchOutcome<User>, sqlx::Error> {
        let mut sets = SetClauses::new();
        sets.set("email", input.email.clone())
            .set("password_hash", input.password_hash.clone())
            .set("avatar_url", input.avatar_url.clone())
            .set("role", input.role.clone())
            .also("updated_at = NOW()");
        sets.execute(pool, "users", id, COLUMNS).await
    }

    /// Delete a user and, by cascade, everything they own.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
