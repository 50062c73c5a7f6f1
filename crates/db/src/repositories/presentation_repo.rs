//! Repository for the `presentations` table.

use pollroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::presentation::{
    CreatePresentation, PatchPresentation, Presentation, PresentationWithOwner,
    UpdatePresentation,
};
use crate::patch::{PatchOutcome, SetClauses};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, created_at, updated_at";

/// Same columns qualified with the `p` alias, for joins.
const P_COLUMNS: &str = "p.id, p.owner_id, p.title, p.created_at, p.updated_at";

/// Provides CRUD operations for presentations.
pub struct PresentationRepo;

impl PresentationRepo {
    /// Insert a new presentation, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePresentation,
    ) -> Result<Presentation, sqlx::Error> {
        let query = format!(
            "INSERT INTO presentations (owner_id, title)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Presentation>(&query)
            .bind(input.owner_id)
            .bind(&input.title)
            .fetch_one(pool)
            .await
    }

    /// Find a presentation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Presentation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM presentations WHERE id = $1");
        sqlx::query_as::<_, Presentation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all presentations with their owner's email, most recently
    /// created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<PresentationWithOwner>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS}, u.email AS owner_email
             FROM presentations p
             JOIN users u ON u.id = p.owner_id
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, PresentationWithOwner>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the presentations owned by one user, most recently created first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<Presentation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM presentations
             WHERE owner_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Presentation>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable field of a presentation.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePresentation,
    ) -> Result<Option<Presentation>, sqlx::Error> {
        let query = format!(
            "UPDATE presentations SET
                owner_id = $2,
                title = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Presentation>(&query)
            .bind(id)
            .bind(input.owner_id)
            .bind(&input.title)
            .fetch_optional(pool)
            .await
    }

    /// Apply only the supplied fields of `input`.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchPresentation,
    ) -> Result<PatchOutcome<Presentation>, sqlx::Error> {
        let mut sets = SetClauses::new();
        sets.set("owner_id", input.owner_id)
            .set("title", input.title.clone())
            .also("updated_at = NOW()");
        sets.execute(pool, "presentations", id, COLUMNS).await
    }

    /// Delete a presentation. Questions, options, sessions, participants,
    /// votes and Q&A go with it by cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM presentations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
