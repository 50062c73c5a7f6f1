//! Repository for the `participants` table.

use pollroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::participant::{CreateParticipant, Participant};

const COLUMNS: &str = "id, session_id, nickname, joined_at";

/// Provides CRUD operations for session participants.
pub struct ParticipantRepo;

impl ParticipantRepo {
    /// Join a session. The nickname is stored trimmed.
    ///
    /// A nickname already taken in the same session fails on
    /// `uq_participants_session_nickname`.
    pub async fn create(
        pool: &PgPool,
        session_id: DbId,
        input: &CreateParticipant,
    ) -> Result<Participant, sqlx::Error> {
        let query = format!(
            "INSERT INTO participants (session_id, nickname)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(session_id)
            .bind(input.nickname.trim())
            .fetch_one(pool)
            .await
    }

    /// Find a participant by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM participants WHERE id = $1");
        sqlx::query_as::<_, Participant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the participants of a session in join order.
    pub async fn list_by_session(
        pool: &PgPool,
        session_id: DbId,
    ) -> Result<Vec<Participant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM participants
             WHERE session_id = $1
             ORDER BY joined_at, id"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }

    /// Remove a participant. Their votes and upvotes go with them; their
    /// Q&A messages stay and become anonymous.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM participants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
