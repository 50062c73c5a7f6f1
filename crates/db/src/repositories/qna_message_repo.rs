//! Repository for the `qna_messages` table.

use pollroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::qna::{CreateQnaMessage, PatchQnaMessage, QnaMessage, QnaMessageWithStats};
use crate::patch::{PatchOutcome, SetClauses};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, session_id, participant_id, text, is_answered, is_hidden, \
                       created_at, updated_at";

/// Same columns qualified with the `m` alias, for joins.
const M_COLUMNS: &str = "m.id, m.session_id, m.participant_id, m.text, m.is_answered, \
                         m.is_hidden, m.created_at, m.updated_at";

/// Provides CRUD operations for audience Q&A messages.
pub struct QnaMessageRepo;

impl QnaMessageRepo {
    /// Post a message in `session_id`. `participant_id = None` posts
    /// anonymously.
    pub async fn create(
        pool: &PgPool,
        session_id: DbId,
        input: &CreateQnaMessage,
    ) -> Result<QnaMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO qna_messages (session_id, participant_id, text)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QnaMessage>(&query)
            .bind(session_id)
            .bind(input.participant_id)
            .bind(&input.text)
            .fetch_one(pool)
            .await
    }

    /// Find a message by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<QnaMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM qna_messages WHERE id = $1");
        sqlx::query_as::<_, QnaMessage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a session's messages, newest first, with the author's nickname
    /// (`None` when anonymous) and the number of upvotes.
    pub async fn list_by_session(
        pool: &PgPool,
        session_id: DbId,
    ) -> Result<Vec<QnaMessageWithStats>, sqlx::Error> {
        let query = format!(
            "SELECT {M_COLUMNS}, p.nickname,
                    (SELECT COUNT(*) FROM qna_upvotes u WHERE u.message_id = m.id) AS upvote_count
             FROM qna_messages m
             LEFT JOIN participants p ON p.id = m.participant_id
             WHERE m.session_id = $1
             ORDER BY m.created_at DESC, m.id DESC"
        );
        sqlx::query_as::<_, QnaMessageWithStats>(&query)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }

    /// Set the moderation flags that were supplied.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchQnaMessage,
    ) -> Result<PatchOutcome<QnaMessage>, sqlx::Error> {
        let mut sets = SetClauses::new();
        sets.set("is_answered", input.is_answered)
            .set("is_hidden", input.is_hidden)
            .also("updated_at = NOW()");
        sets.execute(pool, "qna_messages", id, COLUMNS).await
    }

    /// Delete a message and its upvotes. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM qna_messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
