//! Repository for the `qna_upvotes` bridge table.

use pollroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::qna::QnaUpvote;

const COLUMNS: &str = "id, message_id, participant_id, created_at";

pub struct QnaUpvoteRepo;

impl QnaUpvoteRepo {
    /// Upvote a message. A repeated upvote by the same participant fails on
    /// `uq_qna_upvotes_message_participant`.
    pub async fn create(
        pool: &PgPool,
        message_id: DbId,
        participant_id: DbId,
    ) -> Result<QnaUpvote, sqlx::Error> {
        let query = format!(
            "INSERT INTO qna_upvotes (message_id, participant_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QnaUpvote>(&query)
            .bind(message_id)
            .bind(participant_id)
            .fetch_one(pool)
            .await
    }

    pub async fn list_by_message(
        pool: &PgPool,
        message_id: DbId,
    ) -> Result<Vec<QnaUpvote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM qna_upvotes
             WHERE message_id = $1
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, QnaUpvote>(&query)
            .bind(message_id)
            .fetch_all(pool)
            .await
    }

    /// Withdraw a participant's upvote. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        message_id: DbId,
        participant_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM qna_upvotes WHERE message_id = $1 AND participant_id = $2")
                .bind(message_id)
                .bind(participant_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
