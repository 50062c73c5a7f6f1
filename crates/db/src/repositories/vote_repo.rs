//! Repository for the `votes` table.

use pollroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::vote::{CreateVote, Vote, VoteDetail};

const COLUMNS: &str = "id, session_id, participant_id, question_id, option_id, text_answer, created_at";

/// Same columns qualified with the `v` alias, for joins.
const V_COLUMNS: &str = "v.id, v.session_id, v.participant_id, v.question_id, v.option_id, \
                         v.text_answer, v.created_at";

/// Provides CRUD operations for votes.
pub struct VoteRepo;

impl VoteRepo {
    /// Record a vote in `session_id`.
    ///
    /// Cross-entity checks (participant in session, question in the
    /// session's presentation, option in question) are the caller's job.
    /// A second vote by the same participant on the same question fails on
    /// `uq_votes_one_per_question`.
    pub async fn create(
        pool: &PgPool,
        session_id: DbId,
        input: &CreateVote,
    ) -> Result<Vote, sqlx::Error> {
        let query = format!(
            "INSERT INTO votes (session_id, participant_id, question_id, option_id, text_answer)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(session_id)
            .bind(input.participant_id)
            .bind(input.question_id)
            .bind(input.option_id)
            .bind(&input.text_answer)
            .fetch_one(pool)
            .await
    }

    /// Find a vote by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM votes WHERE id = $1");
        sqlx::query_as::<_, Vote>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every vote cast in a session with voter nickname and question
    /// text, oldest first.
    pub async fn list_by_session(
        pool: &PgPool,
        session_id: DbId,
    ) -> Result<Vec<VoteDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {V_COLUMNS}, p.nickname, q.text AS question_text
             FROM votes v
             JOIN participants p ON p.id = v.participant_id
             JOIN questions q ON q.id = v.question_id
             WHERE v.session_id = $1
             ORDER BY v.created_at, v.id"
        );
        sqlx::query_as::<_, VoteDetail>(&query)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }

    /// List the votes cast on one question within a session, oldest first.
    pub async fn list_by_question(
        pool: &PgPool,
        session_id: DbId,
        question_id: DbId,
    ) -> Result<Vec<VoteDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {V_COLUMNS}, p.nickname, q.text AS question_text
             FROM votes v
             JOIN participants p ON p.id = v.participant_id
             JOIN questions q ON q.id = v.question_id
             WHERE v.session_id = $1 AND v.question_id = $2
             ORDER BY v.created_at, v.id"
        );
        sqlx::query_as::<_, VoteDetail>(&query)
            .bind(session_id)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    /// Retract a vote. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM votes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
