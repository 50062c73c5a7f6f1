//! Repository for the `questions` table.

use pollroom_core::session::STATUS_LIVE;
use pollroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::{
    CreateQuestion, PatchQuestion, Question, QuestionDeletion, QuestionWithType, UpdateQuestion,
};
use crate::patch::{PatchOutcome, SetClauses};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, presentation_id, type_code, text, media_url, order_index, settings, \
                       created_at, updated_at";

/// Same columns qualified with the `q` alias, for joins.
const Q_COLUMNS: &str = "q.id, q.presentation_id, q.type_code, q.text, q.media_url, \
                         q.order_index, q.settings, q.created_at, q.updated_at";

/// Provides CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question under `presentation_id`, returning the created row.
    ///
    /// `order_index` defaults to 0 and `settings` to `'{}'::jsonb`.
    pub async fn create(
        pool: &PgPool,
        presentation_id: DbId,
        input: &CreateQuestion,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (presentation_id, type_code, text, media_url, order_index, settings)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(presentation_id)
            .bind(&input.type_code)
            .bind(&input.text)
            .bind(&input.media_url)
            .bind(input.order_index)
            .bind(&input.settings)
            .fetch_one(pool)
            .await
    }

    /// Find a question by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the questions of a presentation in presentation order
    /// (`order_index`, then `id` to break ties), with their type label.
    pub async fn list_by_presentation(
        pool: &PgPool,
        presentation_id: DbId,
    ) -> Result<Vec<QuestionWithType>, sqlx::Error> {
        let query = format!(
            "SELECT {Q_COLUMNS}, qt.label AS type_label
             FROM questions q
             JOIN question_types qt ON qt.code = q.type_code
             WHERE q.presentation_id = $1
             ORDER BY q.order_index, q.id"
        );
        sqlx::query_as::<_, QuestionWithType>(&query)
            .bind(presentation_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable field of a question.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuestion,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "UPDATE questions SET
                presentation_id = $2,
                type_code = $3,
                text = $4,
                media_url = $5,
                order_index = $6,
                settings = COALESCE($7, '{{}}'::jsonb),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(input.presentation_id)
            .bind(&input.type_code)
            .bind(&input.text)
            .bind(&input.media_url)
            .bind(input.order_index)
            .bind(&input.settings)
            .fetch_optional(pool)
            .await
    }

    /// Apply only the supplied fields of `input`.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchQuestion,
    ) -> Result<PatchOutcome<Question>, sqlx::Error> {
        let mut sets = SetClauses::new();
        sets.set("type_code", input.type_code.clone())
            .set("text", input.text.clone())
            .set("media_url", input.media_url.clone())
            .set("order_index", input.order_index)
            .set("settings", input.settings.clone())
            .also("updated_at = NOW()");
        sets.execute(pool, "questions", id, COLUMNS).await
    }

    /// Whether a session shows this question or a vote answers it.
    pub async fn is_referenced(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM live_sessions WHERE current_question_id = $1)
                 OR EXISTS (SELECT 1 FROM votes WHERE question_id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Delete a question unless it is the current question of a live session.
    ///
    /// Sessions that are not live and point at the question have their
    /// `current_question_id` cleared by the foreign key.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<QuestionDeletion, sqlx::Error> {
        let query = format!(
            "WITH blocked AS (
                SELECT 1 FROM live_sessions
                WHERE current_question_id = $1 AND status = '{STATUS_LIVE}'
                LIMIT 1
             ), deleted AS (
                DELETE FROM questions
                WHERE id = $1 AND NOT EXISTS (SELECT 1 FROM blocked)
                RETURNING id
             )
             SELECT EXISTS (SELECT 1 FROM deleted), EXISTS (SELECT 1 FROM blocked)"
        );
        let (deleted, blocked): (bool, bool) = sqlx::query_as(&query)
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(match (deleted, blocked) {
            (true, _) => QuestionDeletion::Deleted,
            (false, true) => QuestionDeletion::InUse,
            (false, false) => QuestionDeletion::NotFound,
        })
    }
}
