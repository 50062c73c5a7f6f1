//! Repository for the `options` table.

use pollroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::question_option::{
    CreateQuestionOption, PatchQuestionOption, QuestionOption, UpdateQuestionOption,
};
use crate::patch::{PatchOutcome, SetClauses};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question_id, text, is_correct, order_index, created_at, updated_at";

/// Provides CRUD operations for answer options.
pub struct QuestionOptionRepo;

impl QuestionOptionRepo {
    /// Insert a new option under `question_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        question_id: DbId,
        input: &CreateQuestionOption,
    ) -> Result<QuestionOption, sqlx::Error> {
        let query = format!(
            "INSERT INTO options (question_id, text, is_correct, order_index)
             VALUES ($1, $2, COALESCE($3, FALSE), COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuestionOption>(&query)
            .bind(question_id)
            .bind(&input.text)
            .bind(input.is_correct)
            .bind(input.order_index)
            .fetch_one(pool)
            .await
    }

    /// Find an option by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<QuestionOption>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM options WHERE id = $1");
        sqlx::query_as::<_, QuestionOption>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the options of a question ordered by `order_index`, then `id`.
    pub async fn list_by_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<QuestionOption>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM options
             WHERE question_id = $1
             ORDER BY order_index, id"
        );
        sqlx::query_as::<_, QuestionOption>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable field of an option.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuestionOption,
    ) -> Result<Option<QuestionOption>, sqlx::Error> {
        let query = format!(
            "UPDATE options SET
                question_id = $2,
                text = $3,
                is_correct = $4,
                order_index = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuestionOption>(&query)
            .bind(id)
            .bind(input.question_id)
            .bind(&input.text)
            .bind(input.is_correct)
            .bind(input.order_index)
            .fetch_optional(pool)
            .await
    }

    /// Apply only the supplied fields of `input`.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchQuestionOption,
    ) -> Result<PatchOutcome<QuestionOption>, sqlx::Error> {
        let mut sets = SetClauses::new();
        sets.set("text", input.text.clone())
            .set("is_correct", input.is_correct)
            .set("order_index", input.order_index)
            .also("updated_at = NOW()");
        sets.execute(pool, "options", id, COLUMNS).await
    }

    pub async fn has_votes(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM votes WHERE option_id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete an option and the votes cast for it. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM options WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
