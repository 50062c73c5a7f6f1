//! Repository for the `question_types` lookup table.

use pollroom_core::question_type::CATALOG;
use sqlx::PgPool;

use crate::models::question_type::QuestionType;

const COLUMNS: &str = "code, label, uses_options, allows_text_answer";

/// Read access to the question type catalog plus idempotent seeding.
pub struct QuestionTypeRepo;

impl QuestionTypeRepo {
    /// List all question types ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<QuestionType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM question_types ORDER BY code");
        sqlx::query_as::<_, QuestionType>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a question type by its code.
    pub async fn find_by_code(
        pool: &PgPool,
        code: &str,
    ) -> Result<Option<QuestionType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM question_types WHERE code = $1");
        sqlx::query_as::<_, QuestionType>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Insert any catalog entries that are missing. Existing rows are left
    /// alone, so running this repeatedly never duplicates or overwrites.
    ///
    /// Returns the number of rows inserted.
    pub async fn seed_defaults(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let codes: Vec<&str> = CATALOG.iter().map(|t| t.code).collect();
        let labels: Vec<&str> = CATALOG.iter().map(|t| t.label).collect();
        let uses_options: Vec<bool> = CATALOG.iter().map(|t| t.uses_options).collect();
        let allows_text: Vec<bool> = CATALOG.iter().map(|t| t.allows_text_answer).collect();

        let result = sqlx::query(
            "INSERT INTO question_types (code, label, uses_options, allows_text_answer)
             SELECT * FROM UNNEST($1::text[], $2::text[], $3::bool[], $4::bool[])
             ON CONFLICT (code) DO NOTHING",
        )
        .bind(codes)
        .bind(labels)
        .bind(uses_options)
        .bind(allows_text)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
