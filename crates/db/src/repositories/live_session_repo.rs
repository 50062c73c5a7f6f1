//! Repository for the `live_sessions` table.
//!
//! Status changes also stamp the lifecycle timestamps: entering `live` sets
//! `started_at` and entering `ended` sets `ended_at`, each only the first time.

use pollroom_core::session::{DEFAULT_STATUS, STATUS_ENDED, STATUS_LIVE};
use pollroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::live_session::{
    CreateLiveSession, LiveSession, LiveSessionWithPresentation, PatchLiveSession,
    UpdateLiveSession,
};
use crate::patch::{PatchOutcome, SetClauses};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, presentation_id, access_code, status, current_question_id, \
                       created_at, started_at, ended_at, updated_at";

/// Same columns qualified with the `ls` alias, for joins.
const LS_COLUMNS: &str = "ls.id, ls.presentation_id, ls.access_code, ls.status, \
                          ls.current_question_id, ls.created_at, ls.started_at, \
                          ls.ended_at, ls.updated_at";

/// Provides CRUD operations for live sessions.
pub struct LiveSessionRepo;

impl LiveSessionRepo {
    /// Insert a new session with the given (already normalized) access code.
    ///
    /// If `status` is `None`, defaults to `created`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLiveSession,
        access_code: &str,
    ) -> Result<LiveSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO live_sessions
                (presentation_id, access_code, status, current_question_id, started_at, ended_at)
             VALUES (
                $1, $2, COALESCE($3::text, '{DEFAULT_STATUS}'), $4,
                CASE WHEN $3::text = '{STATUS_LIVE}' THEN NOW() END,
                CASE WHEN $3::text = '{STATUS_ENDED}' THEN NOW() END
             )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LiveSession>(&query)
            .bind(input.presentation_id)
            .bind(access_code)
            .bind(&input.status)
            .bind(input.current_question_id)
            .fetch_one(pool)
            .await
    }

    /// Find a session by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LiveSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM live_sessions WHERE id = $1");
        sqlx::query_as::<_, LiveSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a session by its access code. Codes are stored uppercase; the
    /// caller is expected to normalize input first.
    pub async fn find_by_access_code(
        pool: &PgPool,
        access_code: &str,
    ) -> Result<Option<LiveSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM live_sessions WHERE access_code = $1");
        sqlx::query_as::<_, LiveSession>(&query)
            .bind(access_code)
            .fetch_optional(pool)
            .await
    }

    /// List all sessions with their presentation title, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<LiveSessionWithPresentation>, sqlx::Error> {
        let query = format!(
            "SELECT {LS_COLUMNS}, p.title AS presentation_title
             FROM live_sessions ls
             JOIN presentations p ON p.id = ls.presentation_id
             ORDER BY ls.created_at DESC, ls.id DESC"
        );
        sqlx::query_as::<_, LiveSessionWithPresentation>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the sessions run from one presentation, newest first.
    pub async fn list_by_presentation(
        pool: &PgPool,
        presentation_id: DbId,
    ) -> Result<Vec<LiveSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM live_sessions
             WHERE presentation_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, LiveSession>(&query)
            .bind(presentation_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable field of a session.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLiveSession,
    ) -> Result<Option<LiveSession>, sqlx::Error> {
        let query = format!(
            "UPDATE live_sessions SET
                presentation_id = $2,
                access_code = $3,
                status = $4::text,
                current_question_id = $5,
                started_at = CASE WHEN $4::text = '{STATUS_LIVE}'
                    THEN COALESCE(started_at, NOW()) ELSE started_at END,
                ended_at = CASE WHEN $4::text = '{STATUS_ENDED}'
                    THEN COALESCE(ended_at, NOW()) ELSE ended_at END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LiveSession>(&query)
            .bind(id)
            .bind(input.presentation_id)
            .bind(&input.access_code)
            .bind(&input.status)
            .bind(input.current_question_id)
            .fetch_optional(pool)
            .await
    }

    /// Apply only the supplied fields of `input`.
    ///
    /// Fields left out stay untouched, so a status-only patch keeps the
    /// current question.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchLiveSession,
    ) -> Result<PatchOutcome<LiveSession>, sqlx::Error> {
        let mut sets = SetClauses::new();
        sets.set("status", input.status.clone())
            .set("current_question_id", input.current_question_id);
        match input.status.as_deref() {
            Some(STATUS_LIVE) => {
                sets.also("started_at = COALESCE(started_at, NOW())");
            }
            Some(STATUS_ENDED) => {
                sets.also("ended_at = COALESCE(ended_at, NOW())");
            }
            _ => {}
        }
        sets.also("updated_at = NOW()");
        sets.execute(pool, "live_sessions", id, COLUMNS).await
    }

    /// Whether anyone has joined the session or voted in it.
    pub async fn has_activity(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM participants WHERE session_id = $1)
                 OR EXISTS (SELECT 1 FROM votes WHERE session_id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Delete a session together with its participants, votes and Q&A.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM live_sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
