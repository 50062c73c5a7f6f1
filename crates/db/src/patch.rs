//! Partial-update ("patch") support.
//!
//! [`SetClauses`] builds an `UPDATE ... SET` statement from only the fields a
//! caller supplied. Column names are `&'static str` chosen by the repository,
//! so a request can never name a column. Values are always bound as
//! parameters. `$1` is reserved for the row id.

use pollroom_core::types::DbId;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};

/// Outcome of a partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome<T> {
    /// The row existed and was changed.
    Updated(T),
    /// No row with the requested id exists.
    NotFound,
    /// No fields were supplied; nothing was executed.
    Unchanged,
}

/// Typed bind value for dynamically-built patch queries.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BindValue {
    BigInt(i64),
    Int(i32),
    Bool(bool),
    Text(String),
    Json(serde_json::Value),
}

impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        BindValue::BigInt(v)
    }
}

impl From<i32> for BindValue {
    fn from(v: i32) -> Self {
        BindValue::Int(v)
    }
}

impl From<bool> for BindValue {
    fn from(v: bool) -> Self {
        BindValue::Bool(v)
    }
}

impl From<String> for BindValue {
    fn from(v: String) -> Self {
        BindValue::Text(v)
    }
}

impl From<serde_json::Value> for BindValue {
    fn from(v: serde_json::Value) -> Self {
        BindValue::Json(v)
    }
}

/// Accumulates `column = $n` assignments for supplied fields.
#[derive(Debug, Default)]
pub(crate) struct SetClauses {
    sets: Vec<String>,
    /// Literal assignments emitted only when at least one field is set.
    extras: Vec<&'static str>,
    binds: Vec<BindValue>,
}

impl SetClauses {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add `column = $n` if `value` is `Some`.
    pub(crate) fn set<V: Into<BindValue>>(&mut self, column: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            let idx = self.binds.len() + 2;
            self.sets.push(format!("{column} = ${idx}"));
            self.binds.push(value.into());
        }
        self
    }

    /// Add a literal assignment (e.g. `updated_at = NOW()`) that rides along
    /// with the supplied fields but never makes a patch non-empty by itself.
    pub(crate) fn also(&mut self, clause: &'static str) -> &mut Self {
        self.extras.push(clause);
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Render the statement, or `None` when no field was supplied.
    pub(crate) fn to_update_sql(&self, table: &str, returning: &str) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let assignments: Vec<&str> = self
            .sets
            .iter()
            .map(String::as_str)
            .chain(self.extras.iter().copied())
            .collect();
        Some(format!(
            "UPDATE {table} SET {} WHERE id = $1 RETURNING {returning}",
            assignments.join(", ")
        ))
    }

    fn bind_all<'q, O>(
        self,
        mut q: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        for value in self.binds {
            q = match value {
                BindValue::BigInt(v) => q.bind(v),
                BindValue::Int(v) => q.bind(v),
                BindValue::Bool(v) => q.bind(v),
                BindValue::Text(v) => q.bind(v),
                BindValue::Json(v) => q.bind(v),
            };
        }
        q
    }

    /// Run the patch against `table` for row `id`.
    pub(crate) async fn execute<T>(
        self,
        pool: &PgPool,
        table: &str,
        id: DbId,
        returning: &str,
    ) -> Result<PatchOutcome<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let Some(query) = self.to_update_sql(table, returning) else {
            return Ok(PatchOutcome::Unchanged);
        };
        let q = sqlx::query_as::<_, T>(&query).bind(id);
        let row = self.bind_all(q).fetch_optional(pool).await?;
        Ok(match row {
            Some(row) => PatchOutcome::Updated(row),
            None => PatchOutcome::NotFound,
        })
    }
}
