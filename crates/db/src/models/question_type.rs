//! Question type lookup model.

use serde::Serialize;
use sqlx::FromRow;

/// A row from the `question_types` lookup table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct QuestionType {
    pub code: String,
    pub label: String,
    pub uses_options: bool,
    pub allows_text_answer: bool,
}
