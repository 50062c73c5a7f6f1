//! Vote answer rules.
//!
//! A vote carries exactly one kind of answer: a chosen option or a free
//! text answer. The database enforces the same rule with
//! `ck_votes_one_answer`; checking here first gives callers a readable error.

use crate::error::CoreError;
use crate::types::DbId;

/// The answer carried by a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<'a> {
    Option(DbId),
    Text(&'a str),
}

/// Classify the raw answer fields of a vote, rejecting both-or-neither.
pub fn classify_answer<'a>(
    option_id: Option<DbId>,
    text_answer: Option<&'a str>,
) -> Result<Answer<'a>, CoreError> {
    match (option_id, text_answer) {
        (Some(id), None) => Ok(Answer::Option(id)),
        (None, Some(text)) if text.trim().is_empty() => Err(CoreError::Validation(
            "text_answer must not be blank".to_string(),
        )),
        (None, Some(text)) => Ok(Answer::Text(text)),
        (Some(_), Some(_)) => Err(CoreError::Validation(
            "A vote must set either option_id or text_answer, not both".to_string(),
        )),
        (None, None) => Err(CoreError::Validation(
            "A vote must set either option_id or text_answer".to_string(),
        )),
    }
}

/// Check that the answer kind is one the question's type accepts.
///
/// Option answers need a type that uses options. Text answers are refused
/// only by pick-from-options types; types with neither flag (scales,
/// sliders, rankings) record their answer as text.
pub fn check_answer_allowed(
    answer: &Answer<'_>,
    type_code: &str,
    uses_options: bool,
    allows_text_answer: bool,
) -> Result<(), CoreError> {
    match answer {
        Answer::Option(_) if !uses_options => Err(CoreError::Validation(format!(
            "Questions of type '{type_code}' do not take option answers"
        ))),
        Answer::Text(_) if uses_options && !allows_text_answer => Err(CoreError::Validation(format!(
            "Questions of type '{type_code}' do not take text answers"
        ))),
        _ => Ok(()),
    }
}
