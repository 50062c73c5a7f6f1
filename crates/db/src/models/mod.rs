//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO replacing every mutable field (PUT)
//! - A patch DTO (all `Option` fields) where partial updates are supported

pub mod live_session;
pub mod participant;
pub mod presentation;
pub mod qna;
pub mod question;
pub mod question_option;
pub mod question_type;
pub mod user;
pub mod vote;
