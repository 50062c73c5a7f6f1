//! Domain rules for the polling backend.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` and
//! `api` crates lean on these constants and validators so the rules live in
//! one place.

pub mod access_code;
pub mod error;
pub mod question_type;
pub mod roles;
pub mod session;
pub mod types;
pub mod vote;
