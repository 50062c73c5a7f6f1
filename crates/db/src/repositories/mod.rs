//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod live_session_repo;
pub mod participant_repo;
pub mod presentation_repo;
pub mod qna_message_repo;
pub mod qna_upvote_repo;
pub mod question_option_repo;
pub mod question_repo;
pub mod question_type_repo;
pub mod user_repo;
pub mod vote_repo;

pub use live_session_repo::LiveSessionRepo;
pub use participant_repo::ParticipantRepo;
pub use presentation_repo::PresentationRepo;
pub use qna_message_repo::QnaMessageRepo;
pub use qna_upvote_repo::QnaUpvoteRepo;
pub use question_option_repo::QuestionOptionRepo;
pub use question_repo::QuestionRepo;
pub use question_type_repo::QuestionTypeRepo;
pub use user_repo::UserRepo;
pub use vote_repo::VoteRepo;
