//! Domain types: draft records and their validation.
//!
//! Entities that live on the wire (users, courses, quizzes, messages) are
//! defined in the backend client crate and re-exported from the crate
//! root; this module holds the client-side draft records.

mod auth;
mod course;
mod meeting;
mod outreach;
mod quiz;

pub use auth::{LoginDraft, RegisterDraft};
pub use course::CourseDraft;
pub use meeting::{MeetingDraft, Meridiem};
pub use outreach::{OutreachDraft, ShareDraft};
pub use quiz::QuizDraft;
