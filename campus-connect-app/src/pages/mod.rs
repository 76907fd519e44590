//! Page state machines.
//!
//! Each page owns its state exclusively for its mounted lifetime: a
//! loaded collection, a live search query, a selection, and at most one
//! open popup with its draft record. Frontends render the state and call
//! the transition methods on user events; async methods perform the
//! single network call for their trigger.

mod auth;
mod chat;
mod connect;
mod courses;
mod quizzes;
mod schedule;

pub use auth::{LoginPage, RegisterPage, VerifyEmailPage};
pub use chat::{ChatPage, Conversation};
pub use connect::ConnectPage;
pub use courses::CoursesPage;
pub use quizzes::QuizzesPage;
pub use schedule::SchedulePage;

use std::time::Duration;

/// How long a success confirmation stays visible before the popup
/// auto-closes and the draft resets.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);
