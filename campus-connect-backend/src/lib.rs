//! # campus-connect-backend
//!
//! REST client for the Campus Connect platform backend. The backend itself
//! (auth storage, course/quiz storage, email delivery) is a remote
//! collaborator; this crate only speaks its HTTP surface.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use campus_connect_backend::{BackendConfig, EduBackend, HttpEduBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = HttpEduBackend::new(&BackendConfig::new("http://localhost:3001/api"))?;
//!
//!     let teachers = backend.list_teachers().await?;
//!     for teacher in &teachers {
//!         println!("{} <{}>", teacher.name, teacher.email);
//!     }
//!
//!     let courses = backend.list_courses().await?;
//!     println!("{} courses in the catalog", courses.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, BackendError>`](BackendError). HTTP 404
//! maps to [`BackendError::NotFound`] so callers can render an empty state;
//! any other rejection surfaces as [`BackendError::Api`] with the backend's
//! own message when the body carried one. Nothing is retried automatically.

mod error;
mod http;
mod traits;
mod types;

pub mod datetime;

// Re-export error types
pub use error::{BackendError, Result};

// Re-export the backend trait and its HTTP implementation
pub use http::{BackendConfig, HttpEduBackend};
pub use traits::EduBackend;

// Re-export wire types
pub use types::{
    ChatMessage, Course, CourseDetails, CreateCourseRequest, CreateQuizRequest,
    CreateQuizResponse, EmailOutcome, EmailRequest, LoginRequest, LoginResponse, Quiz,
    RegisterRequest, Role, SendMessageRequest, User, UserSummary, VerifyResponse,
};
