//! Page-facing service layer.

mod auth_service;
mod chat_service;
mod connect_service;
mod course_service;
mod directory_service;
mod quiz_service;
mod schedule_service;

pub use auth_service::AuthService;
pub use chat_service::ChatService;
pub use connect_service::ConnectService;
pub use course_service::CourseService;
pub use directory_service::DirectoryService;
pub use quiz_service::QuizService;
pub use schedule_service::ScheduleService;

use std::sync::Arc;

use campus_connect_backend::EduBackend;

use crate::session::Session;

/// Service context - holds the shared dependencies.
///
/// The platform layer creates this once, injecting its backend adapter
/// and the session object every page reads its identity from.
pub struct ServiceContext {
    /// Backend collaborator
    backend: Arc<dyn EduBackend>,
    /// Acting-user session
    session: Arc<Session>,
}

impl ServiceContext {
    /// Creates a service context.
    #[must_use]
    pub fn new(backend: Arc<dyn EduBackend>, session: Arc<Session>) -> Self {
        Self { backend, session }
    }

    /// The backend collaborator.
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn EduBackend> {
        &self.backend
    }

    /// The acting-user session.
    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }
}
