//! Platform-agnostic application layer for Campus Connect.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter
//! injection), `AppConfig` (file-backed settings), and the page state
//! machines that frontends render.

pub mod config;
pub mod pages;
pub mod polling;

pub use config::AppConfig;
pub use pages::{
    ChatPage, ConnectPage, Conversation, CoursesPage, LoginPage, QuizzesPage, RegisterPage,
    SchedulePage, VerifyEmailPage, SUCCESS_DISPLAY,
};
pub use polling::PollingChannel;

use std::sync::Arc;

use campus_connect_backend::{EduBackend, HttpEduBackend};
use campus_connect_core::error::{CoreError, CoreResult};
use campus_connect_core::{ServiceContext, Session};

/// Platform-agnostic application state.
///
/// Holds the service context (backend adapter + session) and the
/// settings; every frontend constructs this once at startup via
/// [`AppStateBuilder`] and asks it for page instances.
pub struct AppState {
    ctx: Arc<ServiceContext>,
    config: AppConfig,
}

impl AppState {
    /// Convenience constructor wiring the HTTP backend from settings.
    pub fn from_config(config: AppConfig) -> CoreResult<Self> {
        let backend = HttpEduBackend::new(&config.backend_config())?;
        AppStateBuilder::new()
            .backend(Arc::new(backend))
            .config(config)
            .build()
    }

    /// The shared service context.
    #[must_use]
    pub fn ctx(&self) -> &Arc<ServiceContext> {
        &self.ctx
    }

    /// The acting-user session.
    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        self.ctx.session()
    }

    /// The active settings.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // ===== Page constructors =====

    /// Course catalog page.
    #[must_use]
    pub fn courses_page(&self) -> CoursesPage {
        CoursesPage::new(Arc::clone(&self.ctx))
    }

    /// Connect (outreach) page.
    #[must_use]
    pub fn connect_page(&self) -> ConnectPage {
        ConnectPage::new(Arc::clone(&self.ctx))
    }

    /// Quizzes page.
    #[must_use]
    pub fn quizzes_page(&self) -> QuizzesPage {
        QuizzesPage::new(Arc::clone(&self.ctx))
    }

    /// Schedule page.
    #[must_use]
    pub fn schedule_page(&self) -> SchedulePage {
        SchedulePage::new(Arc::clone(&self.ctx))
    }

    /// Chat page, polling at the configured interval.
    #[must_use]
    pub fn chat_page(&self) -> ChatPage {
        ChatPage::new(Arc::clone(&self.ctx), self.config.poll_interval())
    }

    /// Login page.
    #[must_use]
    pub fn login_page(&self) -> LoginPage {
        LoginPage::new(Arc::clone(&self.ctx))
    }

    /// Registration page.
    #[must_use]
    pub fn register_page(&self) -> RegisterPage {
        RegisterPage::new(Arc::clone(&self.ctx))
    }

    /// Email verification page.
    #[must_use]
    pub fn verify_email_page(&self) -> VerifyEmailPage {
        VerifyEmailPage::new(Arc::clone(&self.ctx))
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `backend` — how the remote collaborator is reached
///
/// # Optional
/// - `session` — a pre-existing session (e.g. restored by a host shell);
///   defaults to signed out
/// - `config` — defaults to [`AppConfig::default`]
pub struct AppStateBuilder {
    backend: Option<Arc<dyn EduBackend>>,
    session: Option<Arc<Session>>,
    config: Option<AppConfig>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: None,
            session: None,
            config: None,
        }
    }

    #[must_use]
    pub fn backend(mut self, backend: Arc<dyn EduBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    #[must_use]
    pub fn session(mut self, session: Arc<Session>) -> Self {
        self.session = Some(session);
        self
    }

    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns a validation error if the backend adapter is missing.
    pub fn build(self) -> CoreResult<AppState> {
        let backend = self
            .backend
            .ok_or_else(|| CoreError::validation("backend", "backend adapter is required"))?;
        let session = self.session.unwrap_or_else(|| Arc::new(Session::new()));
        let config = self.config.unwrap_or_default();

        let ctx = Arc::new(ServiceContext::new(backend, session));
        Ok(AppState { ctx, config })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
