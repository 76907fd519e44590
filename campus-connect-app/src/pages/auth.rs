//! Login, registration, and email verification pages.

use std::sync::Arc;

use campus_connect_core::services::AuthService;
use campus_connect_core::types::{LoginDraft, RegisterDraft};
use campus_connect_core::{Popup, ServiceContext, User};

use super::SUCCESS_DISPLAY;

/// Login form.
pub struct LoginPage {
    service: AuthService,
    draft: LoginDraft,
    error: Option<String>,
}

impl LoginPage {
    /// Creates the page against the shared service context.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            service: AuthService::new(ctx),
            draft: LoginDraft::default(),
            error: None,
        }
    }

    /// The current draft.
    #[must_use]
    pub fn draft(&self) -> &LoginDraft {
        &self.draft
    }

    /// Mutable draft access; editing clears the stale error.
    pub fn draft_mut(&mut self) -> &mut LoginDraft {
        self.error = None;
        &mut self.draft
    }

    /// Error line for the form.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Attempts the login. On success the session holds the user and the
    /// shell navigates to the dashboard; on failure the backend's
    /// message shows.
    pub async fn submit(&mut self) -> Option<User> {
        match self.service.login(&self.draft).await {
            Ok(user) => {
                self.draft.reset();
                self.error = None;
                Some(user)
            }
            Err(e) => {
                self.error = Some(e.submission_message());
                None
            }
        }
    }
}

/// Registration form with its confirmation popup.
pub struct RegisterPage {
    service: AuthService,
    draft: RegisterDraft,
    error: Option<String>,
    popup: Popup,
}

impl RegisterPage {
    /// Creates the page against the shared service context.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            service: AuthService::new(ctx),
            draft: RegisterDraft::default(),
            error: None,
            popup: Popup::new(),
        }
    }

    /// The current draft.
    #[must_use]
    pub fn draft(&self) -> &RegisterDraft {
        &self.draft
    }

    /// Mutable draft access; editing clears the stale error.
    pub fn draft_mut(&mut self) -> &mut RegisterDraft {
        self.error = None;
        &mut self.draft
    }

    /// Error line for the form.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The confirmation popup state.
    #[must_use]
    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    /// Attempts the registration. On success the check-your-email
    /// confirmation shows and [`auto_dismiss`](Self::auto_dismiss)
    /// should run before navigating back to login.
    pub async fn submit(&mut self) {
        match self.service.register(&self.draft).await {
            Ok(()) => {
                self.error = None;
                self.popup.succeed();
            }
            Err(e) => {
                self.error = Some(e.submission_message());
            }
        }
    }

    /// Holds the confirmation for the display delay, then resets the
    /// form. Returns `true` when the shell should navigate to login.
    pub async fn auto_dismiss(&mut self) -> bool {
        if !self.popup.is_success() {
            return false;
        }
        tokio::time::sleep(SUCCESS_DISPLAY).await;
        self.draft.reset();
        self.popup.close();
        true
    }
}

/// Email verification landing page.
pub struct VerifyEmailPage {
    service: AuthService,
    message: String,
    verified: bool,
}

impl VerifyEmailPage {
    /// Creates the page against the shared service context.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            service: AuthService::new(ctx),
            message: "Verifying your email...".to_string(),
            verified: false,
        }
    }

    /// Status line to render.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether verification succeeded.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Confirms the token once on mount and records the outcome.
    pub async fn verify(&mut self, token: &str) {
        match self.service.verify_email(token).await {
            Ok(response) => {
                self.verified = true;
                self.message = if response.message.is_empty() {
                    "Email verified! Redirecting to login...".to_string()
                } else {
                    response.message
                };
            }
            Err(e) => {
                self.verified = false;
                self.message = e.submission_message();
            }
        }
    }
}
