//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use campus_connect_backend::BackendError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Client-side validation failure. Blocks submission and never
    /// reaches the network.
    #[error("{message}")]
    Validation {
        /// Draft field the failure is attached to
        field: String,
        /// Message shown next to the field
        message: String,
    },

    /// The backend rejected a submission.
    #[error("Submission failed: {0}")]
    Submission(String),

    /// The operation requires an authenticated user.
    #[error("Not logged in")]
    NotLoggedIn,

    /// Backend error (converted from the client library)
    #[error("{0}")]
    Backend(#[from] BackendError),
}

impl CoreError {
    /// Shorthand for a field-scoped validation failure.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this is expected behavior (user input, missing resource) for
    /// log classification.
    ///
    /// Use level `warn` when this returns `true` and `error` otherwise.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation { .. } | Self::Submission(_) | Self::NotLoggedIn => true,
            Self::Backend(e) => e.is_expected(),
        }
    }

    /// Banner text for a failed submission inside an open popup.
    ///
    /// The backend's own message is surfaced verbatim when present;
    /// transport failures get a connection hint; anything else falls back
    /// to a generic line.
    #[must_use]
    pub fn submission_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Submission(message) => message.clone(),
            Self::NotLoggedIn => "Please log in and try again.".to_string(),
            Self::Backend(e) => match e {
                BackendError::Api {
                    message: Some(msg), ..
                } => msg.clone(),
                BackendError::Network { .. } | BackendError::Timeout { .. } => {
                    "Network error. Please check your connection and try again.".to_string()
                }
                _ => "The request failed. Please try again.".to_string(),
            },
        }
    }

    /// The draft field a validation failure is attached to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
