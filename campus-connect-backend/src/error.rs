use serde::{Deserialize, Serialize};

/// Unified error type for all backend operations.
///
/// Every page-level request funnels through this taxonomy so callers can
/// distinguish "the network is down" from "the backend said no":
///
/// - [`Network`](Self::Network) / [`Timeout`](Self::Timeout) — transport
///   failures with no usable response.
/// - [`NotFound`](Self::NotFound) — HTTP 404. List loaders resolve this to
///   an empty collection rather than an error state.
/// - [`Api`](Self::Api) — the backend rejected the request; `message`
///   carries the backend's own error text when the body provided one.
///
/// No operation is retried automatically: one trigger means one request,
/// and the user re-triggers to retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum BackendError {
    /// A network-level error occurred (DNS failure, connection refused, etc.).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The requested resource does not exist (HTTP 404).
    NotFound {
        /// What was looked up (endpoint or entity description).
        resource: String,
    },

    /// The backend rejected the request (HTTP 400 or another non-success status).
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the backend body, if it carried one.
        message: Option<String>,
    },

    /// Failed to decode the backend's response body.
    Parse {
        /// Details about the decode failure.
        detail: String,
    },

    /// Failed to encode a request body.
    Serialization {
        /// Details about the encode failure.
        detail: String,
    },
}

impl BackendError {
    /// Whether this is expected behavior (user input, missing resource) for
    /// log classification.
    ///
    /// Use `warn` when this returns `true` and `error` otherwise.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Api { .. })
    }

    /// The backend's own error text, when the response body carried one.
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api {
                message: Some(msg), ..
            } => Some(msg),
            _ => None,
        }
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::NotFound { resource } => write!(f, "Not found: {resource}"),
            Self::Api { status, message } => {
                if let Some(msg) = message {
                    write!(f, "Backend error (HTTP {status}): {msg}")
                } else {
                    write!(f, "Backend error (HTTP {status})")
                }
            }
            Self::Parse { detail } => write!(f, "Parse error: {detail}"),
            Self::Serialization { detail } => write!(f, "Serialization error: {detail}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// Convenience type alias for `Result<T, BackendError>`.
pub type Result<T> = std::result::Result<T, BackendError>;
