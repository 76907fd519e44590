//! HTTP implementation of the backend trait.
//!
//! One generic request path handles every endpoint: build request, send,
//! map transport errors, map status codes, decode JSON. Endpoint methods
//! stay one-liners on top of it.
//!
//! Status mapping:
//! - 404 becomes [`BackendError::NotFound`] so list loaders can render an
//!   empty state instead of an error banner.
//! - Any other non-success status becomes [`BackendError::Api`], carrying
//!   the `message`/`error` text from the body when present.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{BackendError, Result};
use crate::traits::EduBackend;
use crate::types::{
    ChatMessage, Course, CreateCourseRequest, CreateQuizRequest, CreateQuizResponse, EmailRequest,
    LoginRequest, LoginResponse, Quiz, RegisterRequest, Role, SendMessageRequest, User,
    UserSummary, VerifyResponse,
};

/// Maximum response-body length echoed into debug logs.
const LOG_BODY_LIMIT: usize = 512;

/// Connection settings for [`HttpEduBackend`].
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// API base URL, without a trailing slash (e.g. `http://localhost:3001/api`).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl BackendConfig {
    /// Creates a config with the default 30 second timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Error body shape used by the backend. Some endpoints say `message`,
/// others say `error`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// reqwest-based [`EduBackend`] implementation.
pub struct HttpEduBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEduBackend {
    /// Builds the client from connection settings.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BackendError::Network {
                detail: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends a prepared request and returns `(status, body)`.
    ///
    /// Transport failures map to `Timeout`/`Network`; reading the body is
    /// part of the transport.
    async fn execute(
        request: RequestBuilder,
        method: &str,
        path: &str,
    ) -> Result<(StatusCode, String)> {
        log::debug!("{method} {path}");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                BackendError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("{method} {path} -> HTTP {status}");

        let body = response.text().await.map_err(|e| BackendError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;
        log::debug!("Response body: {}", truncate_for_log(&body));

        Ok((status, body))
    }

    /// Maps a non-success status to the error taxonomy.
    fn status_error(status: StatusCode, body: &str, path: &str) -> BackendError {
        if status == StatusCode::NOT_FOUND {
            return BackendError::NotFound {
                resource: path.to_string(),
            };
        }
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.is_empty());
        BackendError::Api {
            status: status.as_u16(),
            message,
        }
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
        serde_json::from_str(body).map_err(|e| {
            log::error!("JSON decode failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(body));
            BackendError::Parse {
                detail: e.to_string(),
            }
        })
    }

    /// GET `path` and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.client.get(self.url(path));
        let (status, body) = Self::execute(request, "GET", path).await?;
        if !status.is_success() {
            return Err(Self::status_error(status, &body, path));
        }
        Self::decode(&body)
    }

    /// GET `path` with query parameters and decode the JSON body.
    async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let request = self.client.get(self.url(path)).query(query);
        let (status, body) = Self::execute(request, "GET", path).await?;
        if !status.is_success() {
            return Err(Self::status_error(status, &body, path));
        }
        Self::decode(&body)
    }

    /// POST a JSON body to `path` and decode the JSON response.
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.client.post(self.url(path)).json(body);
        let (status, text) = Self::execute(request, "POST", path).await?;
        if !status.is_success() {
            return Err(Self::status_error(status, &text, path));
        }
        Self::decode(&text)
    }

    /// POST a JSON body to `path`, discarding the response body.
    async fn post_unit<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let request = self.client.post(self.url(path)).json(body);
        let (status, text) = Self::execute(request, "POST", path).await?;
        if !status.is_success() {
            return Err(Self::status_error(status, &text, path));
        }
        Ok(())
    }
}

#[async_trait]
impl EduBackend for HttpEduBackend {
    async fn list_users(&self, role: Role) -> Result<Vec<UserSummary>> {
        self.get_query("/users", &[("role", role.as_str())]).await
    }

    async fn list_teachers(&self) -> Result<Vec<UserSummary>> {
        self.get("/users/teachers").await
    }

    async fn list_messages(&self, user_a: &str, user_b: &str) -> Result<Vec<ChatMessage>> {
        self.get(&format!("/messages/{user_a}/{user_b}")).await
    }

    async fn send_message(&self, req: &SendMessageRequest) -> Result<ChatMessage> {
        self.post("/messages", req).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.get("/courses").await
    }

    async fn create_course(&self, req: &CreateCourseRequest) -> Result<Course> {
        self.post("/courses", req).await
    }

    async fn send_email(&self, req: &EmailRequest) -> Result<()> {
        self.post_unit("/email/send", req).await
    }

    async fn list_quizzes(&self, user_id: &str, role: Role) -> Result<Vec<Quiz>> {
        self.get_query("/quizzes", &[("userId", user_id), ("role", role.as_str())])
            .await
    }

    async fn create_quiz(&self, req: &CreateQuizRequest) -> Result<CreateQuizResponse> {
        self.post("/quizzes", req).await
    }

    async fn login(&self, req: &LoginRequest) -> Result<User> {
        let response: LoginResponse = self.post("/auth/login", req).await?;
        Ok(response.user)
    }

    async fn register(&self, req: &RegisterRequest) -> Result<()> {
        self.post_unit("/auth/register", req).await
    }

    async fn verify_email(&self, token: &str) -> Result<VerifyResponse> {
        self.get(&format!("/auth/verify/{token}")).await
    }
}

/// Truncates a response body for debug logging.
fn truncate_for_log(body: &str) -> String {
    if body.len() <= LOG_BODY_LIMIT {
        body.to_string()
    } else {
        let cut = body
            .char_indices()
            .take_while(|(i, _)| *i < LOG_BODY_LIMIT)
            .last()
            .map_or(0, |(i, c)| i + c.len_utf8());
        format!("{}... ({} bytes total)", &body[..cut], body.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_404_is_not_found() {
        let err = HttpEduBackend::status_error(StatusCode::NOT_FOUND, "", "/users/teachers");
        assert!(matches!(err, BackendError::NotFound { resource } if resource == "/users/teachers"));
    }

    #[test]
    fn status_error_400_extracts_message_field() {
        let err =
            HttpEduBackend::status_error(StatusCode::BAD_REQUEST, r#"{"message":"bad"}"#, "/x");
        match err {
            BackendError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message.as_deref(), Some("bad"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn status_error_400_extracts_error_field() {
        let err = HttpEduBackend::status_error(
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid request"}"#,
            "/x",
        );
        assert_eq!(err.api_message(), Some("invalid request"));
    }

    #[test]
    fn status_error_unparseable_body_has_no_message() {
        let err =
            HttpEduBackend::status_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops", "/x");
        match err {
            BackendError::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(message.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn status_error_empty_message_treated_as_absent() {
        let err = HttpEduBackend::status_error(StatusCode::BAD_REQUEST, r#"{"message":""}"#, "/x");
        assert_eq!(err.api_message(), None);
    }

    #[test]
    fn base_url_trailing_slash_normalized() {
        let backend = HttpEduBackend::new(&BackendConfig::new("http://localhost:3001/api/"))
            .expect("client should build");
        assert_eq!(backend.url("/courses"), "http://localhost:3001/api/courses");
    }

    #[test]
    fn truncate_short_body_untouched() {
        assert_eq!(truncate_for_log("{}"), "{}");
    }

    #[test]
    fn truncate_long_body() {
        let body = "x".repeat(2048);
        let logged = truncate_for_log(&body);
        assert!(logged.len() < body.len());
        assert!(logged.contains("2048 bytes total"));
    }
}
