use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    ChatMessage, Course, CreateCourseRequest, CreateQuizRequest, CreateQuizResponse, EmailRequest,
    LoginRequest, Quiz, RegisterRequest, Role, SendMessageRequest, User, UserSummary,
    VerifyResponse,
};

/// The platform backend, seen from the client side.
///
/// One method per remote operation. Implementations perform exactly one
/// network call per invocation; retrying is the caller's (i.e. the user's)
/// decision.
#[async_trait]
pub trait EduBackend: Send + Sync {
    /// Directory lookup: all users with the given role.
    async fn list_users(&self, role: Role) -> Result<Vec<UserSummary>>;

    /// Teacher subset of the directory (chat contact list).
    async fn list_teachers(&self) -> Result<Vec<UserSummary>>;

    /// Conversation transcript between two users, oldest first.
    async fn list_messages(&self, user_a: &str, user_b: &str) -> Result<Vec<ChatMessage>>;

    /// Sends a chat message; returns the stored message (with id and
    /// server timestamp) for appending to the transcript.
    async fn send_message(&self, req: &SendMessageRequest) -> Result<ChatMessage>;

    /// Full course catalog.
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// Creates a course; returns the persisted record.
    async fn create_course(&self, req: &CreateCourseRequest) -> Result<Course>;

    /// Fire-and-forget notification dispatch.
    async fn send_email(&self, req: &EmailRequest) -> Result<()>;

    /// Quizzes visible to the given user in the given role.
    async fn list_quizzes(&self, user_id: &str, role: Role) -> Result<Vec<Quiz>>;

    /// Creates a quiz; the backend notifies every assigned student and
    /// reports the per-recipient outcome in the response.
    async fn create_quiz(&self, req: &CreateQuizRequest) -> Result<CreateQuizResponse>;

    /// Authenticates and returns the acting user.
    async fn login(&self, req: &LoginRequest) -> Result<User>;

    /// Registers a new account. Verification happens out of band.
    async fn register(&self, req: &RegisterRequest) -> Result<()>;

    /// Confirms an email verification token.
    async fn verify_email(&self, token: &str) -> Result<VerifyResponse>;
}
