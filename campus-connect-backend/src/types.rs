//! Wire types for the platform backend.
//!
//! Field names follow the backend's camelCase JSON convention. Entities and
//! their create-request counterparts live side by side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a platform user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Enrolled student
    Student,
    /// Teaching staff
    Teacher,
}

impl Role {
    /// Wire identifier, as used in query strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated platform user, as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// User ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Platform role
    pub role: Role,
}

/// Directory entry: a user rendered as a searchable card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    /// User ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

/// Catalog course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course ID
    pub id: String,
    /// Course title
    pub title: String,
    /// Instructor display name
    pub instructor: String,
    /// Short description
    pub description: String,
    /// Cover image filename (may be empty)
    #[serde(default)]
    pub image: String,
    /// External course URL (may be empty)
    #[serde(default)]
    pub course_url: String,
    /// Category label
    pub category: String,
    /// Human-readable duration
    pub duration: String,
    /// Difficulty level
    pub level: String,
}

/// Request body for `POST /courses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    /// Course title
    pub title: String,
    /// Instructor display name
    pub instructor: String,
    /// Short description
    pub description: String,
    /// Cover image filename (may be empty)
    pub image: String,
    /// External course URL (may be empty)
    pub course_url: String,
    /// Category label
    pub category: String,
    /// Human-readable duration
    pub duration: String,
    /// Difficulty level
    pub level: String,
}

/// Assigned quiz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Quiz ID
    pub id: String,
    /// Quiz title
    pub title: String,
    /// Due date (`yyyy-mm-dd`)
    pub due_date: String,
    /// Duration in minutes
    pub duration: String,
    /// Short description
    pub description: String,
    /// External quiz URL
    pub quiz_url: String,
    /// ID of the teacher who created the quiz
    pub created_by: String,
    /// IDs of the students the quiz is assigned to
    #[serde(default)]
    pub assigned_students: Vec<String>,
}

/// Request body for `POST /quizzes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    /// Quiz title
    pub title: String,
    /// Due date (`yyyy-mm-dd`)
    pub due_date: String,
    /// Duration in minutes
    pub duration: String,
    /// Short description
    pub description: String,
    /// External quiz URL
    pub quiz_url: String,
    /// ID of the creating teacher
    pub created_by: String,
    /// IDs of the assigned students
    pub assigned_students: Vec<String>,
}

/// Response for `POST /quizzes`: the stored quiz plus per-recipient
/// notification outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizResponse {
    /// The created quiz as persisted by the backend
    pub quiz: Quiz,
    /// One entry per assigned student, reflecting the email dispatch outcome
    #[serde(default)]
    pub email_results: Vec<EmailOutcome>,
}

/// Chat message between two users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Message ID
    pub id: String,
    /// Sender user ID
    pub sender_id: String,
    /// Receiver user ID
    pub receiver_id: String,
    /// Message text
    pub content: String,
    /// Server-side receive time
    #[serde(with = "crate::datetime")]
    pub sent_at: DateTime<Utc>,
}

/// Request body for `POST /messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// Sender user ID
    pub sender_id: String,
    /// Receiver user ID
    pub receiver_id: String,
    /// Message text
    pub content: String,
}

/// Structured course details attached to a course-share email.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetails {
    /// Course title
    pub title: String,
    /// Instructor display name
    pub instructor: String,
    /// Short description
    pub description: String,
    /// Category label
    pub category: String,
    /// Difficulty level
    pub level: String,
    /// Human-readable duration
    pub duration: String,
    /// External course URL
    pub course_url: String,
}

impl From<&Course> for CourseDetails {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            instructor: course.instructor.clone(),
            description: course.description.clone(),
            category: course.category.clone(),
            level: course.level.clone(),
            duration: course.duration.clone(),
            course_url: course.course_url.clone(),
        }
    }
}

/// Request body for `POST /email/send`.
///
/// Fire-and-forget notification dispatch. `kind` and `course_details` are
/// only set for typed dispatches (course sharing).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    /// Destination address
    pub to_email: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body (fallback for typed dispatches)
    pub message: String,
    /// Display name of the acting user
    pub sender_name: String,
    /// Role of the acting user
    pub sender_role: String,
    /// Reply-to address collected in the form
    pub recipient_email: String,
    /// Display name of the addressee
    pub recipient_name: String,
    /// Dispatch type (e.g. `course-share`)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Structured payload for typed dispatches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_details: Option<CourseDetails>,
}

/// Per-recipient outcome of a notification dispatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailOutcome {
    /// Recipient address
    pub email: String,
    /// Whether the dispatch succeeded
    pub success: bool,
    /// Failure detail, when `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Response for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user
    pub user: User,
}

/// Request body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Institutional enrollment number (`e` followed by 7 digits)
    pub e_number: String,
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
    /// Requested role
    pub role: Role,
}

/// Response for `GET /auth/verify/:token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Human-readable outcome message
    #[serde(default)]
    pub message: String,
}
