//! Test helpers.
//!
//! Provides a configurable mock backend and factory shortcuts for the
//! service tests. The mock synthesizes directory emails as
//! `<id>@example.org`, matching the [`contact`] factory, so notification
//! outcomes can be asserted per recipient.

use std::sync::Arc;

use async_trait::async_trait;
use campus_connect_backend::{
    BackendError, ChatMessage, Course, CreateCourseRequest, CreateQuizRequest, CreateQuizResponse,
    EduBackend, EmailOutcome, EmailRequest, LoginRequest, Quiz, RegisterRequest, Role,
    SendMessageRequest, User, UserSummary, VerifyResponse,
};
use chrono::DateTime;
use tokio::sync::RwLock;

use crate::services::ServiceContext;
use crate::session::Session;

type BackendResult<T> = std::result::Result<T, BackendError>;

/// Configurable in-memory [`EduBackend`].
#[derive(Default)]
pub struct MockBackend {
    users: RwLock<Vec<UserSummary>>,
    users_error: RwLock<Option<BackendError>>,
    teachers: RwLock<Vec<UserSummary>>,
    teachers_error: RwLock<Option<BackendError>>,
    courses: RwLock<Vec<Course>>,
    course_create_calls: RwLock<usize>,
    quizzes: RwLock<Vec<Quiz>>,
    quiz_create_calls: RwLock<usize>,
    notification_failures: RwLock<Vec<String>>,
    messages: RwLock<Vec<ChatMessage>>,
    message_send_calls: RwLock<usize>,
    emails: RwLock<Vec<EmailRequest>>,
    email_failures: RwLock<Vec<String>>,
    login_user: RwLock<Option<User>>,
    login_error: RwLock<Option<BackendError>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_users(&self, users: Vec<UserSummary>) {
        *self.users.write().await = users;
    }

    pub async fn set_users_error(&self, err: Option<BackendError>) {
        *self.users_error.write().await = err;
    }

    pub async fn set_teachers(&self, teachers: Vec<UserSummary>) {
        *self.teachers.write().await = teachers;
    }

    pub async fn set_teachers_error(&self, err: Option<BackendError>) {
        *self.teachers_error.write().await = err;
    }

    pub async fn set_quizzes(&self, quizzes: Vec<Quiz>) {
        *self.quizzes.write().await = quizzes;
    }

    /// Make the quiz-create notification for this address report failure.
    pub async fn fail_notification_for(&self, email: &str) {
        self.notification_failures
            .write()
            .await
            .push(email.to_string());
    }

    /// Make `send_email` to this address fail.
    pub async fn fail_email_to(&self, email: &str) {
        self.email_failures.write().await.push(email.to_string());
    }

    pub async fn set_login_user(&self, user: User) {
        *self.login_user.write().await = Some(user);
    }

    pub async fn set_login_error(&self, err: Option<BackendError>) {
        *self.login_error.write().await = err;
    }

    pub async fn sent_emails(&self) -> Vec<EmailRequest> {
        self.emails.read().await.clone()
    }

    pub async fn course_create_calls(&self) -> usize {
        *self.course_create_calls.read().await
    }

    pub async fn quiz_create_calls(&self) -> usize {
        *self.quiz_create_calls.read().await
    }

    pub async fn message_send_calls(&self) -> usize {
        *self.message_send_calls.read().await
    }
}

#[async_trait]
impl EduBackend for MockBackend {
    async fn list_users(&self, _role: Role) -> BackendResult<Vec<UserSummary>> {
        if let Some(err) = self.users_error.read().await.as_ref() {
            return Err(err.clone());
        }
        Ok(self.users.read().await.clone())
    }

    async fn list_teachers(&self) -> BackendResult<Vec<UserSummary>> {
        if let Some(err) = self.teachers_error.read().await.as_ref() {
            return Err(err.clone());
        }
        Ok(self.teachers.read().await.clone())
    }

    async fn list_messages(&self, user_a: &str, user_b: &str) -> BackendResult<Vec<ChatMessage>> {
        Ok(self
            .messages
            .read()
            .await
            .iter()
            .filter(|m| {
                (m.sender_id == user_a && m.receiver_id == user_b)
                    || (m.sender_id == user_b && m.receiver_id == user_a)
            })
            .cloned()
            .collect())
    }

    async fn send_message(&self, req: &SendMessageRequest) -> BackendResult<ChatMessage> {
        let mut calls = self.message_send_calls.write().await;
        *calls += 1;
        let seq = *calls;
        let message = ChatMessage {
            id: format!("m{seq}"),
            sender_id: req.sender_id.clone(),
            receiver_id: req.receiver_id.clone(),
            content: req.content.clone(),
            sent_at: DateTime::from_timestamp(1_700_000_000 + seq as i64, 0)
                .unwrap_or_default(),
        };
        self.messages.write().await.push(message.clone());
        Ok(message)
    }

    async fn list_courses(&self) -> BackendResult<Vec<Course>> {
        Ok(self.courses.read().await.clone())
    }

    async fn create_course(&self, req: &CreateCourseRequest) -> BackendResult<Course> {
        *self.course_create_calls.write().await += 1;
        let course = Course {
            id: format!("c{}", self.courses.read().await.len() + 1),
            title: req.title.clone(),
            instructor: req.instructor.clone(),
            description: req.description.clone(),
            image: req.image.clone(),
            course_url: req.course_url.clone(),
            category: req.category.clone(),
            duration: req.duration.clone(),
            level: req.level.clone(),
        };
        self.courses.write().await.push(course.clone());
        Ok(course)
    }

    async fn send_email(&self, req: &EmailRequest) -> BackendResult<()> {
        if self.email_failures.read().await.contains(&req.to_email) {
            return Err(BackendError::Api {
                status: 502,
                message: Some("Mail relay unavailable".into()),
            });
        }
        self.emails.write().await.push(req.clone());
        Ok(())
    }

    async fn list_quizzes(&self, _user_id: &str, _role: Role) -> BackendResult<Vec<Quiz>> {
        Ok(self.quizzes.read().await.clone())
    }

    async fn create_quiz(&self, req: &CreateQuizRequest) -> BackendResult<CreateQuizResponse> {
        *self.quiz_create_calls.write().await += 1;
        let failures = self.notification_failures.read().await;
        let email_results = req
            .assigned_students
            .iter()
            .map(|id| {
                let email = format!("{id}@example.org");
                let failed = failures.contains(&email);
                EmailOutcome {
                    email,
                    success: !failed,
                    error: failed.then(|| "Mail relay unavailable".to_string()),
                }
            })
            .collect();
        let quiz = Quiz {
            id: format!("q{}", self.quizzes.read().await.len() + 1),
            title: req.title.clone(),
            due_date: req.due_date.clone(),
            duration: req.duration.clone(),
            description: req.description.clone(),
            quiz_url: req.quiz_url.clone(),
            created_by: req.created_by.clone(),
            assigned_students: req.assigned_students.clone(),
        };
        self.quizzes.write().await.push(quiz.clone());
        Ok(CreateQuizResponse {
            quiz,
            email_results,
        })
    }

    async fn login(&self, _req: &LoginRequest) -> BackendResult<User> {
        if let Some(err) = self.login_error.read().await.as_ref() {
            return Err(err.clone());
        }
        self.login_user
            .read()
            .await
            .clone()
            .ok_or(BackendError::Api {
                status: 401,
                message: Some("Invalid credentials".into()),
            })
    }

    async fn register(&self, _req: &RegisterRequest) -> BackendResult<()> {
        Ok(())
    }

    async fn verify_email(&self, _token: &str) -> BackendResult<VerifyResponse> {
        Ok(VerifyResponse {
            message: "Email verified".into(),
        })
    }
}

// ===== Factories =====

pub fn create_test_context() -> (Arc<ServiceContext>, Arc<MockBackend>) {
    let backend = Arc::new(MockBackend::new());
    let session = Arc::new(Session::new());
    let ctx = Arc::new(ServiceContext::new(backend.clone(), session));
    (ctx, backend)
}

pub async fn sign_in(ctx: &Arc<ServiceContext>, user: User) {
    ctx.session().sign_in(user).await;
}

pub fn teacher_user() -> User {
    User {
        id: "teacher-1".into(),
        name: "Alan".into(),
        email: "alan@example.org".into(),
        role: Role::Teacher,
    }
}

pub fn student_user() -> User {
    User {
        id: "s1".into(),
        name: "Ada".into(),
        email: "ada@example.org".into(),
        role: Role::Student,
    }
}

pub fn contact(id: &str, name: &str) -> UserSummary {
    UserSummary {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@example.org"),
    }
}

pub fn course(id: &str, title: &str) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        instructor: "A. Turing".into(),
        description: "Sample".into(),
        image: String::new(),
        course_url: "https://example.org/c".into(),
        category: "General".into(),
        duration: "Unknown".into(),
        level: "Beginner".into(),
    }
}

pub fn quiz(id: &str, assigned: &[&str]) -> Quiz {
    Quiz {
        id: id.to_string(),
        title: format!("Quiz {id}"),
        due_date: "2026-09-01".into(),
        duration: "30".into(),
        description: "Sample".into(),
        quiz_url: "https://example.org/q".into(),
        created_by: "teacher-1".into(),
        assigned_students: assigned.iter().map(|s| (*s).to_string()).collect(),
    }
}
