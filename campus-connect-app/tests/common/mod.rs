#![allow(dead_code)]
//! Shared test backend for the page-flow tests.
//!
//! Records every call so tests can assert how many requests a trigger
//! produced (one load per trigger, one transcript fetch per poll tick).

use std::sync::Arc;

use async_trait::async_trait;
use campus_connect_backend::{
    BackendError, ChatMessage, Course, CreateCourseRequest, CreateQuizRequest, CreateQuizResponse,
    EduBackend, EmailOutcome, EmailRequest, LoginRequest, Quiz, RegisterRequest, Role,
    SendMessageRequest, User, UserSummary, VerifyResponse,
};
use campus_connect_core::{ServiceContext, Session};
use chrono::DateTime;
use tokio::sync::RwLock;

type BackendResult<T> = std::result::Result<T, BackendError>;

#[derive(Default)]
pub struct RecordingBackend {
    pub users: RwLock<Vec<UserSummary>>,
    pub users_error: RwLock<Option<BackendError>>,
    pub teachers: RwLock<Vec<UserSummary>>,
    pub teachers_error: RwLock<Option<BackendError>>,
    pub quizzes: RwLock<Vec<Quiz>>,
    pub courses: RwLock<Vec<Course>>,
    pub courses_error: RwLock<Option<BackendError>>,
    pub course_create_error: RwLock<Option<BackendError>>,
    pub messages: RwLock<Vec<ChatMessage>>,
    pub messages_error: RwLock<Option<BackendError>>,
    pub emails: RwLock<Vec<EmailRequest>>,
    pub email_failures: RwLock<Vec<String>>,
    pub notification_failures: RwLock<Vec<String>>,
    pub login_user: RwLock<Option<User>>,
    transcript_calls: RwLock<Vec<(String, String)>>,
    send_calls: RwLock<usize>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript fetches recorded for the given conversation partner.
    pub async fn transcript_fetches_for(&self, other: &str) -> usize {
        self.transcript_calls
            .read()
            .await
            .iter()
            .filter(|(_, b)| b == other)
            .count()
    }

    pub async fn total_transcript_fetches(&self) -> usize {
        self.transcript_calls.read().await.len()
    }

    pub async fn sent_emails(&self) -> Vec<EmailRequest> {
        self.emails.read().await.clone()
    }
}

#[async_trait]
impl EduBackend for RecordingBackend {
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
        self.transcript_calls
            .write()
            .await
            .push((user_a.to_string(), user_b.to_string()));
        if let Some(err) = self.messages_error.read().await.as_ref() {
            return Err(err.clone());
        }
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
        let mut calls = self.send_calls.write().await;
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
        if let Some(err) = self.courses_error.read().await.as_ref() {
            return Err(err.clone());
        }
        Ok(self.courses.read().await.clone())
    }

    async fn create_course(&self, req: &CreateCourseRequest) -> BackendResult<Course> {
        if let Some(err) = self.course_create_error.read().await.as_ref() {
            return Err(err.clone());
        }
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
            id: "q-new".to_string(),
            title: req.title.clone(),
            due_date: req.due_date.clone(),
            duration: req.duration.clone(),
            description: req.description.clone(),
            quiz_url: req.quiz_url.clone(),
            created_by: req.created_by.clone(),
            assigned_students: req.assigned_students.clone(),
        };
        Ok(CreateQuizResponse {
            quiz,
            email_results,
        })
    }

    async fn login(&self, _req: &LoginRequest) -> BackendResult<User> {
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

pub fn create_context() -> (Arc<ServiceContext>, Arc<RecordingBackend>) {
    let backend = Arc::new(RecordingBackend::new());
    let session = Arc::new(Session::new());
    let ctx = Arc::new(ServiceContext::new(backend.clone(), session));
    (ctx, backend)
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

/// Yields a few times so spawned tasks get to run without the test ever
/// parking on a timer.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
