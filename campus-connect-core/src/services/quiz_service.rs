//! Quiz operations.

use std::sync::Arc;

use campus_connect_backend::{CreateQuizResponse, Quiz, Role, UserSummary};
use chrono::{DateTime, Utc};

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::QuizDraft;

/// Quiz listing and creation.
pub struct QuizService {
    ctx: Arc<ServiceContext>,
}

impl QuizService {
    /// Creates a quiz service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Quizzes assigned to the acting student.
    ///
    /// The backend scopes by user and role; rows not actually assigned to
    /// the student are dropped client-side as well, since assignment is
    /// the page's display contract.
    pub async fn assigned_quizzes(&self) -> CoreResult<Vec<Quiz>> {
        let user = self.ctx.session().require().await?;
        let mut quizzes = self
            .ctx
            .backend()
            .list_quizzes(&user.id, Role::Student)
            .await?;
        quizzes.retain(|q| q.assigned_students.iter().any(|id| *id == user.id));
        Ok(quizzes)
    }

    /// Creates a quiz and assigns it to the selected students.
    ///
    /// Validation runs in full before the request goes out. The backend
    /// notifies each assigned student by email and reports per-recipient
    /// outcomes in the response; a failed notification never rolls back
    /// the creation.
    pub async fn create(
        &self,
        draft: &QuizDraft,
        selected: &[UserSummary],
        now: DateTime<Utc>,
    ) -> CoreResult<CreateQuizResponse> {
        let user = self.ctx.session().require().await?;
        draft.validate(selected, now)?;

        let request = draft.to_request(&user.id, selected);
        log::info!(
            "Creating quiz \"{}\" for {} students",
            request.title,
            request.assigned_students.len()
        );
        let response = self.ctx.backend().create_quiz(&request).await?;

        for outcome in &response.email_results {
            if !outcome.success {
                log::warn!(
                    "Quiz notification failed for {}: {}",
                    outcome.email,
                    outcome.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
        Ok(response)
    }
}
