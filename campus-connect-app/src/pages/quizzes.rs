//! Quizzes page: assignment (teacher) and taking (student).

use std::sync::Arc;

use campus_connect_core::error::CoreError;
use campus_connect_core::form;
use campus_connect_core::services::{DirectoryService, QuizService};
use campus_connect_core::types::QuizDraft;
use campus_connect_core::{
    filter_items, EmailOutcome, ListLoader, MultiSelect, Popup, Quiz, Role, ServiceContext,
    Session, UserSummary,
};
use chrono::{DateTime, Utc};

use super::SUCCESS_DISPLAY;

/// Teacher view: student directory, multi-select, create-quiz popup.
/// Student view: assigned quizzes with a redirect confirmation that ends
/// the session when accepted.
pub struct QuizzesPage {
    directory: DirectoryService,
    service: QuizService,
    session: Arc<Session>,
    /// Assignable students (teacher view)
    pub students: ListLoader<UserSummary>,
    /// Assigned quizzes (student view)
    pub quizzes: ListLoader<Quiz>,
    /// Live search query over students
    pub query: String,
    selection: MultiSelect<String>,
    popup: Popup,
    draft: QuizDraft,
    form_error: Option<String>,
    email_status: Vec<EmailOutcome>,
    redirect: Option<Quiz>,
}

impl QuizzesPage {
    /// Creates the page against the shared service context.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            directory: DirectoryService::new(Arc::clone(&ctx)),
            service: QuizService::new(Arc::clone(&ctx)),
            session: Arc::clone(ctx.session()),
            students: ListLoader::new(),
            quizzes: ListLoader::new(),
            query: String::new(),
            selection: MultiSelect::new(),
            popup: Popup::new(),
            draft: QuizDraft::default(),
            form_error: None,
            email_status: Vec::new(),
            redirect: None,
        }
    }

    /// Fetches the role-appropriate collection: the assignable directory
    /// for teachers, the assigned quizzes for students. A 404 renders as
    /// an empty, still-operable list.
    pub async fn load(&mut self) {
        let Ok(user) = self.session.require().await else {
            return;
        };
        match user.role {
            Role::Teacher => {
                self.students.begin();
                let result = self.directory.contacts_for(Role::Student).await;
                self.students.finish(result);
                let items = self.students.items();
                self.selection.retain(|id| items.iter().any(|s| s.id == *id));
            }
            Role::Student => {
                self.quizzes.begin();
                let result = self.service.assigned_quizzes().await;
                self.quizzes.finish(result);
            }
        }
    }

    /// Students filtered by the live query.
    #[must_use]
    pub fn visible_students(&self) -> Vec<&UserSummary> {
        filter_items(self.students.items(), &self.query)
    }

    // ===== Teacher: selection and create form =====

    /// Toggles a student in the assignment set. Any selection change
    /// clears stale form feedback and the success flag.
    pub fn toggle_student(&mut self, id: &str) {
        self.selection.toggle(id.to_string());
        self.form_error = None;
        self.email_status.clear();
        if self.popup.is_success() {
            self.popup.close();
        }
    }

    /// Whether the student is in the assignment set.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(&id.to_string())
    }

    /// The selected students, in selection order.
    #[must_use]
    pub fn selected_students(&self) -> Vec<&UserSummary> {
        self.selection
            .selected()
            .iter()
            .filter_map(|id| self.students.items().iter().find(|s| s.id == *id))
            .collect()
    }

    /// Opens the create-quiz popup.
    pub fn open_create(&mut self) {
        self.popup.open();
    }

    /// The create-quiz popup state.
    #[must_use]
    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    /// The current draft.
    #[must_use]
    pub fn draft(&self) -> &QuizDraft {
        &self.draft
    }

    /// Mutable draft access; editing clears the stale error.
    pub fn draft_mut(&mut self) -> &mut QuizDraft {
        self.form_error = None;
        &mut self.draft
    }

    /// Sets the due date with immediate feedback: a past date is flagged
    /// on change and not stored, so the user sees the problem before
    /// submitting.
    pub fn set_due_date(&mut self, value: &str, now: DateTime<Utc>) {
        if let Some(date) = form::parse_date(value) {
            if date <= now.date_naive() {
                self.form_error = Some("Due date cannot be in the past".to_string());
                return;
            }
        }
        self.draft.due_date = value.to_string();
        self.form_error = None;
    }

    /// Error banner for the open popup.
    #[must_use]
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Per-recipient notification outcomes from the last creation.
    #[must_use]
    pub fn email_status(&self) -> &[EmailOutcome] {
        &self.email_status
    }

    /// Submits the draft. On success the per-recipient email outcomes
    /// render with the confirmation and
    /// [`auto_dismiss`](Self::auto_dismiss) should run; on failure the
    /// popup stays open for correction.
    pub async fn submit(&mut self, now: DateTime<Utc>) {
        let selected: Vec<UserSummary> =
            self.selected_students().into_iter().cloned().collect();
        match self.service.create(&self.draft, &selected, now).await {
            Ok(response) => {
                self.email_status = response.email_results;
                self.form_error = None;
                self.popup.succeed();
            }
            Err(e @ CoreError::Validation { .. }) => {
                self.form_error = Some(e.to_string());
            }
            Err(e) => {
                self.form_error = Some(e.submission_message());
            }
        }
    }

    /// Holds the success confirmation for the display delay, then resets
    /// the form, the selection, and the outcome list.
    pub async fn auto_dismiss(&mut self) {
        if !self.popup.is_success() {
            return;
        }
        tokio::time::sleep(SUCCESS_DISPLAY).await;
        self.selection.clear();
        self.draft.reset();
        self.email_status.clear();
        self.form_error = None;
        self.popup.close();
    }

    /// Cancel discards the draft, the selection, and all feedback.
    pub fn cancel(&mut self) {
        self.selection.clear();
        self.draft.reset();
        self.form_error = None;
        self.email_status.clear();
        self.popup.cancel();
    }

    // ===== Student: redirect confirmation =====

    /// Opens the take-quiz confirmation bound to `quiz`.
    pub fn open_redirect(&mut self, quiz: Quiz) {
        self.redirect = Some(quiz);
    }

    /// The quiz bound to the confirmation.
    #[must_use]
    pub fn redirect(&self) -> Option<&Quiz> {
        self.redirect.as_ref()
    }

    /// Confirms the redirect: ends the session and hands the quiz URL to
    /// the shell to open.
    pub async fn confirm_redirect(&mut self) -> Option<String> {
        let quiz = self.redirect.take()?;
        self.session.sign_out().await;
        Some(quiz.quiz_url)
    }

    /// Dismisses the confirmation.
    pub fn cancel_redirect(&mut self) {
        self.redirect = None;
    }
}
