//! Course catalog page.

use std::sync::Arc;

use campus_connect_core::error::CoreError;
use campus_connect_core::services::CourseService;
use campus_connect_core::types::{CourseDraft, ShareDraft};
use campus_connect_core::{filter_items, Course, ListLoader, Popup, ServiceContext, Session};

/// Catalog browsing, course creation, details/redirect/share popups.
///
/// The catalog is publicly browsable; only the add-course form is gated
/// to teachers. Search matches title, instructor, and description.
pub struct CoursesPage {
    service: CourseService,
    session: Arc<Session>,
    /// Loaded catalog
    pub loader: ListLoader<Course>,
    /// Live search query
    pub query: String,
    add_popup: Popup,
    draft: CourseDraft,
    field_error: Option<(String, String)>,
    general_error: Option<String>,
    details: Option<Course>,
    redirect: Option<Course>,
    share_target: Option<Course>,
    share_draft: ShareDraft,
    share_error: Option<String>,
}

impl CoursesPage {
    /// Creates the page against the shared service context.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            service: CourseService::new(Arc::clone(&ctx)),
            session: Arc::clone(ctx.session()),
            loader: ListLoader::new(),
            query: String::new(),
            add_popup: Popup::new(),
            draft: CourseDraft::default(),
            field_error: None,
            general_error: None,
            details: None,
            redirect: None,
            share_target: None,
            share_draft: ShareDraft::default(),
            share_error: None,
        }
    }

    /// Fetches the catalog. One call per trigger; no retry.
    pub async fn load(&mut self) {
        self.loader.begin();
        let result = self.service.list().await;
        self.loader.finish(result);
    }

    /// The catalog filtered by the live query.
    #[must_use]
    pub fn visible(&self) -> Vec<&Course> {
        filter_items(self.loader.items(), &self.query)
    }

    // ===== Add-course form =====

    /// Opens the add-course popup. Teachers only.
    pub async fn open_add_form(&mut self) -> Result<(), CoreError> {
        let user = self.session.require().await?;
        if user.role != campus_connect_core::Role::Teacher {
            return Err(CoreError::validation(
                "general",
                "Only teachers can add courses",
            ));
        }
        self.add_popup.open();
        Ok(())
    }

    /// The add-course popup state.
    #[must_use]
    pub fn add_popup(&self) -> &Popup {
        &self.add_popup
    }

    /// The current draft.
    #[must_use]
    pub fn draft(&self) -> &CourseDraft {
        &self.draft
    }

    /// Mutable draft access; editing clears stale form errors.
    pub fn draft_mut(&mut self) -> &mut CourseDraft {
        self.field_error = None;
        self.general_error = None;
        &mut self.draft
    }

    /// Field-scoped validation error from the last submit attempt.
    #[must_use]
    pub fn field_error(&self) -> Option<(&str, &str)> {
        self.field_error
            .as_ref()
            .map(|(f, m)| (f.as_str(), m.as_str()))
    }

    /// General error banner for the open popup.
    #[must_use]
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Submits the draft. On success the created course is appended to
    /// the displayed collection and the popup closes after the draft
    /// resets; on failure the popup stays open for correction.
    pub async fn submit_add(&mut self) {
        match self.service.create(&self.draft).await {
            Ok(course) => {
                self.loader.push(course);
                self.draft.reset();
                self.field_error = None;
                self.general_error = None;
                self.add_popup.close();
            }
            Err(CoreError::Validation { field, message }) if field != "general" => {
                self.field_error = Some((field, message));
            }
            Err(e) => {
                self.general_error = Some(e.submission_message());
            }
        }
    }

    /// Cancel discards the draft and clears error state.
    pub fn cancel_add(&mut self) {
        self.add_popup.cancel();
        self.draft.reset();
        self.field_error = None;
        self.general_error = None;
    }

    // ===== Details popup =====

    /// Opens the details popup bound to `course`.
    pub fn open_details(&mut self, course: Course) {
        self.details = Some(course);
    }

    /// The course bound to the details popup.
    #[must_use]
    pub fn details(&self) -> Option<&Course> {
        self.details.as_ref()
    }

    /// Closes the details popup.
    pub fn close_details(&mut self) {
        self.details = None;
    }

    // ===== Redirect confirmation =====

    /// Opens the redirect confirmation bound to `course`.
    pub fn open_redirect(&mut self, course: Course) {
        self.redirect = Some(course);
    }

    /// The course bound to the redirect confirmation.
    #[must_use]
    pub fn redirect(&self) -> Option<&Course> {
        self.redirect.as_ref()
    }

    /// Confirms the redirect: ends the session and hands the course URL
    /// to the shell to open.
    pub async fn confirm_redirect(&mut self) -> Option<String> {
        let course = self.redirect.take()?;
        self.session.sign_out().await;
        Some(course.course_url)
    }

    /// Dismisses the redirect confirmation.
    pub fn cancel_redirect(&mut self) {
        self.redirect = None;
    }

    // ===== Share popup =====

    /// Opens the share popup bound to `course` with a fresh draft.
    pub fn open_share(&mut self, course: Course) {
        self.share_target = Some(course);
        self.share_draft.reset();
        self.share_error = None;
    }

    /// The course bound to the share popup.
    #[must_use]
    pub fn share_target(&self) -> Option<&Course> {
        self.share_target.as_ref()
    }

    /// The share draft.
    #[must_use]
    pub fn share_draft(&self) -> &ShareDraft {
        &self.share_draft
    }

    /// Mutable share draft access; editing clears the stale error.
    pub fn share_draft_mut(&mut self) -> &mut ShareDraft {
        self.share_error = None;
        &mut self.share_draft
    }

    /// Share error from the last attempt.
    #[must_use]
    pub fn share_error(&self) -> Option<&str> {
        self.share_error.as_deref()
    }

    /// Dispatches the course-share email; on success the popup closes.
    pub async fn submit_share(&mut self) {
        let Some(course) = self.share_target.clone() else {
            return;
        };
        match self.service.share(&course, &self.share_draft).await {
            Ok(()) => {
                self.share_target = None;
                self.share_draft.reset();
                self.share_error = None;
            }
            Err(e) => {
                self.share_error = Some(e.submission_message());
            }
        }
    }

    /// Cancel discards the share draft and closes the popup.
    pub fn cancel_share(&mut self) {
        self.share_target = None;
        self.share_draft.reset();
        self.share_error = None;
    }
}
