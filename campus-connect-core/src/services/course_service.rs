//! Course catalog operations.

use std::sync::Arc;

use campus_connect_backend::{Course, Role};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{CourseDraft, ShareDraft};

/// Catalog listing, course creation, and course sharing.
pub struct CourseService {
    ctx: Arc<ServiceContext>,
}

impl CourseService {
    /// Creates a course service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Full course catalog.
    pub async fn list(&self) -> CoreResult<Vec<Course>> {
        Ok(self.ctx.backend().list_courses().await?)
    }

    /// Creates a course from a draft.
    ///
    /// Only teachers may add courses. The draft is validated in full
    /// before anything reaches the network; the returned record is what
    /// the backend persisted, for appending to the displayed collection.
    pub async fn create(&self, draft: &CourseDraft) -> CoreResult<Course> {
        let user = self.ctx.session().require().await?;
        if user.role != Role::Teacher {
            return Err(CoreError::validation(
                "general",
                "Only teachers can add courses",
            ));
        }
        draft.validate()?;

        let request = draft.to_request();
        log::info!("Creating course: {}", request.title);
        let course = self.ctx.backend().create_course(&request).await?;
        Ok(course)
    }

    /// Shares a course by email.
    ///
    /// Works signed out too: the dispatch then goes out as "Anonymous",
    /// matching the catalog being publicly browsable.
    pub async fn share(&self, course: &Course, draft: &ShareDraft) -> CoreResult<()> {
        draft.validate()?;
        let sender = self.ctx.session().current().await;
        let request = draft.to_request(course, sender.as_ref());
        log::info!("Sharing course {} with {}", course.id, request.to_email);
        self.ctx.backend().send_email(&request).await?;
        Ok(())
    }
}
