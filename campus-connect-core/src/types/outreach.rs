//! Outreach and course-share drafts.

use campus_connect_backend::{Course, CourseDetails, EmailRequest, User, UserSummary};

use crate::error::CoreResult;
use crate::form;

/// Draft for the Connect page's reach-out form.
///
/// The recipient name is seeded from the selected contact when the form
/// opens; the sender email is where the contact can reach back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutreachDraft {
    /// Addressee display name (seeded from the selection)
    pub recipient_name: String,
    /// Reply-to address collected in the form
    pub sender_email: String,
    /// Subject line
    pub subject: String,
    /// Message body
    pub description: String,
}

impl OutreachDraft {
    /// Seeds a fresh draft for the given contact.
    #[must_use]
    pub fn for_contact(contact: &UserSummary) -> Self {
        Self {
            recipient_name: contact.name.clone(),
            ..Self::default()
        }
    }

    /// Discards all input.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Runs the rule set in fixed order, stopping at the first failure.
    pub fn validate(&self) -> CoreResult<()> {
        form::require("name", "Recipient Name", &self.recipient_name)?;
        form::require("senderEmail", "Reach Out Email", &self.sender_email)?;
        form::require("subject", "Subject", &self.subject)?;
        form::require("description", "Description", &self.description)?;
        form::email("senderEmail", &self.sender_email)?;
        Ok(())
    }

    /// Builds the dispatch request for a validated draft.
    #[must_use]
    pub fn to_request(&self, contact: &UserSummary, sender: &User) -> EmailRequest {
        EmailRequest {
            to_email: contact.email.clone(),
            subject: self.subject.trim().to_string(),
            message: self.description.trim().to_string(),
            sender_name: sender.name.clone(),
            sender_role: sender.role.to_string(),
            recipient_email: self.sender_email.trim().to_string(),
            recipient_name: self.recipient_name.trim().to_string(),
            kind: None,
            course_details: None,
        }
    }
}

/// Draft for the share-course popup: a single email field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareDraft {
    /// Destination address
    pub email: String,
}

impl ShareDraft {
    /// Discards the input.
    pub fn reset(&mut self) {
        self.email.clear();
    }

    /// The destination must be a plausible, non-empty email address.
    pub fn validate(&self) -> CoreResult<()> {
        form::email("email", self.email.trim())
    }

    /// Builds the `course-share` dispatch request for a validated draft.
    #[must_use]
    pub fn to_request(&self, course: &Course, sender: Option<&User>) -> EmailRequest {
        let message = format!(
            "Course Title: {}\n\
             Instructor: {}\n\
             Description: {}\n\
             Category: {}\n\
             Level: {}\n\
             Duration: {}\n\
             Course URL: {}",
            course.title,
            course.instructor,
            course.description,
            course.category,
            course.level,
            course.duration,
            course.course_url,
        );
        EmailRequest {
            to_email: self.email.trim().to_string(),
            subject: format!("Course Recommendation: {}", course.title),
            message,
            sender_name: sender.map_or_else(|| "Anonymous".to_string(), |u| u.name.clone()),
            sender_role: sender.map_or_else(|| "user".to_string(), |u| u.role.to_string()),
            recipient_email: sender.map_or_else(|| "Not provided".to_string(), |u| u.email.clone()),
            recipient_name: String::new(),
            kind: Some("course-share".to_string()),
            course_details: Some(CourseDetails::from(course)),
        }
    }
}
