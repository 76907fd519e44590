//! Quiz creation draft.

use campus_connect_backend::{CreateQuizRequest, UserSummary};
use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult};
use crate::form;

/// Draft for the create-quiz form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    /// Quiz title
    pub title: String,
    /// Due date (`yyyy-mm-dd`)
    pub due_date: String,
    /// Duration select, in minutes
    pub duration: String,
    /// Short description
    pub description: String,
    /// External quiz URL
    pub quiz_url: String,
}

impl Default for QuizDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            due_date: String::new(),
            duration: "30".to_string(),
            description: String::new(),
            quiz_url: String::new(),
        }
    }
}

impl QuizDraft {
    /// Discards all input, restoring the duration default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Runs the rule set in fixed order, stopping at the first failure:
    /// selection, required fields, formats (recipient emails, URL), then
    /// the temporal rule.
    pub fn validate(&self, selected: &[UserSummary], now: DateTime<Utc>) -> CoreResult<()> {
        form::require_selection(
            "assignedStudents",
            selected.len(),
            "Please select at least one student to assign the quiz",
        )?;
        form::require("quizTitle", "Quiz title", &self.title)?;
        form::require("dueDate", "Due date", &self.due_date)?;
        form::require("duration", "Duration", &self.duration)?;
        form::require("description", "Description", &self.description)?;
        form::require("quizUrl", "Quiz URL", &self.quiz_url)?;

        let invalid: Vec<&str> = selected
            .iter()
            .filter(|s| !form::is_valid_email(&s.email))
            .map(|s| s.email.as_str())
            .collect();
        if !invalid.is_empty() {
            return Err(CoreError::validation(
                "assignedStudents",
                format!("Invalid email addresses: {}", invalid.join(", ")),
            ));
        }

        form::http_url("quizUrl", "quiz URL", &self.quiz_url)?;
        form::future_date("dueDate", "Due date", &self.due_date, now)?;
        Ok(())
    }

    /// Builds the create request from a validated draft.
    #[must_use]
    pub fn to_request(&self, created_by: &str, selected: &[UserSummary]) -> CreateQuizRequest {
        CreateQuizRequest {
            title: self.title.trim().to_string(),
            due_date: self.due_date.trim().to_string(),
            duration: self.duration.clone(),
            description: self.description.trim().to_string(),
            quiz_url: self.quiz_url.trim().to_string(),
            created_by: created_by.to_string(),
            assigned_students: selected.iter().map(|s| s.id.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn now() -> DateTime<Utc> {
        NaiveDateTime::parse_from_str("2026-08-06 12:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    fn student(id: &str, email: &str) -> UserSummary {
        UserSummary {
            id: id.to_string(),
            name: format!("Student {id}"),
            email: email.to_string(),
        }
    }

    fn filled() -> QuizDraft {
        QuizDraft {
            title: "Midterm".into(),
            due_date: "2026-09-01".into(),
            duration: "60".into(),
            description: "Chapters 1-4".into(),
            quiz_url: "https://example.org/quiz".into(),
        }
    }

    #[test]
    fn no_selection_is_the_first_failure() {
        let err = QuizDraft::default().validate(&[], now()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please select at least one student to assign the quiz"
        );
    }

    #[test]
    fn empty_fields_fail_in_declaration_order() {
        let students = [student("s1", "s1@example.org")];
        let err = QuizDraft::default().validate(&students, now()).unwrap_err();
        assert_eq!(err.to_string(), "Quiz title is required");

        let draft = QuizDraft {
            title: "Midterm".into(),
            ..QuizDraft::default()
        };
        let err = draft.validate(&students, now()).unwrap_err();
        assert_eq!(err.to_string(), "Due date is required");
    }

    #[test]
    fn invalid_recipient_email_listed() {
        let students = [student("s1", "good@example.org"), student("s2", "bad@nodot")];
        let err = filled().validate(&students, now()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid email addresses: bad@nodot");
    }

    #[test]
    fn due_date_today_rejected() {
        let draft = QuizDraft {
            due_date: "2026-08-06".into(),
            ..filled()
        };
        let students = [student("s1", "s1@example.org")];
        let err = draft.validate(&students, now()).unwrap_err();
        assert_eq!(err.to_string(), "Due date must be in the future");
    }

    #[test]
    fn valid_draft_passes_and_builds_request() {
        let students = [student("s1", "s1@example.org"), student("s2", "s2@example.org")];
        let draft = filled();
        assert!(draft.validate(&students, now()).is_ok());

        let req = draft.to_request("t1", &students);
        assert_eq!(req.created_by, "t1");
        assert_eq!(req.assigned_students, ["s1", "s2"]);
    }

    #[test]
    fn reset_restores_duration_default() {
        let mut draft = filled();
        draft.reset();
        assert_eq!(draft.duration, "30");
        assert!(draft.title.is_empty());
    }
}
