//! Course creation draft.

use campus_connect_backend::CreateCourseRequest;

use crate::error::CoreResult;
use crate::form;

/// Draft for the add-course form.
///
/// Category, duration and level are select fields seeded with defaults;
/// image and course URL are optional and only format-checked when filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    /// Course title
    pub title: String,
    /// Instructor display name
    pub instructor: String,
    /// Short description
    pub description: String,
    /// Cover image filename (optional)
    pub image: String,
    /// External course URL (optional)
    pub course_url: String,
    /// Category select
    pub category: String,
    /// Duration select
    pub duration: String,
    /// Level select
    pub level: String,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            instructor: String::new(),
            description: String::new(),
            image: String::new(),
            course_url: String::new(),
            category: "General".to_string(),
            duration: "Unknown".to_string(),
            level: "Beginner".to_string(),
        }
    }
}

impl CourseDraft {
    /// Discards all input, restoring the select defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Runs the rule set in fixed order, stopping at the first failure.
    pub fn validate(&self) -> CoreResult<()> {
        form::require("title", "Title", &self.title)?;
        form::require("instructor", "Instructor", &self.instructor)?;
        form::require("description", "Description", &self.description)?;
        form::image_filename("image", &self.image)?;
        if !self.course_url.trim().is_empty() {
            form::http_url("courseUrl", "course URL", &self.course_url)?;
        }
        Ok(())
    }

    /// Builds the create request from a validated draft.
    #[must_use]
    pub fn to_request(&self) -> CreateCourseRequest {
        CreateCourseRequest {
            title: self.title.trim().to_string(),
            instructor: self.instructor.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            course_url: self.course_url.trim().to_string(),
            category: self.category.clone(),
            duration: self.duration.clone(),
            level: self.level.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CourseDraft {
        CourseDraft {
            title: "Rust 101".into(),
            instructor: "A. Turing".into(),
            description: "Ownership from first principles".into(),
            image: "rust.png".into(),
            course_url: "https://example.org/rust".into(),
            ..CourseDraft::default()
        }
    }

    #[test]
    fn empty_draft_fails_on_title_first() {
        let err = CourseDraft::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "Title is required");
        assert_eq!(err.field(), Some("title"));
    }

    #[test]
    fn missing_instructor_reported_after_title() {
        let draft = CourseDraft {
            title: "Rust 101".into(),
            ..CourseDraft::default()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field(), Some("instructor"));
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let draft = CourseDraft {
            image: String::new(),
            course_url: String::new(),
            ..filled()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn bad_image_extension_rejected() {
        let draft = CourseDraft {
            image: "cover.tiff".into(),
            ..filled()
        };
        assert_eq!(draft.validate().unwrap_err().field(), Some("image"));
    }

    #[test]
    fn bad_course_url_rejected_when_filled() {
        let draft = CourseDraft {
            course_url: "ftp://example.org".into(),
            ..filled()
        };
        assert_eq!(draft.validate().unwrap_err().field(), Some("courseUrl"));
    }

    #[test]
    fn reset_restores_select_defaults() {
        let mut draft = filled();
        draft.category = "Programming".into();
        draft.reset();
        assert_eq!(draft, CourseDraft::default());
        assert_eq!(draft.category, "General");
    }

    #[test]
    fn request_trims_text_fields() {
        let draft = CourseDraft {
            title: "  Rust 101  ".into(),
            ..filled()
        };
        assert_eq!(draft.to_request().title, "Rust 101");
    }
}
