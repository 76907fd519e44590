//! Declarative form validation rules.
//!
//! Each rule is a pure, synchronous function returning the first failure
//! as a field-scoped [`CoreError::Validation`]. Draft records compose the
//! rules in a fixed order (required-selection, required fields, format,
//! temporal) and stop at the first failure, so the user always sees one
//! deterministic message per attempt.
//!
//! Temporal rules take `now` as an argument; nothing in here reads the
//! clock.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use url::Url;

use crate::error::{CoreError, CoreResult};

/// Accepted cover-image extensions.
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// At least one recipient/attendee must be chosen.
pub fn require_selection(field: &str, count: usize, message: &str) -> CoreResult<()> {
    if count == 0 {
        return Err(CoreError::validation(field, message));
    }
    Ok(())
}

/// The trimmed value must be non-empty.
pub fn require(field: &str, label: &str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, format!("{label} is required")));
    }
    Ok(())
}

/// Whether `value` is a plausible email address.
///
/// Same acceptance set as the classic `^[^\s@]+@[^\s@]+\.[^\s@]+$` check:
/// no whitespace, exactly one `@`, non-empty local part, and a domain
/// containing an interior dot.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs a dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// The value must be a plausible email address.
pub fn email(field: &str, value: &str) -> CoreResult<()> {
    if !is_valid_email(value) {
        return Err(CoreError::validation(
            field,
            "Please enter a valid email address",
        ));
    }
    Ok(())
}

/// The value must parse as a URL and use the http or https scheme.
pub fn http_url(field: &str, label: &str, value: &str) -> CoreResult<()> {
    let Ok(url) = Url::parse(value) else {
        return Err(CoreError::validation(
            field,
            format!("Please enter a valid {label}"),
        ));
    };
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(CoreError::validation(
            field,
            format!("{label} must start with http:// or https://"),
        ));
    }
    Ok(())
}

/// When non-empty, the value must carry a supported image extension.
pub fn image_filename(field: &str, value: &str) -> CoreResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    let lower = trimmed.to_lowercase();
    let ok = lower
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && IMAGE_EXTENSIONS.contains(&ext));
    if ok {
        Ok(())
    } else {
        Err(CoreError::validation(
            field,
            "Image must be in JPG, JPEG, PNG, or GIF format",
        ))
    }
}

/// Parses a `yyyy-mm-dd` form value.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// The date must be strictly after today. A date equal to today is
/// rejected.
pub fn future_date(
    field: &str,
    label: &str,
    value: &str,
    now: DateTime<Utc>,
) -> CoreResult<()> {
    let Some(date) = parse_date(value) else {
        return Err(CoreError::validation(
            field,
            format!("Invalid {label} format"),
        ));
    };
    if date <= now.date_naive() {
        return Err(CoreError::validation(
            field,
            format!("{label} must be in the future"),
        ));
    }
    Ok(())
}

/// The date+time must be strictly after now.
pub fn future_datetime(
    field: &str,
    message: &str,
    datetime: NaiveDateTime,
    now: DateTime<Utc>,
) -> CoreResult<()> {
    if datetime <= now.naive_utc() {
        return Err(CoreError::validation(field, message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(&format!("{date} 12:00:00"), "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    #[test]
    fn require_rejects_whitespace_only() {
        assert!(require("title", "Title", "   ").is_err());
        assert!(require("title", "Title", "").is_err());
        assert!(require("title", "Title", "ok").is_ok());
    }

    #[test]
    fn require_message_names_the_label() {
        let err = require("quizTitle", "Quiz title", "").unwrap_err();
        assert_eq!(err.to_string(), "Quiz title is required");
        assert_eq!(err.field(), Some("quizTitle"));
    }

    #[test]
    fn require_selection_zero_fails() {
        let err = require_selection("students", 0, "Please select at least one student").unwrap_err();
        assert_eq!(err.to_string(), "Please select at least one student");
        assert!(require_selection("students", 2, "x").is_ok());
    }

    #[test]
    fn email_acceptance_set() {
        assert!(!is_valid_email("foo@bar"));
        assert!(is_valid_email("foo@bar.com"));
        assert!(!is_valid_email("foo bar@baz.com"));
        assert!(!is_valid_email("@bar.com"));
        assert!(!is_valid_email("foo@.com"));
        assert!(!is_valid_email("foo@bar."));
        assert!(!is_valid_email("foo@@bar.com"));
        assert!(is_valid_email("a.b@c.d.e"));
    }

    #[test]
    fn url_rule_rejects_wrong_scheme_and_garbage() {
        assert!(http_url("url", "quiz URL", "notaurl").is_err());
        assert!(http_url("url", "quiz URL", "ftp://x.com").is_err());
        assert!(http_url("url", "quiz URL", "https://x.com").is_ok());
        assert!(http_url("url", "quiz URL", "http://x.com/path?q=1").is_ok());
    }

    #[test]
    fn url_rule_distinguishes_messages() {
        let garbage = http_url("url", "meeting URL", "notaurl").unwrap_err();
        assert_eq!(garbage.to_string(), "Please enter a valid meeting URL");

        let scheme = http_url("url", "meeting URL", "ftp://x.com").unwrap_err();
        assert_eq!(
            scheme.to_string(),
            "meeting URL must start with http:// or https://"
        );
    }

    #[test]
    fn image_rule_extension_set() {
        assert!(image_filename("image", "cover.PNG").is_ok());
        assert!(image_filename("image", "a.jpeg").is_ok());
        assert!(image_filename("image", "a.gif").is_ok());
        assert!(image_filename("image", "a.bmp").is_err());
        assert!(image_filename("image", "noextension").is_err());
        assert!(image_filename("image", ".png").is_err());
    }

    #[test]
    fn image_rule_skips_empty() {
        assert!(image_filename("image", "").is_ok());
        assert!(image_filename("image", "   ").is_ok());
    }

    #[test]
    fn due_date_today_rejected_strictly_future_accepted() {
        let now = at("2026-08-06");
        assert!(future_date("dueDate", "Due date", "2026-08-06", now).is_err());
        assert!(future_date("dueDate", "Due date", "2026-08-05", now).is_err());
        assert!(future_date("dueDate", "Due date", "2026-08-07", now).is_ok());
    }

    #[test]
    fn due_date_garbage_is_a_format_error() {
        let err = future_date("dueDate", "due date", "tomorrow", at("2026-08-06")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid due date format");
    }

    #[test]
    fn datetime_rule_is_strict() {
        let now = at("2026-08-06");
        let exactly_now = now.naive_utc();
        assert!(future_datetime("time", "must be future", exactly_now, now).is_err());

        let later = exactly_now + chrono::Duration::minutes(1);
        assert!(future_datetime("time", "must be future", later, now).is_ok());
    }
}
