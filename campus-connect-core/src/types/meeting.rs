//! Meeting invite draft.

use campus_connect_backend::{User, UserSummary};
use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};

use crate::error::{CoreError, CoreResult};
use crate::form;

/// 12-hour clock half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Meridiem {
    /// Midnight to noon
    #[default]
    Am,
    /// Noon to midnight
    Pm,
}

impl Meridiem {
    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

/// Draft for the schedule-meeting form.
///
/// Time is entered on a 12-hour clock (hour, minute, AM/PM selects) and
/// combined with the date for the strictly-in-the-future check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingDraft {
    /// Meeting title
    pub title: String,
    /// Meeting date (`yyyy-mm-dd`)
    pub date: String,
    /// Hour on the 12-hour clock (`1`..`12`)
    pub hour: String,
    /// Minute (`00`..`59`)
    pub minute: String,
    /// Clock half
    pub meridiem: Meridiem,
    /// Duration select, in minutes
    pub duration: String,
    /// Platform select
    pub platform: String,
    /// Short description
    pub description: String,
    /// Join URL
    pub meeting_url: String,
}

impl Default for MeetingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            hour: "12".to_string(),
            minute: "00".to_string(),
            meridiem: Meridiem::Am,
            duration: "30".to_string(),
            platform: "Zoom".to_string(),
            description: String::new(),
            meeting_url: String::new(),
        }
    }
}

impl MeetingDraft {
    /// Discards all input, restoring the select defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The combined date and time, when both parse.
    ///
    /// Converts the 12-hour form input to a 24-hour clock: 12 AM is
    /// midnight, 12 PM is noon.
    #[must_use]
    pub fn meeting_datetime(&self) -> Option<NaiveDateTime> {
        let date = form::parse_date(&self.date)?;
        let hour_12: u32 = self.hour.trim().parse().ok()?;
        if !(1..=12).contains(&hour_12) {
            return None;
        }
        let minute: u32 = self.minute.trim().parse().ok()?;
        let hour = match (self.meridiem, hour_12) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        };
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        Some(date.and_time(time))
    }

    /// Time as entered, for the invite body ("9:30 AM").
    #[must_use]
    pub fn display_time(&self) -> String {
        format!("{}:{} {}", self.hour, self.minute, self.meridiem.label())
    }

    /// Runs the rule set in fixed order, stopping at the first failure.
    pub fn validate(&self, selected_count: usize, now: DateTime<Utc>) -> CoreResult<()> {
        form::require_selection(
            "attendees",
            selected_count,
            "Please select at least one contact to invite",
        )?;
        form::require("meetingTitle", "Meeting title", &self.title)?;
        form::require("meetingDate", "Meeting date", &self.date)?;
        form::require("hour", "Meeting time", &self.hour)?;
        form::require("minute", "Meeting time", &self.minute)?;
        form::require("duration", "Duration", &self.duration)?;
        form::require("platform", "Platform", &self.platform)?;
        form::require("description", "Description", &self.description)?;
        form::require("meetingUrl", "Meeting URL", &self.meeting_url)?;
        form::http_url("meetingUrl", "meeting URL", &self.meeting_url)?;

        let Some(datetime) = self.meeting_datetime() else {
            return Err(CoreError::validation(
                "meetingTime",
                "Invalid meeting date or time",
            ));
        };
        form::future_datetime(
            "meetingTime",
            "Meeting date and time must be in the future",
            datetime,
            now,
        )
    }

    /// Subject line for the invite email.
    #[must_use]
    pub fn invite_subject(&self) -> String {
        format!("Meeting Invite: {}", self.title.trim())
    }

    /// Plain-text invite body addressed to the selected contacts.
    #[must_use]
    pub fn invite_body(&self, recipients: &[UserSummary], sender: &User) -> String {
        let names: Vec<&str> = recipients.iter().map(|r| r.name.as_str()).collect();
        format!(
            "Dear {},\n\n\
             You are invited to a meeting scheduled as follows:\n\n\
             Title: {}\n\
             Date: {}\n\
             Time: {}\n\
             Duration: {} minutes\n\
             Platform: {}\n\
             Description: {}\n\
             Join using this link: {}\n\n\
             Best regards,\n\
             {} ({})",
            names.join(", "),
            self.title.trim(),
            self.date.trim(),
            self.display_time(),
            self.duration,
            self.platform,
            self.description.trim(),
            self.meeting_url.trim(),
            sender.name,
            sender.role,
        )
    }
}
