//! Meeting invite dispatch.

use std::sync::Arc;

use campus_connect_backend::{EmailOutcome, EmailRequest, UserSummary};
use chrono::{DateTime, Utc};

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::MeetingDraft;

/// Composes and dispatches meeting invites.
pub struct ScheduleService {
    ctx: Arc<ServiceContext>,
}

impl ScheduleService {
    /// Creates a schedule service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Validates the draft and sends one invite email per selected
    /// contact.
    ///
    /// Dispatches run concurrently and the outcome is collected per
    /// recipient; a failed invite is reported, not escalated, so one bad
    /// address never blocks the rest of the meeting.
    pub async fn send_invites(
        &self,
        draft: &MeetingDraft,
        selected: &[UserSummary],
        now: DateTime<Utc>,
    ) -> CoreResult<Vec<EmailOutcome>> {
        let user = self.ctx.session().require().await?;
        draft.validate(selected.len(), now)?;

        let subject = draft.invite_subject();
        let body = draft.invite_body(selected, &user);

        log::info!(
            "Sending invite \"{}\" to {} contacts",
            draft.title.trim(),
            selected.len()
        );

        let dispatches = selected.iter().map(|contact| {
            let request = EmailRequest {
                to_email: contact.email.clone(),
                subject: subject.clone(),
                message: body.clone(),
                sender_name: user.name.clone(),
                sender_role: user.role.to_string(),
                recipient_email: user.email.clone(),
                recipient_name: contact.name.clone(),
                kind: None,
                course_details: None,
            };
            async move {
                let result = self.ctx.backend().send_email(&request).await;
                match result {
                    Ok(()) => EmailOutcome {
                        email: request.to_email,
                        success: true,
                        error: None,
                    },
                    Err(e) => {
                        log::warn!("Invite to {} failed: {e}", request.to_email);
                        EmailOutcome {
                            email: request.to_email,
                            success: false,
                            error: Some(e.to_string()),
                        }
                    }
                }
            }
        });

        Ok(futures::future::join_all(dispatches).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{contact, create_test_context, sign_in, teacher_user};
    use chrono::NaiveDateTime;

    fn now() -> DateTime<Utc> {
        NaiveDateTime::parse_from_str("2026-08-06 12:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    fn filled_draft() -> MeetingDraft {
        MeetingDraft {
            title: "Office hours".into(),
            date: "2026-08-07".into(),
            hour: "9".into(),
            minute: "30".into(),
            description: "Weekly sync".into(),
            meeting_url: "https://meet.example.org/abc".into(),
            ..MeetingDraft::default()
        }
    }

    #[tokio::test]
    async fn invites_require_selection() {
        let (ctx, backend) = create_test_context();
        sign_in(&ctx, teacher_user()).await;
        let svc = ScheduleService::new(ctx);

        let err = svc.send_invites(&filled_draft(), &[], now()).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation { .. }));
        assert!(backend.sent_emails().await.is_empty());
    }

    #[tokio::test]
    async fn one_email_per_contact() {
        let (ctx, backend) = create_test_context();
        sign_in(&ctx, teacher_user()).await;
        let svc = ScheduleService::new(ctx);

        let selected = [contact("s1", "Ada"), contact("s2", "Grace")];
        let outcomes = svc
            .send_invites(&filled_draft(), &selected, now())
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.success));

        let sent = backend.sent_emails().await;
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|e| e.subject == "Meeting Invite: Office hours"));
        assert!(sent[0].message.contains("Dear Ada, Grace,"));
    }

    #[tokio::test]
    async fn partial_failure_reported_not_escalated() {
        let (ctx, backend) = create_test_context();
        sign_in(&ctx, teacher_user()).await;
        backend.fail_email_to("s2@example.org").await;
        let svc = ScheduleService::new(ctx);

        let selected = [contact("s1", "Ada"), contact("s2", "Grace")];
        let outcomes = svc
            .send_invites(&filled_draft(), &selected, now())
            .await
            .unwrap();

        assert!(outcomes[0].success);
        assert!(!outcomes[1].success);
        assert!(outcomes[1].error.is_some());
    }
}
