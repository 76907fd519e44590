//! Outreach email dispatch (Connect page).

use std::sync::Arc;

use campus_connect_backend::UserSummary;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::OutreachDraft;

/// Validates and dispatches a reach-out email to a selected contact.
pub struct ConnectService {
    ctx: Arc<ServiceContext>,
}

impl ConnectService {
    /// Creates a connect service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Sends the outreach email. The draft is validated in full first;
    /// the dispatch itself is fire-and-forget on the backend side.
    pub async fn send(&self, draft: &OutreachDraft, contact: &UserSummary) -> CoreResult<()> {
        let user = self.ctx.session().require().await?;
        draft.validate()?;

        let request = draft.to_request(contact, &user);
        log::info!("Sending outreach email to {}", request.to_email);
        self.ctx.backend().send_email(&request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{contact, create_test_context, sign_in, student_user};

    fn filled_draft() -> OutreachDraft {
        OutreachDraft {
            recipient_name: "Grace Hopper".into(),
            sender_email: "ada@example.org".into(),
            subject: "Question about week 3".into(),
            description: "Could we go over recursion again?".into(),
        }
    }

    #[tokio::test]
    async fn send_validates_before_network() {
        let (ctx, backend) = create_test_context();
        sign_in(&ctx, student_user()).await;
        let svc = ConnectService::new(ctx);

        let result = svc.send(&OutreachDraft::default(), &contact("t1", "Grace")).await;
        assert!(matches!(result, Err(CoreError::Validation { .. })));
        assert!(backend.sent_emails().await.is_empty());
    }

    #[tokio::test]
    async fn send_addresses_the_selected_contact() {
        let (ctx, backend) = create_test_context();
        sign_in(&ctx, student_user()).await;
        let svc = ConnectService::new(ctx);

        svc.send(&filled_draft(), &contact("t1", "Grace Hopper"))
            .await
            .unwrap();

        let sent = backend.sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to_email, "t1@example.org");
        assert_eq!(sent[0].sender_role, "student");
        assert_eq!(sent[0].recipient_email, "ada@example.org");
    }
}
