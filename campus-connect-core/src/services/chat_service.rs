//! Chat transcript and send operations.

use std::sync::Arc;

use campus_connect_backend::{ChatMessage, SendMessageRequest};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;

/// Conversation transcript fetches and message sends.
///
/// Freshness comes from the page's polling channel re-invoking
/// [`transcript`](Self::transcript); there is no push transport.
pub struct ChatService {
    ctx: Arc<ServiceContext>,
}

impl ChatService {
    /// Creates a chat service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Transcript between the acting user and `other_id`, oldest first.
    pub async fn transcript(&self, other_id: &str) -> CoreResult<Vec<ChatMessage>> {
        let user = self.ctx.session().require().await?;
        Ok(self.ctx.backend().list_messages(&user.id, other_id).await?)
    }

    /// Sends a message to `other_id`; returns the stored message for
    /// appending to the transcript.
    pub async fn send(&self, other_id: &str, content: &str) -> CoreResult<ChatMessage> {
        let content = content.trim();
        if content.is_empty() {
            return Err(CoreError::validation("content", "Message cannot be empty"));
        }
        let user = self.ctx.session().require().await?;
        let request = SendMessageRequest {
            sender_id: user.id,
            receiver_id: other_id.to_string(),
            content: content.to_string(),
        };
        Ok(self.ctx.backend().send_message(&request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, sign_in, student_user};

    #[tokio::test]
    async fn send_rejects_blank_content() {
        let (ctx, backend) = create_test_context();
        sign_in(&ctx, student_user()).await;
        let svc = ChatService::new(ctx);

        let result = svc.send("t1", "   ").await;
        assert!(result.is_err());
        assert_eq!(backend.message_send_calls().await, 0);
    }

    #[tokio::test]
    async fn send_appends_to_transcript() {
        let (ctx, _backend) = create_test_context();
        sign_in(&ctx, student_user()).await;
        let svc = ChatService::new(ctx);

        let sent = svc.send("t1", "Hello there").await.unwrap();
        assert_eq!(sent.content, "Hello there");
        assert_eq!(sent.sender_id, "s1");
        assert_eq!(sent.receiver_id, "t1");

        let transcript = svc.transcript("t1").await.unwrap();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0], sent);
    }

    #[tokio::test]
    async fn transcript_requires_login() {
        let (ctx, _backend) = create_test_context();
        let svc = ChatService::new(ctx);
        assert!(svc.transcript("t1").await.is_err());
    }
}
