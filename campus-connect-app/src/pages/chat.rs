//! Chat page: teacher picker and polled conversation.

use std::sync::Arc;
use std::time::Duration;

use campus_connect_core::services::{ChatService, DirectoryService};
use campus_connect_core::{
    filter_items, ChatMessage, ListLoader, ReselectPolicy, Role, ServiceContext, Session,
    SingleSelect, UserSummary,
};
use tokio::sync::Mutex;

use crate::polling::PollingChannel;

/// Transcript state shared with the polling task.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    /// Messages, oldest first
    pub messages: Vec<ChatMessage>,
    /// Last fetch/send failure, if any
    pub error: Option<String>,
}

/// Teacher directory with a single-select conversation.
///
/// Selecting a conversation fetches the transcript immediately, then
/// every poll period while that target stays selected. Switching targets
/// or dropping the page cancels the previous channel before any new one
/// starts; re-selecting the current target is a no-op and does not
/// restart polling. A failed poll records an error and the next tick
/// retries; there is no backoff and no pause.
pub struct ChatPage {
    ctx: Arc<ServiceContext>,
    session: Arc<Session>,
    /// Loaded teacher directory
    pub teachers: ListLoader<UserSummary>,
    /// Live search query
    pub query: String,
    /// Message input
    pub draft_message: String,
    selection: SingleSelect<String>,
    conversation: Arc<Mutex<Conversation>>,
    poll_interval: Duration,
    poller: Option<PollingChannel>,
}

impl ChatPage {
    /// Creates the page against the shared service context.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, poll_interval: Duration) -> Self {
        Self {
            session: Arc::clone(ctx.session()),
            ctx,
            teachers: ListLoader::new(),
            query: String::new(),
            draft_message: String::new(),
            selection: SingleSelect::new(ReselectPolicy::Keep),
            conversation: Arc::new(Mutex::new(Conversation::default())),
            poll_interval,
            poller: None,
        }
    }

    /// Fetches the teacher directory. Student side only, as chat pairs a
    /// student with a teacher.
    pub async fn load(&mut self) {
        let Ok(user) = self.session.require().await else {
            return;
        };
        if user.role != Role::Student {
            return;
        }
        self.teachers.begin();
        let result = DirectoryService::new(Arc::clone(&self.ctx)).teachers().await;
        self.teachers.finish(result);
        let items = self.teachers.items();
        self.selection.retain(|id| items.iter().any(|t| t.id == *id));
    }

    /// Teachers filtered by the live query.
    #[must_use]
    pub fn visible(&self) -> Vec<&UserSummary> {
        filter_items(self.teachers.items(), &self.query)
    }

    /// Selects a conversation target and starts polling its transcript.
    ///
    /// The previous channel is dropped before the new one spawns, so no
    /// two intervals ever run concurrently for this page instance.
    pub fn select_teacher(&mut self, id: &str) {
        if !self.selection.select(id.to_string()) {
            return;
        }

        self.poller = None;

        let conversation = Arc::new(Mutex::new(Conversation::default()));
        self.conversation = Arc::clone(&conversation);

        let ctx = Arc::clone(&self.ctx);
        let other = id.to_string();
        self.poller = Some(PollingChannel::spawn(self.poll_interval, move || {
            let ctx = Arc::clone(&ctx);
            let conversation = Arc::clone(&conversation);
            let other = other.clone();
            async move {
                let service = ChatService::new(ctx);
                match service.transcript(&other).await {
                    Ok(messages) => {
                        let mut convo = conversation.lock().await;
                        convo.messages = messages;
                        convo.error = None;
                    }
                    Err(e) => {
                        log::warn!("Transcript poll failed: {e}");
                        conversation.lock().await.error =
                            Some("Failed to fetch messages".to_string());
                    }
                }
            }
        }));
    }

    /// The selected teacher, if still present in the directory.
    #[must_use]
    pub fn selected_teacher(&self) -> Option<&UserSummary> {
        let id = self.selection.current()?;
        self.teachers.items().iter().find(|t| t.id == *id)
    }

    /// Whether a conversation is active (and therefore polling).
    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.poller.is_some()
    }

    /// Snapshot of the conversation state.
    pub async fn conversation(&self) -> Conversation {
        self.conversation.lock().await.clone()
    }

    /// Sends the drafted message to the selected teacher and appends the
    /// stored echo to the transcript. Blank drafts are ignored.
    pub async fn send(&mut self) {
        let Some(other) = self.selection.current().cloned() else {
            return;
        };
        if self.draft_message.trim().is_empty() {
            return;
        }
        let service = ChatService::new(Arc::clone(&self.ctx));
        match service.send(&other, &self.draft_message).await {
            Ok(message) => {
                self.conversation.lock().await.messages.push(message);
                self.draft_message.clear();
            }
            Err(e) => {
                log::warn!("Message send failed: {e}");
                self.conversation.lock().await.error =
                    Some("Failed to send message".to_string());
            }
        }
    }
}
