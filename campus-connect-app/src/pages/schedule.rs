//! Schedule page: meeting invites.

use std::sync::Arc;

use campus_connect_core::services::{DirectoryService, ScheduleService};
use campus_connect_core::types::MeetingDraft;
use campus_connect_core::{
    filter_items, EmailOutcome, ListLoader, MultiSelect, Popup, ServiceContext, Session,
    UserSummary,
};
use chrono::{DateTime, Utc};

use super::SUCCESS_DISPLAY;

/// Contact directory, multi-select, and the schedule-meeting form.
pub struct SchedulePage {
    directory: DirectoryService,
    service: ScheduleService,
    session: Arc<Session>,
    /// Loaded contacts
    pub loader: ListLoader<UserSummary>,
    /// Live search query
    pub query: String,
    selection: MultiSelect<String>,
    popup: Popup,
    draft: MeetingDraft,
    form_error: Option<String>,
    invite_status: Vec<EmailOutcome>,
}

impl SchedulePage {
    /// Creates the page against the shared service context.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            directory: DirectoryService::new(Arc::clone(&ctx)),
            service: ScheduleService::new(Arc::clone(&ctx)),
            session: Arc::clone(ctx.session()),
            loader: ListLoader::new(),
            query: String::new(),
            selection: MultiSelect::new(),
            popup: Popup::new(),
            draft: MeetingDraft::default(),
            form_error: None,
            invite_status: Vec::new(),
        }
    }

    /// Fetches contacts for the acting user's role.
    pub async fn load(&mut self) {
        let Ok(user) = self.session.require().await else {
            return;
        };
        self.loader.begin();
        let result = self.directory.contacts_for(user.role).await;
        self.loader.finish(result);
        let items = self.loader.items();
        self.selection.retain(|id| items.iter().any(|c| c.id == *id));
    }

    /// Contacts filtered by the live query.
    #[must_use]
    pub fn visible(&self) -> Vec<&UserSummary> {
        filter_items(self.loader.items(), &self.query)
    }

    /// Toggles a contact in the invite set. Any selection change clears
    /// stale form feedback and the success flag.
    pub fn toggle_contact(&mut self, id: &str) {
        self.selection.toggle(id.to_string());
        self.form_error = None;
        self.invite_status.clear();
        if self.popup.is_success() {
            self.popup.close();
        }
    }

    /// Whether the contact is in the invite set.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(&id.to_string())
    }

    /// The selected contacts, in selection order.
    #[must_use]
    pub fn selected_contacts(&self) -> Vec<&UserSummary> {
        self.selection
            .selected()
            .iter()
            .filter_map(|id| self.loader.items().iter().find(|c| c.id == *id))
            .collect()
    }

    /// Opens the schedule-meeting popup.
    pub fn open_form(&mut self) {
        self.popup.open();
    }

    /// The form popup state.
    #[must_use]
    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    /// The current draft.
    #[must_use]
    pub fn draft(&self) -> &MeetingDraft {
        &self.draft
    }

    /// Mutable draft access; editing clears the stale error.
    pub fn draft_mut(&mut self) -> &mut MeetingDraft {
        self.form_error = None;
        &mut self.draft
    }

    /// Error banner for the open popup.
    #[must_use]
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Per-recipient invite outcomes from the last dispatch.
    #[must_use]
    pub fn invite_status(&self) -> &[EmailOutcome] {
        &self.invite_status
    }

    /// Sends the invites. One email per selected contact; partial
    /// failures are reported per recipient alongside the confirmation,
    /// never escalated.
    pub async fn submit(&mut self, now: DateTime<Utc>) {
        let selected: Vec<UserSummary> =
            self.selected_contacts().into_iter().cloned().collect();
        match self.service.send_invites(&self.draft, &selected, now).await {
            Ok(outcomes) => {
                self.invite_status = outcomes;
                self.form_error = None;
                self.popup.succeed();
            }
            Err(e) => {
                self.form_error = Some(e.submission_message());
            }
        }
    }

    /// Holds the success confirmation for the display delay, then resets
    /// the form, the selection, and the outcome list.
    pub async fn auto_dismiss(&mut self) {
        if !self.popup.is_success() {
            return;
        }
        tokio::time::sleep(SUCCESS_DISPLAY).await;
        self.selection.clear();
        self.draft.reset();
        self.invite_status.clear();
        self.form_error = None;
        self.popup.close();
    }

    /// Cancel discards the draft, the selection, and all feedback.
    pub fn cancel(&mut self) {
        self.selection.clear();
        self.draft.reset();
        self.form_error = None;
        self.invite_status.clear();
        self.popup.cancel();
    }
}
