//! Connect page: reach out to a contact by email.

use std::sync::Arc;

use campus_connect_core::services::{ConnectService, DirectoryService};
use campus_connect_core::types::OutreachDraft;
use campus_connect_core::{
    filter_items, ListLoader, Popup, ReselectPolicy, ServiceContext, Session, SingleSelect,
    UserSummary,
};

use super::SUCCESS_DISPLAY;

/// Contact directory with a single-select outreach form.
///
/// Selecting a contact opens the form seeded with the contact's name;
/// re-selecting the same contact keeps the form as is. A successful send
/// shows its confirmation for the display delay, then everything resets.
pub struct ConnectPage {
    directory: DirectoryService,
    service: ConnectService,
    session: Arc<Session>,
    /// Loaded contacts
    pub loader: ListLoader<UserSummary>,
    /// Live search query
    pub query: String,
    selection: SingleSelect<String>,
    popup: Popup,
    draft: OutreachDraft,
    form_error: Option<String>,
}

impl ConnectPage {
    /// Creates the page against the shared service context.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            directory: DirectoryService::new(Arc::clone(&ctx)),
            service: ConnectService::new(Arc::clone(&ctx)),
            session: Arc::clone(ctx.session()),
            loader: ListLoader::new(),
            query: String::new(),
            selection: SingleSelect::new(ReselectPolicy::Keep),
            popup: Popup::new(),
            draft: OutreachDraft::default(),
            form_error: None,
        }
    }

    /// Fetches contacts for the acting user's role. One call per
    /// trigger; a 404 renders as an empty, still-operable list.
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

    /// Selects a contact and seeds the outreach form. Re-selecting the
    /// current contact is a no-op; switching contacts discards the draft
    /// and any stale feedback.
    pub fn select_contact(&mut self, id: &str) {
        if !self.selection.select(id.to_string()) {
            return;
        }
        let seeded = self
            .loader
            .items()
            .iter()
            .find(|c| c.id == id)
            .map(OutreachDraft::for_contact)
            .unwrap_or_default();
        self.draft = seeded;
        self.form_error = None;
        self.popup.open();
    }

    /// The selected contact, if still present in the directory.
    #[must_use]
    pub fn selected_contact(&self) -> Option<&UserSummary> {
        let id = self.selection.current()?;
        self.loader.items().iter().find(|c| c.id == *id)
    }

    /// The outreach form state.
    #[must_use]
    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    /// The current draft.
    #[must_use]
    pub fn draft(&self) -> &OutreachDraft {
        &self.draft
    }

    /// Mutable draft access; editing clears the stale error.
    pub fn draft_mut(&mut self) -> &mut OutreachDraft {
        self.form_error = None;
        &mut self.draft
    }

    /// Error banner for the open form.
    #[must_use]
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Sends the outreach email. On success the confirmation shows and
    /// [`auto_dismiss`](Self::auto_dismiss) should run; on failure the
    /// form stays open for correction.
    pub async fn submit(&mut self) {
        let Some(contact) = self.selected_contact().cloned() else {
            self.form_error = Some("Please select a contact first".to_string());
            return;
        };
        match self.service.send(&self.draft, &contact).await {
            Ok(()) => {
                self.form_error = None;
                self.popup.succeed();
            }
            Err(e) => {
                self.form_error = Some(e.submission_message());
            }
        }
    }

    /// Holds the success confirmation for the display delay, then resets
    /// the form and clears the selection.
    pub async fn auto_dismiss(&mut self) {
        if !self.popup.is_success() {
            return;
        }
        tokio::time::sleep(SUCCESS_DISPLAY).await;
        self.selection.clear();
        self.draft.reset();
        self.form_error = None;
        self.popup.close();
    }

    /// Cancel discards the draft, clears errors, and closes the form.
    pub fn cancel(&mut self) {
        self.selection.clear();
        self.draft.reset();
        self.form_error = None;
        self.popup.cancel();
    }
}
