//! Remote list loading state.

use campus_connect_backend::BackendError;

use crate::error::{CoreError, CoreResult};

/// State of one remotely loaded collection.
///
/// The lifecycle is `begin()` when a load is triggered (identity or role
/// became available, or changed) and `finish(result)` when the single
/// network call resolves. Loading always clears on `finish`, whatever the
/// outcome, so an error can never leave a spinner behind.
///
/// A 404 from the backend means "no matching resources", not a failure:
/// the collection resolves to empty and no error is stored, so the caller
/// renders its "none found" message instead of an error banner.
#[derive(Debug)]
pub struct ListLoader<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for ListLoader<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> ListLoader<T> {
    /// Creates an empty, idle loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a load in flight and clears any previous error.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies the outcome of the load.
    ///
    /// Success replaces the collection wholesale (no incremental merge).
    /// `NotFound` resolves to an empty collection. Any other failure
    /// empties the collection and stores a human-readable message.
    pub fn finish(&mut self, result: CoreResult<Vec<T>>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(CoreError::Backend(BackendError::NotFound { resource })) => {
                log::debug!("List load resolved empty (404): {resource}");
                self.items = Vec::new();
                self.error = None;
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("List load failed: {e}");
                } else {
                    log::error!("List load failed: {e}");
                }
                self.items = Vec::new();
                self.error = Some(e.to_string());
            }
        }
    }

    /// The last-loaded collection.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Load failure message, if the last load failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Appends a freshly created item after a successful submission.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }
}
