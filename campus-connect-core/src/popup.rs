//! Popup/modal lifecycle.

/// Lifecycle phase of a popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupPhase {
    /// No popup visible.
    #[default]
    Closed,
    /// Popup visible, collecting input.
    Open,
    /// Submission succeeded; the confirmation message is showing and the
    /// popup will close after the display delay.
    Success,
}

/// Finite-state toggle gating one focused task at a time.
///
/// `Closed -> Open -> (Closed via success | Closed via cancel)`. Cancel
/// always discards draft changes and clears error state at the page
/// layer; the success close is delayed so the user can read the
/// confirmation message.
#[derive(Debug, Default)]
pub struct Popup {
    phase: PopupPhase,
}

impl Popup {
    /// Creates a closed popup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the popup.
    pub fn open(&mut self) {
        self.phase = PopupPhase::Open;
    }

    /// Closes immediately, as a cancel does.
    pub fn cancel(&mut self) {
        self.phase = PopupPhase::Closed;
    }

    /// Marks the submission successful; the popup stays visible showing
    /// the confirmation until [`close`](Self::close) runs.
    pub fn succeed(&mut self) {
        self.phase = PopupPhase::Success;
    }

    /// Final close after the success display delay.
    pub fn close(&mut self) {
        self.phase = PopupPhase::Closed;
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    /// Whether the popup is visible (open or showing its success state).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != PopupPhase::Closed
    }

    /// Whether the success confirmation is showing.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.phase == PopupPhase::Success
    }
}
