//! Local UI chrome state (draft input, loading, typing, toast).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the transcript so the
//! rendering adapter can evolve independently of conversation data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// A transient notification. `seq` identifies it for dismissal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub draft: String,
    /// True exactly while one outbound chat or reload request is in flight.
    pub loading: bool,
    pub typing: bool,
    pub toast: Option<Toast>,
    /// Number of toasts ever raised.
    pub toast_seq: u64,
}

impl UiState {
    /// Show a toast, replacing any visible one. Returns its sequence number.
    pub fn raise_toast(&mut self, message: impl Into<String>) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast { message: message.into(), seq: self.toast_seq });
        self.toast_seq
    }

    /// Hide the toast only if it is still the one identified by `seq`.
    pub fn dismiss_toast(&mut self, seq: u64) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.seq == seq) {
            self.toast = None;
            return true;
        }
        false
    }
}
