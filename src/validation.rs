//! Input validation for the message box.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Result of validating the current draft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputValidation {
    /// Trimmed length in characters.
    pub len: usize,
    /// Trimmed length is in `(0, max_chars]`.
    pub valid: bool,
    /// Trimmed length exceeds the warning threshold.
    pub near_limit: bool,
}

impl InputValidation {
    /// Whether the send control should be enabled.
    #[must_use]
    pub fn can_send(&self, loading: bool) -> bool {
        self.valid && !loading
    }
}

/// Strip surrounding whitespace, including the byte-order mark U+FEFF that
/// `str::trim` keeps but browsers' `String.prototype.trim` removes.
pub fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Validate a draft against the length limits.
///
/// Length counts Unicode scalar values after [`trim_input`].
pub fn validate(text: &str, max_chars: usize, warn_chars: usize) -> InputValidation {
    let len = trim_input(text).chars().count();
    InputValidation {
        len,
        valid: len > 0 && len <= max_chars,
        near_limit: len > warn_chars,
    }
}

/// Number of textarea rows needed to show `text`, between 1 and `max_rows`.
pub fn input_rows(text: &str, max_rows: usize) -> usize {
    let lines = text.split('\n').count();
    lines.clamp(1, max_rows.max(1))
}
