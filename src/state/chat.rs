#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS modifier used by the hosting page stylesheet.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single transcript entry. Never mutated after it is appended.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: f64,
    pub is_error: bool,
}

impl ChatMessage {
    fn new(content: impl Into<String>, sender: Sender, timestamp: f64, is_error: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp,
            is_error,
        }
    }

    pub fn user(content: impl Into<String>, timestamp: f64) -> Self {
        Self::new(content, Sender::User, timestamp, false)
    }

    pub fn bot(content: impl Into<String>, timestamp: f64) -> Self {
        Self::new(content, Sender::Bot, timestamp, false)
    }

    pub fn bot_error(content: impl Into<String>, timestamp: f64) -> Self {
        Self::new(content, Sender::Bot, timestamp, true)
    }
}

/// The conversation transcript.
///
/// Append-only between resets; order is send/receive order.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    /// Append a message, clamping its timestamp so the transcript never
    /// goes backwards in time even if the clock does.
    pub fn push(&mut self, mut msg: ChatMessage) {
        if let Some(last) = self.messages.last() {
            if msg.timestamp < last.timestamp {
                msg.timestamp = last.timestamp;
            }
        }
        self.messages.push(msg);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// The welcome placeholder is visible only while nothing was said.
    #[must_use]
    pub fn shows_welcome(&self) -> bool {
        self.messages.is_empty()
    }
}
