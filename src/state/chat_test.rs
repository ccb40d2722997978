use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(state.shows_welcome());
}

// =============================================================
// ChatMessage constructors
// =============================================================

#[test]
fn user_message_is_not_error() {
    let msg = ChatMessage::user("Hello", 1.0);
    assert_eq!(msg.sender, Sender::User);
    assert_eq!(msg.content, "Hello");
    assert!(!msg.is_error);
}

#[test]
fn bot_error_message_is_flagged() {
    let msg = ChatMessage::bot_error("oops", 2.0);
    assert_eq!(msg.sender, Sender::Bot);
    assert!(msg.is_error);
}

#[test]
fn messages_get_distinct_ids() {
    let a = ChatMessage::bot("a", 0.0);
    let b = ChatMessage::bot("a", 0.0);
    assert_ne!(a.id, b.id);
}

#[test]
fn sender_css_names() {
    assert_eq!(Sender::User.css_name(), "user");
    assert_eq!(Sender::Bot.css_name(), "bot");
}

// =============================================================
// push / clear
// =============================================================

#[test]
fn push_preserves_order_and_hides_welcome() {
    let mut state = ChatState::default();
    state.push(ChatMessage::user("one", 10.0));
    state.push(ChatMessage::bot("two", 20.0));
    let contents: Vec<_> = state.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["one", "two"]);
    assert!(!state.shows_welcome());
}

#[test]
fn push_clamps_timestamp_that_goes_backwards() {
    let mut state = ChatState::default();
    state.push(ChatMessage::user("one", 100.0));
    state.push(ChatMessage::bot("two", 50.0));
    assert_eq!(state.messages[1].timestamp, 100.0);
}

#[test]
fn clear_empties_transcript() {
    let mut state = ChatState::default();
    state.push(ChatMessage::user("one", 1.0));
    state.push(ChatMessage::bot("two", 2.0));
    state.clear();
    assert!(state.messages.is_empty());
    assert!(state.shows_welcome());
}
