//! Scrolling transcript with the welcome placeholder and typing indicator.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::clock::format_time;
use crate::config::WidgetConfig;
use crate::state::WidgetState;
use crate::state::chat::{ChatMessage, Sender};

/// CSS classes for one message bubble.
pub fn message_class(sender: Sender, is_error: bool) -> String {
    let error = if is_error { " error-message" } else { "" };
    format!("message {}-message{error}", sender.css_name())
}

#[component]
pub fn MessageList() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let config = expect_context::<WidgetConfig>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message (or the typing indicator) in view.
    Effect::new(move || {
        let _ = state.with(|s| (s.chat.messages.len(), s.ui.typing));

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let heading = config.text.welcome_heading;
    let body = config.text.welcome_body;
    let typing_label = config.text.typing;
    let typing = move || state.with(|s| s.ui.typing);

    view! {
        <div id="chatMessages" class="chat-messages" node_ref=messages_ref>
            {move || {
                let messages = state.with(|s| s.chat.messages.clone());
                if messages.is_empty() {
                    let heading = heading.clone();
                    let body = body.clone();
                    return view! {
                        <div class="welcome-message">
                            <div class="text-center mb-4">
                                <div class="welcome-icon">
                                    <i class="fas fa-robot"></i>
                                </div>
                                <h4 class="text-primary mb-2">{heading}</h4>
                                <p class="text-muted">{body}</p>
                            </div>
                        </div>
                    }
                        .into_any();
                }

                messages
                    .into_iter()
                    .map(|msg| view! { <MessageBubble msg=msg/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
            <div
                id="typingIndicator"
                class="typing-indicator"
                style:display=move || if typing() { "block" } else { "none" }
            >
                <span class="typing-dots">
                    <span></span>
                    <span></span>
                    <span></span>
                </span>
                <span class="visually-hidden">{typing_label}</span>
            </div>
        </div>
    }
}

#[component]
fn MessageBubble(msg: ChatMessage) -> impl IntoView {
    let class = message_class(msg.sender, msg.is_error);
    let time = format_time(msg.timestamp);

    view! {
        <div class=class data-id=msg.id>
            <div class="message-content">
                <div class="message-text">{msg.content}</div>
                <div class="message-time">{time}</div>
            </div>
        </div>
    }
}
