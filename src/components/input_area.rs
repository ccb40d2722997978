//! Message input with send button and character counter.

#[cfg(test)]
#[path = "input_area_test.rs"]
mod input_area_test;

use leptos::prelude::*;

use crate::app::ControllerHandle;
use crate::config::WidgetConfig;
use crate::state::WidgetState;
use crate::validation::input_rows;

pub const INPUT_ID: &str = "messageInput";

/// Whether a keydown should send the draft. Enter confirming an IME
/// composition does not count.
pub fn sends_on_keydown(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

/// Textarea bound to the draft. Enter sends, Shift+Enter inserts a newline.
#[component]
pub fn InputArea() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let config = expect_context::<WidgetConfig>();
    let controller = expect_context::<ControllerHandle>();

    let max_chars = config.max_chars;
    let max_rows = config.max_input_rows;

    // The controller reads state untracked; `track` subscribes these closures.
    let draft = move || state.with(|s| s.ui.draft.clone());
    let validation = move || {
        state.track();
        controller.get().map(|c| c.draft_validation()).unwrap_or_default()
    };
    let loading = move || state.with(|s| s.ui.loading);
    let can_send = move || {
        state.track();
        controller.get().is_some_and(|c| c.can_send())
    };

    let do_send = move || {
        controller.spawn(|c| async move {
            c.submit_draft().await;
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if sends_on_keydown(&ev.key(), ev.shift_key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-input">
            <div class="input-group">
                <textarea
                    id=INPUT_ID
                    class="form-control message-input"
                    class:text-warning=move || validation().near_limit
                    placeholder=config.text.input_placeholder
                    rows=move || input_rows(&draft(), max_rows).to_string()
                    prop:value=draft
                    on:input=move |ev| {
                        if let Some(c) = controller.get() {
                            c.set_draft(event_target_value(&ev));
                        }
                    }
                    on:keydown=on_keydown
                ></textarea>
                <button
                    id="sendButton"
                    class="btn btn-primary send-button"
                    class:loading=loading
                    disabled=move || !can_send()
                    on:click=move |_| do_send()
                >
                    {move || {
                        if loading() {
                            view! { <i class="fas fa-spinner fa-spin"></i> }.into_any()
                        } else {
                            view! { <i class="fas fa-paper-plane"></i> }.into_any()
                        }
                    }}
                </button>
            </div>
            <small class="char-counter" class:text-warning=move || validation().near_limit>
                {move || format!("{}/{max_chars}", validation().len)}
            </small>
        </div>
    }
}
