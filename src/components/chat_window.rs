//! Widget frame: header with status and actions, transcript, input, toast.

use leptos::prelude::*;

use crate::app::ControllerHandle;
use crate::components::error_toast::ErrorToast;
use crate::components::input_area::InputArea;
use crate::components::message_list::MessageList;
use crate::components::status_indicator::StatusIndicator;
use crate::config::WidgetConfig;
use crate::state::WidgetState;

#[component]
pub fn ChatWindow() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let config = expect_context::<WidgetConfig>();
    let controller = expect_context::<ControllerHandle>();

    let loading = move || state.with(|s| s.ui.loading);

    let on_clear = move |_| {
        if let Some(c) = controller.get() {
            c.reset();
        }
    };

    let on_reload = move |_| {
        controller.spawn(|c| async move {
            c.reload_backend().await;
        });
    };

    view! {
        <div class="chat-container">
            <div class="chat-header">
                <h5 class="chat-title">
                    <i class="fas fa-robot me-2"></i>
                    {config.text.title}
                </h5>
                <StatusIndicator/>
                <div class="chat-actions">
                    <button
                        class="btn btn-sm btn-outline-secondary"
                        title="Reload"
                        disabled=loading
                        on:click=on_reload
                    >
                        <i class="fas fa-rotate"></i>
                    </button>
                    <button class="btn btn-sm btn-outline-secondary" title="Clear" on:click=on_clear>
                        <i class="fas fa-trash"></i>
                    </button>
                </div>
            </div>
            <MessageList/>
            <InputArea/>
            <ErrorToast/>
        </div>
    }
}
