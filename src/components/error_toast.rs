//! Transient error notification with manual and timed dismissal.

use leptos::prelude::*;

use crate::app::ControllerHandle;
use crate::config::WidgetConfig;
use crate::state::WidgetState;

#[component]
pub fn ErrorToast() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let config = expect_context::<WidgetConfig>();
    let controller = expect_context::<ControllerHandle>();

    let toast_seq = Memo::new(move |_| state.with(|s| s.ui.toast.as_ref().map(|t| t.seq)));

    // Each toast hides itself after the timeout unless a newer one replaced it.
    #[cfg(feature = "csr")]
    {
        let timeout = config.toast_timeout;
        Effect::new(move || {
            let Some(seq) = toast_seq.get() else {
                return;
            };
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(timeout).await;
                if let Some(c) = controller.get() {
                    c.dismiss_toast(seq);
                }
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    let visible = move || toast_seq.get().is_some();
    let message = move || state.with(|s| s.ui.toast.as_ref().map(|t| t.message.clone()).unwrap_or_default());

    let on_close = move |_| {
        if let (Some(seq), Some(c)) = (toast_seq.get_untracked(), controller.get()) {
            c.dismiss_toast(seq);
        }
    };

    view! {
        <div class="toast-container position-fixed bottom-0 end-0 p-3">
            <div
                id="errorToast"
                class="toast align-items-center text-bg-danger border-0"
                class:show=visible
                role="alert"
                aria-live="assertive"
                aria-atomic="true"
            >
                <div class="d-flex">
                    <div class="toast-body">
                        <i class="fas fa-exclamation-triangle me-2"></i>
                        <span id="errorMessage">{message}</span>
                    </div>
                    <button
                        type="button"
                        class="btn-close btn-close-white me-2 m-auto"
                        aria-label="Close"
                        on:click=on_close
                    ></button>
                </div>
            </div>
        </div>
    }
}
