//! Root application component with context providers and widget lifecycle.

use std::future::Future;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::clock::SystemClock;
use crate::components::chat_window::ChatWindow;
use crate::config::WidgetConfig;
use crate::controller::ChatController;
use crate::net::backend::HttpBackend;
use crate::state::WidgetState;

/// The controller as wired in the browser.
pub type WidgetController = ChatController<RwSignal<WidgetState>, HttpBackend, SystemClock>;

/// Copyable context handle to the widget's single controller instance.
#[derive(Clone, Copy)]
pub struct ControllerHandle(StoredValue<WidgetController, LocalStorage>);

impl ControllerHandle {
    /// The controller, or `None` once the widget has been disposed.
    pub fn get(&self) -> Option<WidgetController> {
        self.0.try_get_value()
    }

    /// Run an async controller operation on the UI thread.
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(WidgetController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        if let Some(controller) = self.get() {
            leptos::task::spawn_local(op(controller));
        }
    }
}

/// Root application component.
///
/// Owns the widget: creates the state signal and controller, provides them
/// as context, and in the browser starts the health poll and connectivity
/// listeners, all torn down in `on_cleanup`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = WidgetConfig::from_document();
    let state = RwSignal::new(WidgetState::default());
    let controller = ChatController::new(state, HttpBackend::new(&config), SystemClock, config.clone());
    let handle = ControllerHandle(StoredValue::new_local(controller));

    provide_context(state);
    provide_context(config.clone());
    provide_context(handle);

    #[cfg(feature = "csr")]
    {
        use crate::util::browser::{ConnectivityAction, focus_element, watch_connectivity};
        use crate::util::periodic::PeriodicTask;

        handle.spawn(|c| async move {
            c.poll_health().await;
        });

        let poller = PeriodicTask::start(config.health_interval, move || {
            let controller = handle.get();
            async move {
                if let Some(c) = controller {
                    c.poll_health().await;
                }
            }
        });

        let listeners = watch_connectivity(move |action| match action {
            ConnectivityAction::Recheck => handle.spawn(|c| async move {
                c.poll_health().await;
            }),
            ConnectivityAction::Offline => {
                if let Some(c) = handle.get() {
                    c.went_offline();
                }
            }
        });

        Effect::new(move || focus_element(crate::components::input_area::INPUT_ID));

        on_cleanup(move || {
            poller.cancel();
            listeners.remove();
        });
    }

    view! {
        <Title text=config.text.title.clone()/>
        <ChatWindow/>
    }
}
