//! Window connectivity and visibility listeners.
//!
//! Maps `online`, `offline`, and `visibilitychange` to widget actions. The
//! mapping is pure; only [`watch_connectivity`] touches the browser.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// What the widget should do in response to a window event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectivityAction {
    /// Run an ad-hoc health check.
    Recheck,
    /// Mark disconnected and tell the user.
    Offline,
}

/// Decide the action for a window event. `hidden` is `document.hidden`.
pub fn connectivity_action(event: &str, hidden: bool) -> Option<ConnectivityAction> {
    match event {
        "online" => Some(ConnectivityAction::Recheck),
        "offline" => Some(ConnectivityAction::Offline),
        "visibilitychange" if !hidden => Some(ConnectivityAction::Recheck),
        _ => None,
    }
}

pub const CONNECTIVITY_EVENTS: [&str; 3] = ["online", "offline", "visibilitychange"];

/// Registered window listeners; removed on [`ConnectivityListeners::remove`].
#[derive(Default)]
pub struct ConnectivityListeners {
    #[cfg(feature = "csr")]
    handles: Vec<leptos::prelude::WindowListenerHandle>,
}

impl ConnectivityListeners {
    pub fn remove(self) {
        #[cfg(feature = "csr")]
        for handle in self.handles {
            handle.remove();
        }
    }
}

/// Register listeners that forward each relevant event to `on_action`.
pub fn watch_connectivity(on_action: impl Fn(ConnectivityAction) + Clone + 'static) -> ConnectivityListeners {
    #[cfg(feature = "csr")]
    {
        let handles = CONNECTIVITY_EVENTS
            .iter()
            .map(|name| {
                let on_action = on_action.clone();
                leptos::prelude::window_event_listener_untyped(name, move |ev: web_sys::Event| {
                    let hidden = leptos::prelude::document().hidden();
                    if let Some(action) = connectivity_action(&ev.type_(), hidden) {
                        on_action(action);
                    }
                })
            })
            .collect();
        ConnectivityListeners { handles }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_action;
        ConnectivityListeners::default()
    }
}

/// Focus the element with `id` if it exists.
pub fn focus_element(id: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        if let Some(el) = leptos::prelude::document()
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = el.focus();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}
