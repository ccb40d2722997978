//! Connection status dot and label.

#[cfg(test)]
#[path = "status_indicator_test.rs"]
mod status_indicator_test;

use leptos::prelude::*;

use crate::clock::format_time;
use crate::config::WidgetConfig;
use crate::state::WidgetState;

/// Class for the status dot.
pub fn connection_dot_class(connected: bool) -> &'static str {
    if connected {
        "status-dot status-dot--connected"
    } else {
        "status-dot status-dot--disconnected"
    }
}

/// Tooltip for the status dot, absent until the first health check lands.
pub fn last_checked_title(prefix: &str, last_checked: Option<f64>) -> Option<String> {
    last_checked.map(|ts| format!("{prefix} {}", format_time(ts)))
}

#[component]
pub fn StatusIndicator() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let config = expect_context::<WidgetConfig>();

    let connected = move || state.with(|s| s.connection.connected);
    let title_prefix = config.text.last_checked;
    let title = move || state.with(|s| last_checked_title(&title_prefix, s.connection.last_checked));
    let connected_label = config.text.connected;
    let disconnected_label = config.text.disconnected;
    let label = move || {
        if connected() {
            connected_label.clone()
        } else {
            disconnected_label.clone()
        }
    };

    view! {
        <span class="connection-indicator">
            <span
                id="connectionStatus"
                class=move || connection_dot_class(connected())
                title=title
            ></span>
            <span id="statusText" class="status-text">{label}</span>
        </span>
    }
}
