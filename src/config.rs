//! Widget configuration: endpoints, input limits, timers, and UI strings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosting page may override endpoints and the poll interval through
//! `data-*` attributes on `<body>`. Everything else uses the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_CHAT_ENDPOINT: &str = "/api/chat";
pub const DEFAULT_HEALTH_ENDPOINT: &str = "/health";
pub const DEFAULT_RELOAD_ENDPOINT: &str = "/api/reload_pipeline";
pub const DEFAULT_MAX_CHARS: usize = 500;
pub const DEFAULT_WARN_CHARS: usize = 450;
pub const DEFAULT_HEALTH_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_TOAST_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_MAX_INPUT_ROWS: usize = 5;

/// User-facing strings. Defaults match the deployed Mongolian/English mix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetText {
    pub title: String,
    pub welcome_heading: String,
    pub welcome_body: String,
    pub input_placeholder: String,
    pub typing: String,
    pub connected: String,
    pub disconnected: String,
    /// Prefix of the status tooltip, followed by `HH:MM`.
    pub last_checked: String,
    /// Inline bot message for backend-reported failures without text.
    pub backend_error_fallback: String,
    /// Inline bot message for transport failures.
    pub network_error: String,
    pub connection_error_toast: String,
    pub initializing_toast: String,
    pub offline_toast: String,
    pub reload_failed_fallback: String,
}

impl Default for WidgetText {
    fn default() -> Self {
        Self {
            title: "МУХБ чатбот".to_owned(),
            welcome_heading: "МУХБ-ны чатботод тавтай морил".to_owned(),
            welcome_body: "Би таны асуултад хариулахад бэлэн байна.".to_owned(),
            input_placeholder: "Асуултаа бичнэ үү...".to_owned(),
            typing: "Typing...".to_owned(),
            connected: "Connected".to_owned(),
            disconnected: "Disconnected".to_owned(),
            last_checked: "Last checked".to_owned(),
            backend_error_fallback: "Sorry, I encountered an error.".to_owned(),
            network_error: "Уучлаарай, сүлжээнд алдаа гарлаа та дахин оролдоно уу.".to_owned(),
            connection_error_toast: "Connection error. Please check your network and try again.".to_owned(),
            initializing_toast: "Chatbot service is initializing. Please wait a moment and try again."
                .to_owned(),
            offline_toast: "You are offline. Please check your internet connection.".to_owned(),
            reload_failed_fallback: "Failed to reload chatbot pipeline.".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub chat_endpoint: String,
    pub health_endpoint: String,
    pub reload_endpoint: String,
    pub max_chars: usize,
    pub warn_chars: usize,
    pub health_interval: Duration,
    pub toast_timeout: Duration,
    pub max_input_rows: usize,
    pub text: WidgetText,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(),
            health_endpoint: DEFAULT_HEALTH_ENDPOINT.to_owned(),
            reload_endpoint: DEFAULT_RELOAD_ENDPOINT.to_owned(),
            max_chars: DEFAULT_MAX_CHARS,
            warn_chars: DEFAULT_WARN_CHARS,
            health_interval: Duration::from_secs(DEFAULT_HEALTH_INTERVAL_SECS),
            toast_timeout: Duration::from_millis(DEFAULT_TOAST_TIMEOUT_MS),
            max_input_rows: DEFAULT_MAX_INPUT_ROWS,
            text: WidgetText::default(),
        }
    }
}

impl WidgetConfig {
    /// Build config from `data-*` attribute lookups (camelCase dataset keys).
    ///
    /// Recognized keys:
    /// - `chatEndpoint`, `healthEndpoint`, `reloadEndpoint`
    /// - `healthIntervalSecs`: positive integer seconds
    ///
    /// Missing, blank, or unparsable values fall back to defaults.
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(v) = non_blank(lookup("chatEndpoint")) {
            cfg.chat_endpoint = v;
        }
        if let Some(v) = non_blank(lookup("healthEndpoint")) {
            cfg.health_endpoint = v;
        }
        if let Some(v) = non_blank(lookup("reloadEndpoint")) {
            cfg.reload_endpoint = v;
        }
        if let Some(secs) = lookup("healthIntervalSecs")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|s| *s > 0)
        {
            cfg.health_interval = Duration::from_secs(secs);
        }

        cfg
    }

    /// Read overrides from the `<body>` element's dataset.
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            else {
                return Self::default();
            };
            let dataset = body.dataset();
            Self::from_attrs(|key| dataset.get(key))
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
