use super::*;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let owned: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| owned.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

#[test]
fn default_config_matches_documented_limits() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.chat_endpoint, "/api/chat");
    assert_eq!(cfg.health_endpoint, "/health");
    assert_eq!(cfg.reload_endpoint, "/api/reload_pipeline");
    assert_eq!(cfg.max_chars, 500);
    assert_eq!(cfg.warn_chars, 450);
    assert_eq!(cfg.health_interval, Duration::from_secs(30));
    assert_eq!(cfg.toast_timeout, Duration::from_millis(5000));
    assert_eq!(cfg.max_input_rows, 5);
}

#[test]
fn default_text_carries_localized_fallbacks() {
    let text = WidgetText::default();
    assert_eq!(text.backend_error_fallback, "Sorry, I encountered an error.");
    assert_eq!(text.network_error, "Уучлаарай, сүлжээнд алдаа гарлаа та дахин оролдоно уу.");
    assert_eq!(text.connected, "Connected");
    assert_eq!(text.disconnected, "Disconnected");
    assert_eq!(text.last_checked, "Last checked");
}

#[test]
fn from_attrs_without_values_is_default() {
    let cfg = WidgetConfig::from_attrs(|_| None);
    assert_eq!(cfg, WidgetConfig::default());
}

#[test]
fn from_attrs_applies_overrides() {
    let cfg = WidgetConfig::from_attrs(attrs(&[
        ("chatEndpoint", "/bot/chat"),
        ("healthEndpoint", " /bot/health "),
        ("reloadEndpoint", "/bot/reload"),
        ("healthIntervalSecs", "12"),
    ]));
    assert_eq!(cfg.chat_endpoint, "/bot/chat");
    assert_eq!(cfg.health_endpoint, "/bot/health");
    assert_eq!(cfg.reload_endpoint, "/bot/reload");
    assert_eq!(cfg.health_interval, Duration::from_secs(12));
}

#[test]
fn from_attrs_ignores_blank_and_invalid_values() {
    let cfg = WidgetConfig::from_attrs(attrs(&[
        ("chatEndpoint", "   "),
        ("healthIntervalSecs", "soon"),
    ]));
    assert_eq!(cfg.chat_endpoint, DEFAULT_CHAT_ENDPOINT);
    assert_eq!(cfg.health_interval, Duration::from_secs(DEFAULT_HEALTH_INTERVAL_SECS));
}

#[test]
fn from_attrs_rejects_zero_interval() {
    let cfg = WidgetConfig::from_attrs(attrs(&[("healthIntervalSecs", "0")]));
    assert_eq!(cfg.health_interval, Duration::from_secs(DEFAULT_HEALTH_INTERVAL_SECS));
}
