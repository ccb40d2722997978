use super::*;

// =============================================================
// /api/chat
// =============================================================

#[test]
fn parse_chat_response_decodes_success_body() {
    let resp = parse_chat_response(true, 200, r#"{"status":"success","response":"Sain uu"}"#).unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.reply(), Some("Sain uu"));
}

#[test]
fn parse_chat_response_non_2xx_is_error_even_with_body() {
    let err = parse_chat_response(
        false,
        500,
        r#"{"error":"boom","response":"Sorry, I encountered an error while processing your question."}"#,
    )
    .unwrap_err();
    assert_eq!(err, WidgetError::HttpStatus(500));
}

#[test]
fn parse_chat_response_bad_json_is_decode_error() {
    let err = parse_chat_response(true, 200, "<html>proxy error</html>").unwrap_err();
    assert!(matches!(err, WidgetError::Decode(_)));
}

// =============================================================
// /health
// =============================================================

#[test]
fn parse_health_response_keeps_http_outcome() {
    let probe = parse_health_response(false, r#"{"status":"healthy","pipeline_ready":true}"#).unwrap();
    assert!(!probe.http_ok);
    assert!(!probe.is_healthy());
}

#[test]
fn parse_health_response_healthy() {
    let probe = parse_health_response(true, r#"{"status":"healthy","pipeline_ready":false}"#).unwrap();
    assert!(probe.is_healthy());
    assert!(!probe.body.pipeline_ready);
}

#[test]
fn parse_health_response_bad_json_is_error() {
    assert!(matches!(parse_health_response(true, ""), Err(WidgetError::Decode(_))));
}

// =============================================================
// /api/reload_pipeline
// =============================================================

#[test]
fn parse_reload_response_reads_error_body_on_500() {
    let resp = parse_reload_response(500, r#"{"status":"error","message":"Failed to reload chatbot pipeline."}"#)
        .unwrap();
    assert!(!resp.is_success());
    assert_eq!(resp.message.as_deref(), Some("Failed to reload chatbot pipeline."));
}

#[test]
fn parse_reload_response_non_json_reports_status() {
    assert_eq!(parse_reload_response(404, "Not Found"), Err(WidgetError::HttpStatus(404)));
    assert!(matches!(parse_reload_response(200, "ok"), Err(WidgetError::Decode(_))));
}

// =============================================================
// Non-browser stubs
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn http_calls_are_unavailable_outside_browser() {
    futures::executor::block_on(async {
        assert_eq!(post_chat("/api/chat", "hi").await, Err(WidgetError::Unavailable));
        assert_eq!(get_health("/health").await, Err(WidgetError::Unavailable));
        assert_eq!(post_reload("/api/reload_pipeline").await, Err(WidgetError::Unavailable));
    });
}
