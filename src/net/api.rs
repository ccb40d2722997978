//! REST helpers for communicating with the chat backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests: stubs returning
//! [`WidgetError::Unavailable`] since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Bodies are read as text and decoded by the pure `parse_*` functions so the
//! status/body rules are testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatResponse, HealthProbe, HealthResponse, ReloadResponse};
#[cfg(feature = "csr")]
use super::types::ChatRequest;
use crate::error::WidgetError;

/// Send `message` to the chat endpoint.
///
/// # Errors
///
/// Network failures, non-2xx statuses, and undecodable bodies.
pub async fn post_chat(endpoint: &str, message: &str) -> Result<ChatResponse, WidgetError> {
    #[cfg(feature = "csr")]
    {
        let body = ChatRequest { message: message.to_owned() };
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&body)
            .map_err(|e| WidgetError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;
        let ok = resp.ok();
        let status = resp.status();
        let text = resp.text().await.map_err(|e| WidgetError::Network(e.to_string()))?;
        parse_chat_response(ok, status, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, message);
        Err(WidgetError::Unavailable)
    }
}

/// Probe the health endpoint.
///
/// # Errors
///
/// Network failures and undecodable bodies. A non-2xx status with a JSON body
/// is not an error; it yields a probe with `http_ok == false`.
pub async fn get_health(endpoint: &str) -> Result<HealthProbe, WidgetError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;
        let ok = resp.ok();
        let text = resp.text().await.map_err(|e| WidgetError::Network(e.to_string()))?;
        parse_health_response(ok, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        Err(WidgetError::Unavailable)
    }
}

/// Ask the backend to rebuild its answering pipeline.
///
/// # Errors
///
/// Network failures and undecodable bodies. The backend reports reload
/// failure as a 500 with a JSON body, which is returned as a response.
pub async fn post_reload(endpoint: &str) -> Result<ReloadResponse, WidgetError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| WidgetError::Network(e.to_string()))?;
        parse_reload_response(status, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        Err(WidgetError::Unavailable)
    }
}

/// Non-2xx is a failure regardless of body.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn parse_chat_response(ok: bool, status: u16, text: &str) -> Result<ChatResponse, WidgetError> {
    if !ok {
        return Err(WidgetError::HttpStatus(status));
    }
    serde_json::from_str(text).map_err(|e| WidgetError::Decode(e.to_string()))
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn parse_health_response(ok: bool, text: &str) -> Result<HealthProbe, WidgetError> {
    let body: HealthResponse = serde_json::from_str(text).map_err(|e| WidgetError::Decode(e.to_string()))?;
    Ok(HealthProbe { http_ok: ok, body })
}

/// A body that is not JSON is reported by status so the user sees a code.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn parse_reload_response(status: u16, text: &str) -> Result<ReloadResponse, WidgetError> {
    serde_json::from_str(text).map_err(|e| {
        if (200..300).contains(&status) {
            WidgetError::Decode(e.to_string())
        } else {
            WidgetError::HttpStatus(status)
        }
    })
}
