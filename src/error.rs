//! Error type for backend calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by the `net` layer.
///
/// Every variant is a transport-level failure from the widget's point of
/// view; backend-reported failures arrive as successful responses instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// The request never produced a response (DNS, refused, offline, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    /// The response body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// HTTP is only available in the browser build.
    #[error("backend not available outside the browser")]
    Unavailable,
}
