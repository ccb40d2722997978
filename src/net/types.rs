//! Wire types for the chat backend's JSON endpoints.
//!
//! Response fields are lenient (`#[serde(default)]`): error bodies from the
//! backend omit `status`, and older deployments omit `pipeline_ready`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Body returned by `POST /api/chat`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ChatResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// Reply text, if the backend sent a non-empty one.
    #[must_use]
    pub fn reply(&self) -> Option<&str> {
        self.response.as_deref().filter(|r| !r.is_empty())
    }
}

/// Body returned by `GET /health`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub pipeline_ready: bool,
}

/// A decoded health response together with the HTTP outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealthProbe {
    pub http_ok: bool,
    pub body: HealthResponse,
}

impl HealthProbe {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.http_ok && self.body.status == "healthy"
    }
}

/// Body returned by `POST /api/reload_pipeline`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ReloadResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ReloadResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}
