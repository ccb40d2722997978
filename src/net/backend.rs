//! Backend seam for the widget controller.
//!
//! [`HttpBackend`] talks to the real endpoints through [`super::api`]; tests
//! substitute a scripted implementation.

#![allow(async_fn_in_trait)]

use super::api;
use super::types::{ChatResponse, HealthProbe, ReloadResponse};
use crate::config::WidgetConfig;
use crate::error::WidgetError;

/// Remote collaborator for chat, health, and reload calls.
///
/// Futures are not `Send`; they run on the single UI thread.
pub trait ChatBackend {
    async fn send_message(&self, message: &str) -> Result<ChatResponse, WidgetError>;
    async fn check_health(&self) -> Result<HealthProbe, WidgetError>;
    async fn reload_pipeline(&self) -> Result<ReloadResponse, WidgetError>;
}

/// HTTP implementation bound to configured endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    chat_endpoint: String,
    health_endpoint: String,
    reload_endpoint: String,
}

impl HttpBackend {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            chat_endpoint: config.chat_endpoint.clone(),
            health_endpoint: config.health_endpoint.clone(),
            reload_endpoint: config.reload_endpoint.clone(),
        }
    }
}

impl ChatBackend for HttpBackend {
    async fn send_message(&self, message: &str) -> Result<ChatResponse, WidgetError> {
        api::post_chat(&self.chat_endpoint, message).await
    }

    async fn check_health(&self) -> Result<HealthProbe, WidgetError> {
        api::get_health(&self.health_endpoint).await
    }

    async fn reload_pipeline(&self) -> Result<ReloadResponse, WidgetError> {
        api::post_reload(&self.reload_endpoint).await
    }
}
