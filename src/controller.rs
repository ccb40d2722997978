//! Chat widget controller: the state transitions behind every user action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call into [`ChatController`]; it mutates [`WidgetState`]
//! through a [`WidgetStore`] and reaches the network through a
//! [`ChatBackend`]. Nothing here touches the DOM, so the whole flow is
//! unit-testable with a `RefCell` store and a scripted backend.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on the UI thread. The chat call and the health probe are
//! the only suspension points. `ui.loading` gates submit and reload so at most
//! one of them is outstanding; health probes are not gated and the last one to
//! finish decides the connection flag.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::rc::Rc;

use crate::clock::Clock;
use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::net::backend::ChatBackend;
use crate::net::types::{ChatResponse, HealthProbe, ReloadResponse};
use crate::state::chat::ChatMessage;
use crate::state::WidgetStore;
use crate::validation::{InputValidation, trim_input, validate};

/// How a submit ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input invalid, a request already in flight, or widget disposed.
    Rejected,
    /// The backend answered with `status == "success"`.
    Replied,
    /// The backend answered 2xx with another status.
    BackendError,
    /// No usable response.
    TransportError(WidgetError),
}

pub struct ChatController<S, B, C> {
    store: S,
    backend: B,
    clock: C,
    config: Rc<WidgetConfig>,
}

impl<S: Clone, B: Clone, C: Clone> Clone for ChatController<S, B, C> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            backend: self.backend.clone(),
            clock: self.clock.clone(),
            config: Rc::clone(&self.config),
        }
    }
}

impl<S, B, C> ChatController<S, B, C>
where
    S: WidgetStore,
    B: ChatBackend,
    C: Clock,
{
    pub fn new(store: S, backend: B, clock: C, config: WidgetConfig) -> Self {
        Self { store, backend, clock, config: Rc::new(config) }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Validate arbitrary text against the configured limits.
    pub fn validate(&self, text: &str) -> InputValidation {
        validate(text, self.config.max_chars, self.config.warn_chars)
    }

    /// Validation of the current draft.
    pub fn draft_validation(&self) -> InputValidation {
        self.store
            .peek(|s| self.validate(&s.ui.draft))
            .unwrap_or_else(|| self.validate(""))
    }

    /// Whether the send control should be enabled right now.
    pub fn can_send(&self) -> bool {
        self.store
            .peek(|s| self.validate(&s.ui.draft).can_send(s.ui.loading))
            .unwrap_or(false)
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.store.mutate(|s| s.ui.draft = text);
    }

    /// Submit whatever is in the draft.
    pub async fn submit_draft(&self) -> SubmitOutcome {
        let Some(draft) = self.store.peek(|s| s.ui.draft.clone()) else {
            return SubmitOutcome::Rejected;
        };
        self.submit(&draft).await
    }

    /// Send `text` to the backend and record both sides in the transcript.
    ///
    /// No-op unless the trimmed text is within limits and no request is in
    /// flight. Loading and typing are cleared on every completed path.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let Some(message) = self.begin_submit(text) else {
            return SubmitOutcome::Rejected;
        };
        let result = self.backend.send_message(&message).await;
        self.finish_submit(result)
    }

    fn begin_submit(&self, text: &str) -> Option<String> {
        let validation = self.validate(text);
        let now = self.clock.now_ms();
        self.store
            .mutate(|s| {
                if s.ui.loading || !validation.valid {
                    return None;
                }
                let message = trim_input(text).to_owned();
                s.chat.push(ChatMessage::user(message.clone(), now));
                s.ui.draft.clear();
                s.ui.loading = true;
                s.ui.typing = true;
                Some(message)
            })
            .flatten()
    }

    fn finish_submit(&self, result: Result<ChatResponse, WidgetError>) -> SubmitOutcome {
        let now = self.clock.now_ms();
        let text = &self.config.text;
        if let Err(e) = &result {
            leptos::logging::warn!("Chat error: {e}");
        }

        self.store
            .mutate(|s| {
                s.ui.typing = false;
                let outcome = match result {
                    Ok(resp) if resp.is_success() => {
                        s.chat.push(ChatMessage::bot(resp.response.unwrap_or_default(), now));
                        SubmitOutcome::Replied
                    }
                    Ok(resp) => {
                        if let Some(detail) = resp.error.as_deref() {
                            leptos::logging::warn!("Chat backend reported error: {detail}");
                        }
                        let content = resp.reply().unwrap_or(&text.backend_error_fallback).to_owned();
                        s.chat.push(ChatMessage::bot_error(content, now));
                        SubmitOutcome::BackendError
                    }
                    Err(e) => {
                        s.chat.push(ChatMessage::bot_error(text.network_error.clone(), now));
                        s.ui.raise_toast(text.connection_error_toast.clone());
                        s.connection.observe(false, now);
                        SubmitOutcome::TransportError(e)
                    }
                };
                s.ui.loading = false;
                outcome
            })
            .unwrap_or(SubmitOutcome::Rejected)
    }

    /// Probe backend health and update the connection indicator.
    ///
    /// Returns the new connected flag, or `None` if the widget was disposed
    /// while the probe was in flight.
    pub async fn poll_health(&self) -> Option<bool> {
        let result = self.backend.check_health().await;
        self.apply_health(result)
    }

    fn apply_health(&self, result: Result<HealthProbe, WidgetError>) -> Option<bool> {
        let now = self.clock.now_ms();
        match result {
            Ok(probe) => {
                let connected = probe.is_healthy();
                let initializing = self.config.text.initializing_toast.clone();
                self.store.mutate(|s| {
                    if s.connection.observe(connected, now) {
                        leptos::logging::log!("backend connection: {}", if connected { "up" } else { "down" });
                    }
                    if !probe.body.pipeline_ready {
                        s.ui.raise_toast(initializing);
                    }
                    connected
                })
            }
            Err(e) => {
                leptos::logging::warn!("Health check failed: {e}");
                self.store.mutate(|s| {
                    s.connection.observe(false, now);
                    false
                })
            }
        }
    }

    /// The browser reported loss of network.
    pub fn went_offline(&self) {
        let now = self.clock.now_ms();
        let toast = self.config.text.offline_toast.clone();
        self.store.mutate(|s| {
            s.connection.observe(false, now);
            s.ui.raise_toast(toast);
        });
    }

    /// Clear the transcript. The welcome placeholder reappears because the
    /// transcript is empty; connection state is left alone.
    pub fn reset(&self) {
        self.store.mutate(|s| s.chat.clear());
    }

    pub fn dismiss_toast(&self, seq: u64) {
        self.store.mutate(|s| s.ui.dismiss_toast(seq));
    }

    /// Ask the backend to reload its pipeline, then re-check health.
    ///
    /// Returns `true` if the backend reported success. Refused while a chat
    /// request is in flight.
    pub async fn reload_backend(&self) -> bool {
        let started = self
            .store
            .mutate(|s| {
                if s.ui.loading {
                    return false;
                }
                s.ui.loading = true;
                true
            })
            .unwrap_or(false);
        if !started {
            return false;
        }

        let result = self.backend.reload_pipeline().await;
        let ok = self.finish_reload(result);
        if ok {
            self.poll_health().await;
        }
        ok
    }

    fn finish_reload(&self, result: Result<ReloadResponse, WidgetError>) -> bool {
        let fallback = &self.config.text.reload_failed_fallback;
        let failure = match result {
            Ok(resp) if resp.is_success() => None,
            Ok(resp) => Some(resp.message.unwrap_or_else(|| fallback.clone())),
            Err(e) => {
                leptos::logging::warn!("Pipeline reload failed: {e}");
                Some(fallback.clone())
            }
        };
        self.store
            .mutate(|s| {
                s.ui.loading = false;
                match failure {
                    Some(message) => {
                        s.ui.raise_toast(message);
                        false
                    }
                    None => true,
                }
            })
            .unwrap_or(false)
    }
}
