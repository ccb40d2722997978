//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are the thin rendering adapter: they read `WidgetState` from
//! context and forward user actions to the `ChatController`.

pub mod chat_window;
pub mod error_toast;
pub mod input_area;
pub mod message_list;
pub mod status_indicator;
