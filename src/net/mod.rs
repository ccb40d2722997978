//! Networking modules for the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `backend` exposes them behind the
//! [`backend::ChatBackend`] trait, and `types` defines the JSON schema.

pub mod api;
pub mod backend;
pub mod types;
