//! Client-side widget state.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `connection`, `ui`) and aggregated in
//! [`WidgetState`]. Logic reaches it through [`WidgetStore`] so the same
//! transitions run against a Leptos signal in the browser and a plain
//! `RefCell` in tests.

pub mod chat;
pub mod connection;
pub mod ui;


use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use chat::ChatState;
use connection::ConnectionState;
use ui::UiState;

/// Everything the widget renders from.
#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    pub chat: ChatState,
    pub connection: ConnectionState,
    pub ui: UiState,
}

/// Shared handle to [`WidgetState`].
///
/// Both methods return `None` once the backing store has been disposed
/// (the widget was unmounted while a request was in flight).
pub trait WidgetStore {
    fn mutate<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R>;
    fn peek<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> Option<R>;
}

impl WidgetStore for RwSignal<WidgetState> {
    fn mutate<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn peek<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl WidgetStore for Rc<RefCell<WidgetState>> {
    fn mutate<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn peek<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
