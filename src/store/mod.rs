// SPDX-License-Identifier: MPL-2.0
//! Global UI state store.
//!
//! A single `Store` instance owns the tab-wide UI state: current viewport
//! width, current route, and the dark-mode flag. All mutation goes through
//! [`Store::dispatch`] with a typed [`Action`]; readers only ever get a
//! snapshot copy, never a live reference. Each action replaces exactly the
//! field it addresses, so independent updates cannot clobber each other.
//!
//! The whole store runs on the UI event loop: dispatches are applied in
//! the order received, and subscribers observe every state exactly once,
//! after the dispatch that produced it.

pub mod observer;

use std::fmt;

/// Snapshot of the tab-wide UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Most recently observed window width, in physical pixels.
    pub viewport_width_px: u32,
    /// Current route path, e.g. `/` or `/login`.
    pub route_path: String,
    /// Whether the dark theme is active.
    pub dark_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            viewport_width_px: 0,
            route_path: "/".to_string(),
            dark_mode: false,
        }
    }
}

/// The closed set of state mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetViewportWidth(u32),
    SetRoute(String),
    SetDarkMode(bool),
}

type Subscriber = Box<dyn Fn(&UiState)>;

/// Owner of the [`UiState`]; the only writer in the application.
pub struct Store {
    state: UiState,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(UiState::default())
    }
}

impl Store {
    #[must_use]
    pub fn new(initial: UiState) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
        }
    }

    /// Returns a snapshot of the current state. Mutating the returned value
    /// has no effect on the store.
    #[must_use]
    pub fn state(&self) -> UiState {
        self.state.clone()
    }

    /// Borrows the current state for rendering. The borrow is immutable,
    /// so readers still cannot touch shared state; use [`Store::state`]
    /// when an owned snapshot is needed.
    #[must_use]
    pub fn current(&self) -> &UiState {
        &self.state
    }

    /// Applies an action, replacing only the field it addresses, then
    /// notifies every subscriber with the new state.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SetViewportWidth(px) => {
                self.state.viewport_width_px = px;
            }
            Action::SetRoute(path) => {
                if path != self.state.route_path {
                    tracing::debug!(from = %self.state.route_path, to = %path, "route change");
                }
                self.state.route_path = path;
            }
            Action::SetDarkMode(flag) => {
                self.state.dark_mode = flag;
            }
        }

        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }

    /// Registers a read-only observer invoked after every dispatch.
    pub fn subscribe(&mut self, subscriber: impl Fn(&UiState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }
}
