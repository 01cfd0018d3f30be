// SPDX-License-Identifier: MPL-2.0
//! Static route table.
//!
//! Routes are declared in source, built once at startup, and validated
//! before the application mounts. The table maps a path to the component
//! that renders it; path matching is exact. Unknown paths resolve to no
//! entry and the view layer falls back to the not-found page under the
//! standard chrome.

use crate::error::{Error, Result};

/// Well-known paths, shared by navigation and the layout composer.
pub const ROOT: &str = "/";
pub const LOGIN: &str = "/login";
pub const PROFILE: &str = "/myprofile";

/// Identifies which page component a route mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKey {
    Home,
    Login,
    Profile,
}

impl ComponentKey {
    /// Human-readable page label, used for the window title.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ComponentKey::Home => "Home",
            ComponentKey::Login => "Sign in",
            ComponentKey::Profile => "My profile",
        }
    }
}

/// One route: a path pattern and the component it mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub component: ComponentKey,
}

impl RouteEntry {
    fn new(path: &str, component: ComponentKey) -> Self {
        Self {
            path: path.to_string(),
            component,
        }
    }
}

/// Immutable route table, built once at startup.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// The application's routes.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: vec![
                RouteEntry::new(ROOT, ComponentKey::Home),
                RouteEntry::new(LOGIN, ComponentKey::Login),
                RouteEntry::new(PROFILE, ComponentKey::Profile),
            ],
        }
    }

    #[must_use]
    pub fn from_entries(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    /// Rejects malformed tables before the application mounts: the table
    /// must be non-empty, every path must start with `/`, and no path may
    /// appear twice.
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(Error::Route("route table is empty".to_string()));
        }
        for (index, entry) in self.entries.iter().enumerate() {
            if !entry.path.starts_with('/') {
                return Err(Error::Route(format!(
                    "path '{}' does not start with '/'",
                    entry.path
                )));
            }
            if self.entries[..index].iter().any(|e| e.path == entry.path) {
                return Err(Error::Route(format!("duplicate path '{}'", entry.path)));
            }
        }
        Ok(())
    }

    /// Exact-match lookup. Unknown paths return `None`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}
