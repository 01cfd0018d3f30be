// SPDX-License-Identifier: MPL-2.0
//! `iced_portal` is the client-facing shell of a video content platform,
//! built with the Iced GUI framework.
//!
//! The core subsystems are a global UI state store with a typed action
//! set, a viewport observer feeding it resize signals, a pure layout
//! composer selecting the chrome variant per route, a token-driven theme
//! resolver, and a modal overlay controller.

#![doc(html_root_url = "https://docs.rs/iced_portal/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod remote;
pub mod routing;
pub mod store;
pub mod theme;
pub mod ui;
