// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

/// Initial window width when no persisted size exists.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1080;

/// Initial window height when no persisted size exists.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;

/// Smallest window the chrome still lays out sensibly in.
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Smallest window height.
pub const MIN_WINDOW_HEIGHT: u32 = 480;
