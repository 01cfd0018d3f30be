// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::remote::{ApiError, MemberProfile, VideoSummary};
use crate::ui::chrome;
use crate::ui::overlay;
use crate::ui::pages::{home, login, profile};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The window was resized; carries the new width in pixels.
    WindowResized(u32),
    Chrome(chrome::Message),
    Overlay(overlay::Message),
    Home(home::Message),
    Login(login::Message),
    Profile(profile::Message),
    /// Result of the asynchronous home feed request.
    HomeFeedLoaded(Result<Vec<VideoSummary>, ApiError>),
    /// Result of the asynchronous profile request.
    ProfileLoaded(Result<MemberProfile, ApiError>),
    /// Result of the asynchronous sign-in request.
    SignInCompleted(Result<(), ApiError>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional route to open on startup (e.g. `/login`).
    pub start_route: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
