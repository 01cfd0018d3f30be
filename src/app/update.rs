// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Each handler owns one message family. All state mutation funnels
//! through the store's `dispatch`; handlers translate component events
//! into actions and asynchronous tasks.

use super::{App, Message};
use crate::config;
use crate::remote::{ContentApi, Credentials};
use crate::routing;
use crate::store::Action;
use crate::theme::ThemeMode;
use crate::ui::chrome;
use crate::ui::overlay;
use crate::ui::pages::{home, login, profile};
use iced::Task;
use std::sync::Arc;

pub(super) fn handle_window_resized(app: &mut App, width_px: u32) -> Task<Message> {
    if let Some(action) = app.observer.observe(width_px) {
        app.store.dispatch(action);
    }
    Task::none()
}

pub(super) fn handle_chrome_message(app: &mut App, message: chrome::Message) -> Task<Message> {
    match chrome::update(message, &mut app.menu_open) {
        chrome::Event::None => Task::none(),
        chrome::Event::Navigate(path) => navigate(app, path),
        chrome::Event::ToggleDarkMode => toggle_dark_mode(app),
        chrome::Event::SignOutRequested => {
            app.overlay.show();
            Task::none()
        }
    }
}

pub(super) fn handle_overlay_message(app: &mut App, message: overlay::Message) -> Task<Message> {
    match overlay::update(&mut app.overlay, message) {
        overlay::Event::Dismissed => Task::none(),
        // Confirmed sign-out drops back to the sign-in page.
        overlay::Event::Confirmed => navigate(app, routing::LOGIN.to_string()),
    }
}

pub(super) fn handle_home_message(app: &mut App, message: home::Message) -> Task<Message> {
    match home::update(&mut app.home, message) {
        home::Event::Retry => fetch_home_feed(Arc::clone(&app.api)),
    }
}

pub(super) fn handle_login_message(app: &mut App, message: login::Message) -> Task<Message> {
    match login::update(&mut app.login, message) {
        login::Event::None => Task::none(),
        login::Event::Submit(credentials) => sign_in(Arc::clone(&app.api), credentials),
    }
}

pub(super) fn handle_profile_message(app: &mut App, message: profile::Message) -> Task<Message> {
    match profile::update(&mut app.profile, message) {
        profile::Event::Retry => fetch_profile(Arc::clone(&app.api)),
    }
}

pub(super) fn handle_sign_in_completed(
    app: &mut App,
    result: Result<(), crate::remote::ApiError>,
) -> Task<Message> {
    let succeeded = result.is_ok();
    app.login.sign_in_result(result);
    if succeeded {
        navigate(app, routing::ROOT.to_string())
    } else {
        Task::none()
    }
}

/// Routes the application to `path` and kicks off the data the target
/// page needs.
pub(super) fn navigate(app: &mut App, path: String) -> Task<Message> {
    let already_there = app.store.current().route_path == path;
    app.store.dispatch(Action::SetRoute(path.clone()));
    if already_there {
        return Task::none();
    }

    match path.as_str() {
        routing::ROOT => {
            app.home.begin_loading();
            fetch_home_feed(Arc::clone(&app.api))
        }
        routing::PROFILE => {
            app.profile.begin_loading();
            fetch_profile(Arc::clone(&app.api))
        }
        _ => Task::none(),
    }
}

/// Flips the dark-mode flag and persists the explicit choice.
fn toggle_dark_mode(app: &mut App) -> Task<Message> {
    let dark = !app.store.current().dark_mode;
    app.store.dispatch(Action::SetDarkMode(dark));

    app.config.general.theme_mode = if dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    };
    if let Err(err) = config::save_with_override(&app.config, app.config_dir.clone()) {
        tracing::warn!(%err, "failed to persist theme mode");
    }
    Task::none()
}

pub(super) fn fetch_home_feed(api: Arc<dyn ContentApi>) -> Task<Message> {
    Task::perform(async move { api.home_feed() }, Message::HomeFeedLoaded)
}

pub(super) fn fetch_profile(api: Arc<dyn ContentApi>) -> Task<Message> {
    Task::perform(async move { api.member_profile() }, Message::ProfileLoaded)
}

fn sign_in(api: Arc<dyn ContentApi>, credentials: Credentials) -> Task<Message> {
    Task::perform(
        async move { api.sign_in(&credentials) },
        Message::SignInCompleted,
    )
}
