// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between chrome, pages, and
//! the overlay.
//!
//! The `App` struct wires the global UI store, the viewport observer, the
//! token resolver, and the page states into Iced's update/view loop. All
//! state mutation funnels through the store's typed actions; the update
//! handlers in `update.rs` translate component events into dispatches and
//! asynchronous tasks.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::remote::{ContentApi, DemoApi};
use crate::routing::{self, RouteTable};
use crate::store::observer::ViewportObserver;
use crate::store::{Store, UiState};
use crate::theme::Resolver;
use crate::ui::overlay;
use crate::ui::pages::{home, login, profile};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state bridging the UI store, theming, and the
/// routed pages.
pub struct App {
    store: Store,
    observer: ViewportObserver,
    resolver: Resolver,
    routes: RouteTable,
    api: Arc<dyn ContentApi>,
    overlay: overlay::Controller,
    /// Whether the compact nav menu is expanded.
    menu_open: bool,
    home: home::State,
    login: login::State,
    profile: profile::State,
    config: Config,
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", self.store.current())
            .field("overlay_open", &self.overlay.is_open())
            .finish()
    }
}

/// Builds the window settings.
fn window_settings(size: iced::Size) -> window::Settings {
    window::Settings {
        size,
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
/// The resolver and route table arrive pre-validated; a failure in either
/// has already aborted startup.
pub fn run(flags: Flags, resolver: Resolver, routes: RouteTable) -> iced::Result {
    use std::cell::RefCell;

    let (config, _) = config::load_with_override(flags.config_dir.clone().map(PathBuf::from));
    let size = iced::Size::new(
        config.window.width.unwrap_or(config::DEFAULT_WINDOW_WIDTH) as f32,
        config.window.height.unwrap_or(config::DEFAULT_WINDOW_HEIGHT) as f32,
    );

    // Wrap the boot payload in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming it once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some((flags, resolver, routes)));
    let boot = move || {
        let (flags, resolver, routes) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, resolver, routes)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(size))
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the data the start
    /// route needs.
    fn new(flags: Flags, resolver: Resolver, routes: RouteTable) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let start_route = match flags.start_route {
            Some(route) if route.starts_with('/') => route,
            Some(route) => {
                tracing::warn!(%route, "ignoring start route without leading '/'");
                routing::ROOT.to_string()
            }
            None => routing::ROOT.to_string(),
        };

        let mut store = Store::new(UiState {
            viewport_width_px: config.window.width.unwrap_or(config::DEFAULT_WINDOW_WIDTH),
            route_path: start_route.clone(),
            dark_mode: config.general.theme_mode.is_dark(),
        });
        store.subscribe(|state| {
            tracing::trace!(
                width = state.viewport_width_px,
                route = %state.route_path,
                dark = state.dark_mode,
                "ui state"
            );
        });

        let mut observer = ViewportObserver::new();
        observer.bind();

        let app = App {
            store,
            observer,
            resolver,
            routes,
            api: Arc::new(DemoApi),
            overlay: overlay::Controller::new(),
            menu_open: false,
            home: home::State::new(),
            login: login::State::new(),
            profile: profile::State::new(),
            config,
            config_dir,
        };

        let task = match start_route.as_str() {
            routing::PROFILE => update::fetch_profile(Arc::clone(&app.api)),
            _ => update::fetch_home_feed(Arc::clone(&app.api)),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let label = self
            .routes
            .resolve(&self.store.current().route_path)
            .map(|entry| entry.component.label())
            .unwrap_or("Not found");
        format!("{label} - Portal")
    }

    fn theme(&self) -> Theme {
        if self.store.current().dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowResized(width_px) => update::handle_window_resized(self, width_px),
            Message::Chrome(chrome_message) => update::handle_chrome_message(self, chrome_message),
            Message::Overlay(overlay_message) => {
                update::handle_overlay_message(self, overlay_message)
            }
            Message::Home(home_message) => update::handle_home_message(self, home_message),
            Message::Login(login_message) => update::handle_login_message(self, login_message),
            Message::Profile(profile_message) => {
                update::handle_profile_message(self, profile_message)
            }
            Message::HomeFeedLoaded(result) => {
                self.home.feed_loaded(result);
                Task::none()
            }
            Message::ProfileLoaded(result) => {
                self.profile.profile_loaded(result);
                Task::none()
            }
            Message::SignInCompleted(result) => update::handle_sign_in_completed(self, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            resolver: &self.resolver,
            ui_state: self.store.current(),
            routes: &self.routes,
            menu_open: self.menu_open,
            overlay: &self.overlay,
            home: &self.home,
            login: &self.login,
            profile: &self.profile,
        })
    }
}
