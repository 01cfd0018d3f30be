// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composition order mirrors the error-isolation contract: the chrome is
//! built outside the page body, so a failed page renders its own error
//! state while header, footer, and the overlay layer stay intact.

use super::Message;
use crate::routing::{ComponentKey, RouteTable};
use crate::store::UiState;
use crate::theme::Resolver;
use crate::ui::chrome::{self, ChromeVariant};
use crate::ui::overlay;
use crate::ui::pages::{self, home, login, profile};
use crate::ui::styles;
use iced::widget::{scrollable, stack, Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub resolver: &'a Resolver,
    pub ui_state: &'a UiState,
    pub routes: &'a RouteTable,
    pub menu_open: bool,
    pub overlay: &'a overlay::Controller,
    pub home: &'a home::State,
    pub login: &'a login::State,
    pub profile: &'a profile::State,
}

/// Renders chrome, the routed page, and the overlay layer.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let dark = ctx.ui_state.dark_mode;
    let route = ctx.ui_state.route_path.as_str();
    let variant = chrome::choose_chrome(route, ctx.ui_state.viewport_width_px);

    let chrome_ctx = chrome::ViewContext {
        resolver: ctx.resolver,
        dark_mode: dark,
        route_path: route,
        viewport_width_px: ctx.ui_state.viewport_width_px,
        menu_open: ctx.menu_open,
    };

    let page = page_view(&ctx, route);
    let content = Container::new(scrollable(page).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::surface(ctx.resolver.color("Background", dark)));

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    match variant {
        ChromeVariant::Minimal => {
            column = column
                .push(chrome::header_minimal(&chrome_ctx).map(Message::Chrome))
                .push(content);
        }
        ChromeVariant::Full => {
            column = column
                .push(chrome::header_full(&chrome_ctx).map(Message::Chrome))
                .push(content)
                .push(chrome::footer(&chrome_ctx).map(Message::Chrome));
        }
        ChromeVariant::None => {
            column = column.push(content);
        }
    }

    let overlay_layer = overlay::view(
        ctx.overlay,
        overlay::ViewContext {
            resolver: ctx.resolver,
            dark_mode: dark,
            title: "Sign out",
            body: "Sign out of Portal?",
            confirm_label: "Sign out",
        },
    )
    .map(Message::Overlay);

    stack([column.into(), overlay_layer]).into()
}

fn page_view<'a>(ctx: &ViewContext<'a>, route: &str) -> Element<'a, Message> {
    match ctx.routes.resolve(route).map(|entry| entry.component) {
        Some(ComponentKey::Home) => {
            home::view(ctx.home, ctx.resolver, ctx.ui_state.dark_mode).map(Message::Home)
        }
        Some(ComponentKey::Login) => {
            login::view(ctx.login, ctx.resolver, ctx.ui_state.dark_mode).map(Message::Login)
        }
        Some(ComponentKey::Profile) => {
            profile::view(ctx.profile, ctx.resolver, ctx.ui_state.dark_mode).map(Message::Profile)
        }
        None => pages::not_found(
            ctx.resolver,
            ctx.ui_state.dark_mode,
            &ctx.ui_state.route_path,
        ),
    }
}
