// SPDX-License-Identifier: MPL-2.0
//! Application chrome: the header/footer shell and the layout composer
//! that picks a chrome variant for the current route and viewport.
//!
//! [`choose_chrome`] is a pure function so the selection policy can be
//! tested without mounting a widget tree. The root route gets a
//! specialized hero header and no footer; every other route, known or
//! unknown, keeps the standard header and footer so navigation is never
//! lost.

use crate::routing;
use crate::theme::{Resolver, TokenKind, TokenRef};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Tokens this module resolves at render time.
pub const REQUIRED_TOKENS: &[TokenRef] = &[
    ("Surface", TokenKind::Color),
    ("MainText", TokenKind::Color),
    ("SubText", TokenKind::Color),
    ("Primary", TokenKind::Color),
    ("Outline", TokenKind::Color),
    ("HeaderHeight", TokenKind::Length),
    ("Spacing4", TokenKind::Length),
    ("Spacing8", TokenKind::Length),
    ("Spacing12", TokenKind::Length),
    ("Spacing16", TokenKind::Length),
    ("SmallRadius", TokenKind::Length),
    ("TitleText", TokenKind::Length),
    ("BodyText", TokenKind::Length),
    ("SmallText", TokenKind::Length),
];

/// Chrome shell variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeVariant {
    /// Standard header plus footer.
    Full,
    /// Specialized header, no footer (the landing route).
    Minimal,
    /// No chrome at all. No route selects this; it exists for callers
    /// that embed a page outside the shell.
    None,
}

/// Viewport width below which the header collapses its nav links into a
/// dropdown menu.
pub const COMPACT_BREAKPOINT_PX: u32 = 720;

/// Pure breakpoint predicate used by the render layer.
#[must_use]
pub fn is_compact(viewport_width_px: u32) -> bool {
    viewport_width_px < COMPACT_BREAKPOINT_PX
}

/// Selects the chrome variant for a route and viewport width.
///
/// The variant depends on the route alone; width-driven differences
/// within a variant are covered by [`is_compact`]. Unknown routes fall
/// back to [`ChromeVariant::Full`], never [`ChromeVariant::None`].
#[must_use]
pub fn choose_chrome(route: &str, viewport_width_px: u32) -> ChromeVariant {
    let _ = viewport_width_px;
    if route == routing::ROOT {
        ChromeVariant::Minimal
    } else {
        ChromeVariant::Full
    }
}

/// Contextual data needed to render the chrome.
pub struct ViewContext<'a> {
    pub resolver: &'a Resolver,
    pub dark_mode: bool,
    pub route_path: &'a str,
    pub viewport_width_px: u32,
    /// Whether the compact nav menu is expanded.
    pub menu_open: bool,
}

/// Messages emitted by the chrome.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(String),
    ToggleMenu,
    ToggleDarkMode,
    SignOutRequested,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(String),
    ToggleDarkMode,
    SignOutRequested,
}

/// Process a chrome message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Navigate(path) => {
            *menu_open = false;
            Event::Navigate(path)
        }
        Message::ToggleDarkMode => Event::ToggleDarkMode,
        Message::SignOutRequested => {
            *menu_open = false;
            Event::SignOutRequested
        }
    }
}

/// Render the standard header used by [`ChromeVariant::Full`].
pub fn header_full<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let resolver = ctx.resolver;
    let dark = ctx.dark_mode;
    let surface = resolver.color("Surface", dark);
    let main_text = resolver.color("MainText", dark);
    let outline = resolver.color("Outline", dark);
    let radius = resolver.length("SmallRadius");

    let brand = button(
        Text::new("Portal")
            .size(resolver.length("TitleText"))
            .color(resolver.color("Primary", dark)),
    )
    .on_press(Message::Navigate(routing::ROOT.to_string()))
    .style(styles::nav_button(main_text, outline, radius))
    .padding(resolver.length("Spacing4"));

    let mut bar = Row::new()
        .spacing(resolver.length("Spacing12"))
        .padding(resolver.length("Spacing12"))
        .align_y(Vertical::Center)
        .push(brand);

    if is_compact(ctx.viewport_width_px) {
        bar = bar.push(
            button(Text::new("Menu").size(resolver.length("BodyText")))
                .on_press(Message::ToggleMenu)
                .style(styles::nav_button(main_text, outline, radius))
                .padding(resolver.length("Spacing8")),
        );
    } else {
        for (label, path) in nav_links() {
            bar = bar.push(nav_link(ctx, label, path));
        }
    }

    bar = bar
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(theme_toggle(ctx))
        .push(
            button(Text::new("Sign out").size(resolver.length("BodyText")))
                .on_press(Message::SignOutRequested)
                .style(styles::nav_button(main_text, outline, radius))
                .padding(resolver.length("Spacing8")),
        );

    let mut content = Column::new().width(Length::Fill).push(
        Container::new(bar)
            .width(Length::Fill)
            .height(Length::Fixed(resolver.length("HeaderHeight")))
            .style(styles::chrome_bar(surface)),
    );

    if is_compact(ctx.viewport_width_px) && ctx.menu_open {
        content = content.push(compact_menu(ctx));
    }

    content.into()
}

/// Render the specialized landing header used by [`ChromeVariant::Minimal`].
pub fn header_minimal<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let resolver = ctx.resolver;
    let dark = ctx.dark_mode;

    let brand = Text::new("Portal")
        .size(resolver.length("TitleText"))
        .color(resolver.color("Primary", dark));
    let tagline = Text::new("Watch, learn, create")
        .size(resolver.length("SmallText"))
        .color(resolver.color("SubText", dark));

    let bar = Row::new()
        .spacing(resolver.length("Spacing12"))
        .padding(resolver.length("Spacing12"))
        .align_y(Vertical::Center)
        .push(brand)
        .push(tagline)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(theme_toggle(ctx))
        .push(nav_link(ctx, "Sign in", routing::LOGIN))
        .push(nav_link(ctx, "My profile", routing::PROFILE));

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(resolver.length("HeaderHeight")))
        .style(styles::chrome_bar(resolver.color("Surface", dark)))
        .into()
}

/// Render the footer shown under [`ChromeVariant::Full`] pages.
pub fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let resolver = ctx.resolver;
    let dark = ctx.dark_mode;
    let sub_text = resolver.color("SubText", dark);

    let row = Row::new()
        .spacing(resolver.length("Spacing16"))
        .padding(resolver.length("Spacing16"))
        .align_y(Vertical::Center)
        .push(
            Text::new("Portal")
                .size(resolver.length("SmallText"))
                .color(sub_text),
        )
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(
            Text::new("Terms of use")
                .size(resolver.length("SmallText"))
                .color(sub_text),
        )
        .push(
            Text::new("Privacy")
                .size(resolver.length("SmallText"))
                .color(sub_text),
        );

    Container::new(row)
        .width(Length::Fill)
        .style(styles::chrome_bar(resolver.color("Surface", dark)))
        .into()
}

fn nav_links() -> [(&'static str, &'static str); 2] {
    [("Home", routing::ROOT), ("My profile", routing::PROFILE)]
}

fn nav_link<'a>(ctx: &ViewContext<'a>, label: &'a str, path: &str) -> Element<'a, Message> {
    let resolver = ctx.resolver;
    let dark = ctx.dark_mode;
    let active = ctx.route_path == path;
    let color = if active {
        resolver.color("Primary", dark)
    } else {
        resolver.color("MainText", dark)
    };

    button(Text::new(label).size(resolver.length("BodyText")).color(color))
        .on_press(Message::Navigate(path.to_string()))
        .style(styles::nav_button(
            color,
            resolver.color("Outline", dark),
            resolver.length("SmallRadius"),
        ))
        .padding(resolver.length("Spacing8"))
        .into()
}

fn theme_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let resolver = ctx.resolver;
    let label = if ctx.dark_mode { "Light" } else { "Dark" };

    button(
        Text::new(label)
            .size(resolver.length("SmallText"))
            .color(resolver.color("MainText", ctx.dark_mode)),
    )
    .on_press(Message::ToggleDarkMode)
    .style(styles::nav_button(
        resolver.color("MainText", ctx.dark_mode),
        resolver.color("Outline", ctx.dark_mode),
        resolver.length("SmallRadius"),
    ))
    .padding(resolver.length("Spacing8"))
    .into()
}

/// Dropdown with the nav links, shown when the compact menu is expanded.
fn compact_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let resolver = ctx.resolver;
    let mut column = Column::new()
        .spacing(resolver.length("Spacing4"))
        .padding(resolver.length("Spacing8"));

    for (label, path) in nav_links() {
        column = column.push(nav_link(ctx, label, path));
    }

    Container::new(column)
        .width(Length::Fill)
        .style(styles::panel(
            resolver.color("Surface", ctx.dark_mode),
            resolver.color("Outline", ctx.dark_mode),
            resolver.length("SmallRadius"),
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    fn resolver() -> Resolver {
        theme::load().expect("embedded tokens should validate")
    }

    #[test]
    fn choose_chrome_is_deterministic() {
        for (route, width) in [("/", 320_u32), ("/login", 1024), ("/weird", 9999)] {
            assert_eq!(choose_chrome(route, width), choose_chrome(route, width));
        }
    }

    #[test]
    fn root_route_selects_minimal_chrome() {
        assert_eq!(choose_chrome("/", 1024), ChromeVariant::Minimal);
        // The variant does not depend on the viewport width.
        assert_eq!(choose_chrome("/", 320), ChromeVariant::Minimal);
    }

    #[test]
    fn known_routes_select_full_chrome() {
        assert_eq!(choose_chrome("/login", 1024), ChromeVariant::Full);
        assert_eq!(choose_chrome("/myprofile", 1024), ChromeVariant::Full);
    }

    #[test]
    fn unknown_route_falls_back_to_full_chrome() {
        assert_eq!(choose_chrome("/unknown-path", 1024), ChromeVariant::Full);
        assert_ne!(choose_chrome("/unknown-path", 1024), ChromeVariant::None);
    }

    #[test]
    fn compact_breakpoint_is_exclusive() {
        assert!(is_compact(COMPACT_BREAKPOINT_PX - 1));
        assert!(!is_compact(COMPACT_BREAKPOINT_PX));
    }

    #[test]
    fn navigate_closes_menu_and_emits_event() {
        let mut menu_open = true;
        let event = update(Message::Navigate("/login".to_string()), &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::Navigate(path) if path == "/login"));
    }

    #[test]
    fn toggle_menu_flips_state_without_event() {
        let mut menu_open = false;
        assert!(matches!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::None
        ));
        assert!(menu_open);
        assert!(matches!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::None
        ));
        assert!(!menu_open);
    }

    #[test]
    fn sign_out_request_closes_menu() {
        let mut menu_open = true;
        let event = update(Message::SignOutRequested, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::SignOutRequested));
    }

    #[test]
    fn headers_and_footer_render() {
        let resolver = resolver();
        for (route, width, menu_open) in [("/", 1024_u32, false), ("/login", 500, true)] {
            let ctx = ViewContext {
                resolver: &resolver,
                dark_mode: false,
                route_path: route,
                viewport_width_px: width,
                menu_open,
            };
            let _ = header_full(&ctx);
            let _ = header_minimal(&ctx);
            let _ = footer(&ctx);
        }
    }
}
