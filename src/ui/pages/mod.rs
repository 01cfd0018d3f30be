// SPDX-License-Identifier: MPL-2.0
//! Page views mounted by the route table.
//!
//! Pages are peers behind the chrome: each owns its remote-request state
//! and renders its own loading, empty, and error placeholders. A page
//! failure never reaches the chrome or the overlay subsystem.

pub mod home;
pub mod login;
pub mod profile;

use crate::remote::ApiError;
use crate::theme::{Resolver, TokenKind, TokenRef};
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Tokens the shared page scaffolding resolves at render time.
pub const REQUIRED_TOKENS: &[TokenRef] = &[
    ("Background", TokenKind::Color),
    ("MainText", TokenKind::Color),
    ("SubText", TokenKind::Color),
    ("Negative", TokenKind::Color),
    ("TitleText", TokenKind::Length),
    ("BodyText", TokenKind::Length),
    ("Spacing16", TokenKind::Length),
    ("Spacing24", TokenKind::Length),
];

/// Centered single-line placeholder used for loading and empty states.
pub(crate) fn status_line<'a, M: 'a>(
    resolver: &Resolver,
    dark_mode: bool,
    message: &'a str,
) -> Element<'a, M> {
    Container::new(
        Text::new(message)
            .size(resolver.length("BodyText"))
            .color(resolver.color("SubText", dark_mode)),
    )
    .width(Length::Fill)
    .padding(resolver.length("Spacing24"))
    .center_x(Length::Fill)
    .into()
}

/// Error placeholder confined to the page body.
pub(crate) fn error_line<'a, M: 'a>(
    resolver: &Resolver,
    dark_mode: bool,
    error: &ApiError,
) -> Element<'a, M> {
    Container::new(
        Text::new(format!("Something went wrong: {}", error))
            .size(resolver.length("BodyText"))
            .color(resolver.color("Negative", dark_mode)),
    )
    .width(Length::Fill)
    .padding(resolver.length("Spacing24"))
    .center_x(Length::Fill)
    .into()
}

/// Fallback page for paths the route table does not know.
pub fn not_found<'a, M: 'a>(
    resolver: &Resolver,
    dark_mode: bool,
    path: &str,
) -> Element<'a, M> {
    Container::new(
        Column::new()
            .spacing(resolver.length("Spacing16"))
            .push(
                Text::new("Page not found")
                    .size(resolver.length("TitleText"))
                    .color(resolver.color("MainText", dark_mode)),
            )
            .push(
                Text::new(format!("Nothing lives at {}", path))
                    .size(resolver.length("BodyText"))
                    .color(resolver.color("SubText", dark_mode)),
            ),
    )
    .width(Length::Fill)
    .padding(resolver.length("Spacing24"))
    .center_x(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn scaffolding_views_render() {
        let resolver = theme::load().expect("embedded tokens should validate");
        let _: Element<'_, ()> = status_line(&resolver, false, "Loading…");
        let _: Element<'_, ()> =
            error_line(&resolver, true, &ApiError::Unreachable("timeout".into()));
        let _: Element<'_, ()> = not_found(&resolver, false, "/nowhere");
    }
}
