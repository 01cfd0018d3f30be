// SPDX-License-Identifier: MPL-2.0
//! Modal overlay.
//!
//! A two-state machine (`Closed`/`Open`) gates a confirm dialog rendered
//! above the page. The backdrop layer stays in the widget tree while
//! closed with fully transparent colors and no interaction, so opening
//! can animate without remounting. Every color and dimension is resolved
//! through the token dictionary; nothing here is hard-coded.

use crate::theme::{Resolver, TokenKind, TokenRef};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, center, container, mouse_area, opaque, Column, Container, Text};
use iced::{Color, Element, Length};

/// Tokens this module resolves at render time.
pub const REQUIRED_TOKENS: &[TokenRef] = &[
    ("BackdropColor", TokenKind::Color),
    ("BackdropOpacity", TokenKind::Ratio),
    ("Surface", TokenKind::Color),
    ("MainText", TokenKind::Color),
    ("Primary", TokenKind::Color),
    ("White", TokenKind::Color),
    ("Outline", TokenKind::Color),
    ("BigRadius", TokenKind::Length),
    ("SmallRadius", TokenKind::Length),
    ("Spacing8", TokenKind::Length),
    ("Spacing20", TokenKind::Length),
    ("ModalWidth", TokenKind::Length),
    ("ModalHeight", TokenKind::Length),
    ("BodyText", TokenKind::Length),
];

/// The two phases of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Closed,
    Open,
}

/// State machine governing one modal's visibility.
///
/// `show` while open and `hide` while closed are no-ops; the only way in
/// is an explicit `show`, the only ways out are `hide` and a backdrop
/// press.
#[derive(Debug, Default)]
pub struct Controller {
    phase: Phase,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// Opens the modal. Returns `true` if the state changed.
    pub fn show(&mut self) -> bool {
        if self.phase == Phase::Open {
            return false;
        }
        self.phase = Phase::Open;
        true
    }

    /// Closes the modal. Returns `true` if the state changed.
    pub fn hide(&mut self) -> bool {
        if self.phase == Phase::Closed {
            return false;
        }
        self.phase = Phase::Closed;
        true
    }
}

/// Messages emitted by the overlay while open.
#[derive(Debug, Clone)]
pub enum Message {
    BackdropPressed,
    CancelPressed,
    ConfirmPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Dismissed,
    Confirmed,
}

/// Process an overlay message against the controller.
pub fn update(controller: &mut Controller, message: Message) -> Event {
    match message {
        Message::BackdropPressed | Message::CancelPressed => {
            controller.hide();
            Event::Dismissed
        }
        Message::ConfirmPressed => {
            controller.hide();
            Event::Confirmed
        }
    }
}

/// Contextual data needed to render the overlay layer.
pub struct ViewContext<'a> {
    pub resolver: &'a Resolver,
    pub dark_mode: bool,
    pub title: &'a str,
    pub body: &'a str,
    pub confirm_label: &'a str,
}

/// Render the overlay layer to stack above the page.
///
/// While closed the layer is present but fully transparent and does not
/// intercept input; while open the backdrop dims the page and a press on
/// it dismisses the modal.
pub fn view<'a>(controller: &Controller, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let resolver = ctx.resolver;
    let dark = ctx.dark_mode;

    if !controller.is_open() {
        return Container::new(iced::widget::Space::new().width(Length::Shrink).height(Length::Shrink))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::backdrop(Color::TRANSPARENT))
            .into();
    }

    let backdrop_color = resolver.color_with_opacity("BackdropColor", "BackdropOpacity", dark);

    let panel = Container::new(
        Column::new()
            .spacing(resolver.length("Spacing8"))
            .align_x(Horizontal::Center)
            .push(
                Text::new(ctx.title)
                    .size(resolver.length("BodyText"))
                    .color(resolver.color("MainText", dark)),
            )
            .push(
                Text::new(ctx.body)
                    .size(resolver.length("BodyText"))
                    .color(resolver.color("MainText", dark)),
            )
            .push(
                button(
                    Text::new(ctx.confirm_label)
                        .size(resolver.length("BodyText"))
                        .color(resolver.color("White", dark)),
                )
                .on_press(Message::ConfirmPressed)
                .style(styles::primary_button(
                    resolver.color("Primary", dark),
                    resolver.color("White", dark),
                    resolver.length("SmallRadius"),
                ))
                .padding(resolver.length("Spacing8")),
            )
            .push(
                button(
                    Text::new("Cancel")
                        .size(resolver.length("BodyText"))
                        .color(resolver.color("MainText", dark)),
                )
                .on_press(Message::CancelPressed)
                .style(styles::nav_button(
                    resolver.color("MainText", dark),
                    resolver.color("Outline", dark),
                    resolver.length("SmallRadius"),
                ))
                .padding(resolver.length("Spacing8")),
            ),
    )
    .width(Length::Fixed(resolver.length("ModalWidth")))
    .height(Length::Fixed(resolver.length("ModalHeight")))
    .padding([
        resolver.length("Spacing20"),
        resolver.length("Spacing8"),
    ])
    .style(styles::panel(
        resolver.color("Surface", dark),
        resolver.color("Outline", dark),
        resolver.length("BigRadius"),
    ));

    let backdrop = container(center(opaque(panel)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::backdrop(backdrop_color));

    opaque(
        mouse_area(backdrop)
            .on_press(Message::BackdropPressed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn controller_starts_closed() {
        let controller = Controller::new();
        assert!(!controller.is_open());
    }

    #[test]
    fn show_opens_and_is_idempotent() {
        let mut controller = Controller::new();
        assert!(controller.show());
        assert!(controller.is_open());

        // show() while already open is a no-op.
        assert!(!controller.show());
        assert!(controller.is_open());
    }

    #[test]
    fn hide_closes_and_is_idempotent() {
        let mut controller = Controller::new();
        controller.show();
        assert!(controller.hide());
        assert!(!controller.is_open());

        // hide() while already closed is a no-op.
        assert!(!controller.hide());
        assert!(!controller.is_open());
    }

    #[test]
    fn backdrop_press_dismisses_while_open() {
        let mut controller = Controller::new();
        controller.show();

        let event = update(&mut controller, Message::BackdropPressed);
        assert_eq!(event, Event::Dismissed);
        assert!(!controller.is_open());
    }

    #[test]
    fn confirm_closes_and_reports_confirmation() {
        let mut controller = Controller::new();
        controller.show();

        let event = update(&mut controller, Message::ConfirmPressed);
        assert_eq!(event, Event::Confirmed);
        assert!(!controller.is_open());
    }

    #[test]
    fn overlay_renders_in_both_phases_and_modes() {
        let resolver = theme::load().expect("embedded tokens should validate");
        let mut controller = Controller::new();

        for dark_mode in [false, true] {
            let ctx = ViewContext {
                resolver: &resolver,
                dark_mode,
                title: "Sign out",
                body: "Sign out of Portal?",
                confirm_label: "Sign out",
            };
            let _ = view(&controller, ctx);
        }

        controller.show();
        let ctx = ViewContext {
            resolver: &resolver,
            dark_mode: true,
            title: "Sign out",
            body: "Sign out of Portal?",
            confirm_label: "Sign out",
        };
        let _ = view(&controller, ctx);
    }
}
