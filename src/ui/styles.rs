// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.
//!
//! Every color and dimension reaching these helpers has already been
//! resolved from the token dictionary; nothing here holds a literal.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Full-width bar style for the header and footer.
pub fn chrome_bar(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Flat fill for the page background behind the content area.
pub fn surface(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Card-like panel: surface color with a rounded outline.
pub fn panel(background: Color, outline: Color, radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: outline,
            width: 1.0,
            radius: radius.into(),
        },
        ..Default::default()
    }
}

/// Overlay backdrop layer. The caller passes a fully transparent color
/// while the overlay is closed so the layer stays in the tree invisibly.
pub fn backdrop(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Borderless text-like button used for navigation links.
pub fn nav_button(
    text_color: Color,
    hover_background: Color,
    radius: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(hover_background))
            }
            _ => None,
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Filled button for primary actions (sign in, confirm).
pub fn primary_button(
    background: Color,
    text_color: Color,
    radius: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background_color = match status {
            button::Status::Hovered => Color {
                a: 0.85,
                ..background
            },
            _ => background,
        };
        button::Style {
            background: Some(Background::Color(background_color)),
            text_color,
            border: Border {
                radius: radius.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
