// SPDX-License-Identifier: MPL-2.0
//! Home feed page.

use super::{error_line, status_line};
use crate::remote::{ApiError, RemoteState, VideoSummary};
use crate::theme::{Resolver, TokenKind, TokenRef};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Tokens this page resolves at render time.
pub const REQUIRED_TOKENS: &[TokenRef] = &[
    ("Surface", TokenKind::Color),
    ("Outline", TokenKind::Color),
    ("MainText", TokenKind::Color),
    ("SubText", TokenKind::Color),
    ("Primary", TokenKind::Color),
    ("White", TokenKind::Color),
    ("SmallRadius", TokenKind::Length),
    ("Spacing8", TokenKind::Length),
    ("Spacing12", TokenKind::Length),
    ("Spacing16", TokenKind::Length),
    ("BodyText", TokenKind::Length),
    ("SmallText", TokenKind::Length),
];

/// Home page state: the feed request lifecycle.
#[derive(Debug)]
pub struct State {
    feed: RemoteState<Vec<VideoSummary>>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            feed: RemoteState::Loading,
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the feed as in flight again (initial load or retry).
    pub fn begin_loading(&mut self) {
        self.feed = RemoteState::Loading;
    }

    /// Stores the outcome of the feed request.
    pub fn feed_loaded(&mut self, result: Result<Vec<VideoSummary>, ApiError>) {
        self.feed = result.into();
    }

    #[must_use]
    pub fn feed(&self) -> &RemoteState<Vec<VideoSummary>> {
        &self.feed
    }
}

/// Messages emitted by the home page.
#[derive(Debug, Clone)]
pub enum Message {
    RetryPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user asked to reload the feed; the parent issues the request.
    Retry,
}

/// Process a home page message.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::RetryPressed => {
            state.begin_loading();
            Event::Retry
        }
    }
}

/// Render the home feed.
pub fn view<'a>(state: &'a State, resolver: &'a Resolver, dark_mode: bool) -> Element<'a, Message> {
    match &state.feed {
        RemoteState::Loading => status_line(resolver, dark_mode, "Loading the feed…"),
        RemoteState::Loaded(items) if items.is_empty() => {
            status_line(resolver, dark_mode, "Nothing has been published yet.")
        }
        RemoteState::Loaded(items) => {
            let mut column = Column::new()
                .spacing(resolver.length("Spacing12"))
                .padding(resolver.length("Spacing16"));
            for item in items {
                column = column.push(feed_card(item, resolver, dark_mode));
            }
            column.width(Length::Fill).into()
        }
        RemoteState::Failed(error) => {
            let retry = button(
                Text::new("Retry")
                    .size(resolver.length("BodyText"))
                    .color(resolver.color("White", dark_mode)),
            )
            .on_press(Message::RetryPressed)
            .style(styles::primary_button(
                resolver.color("Primary", dark_mode),
                resolver.color("White", dark_mode),
                resolver.length("SmallRadius"),
            ))
            .padding(resolver.length("Spacing8"));

            Column::new()
                .push(error_line(resolver, dark_mode, error))
                .push(
                    Container::new(retry)
                        .width(Length::Fill)
                        .center_x(Length::Fill),
                )
                .spacing(resolver.length("Spacing8"))
                .into()
        }
    }
}

fn feed_card<'a>(
    item: &'a VideoSummary,
    resolver: &'a Resolver,
    dark_mode: bool,
) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(resolver.length("Spacing12"))
        .push(
            Column::new()
                .spacing(resolver.length("Spacing8"))
                .push(
                    Text::new(item.title.as_str())
                        .size(resolver.length("BodyText"))
                        .color(resolver.color("MainText", dark_mode)),
                )
                .push(
                    Text::new(item.channel.as_str())
                        .size(resolver.length("SmallText"))
                        .color(resolver.color("SubText", dark_mode)),
                ),
        )
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(
            Text::new(format_views(item.views))
                .size(resolver.length("SmallText"))
                .color(resolver.color("SubText", dark_mode)),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding(resolver.length("Spacing12"))
        .style(styles::panel(
            resolver.color("Surface", dark_mode),
            resolver.color("Outline", dark_mode),
            resolver.length("SmallRadius"),
        ))
        .into()
}

fn format_views(views: u64) -> String {
    if views >= 1_000 {
        format!("{:.1}k views", views as f64 / 1_000.0)
    } else {
        format!("{} views", views)
    }
}
