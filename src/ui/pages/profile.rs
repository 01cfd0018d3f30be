// SPDX-License-Identifier: MPL-2.0
//! Member profile page.

use super::{error_line, status_line};
use crate::remote::{ApiError, MemberProfile, RemoteState};
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
    ("TitleText", TokenKind::Length),
    ("BodyText", TokenKind::Length),
    ("SmallText", TokenKind::Length),
];

/// Profile page state: the member request lifecycle.
#[derive(Debug)]
pub struct State {
    member: RemoteState<MemberProfile>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            member: RemoteState::Loading,
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the profile as in flight again (navigation or retry).
    pub fn begin_loading(&mut self) {
        self.member = RemoteState::Loading;
    }

    /// Stores the outcome of the profile request.
    pub fn profile_loaded(&mut self, result: Result<MemberProfile, ApiError>) {
        self.member = result.into();
    }

    #[must_use]
    pub fn member(&self) -> &RemoteState<MemberProfile> {
        &self.member
    }
}

/// Messages emitted by the profile page.
#[derive(Debug, Clone)]
pub enum Message {
    RetryPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user asked to reload the profile; the parent issues the request.
    Retry,
}

/// Process a profile page message.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::RetryPressed => {
            state.begin_loading();
            Event::Retry
        }
    }
}

/// Render the profile page.
pub fn view<'a>(state: &'a State, resolver: &'a Resolver, dark_mode: bool) -> Element<'a, Message> {
    match &state.member {
        RemoteState::Loading => status_line(resolver, dark_mode, "Loading your profile…"),
        RemoteState::Loaded(member) => member_card(member, resolver, dark_mode),
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

fn member_card<'a>(
    member: &'a MemberProfile,
    resolver: &'a Resolver,
    dark_mode: bool,
) -> Element<'a, Message> {
    let card = Column::new()
        .spacing(resolver.length("Spacing12"))
        .push(
            Text::new(member.nickname.as_str())
                .size(resolver.length("TitleText"))
                .color(resolver.color("MainText", dark_mode)),
        )
        .push(detail_row(resolver, dark_mode, "Email", &member.email))
        .push(detail_row(
            resolver,
            dark_mode,
            "Channels",
            &member.channel_count.to_string(),
        ));

    Container::new(
        Container::new(card)
            .padding(resolver.length("Spacing16"))
            .style(styles::panel(
                resolver.color("Surface", dark_mode),
                resolver.color("Outline", dark_mode),
                resolver.length("SmallRadius"),
            )),
    )
    .width(Length::Fill)
    .padding(resolver.length("Spacing16"))
    .center_x(Length::Fill)
    .into()
}

fn detail_row<'a>(
    resolver: &'a Resolver,
    dark_mode: bool,
    label: &'a str,
    value: &str,
) -> Element<'a, Message> {
    Row::new()
        .spacing(resolver.length("Spacing12"))
        .push(
            Text::new(label)
                .size(resolver.length("SmallText"))
                .color(resolver.color("SubText", dark_mode)),
        )
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(
            Text::new(value.to_string())
                .size(resolver.length("BodyText"))
                .color(resolver.color("MainText", dark_mode)),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    fn sample_member() -> MemberProfile {
        MemberProfile {
            nickname: "creator".to_string(),
            email: "creator@example.com".to_string(),
            channel_count: 3,
        }
    }

    #[test]
    fn state_starts_loading() {
        assert!(State::new().member().is_loading());
    }

    #[test]
    fn profile_loaded_stores_member() {
        let mut state = State::new();
        state.profile_loaded(Ok(sample_member()));
        assert_eq!(
            state.member().loaded().map(|m| m.nickname.as_str()),
            Some("creator")
        );
    }

    #[test]
    fn retry_returns_to_loading_and_emits_event() {
        let mut state = State::new();
        state.profile_loaded(Err(ApiError::Unreachable("down".into())));

        let event = update(&mut state, Message::RetryPressed);
        assert_eq!(event, Event::Retry);
        assert!(state.member().is_loading());
    }

    #[test]
    fn view_renders_every_request_phase() {
        let resolver = theme::load().expect("embedded tokens should validate");
        let mut state = State::new();
        let _ = view(&state, &resolver, false);

        state.profile_loaded(Ok(sample_member()));
        let _ = view(&state, &resolver, true);

        state.profile_loaded(Err(ApiError::Unauthorized));
        let _ = view(&state, &resolver, false);
    }
}
