// SPDX-License-Identifier: MPL-2.0
//! Sign-in page.
//!
//! The form is local state; the credential check goes through the content
//! API port and its outcome comes back via [`State::sign_in_result`]. A
//! rejected sign-in renders inline, inside the page body.

use super::error_line;
use crate::remote::{ApiError, Credentials};
use crate::theme::{Resolver, TokenKind, TokenRef};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{Element, Length};

/// Tokens this page resolves at render time.
pub const REQUIRED_TOKENS: &[TokenRef] = &[
    ("MainText", TokenKind::Color),
    ("Primary", TokenKind::Color),
    ("White", TokenKind::Color),
    ("SmallRadius", TokenKind::Length),
    ("Spacing8", TokenKind::Length),
    ("Spacing16", TokenKind::Length),
    ("Spacing24", TokenKind::Length),
    ("TitleText", TokenKind::Length),
    ("BodyText", TokenKind::Length),
    ("ModalWidth", TokenKind::Length),
];

/// Sign-in form state.
#[derive(Debug, Default)]
pub struct State {
    email: String,
    password: String,
    submitting: bool,
    error: Option<ApiError>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Stores the outcome of the sign-in request. On success the form is
    /// cleared for the next visit.
    pub fn sign_in_result(&mut self, result: Result<(), ApiError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.email.clear();
                self.password.clear();
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
    }
}

/// Messages emitted by the sign-in page.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The form was submitted; the parent issues the request.
    Submit(Credentials),
}

/// Process a sign-in page message.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::PasswordChanged(value) => {
            state.password = value;
            Event::None
        }
        Message::SubmitPressed => {
            if state.submitting {
                return Event::None;
            }
            state.submitting = true;
            state.error = None;
            Event::Submit(Credentials {
                email: state.email.clone(),
                password: state.password.clone(),
            })
        }
    }
}

/// Render the sign-in form.
pub fn view<'a>(state: &'a State, resolver: &'a Resolver, dark_mode: bool) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(resolver.length("Spacing16"))
        .align_x(Horizontal::Center)
        .width(Length::Fixed(resolver.length("ModalWidth")))
        .push(
            Text::new("Sign in")
                .size(resolver.length("TitleText"))
                .color(resolver.color("MainText", dark_mode)),
        )
        .push(
            text_input("Email", &state.email)
                .on_input(Message::EmailChanged)
                .padding(resolver.length("Spacing8"))
                .size(resolver.length("BodyText")),
        )
        .push(
            text_input("Password", &state.password)
                .secure(true)
                .on_input(Message::PasswordChanged)
                .on_submit(Message::SubmitPressed)
                .padding(resolver.length("Spacing8"))
                .size(resolver.length("BodyText")),
        );

    let submit_label = if state.submitting {
        "Signing in…"
    } else {
        "Sign in"
    };
    let mut submit = button(
        Text::new(submit_label)
            .size(resolver.length("BodyText"))
            .color(resolver.color("White", dark_mode)),
    )
    .style(styles::primary_button(
        resolver.color("Primary", dark_mode),
        resolver.color("White", dark_mode),
        resolver.length("SmallRadius"),
    ))
    .padding(resolver.length("Spacing8"));
    if !state.submitting {
        submit = submit.on_press(Message::SubmitPressed);
    }
    column = column.push(submit);

    if let Some(error) = &state.error {
        column = column.push(error_line(resolver, dark_mode, error));
    }

    Container::new(column)
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
    fn typing_updates_the_form_without_events() {
        let mut state = State::new();
        assert_eq!(
            update(&mut state, Message::EmailChanged("a@b.c".into())),
            Event::None
        );
        assert_eq!(
            update(&mut state, Message::PasswordChanged("pw".into())),
            Event::None
        );
        assert_eq!(state.email, "a@b.c");
        assert_eq!(state.password, "pw");
    }

    #[test]
    fn submit_emits_credentials_and_marks_submitting() {
        let mut state = State::new();
        let _ = update(&mut state, Message::EmailChanged("a@b.c".into()));
        let _ = update(&mut state, Message::PasswordChanged("pw".into()));

        let event = update(&mut state, Message::SubmitPressed);
        match event {
            Event::Submit(credentials) => {
                assert_eq!(credentials.email, "a@b.c");
                assert_eq!(credentials.password, "pw");
            }
            other => panic!("expected Submit, got {:?}", other),
        }
        assert!(state.is_submitting());
    }

    #[test]
    fn submit_while_submitting_is_absorbed() {
        let mut state = State::new();
        let _ = update(&mut state, Message::SubmitPressed);
        assert_eq!(update(&mut state, Message::SubmitPressed), Event::None);
    }

    #[test]
    fn rejected_sign_in_keeps_the_error_inline() {
        let mut state = State::new();
        let _ = update(&mut state, Message::SubmitPressed);

        state.sign_in_result(Err(ApiError::Unauthorized));
        assert!(!state.is_submitting());
        assert_eq!(state.error(), Some(&ApiError::Unauthorized));
    }

    #[test]
    fn successful_sign_in_clears_the_form() {
        let mut state = State::new();
        let _ = update(&mut state, Message::EmailChanged("a@b.c".into()));
        let _ = update(&mut state, Message::PasswordChanged("pw".into()));
        let _ = update(&mut state, Message::SubmitPressed);

        state.sign_in_result(Ok(()));
        assert!(state.email.is_empty());
        assert!(state.password.is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn view_renders_idle_submitting_and_error_states() {
        let resolver = theme::load().expect("embedded tokens should validate");
        let mut state = State::new();
        let _ = view(&state, &resolver, false);

        let _ = update(&mut state, Message::SubmitPressed);
        let _ = view(&state, &resolver, true);

        state.sign_in_result(Err(ApiError::Unauthorized));
        let _ = view(&state, &resolver, true);
    }
}
