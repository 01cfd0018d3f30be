// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only native event the shell consumes is the window resize signal,
//! which feeds the viewport observer. The event itself carries the new
//! size, so the handler forwards the width and nothing else.

use super::Message;
use iced::{event, Subscription};

/// Creates the window event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = &event {
            return Some(Message::WindowResized(size.width as u32));
        }
        None
    })
}
