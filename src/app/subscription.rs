// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::ANIMATION_TICK_MS;
use crate::ui::otp_form;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Routes window close requests and key presses.
///
/// Close requests let the app flush diagnostics first. Key presses are
/// forwarded whatever their status, since the focused slot captures them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            Some(Message::Form(otp_form::Message::KeyPressed(key)))
        }
        _ => None,
    })
}

/// Drives the toast border animation; idle when nothing is on screen.
pub fn create_tick_subscription(has_toast: bool) -> Subscription<Message> {
    if has_toast {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
