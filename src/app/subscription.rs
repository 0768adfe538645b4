// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::media::{self, MediaSource};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};
use std::time::Duration;

/// Routes keyboard shortcuts that no widget captured.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(named @ Named::Space),
                ..
            }) => Some(Message::KeyPressed(named)),
            _ => None,
        }
    })
}

/// Media element subscription, dropped once loading has failed.
pub fn create_media_subscription(
    source: &MediaSource,
    session_id: u64,
    time_update_interval: Duration,
    failed: bool,
) -> Subscription<Message> {
    if failed {
        Subscription::none()
    } else {
        media::media_events(source.clone(), session_id, time_update_interval).map(Message::Media)
    }
}
