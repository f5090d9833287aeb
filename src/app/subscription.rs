// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.
//!
//! Window and pointer events are routed to the banner queue. Releases are
//! listened to globally so a swipe that leaves the banner still ends.

use super::Message;
use crate::ui::notifications;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Frame interval while a banner is animating or waiting.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Polling interval for specs sent through a `Notifier` while idle.
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// Routes window and pointer events to the queue.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        let message = match event {
            event::Event::Window(window::Event::Resized(size)) => {
                notifications::Message::SurfaceResized(size)
            }
            event::Event::Window(window::Event::Closed) => {
                notifications::Message::SurfaceDetached
            }
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                notifications::Message::PointerMoved(position)
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                notifications::Message::Released
            }
            _ => return None,
        };
        Some(Message::Banner(message))
    })
}

/// Creates the periodic tick driving banner animations and timers.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    let interval = if has_notifications {
        FRAME_INTERVAL
    } else {
        IDLE_INTERVAL
    };
    time::every(interval).map(|now| Message::Banner(notifications::Message::Tick(now)))
}
