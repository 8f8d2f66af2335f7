// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Frame interval while the banner is animating (~60 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes window resizes so the banner geometry follows the screen.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}

/// Emits animation ticks only while the banner needs them.
pub fn create_tick_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
