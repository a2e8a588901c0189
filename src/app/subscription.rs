// SPDX-License-Identifier: MPL-2.0
//! Periodic ticks for animations and toast timers.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks drive the splash spinner and notification auto-dismiss.
///
/// Nothing is scheduled when neither needs it.
pub fn create_tick_subscription(
    fonts_loading: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if fonts_loading {
        time::every(Duration::from_millis(50)).map(Message::Tick)
    } else if has_notifications {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
