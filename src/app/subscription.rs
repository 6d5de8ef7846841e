// SPDX-License-Identifier: MPL-2.0
//! Application subscriptions.

use super::message::Message;
use iced::time;
use iced::Subscription;
use std::time::Duration;

/// Ticks drive notification auto-dismissal; the subscription only runs
/// while a notification is visible.
pub fn create_tick_subscription(has_notification: bool) -> Subscription<Message> {
    if has_notification {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
