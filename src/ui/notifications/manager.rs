// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! Holds at most one notification at a time. Pushing while another is
//! visible replaces it, and because each notification carries its own
//! creation instant the dismissal timer restarts from the replacement.

use super::notification::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Dismiss,
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    current: Option<Notification>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, replacing any currently visible one.
    pub fn push(&mut self, notification: Notification) {
        self.current = Some(notification);
    }

    /// Dismisses the current notification. Returns whether one was visible.
    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Drops the current notification once its timeout elapses.
    pub fn tick(&mut self) {
        if self
            .current
            .as_ref()
            .is_some_and(Notification::should_auto_dismiss)
        {
            self.current = None;
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss => {
                self.dismiss();
            }
            Message::Tick => self.tick(),
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn has_notification(&self) -> bool {
        self.current.is_some()
    }
}
