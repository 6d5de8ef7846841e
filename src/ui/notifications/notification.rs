// SPDX-License-Identifier: MPL-2.0
//! Notification data model.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Severity level of a notification, controlling color and auto-dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Default lifetime before auto-dismissal. Errors require explicit
    /// dismissal.
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A single notification with a localizable message key.
#[derive(Debug, Clone)]
pub struct Notification {
    severity: Severity,
    message_key: String,
    created_at: Instant,
    custom_dismiss_duration: Option<Duration>,
}

impl Notification {
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            created_at: Instant::now(),
            custom_dismiss_duration: None,
        }
    }

    /// Overrides the severity's default dismissal timeout.
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Whether this notification has outlived its dismissal timeout.
    pub fn should_auto_dismiss(&self) -> bool {
        let timeout = self
            .custom_dismiss_duration
            .or_else(|| self.severity.auto_dismiss_duration());
        match timeout {
            Some(duration) => self.age() >= duration,
            None => false,
        }
    }
}
