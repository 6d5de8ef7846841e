// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! A single notification slot with severity levels. Successes auto-dismiss
//! after a few seconds; pushing a new notification while one is visible
//! replaces it and restarts the dismissal timer. Errors stay until the user
//! dismisses them.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
