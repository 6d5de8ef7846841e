// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and startup flags.

use crate::card::Side;
use crate::error::Error;
use crate::preview::remote::FetchedImage;
use crate::ui::{editor, notifications, preview_pane};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Editor(editor::Message),
    Preview(preview_pane::Message),
    Notification(notifications::NotificationMessage),
    /// An asynchronous image fetch finished. Carries the URL it was started
    /// for so stale results can be discarded.
    ImageFetched {
        side: Side,
        url: String,
        result: Result<FetchedImage, Error>,
    },
    /// Fires one second after a successful create to clear the form.
    AutoClear,
    Tick(Instant),
}

/// Startup configuration from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub lang: Option<String>,
}
