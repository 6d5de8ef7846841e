// SPDX-License-Identifier: MPL-2.0
//! CardCraft is a flashcard-creation studio built with the Iced GUI framework.
//!
//! A form composes the front and back of a card, each side holding plain
//! text or an image URL with alt text, while a live preview pane
//! renders the draft and can be flipped. Creating a card validates the draft
//! and emits it as a JSON payload; persistence is left to a future backend.

pub mod app;
pub mod card;
pub mod config;
pub mod error;
pub mod i18n;
pub mod preview;
pub mod ui;
