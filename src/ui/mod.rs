// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`editor`] - Card composition form (content-type toggles, inputs, commands)
//! - [`preview_pane`] - Two-sided live preview card with flip
//! - [`notifications`] - Toast notification banner for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod editor;
pub mod notifications;
pub mod preview_pane;
pub mod theming;
