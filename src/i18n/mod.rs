// SPDX-License-Identifier: MPL-2.0
//! Internationalization support built on Fluent.
//!
//! UI chrome (labels, buttons, notifications) is localized; the preview
//! placeholder strings are part of the markup contract and stay literal.

pub mod fluent;
