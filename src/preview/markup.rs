// SPDX-License-Identifier: MPL-2.0
//! HTML rendering of the preview view model.
//!
//! Markup is what a composed card looks like embedded in a page; the create
//! command logs it at debug level alongside the JSON payload. Every
//! user-supplied string goes through [`escape_html`] before insertion, so a
//! crafted text, URL or alt value can never introduce new element or
//! attribute boundaries.

use super::SideView;

/// Inline SVG substituted by the `onerror` handler when an image URL cannot
/// be loaded: a fixed 200x200 neutral box reading "Image not found".
pub const FALLBACK_IMAGE_URI: &str = "data:image/svg+xml,%3Csvg xmlns=%27http://www.w3.org/2000/svg%27 width=%27200%27 height=%27200%27%3E%3Crect fill=%27%23ddd%27 width=%27200%27 height=%27200%27/%3E%3Ctext fill=%27%23999%27 x=%2750%25%27 y=%2750%25%27 text-anchor=%27middle%27 dy=%27.3em%27%3EImage not found%3C/text%3E%3C/svg%3E";

/// Escapes the five HTML-sensitive characters. Applied to every
/// user-supplied string, regardless of content type.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl SideView {
    /// Renders this face as HTML markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        match self {
            SideView::Placeholder(line) => {
                format!("<p class=\"placeholder\">{}</p>", escape_html(line))
            }
            SideView::Text(text) => format!("<p>{}</p>", escape_html(text)),
            SideView::Image { url, alt } => format!(
                "<img src=\"{}\" alt=\"{}\" onerror=\"this.src='{}'\">",
                escape_html(url),
                escape_html(alt),
                FALLBACK_IMAGE_URI,
            ),
        }
    }
}
