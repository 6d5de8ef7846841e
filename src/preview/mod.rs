// SPDX-License-Identifier: MPL-2.0
//! Pure preview rendering: maps raw form values to a per-side view model.
//!
//! [`render_side`] is idempotent and side-effect free; the app re-derives
//! both sides on every edit and content-type toggle. The native preview pane
//! displays the view model directly and [`markup`] renders the equivalent
//! HTML.

pub mod markup;
pub mod remote;

use crate::card::{ContentType, Side, SideFields};

/// Alt text used when the alt field is blank.
pub const DEFAULT_IMAGE_ALT: &str = "Card image";

/// Rendered model for one preview face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideView {
    /// Nothing to show yet; carries the placeholder line for this side.
    Placeholder(String),
    Text(String),
    Image { url: String, alt: String },
}

impl SideView {
    /// The image URL this face wants displayed, if any.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        match self {
            SideView::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}

/// Placeholder line shown while a side has no content.
#[must_use]
pub fn placeholder(side: Side, content_type: ContentType) -> String {
    match content_type {
        ContentType::Text => format!("Your {side} content will appear here..."),
        ContentType::Image => format!("Your {side} image will appear here..."),
    }
}

/// Renders one side of the preview from its raw field values.
///
/// Text values are trimmed; an empty result falls back to the placeholder.
/// Image URLs are trimmed likewise, and a blank alt text falls back to
/// [`DEFAULT_IMAGE_ALT`].
#[must_use]
pub fn render_side(side: Side, fields: &SideFields) -> SideView {
    match fields.content_type {
        ContentType::Text => {
            let text = fields.text.trim();
            if text.is_empty() {
                SideView::Placeholder(placeholder(side, ContentType::Text))
            } else {
                SideView::Text(text.to_owned())
            }
        }
        ContentType::Image => {
            let url = fields.image_url.trim();
            if url.is_empty() {
                SideView::Placeholder(placeholder(side, ContentType::Image))
            } else {
                let alt = fields.alt_text.trim();
                SideView::Image {
                    url: url.to_owned(),
                    alt: if alt.is_empty() {
                        DEFAULT_IMAGE_ALT.to_owned()
                    } else {
                        alt.to_owned()
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_renders_side_specific_placeholder() {
        let fields = SideFields::default();
        assert_eq!(
            render_side(Side::Front, &fields),
            SideView::Placeholder("Your front content will appear here...".to_owned())
        );
        assert_eq!(
            render_side(Side::Back, &fields),
            SideView::Placeholder("Your back content will appear here...".to_owned())
        );
    }

    #[test]
    fn empty_image_url_renders_image_placeholder() {
        let fields = SideFields {
            content_type: ContentType::Image,
            ..SideFields::default()
        };
        assert_eq!(
            render_side(Side::Back, &fields),
            SideView::Placeholder("Your back image will appear here...".to_owned())
        );
    }

    #[test]
    fn text_value_is_trimmed() {
        let fields = SideFields {
            text: "  hello  ".to_owned(),
            ..SideFields::default()
        };
        assert_eq!(
            render_side(Side::Front, &fields),
            SideView::Text("hello".to_owned())
        );
    }

    #[test]
    fn whitespace_only_text_falls_back_to_placeholder() {
        let fields = SideFields {
            text: "   ".to_owned(),
            ..SideFields::default()
        };
        assert!(matches!(
            render_side(Side::Front, &fields),
            SideView::Placeholder(_)
        ));
    }

    #[test]
    fn blank_alt_text_falls_back_to_card_image() {
        let fields = SideFields {
            content_type: ContentType::Image,
            image_url: "https://example.com/a.png".to_owned(),
            alt_text: "  ".to_owned(),
            ..SideFields::default()
        };
        assert_eq!(
            render_side(Side::Front, &fields),
            SideView::Image {
                url: "https://example.com/a.png".to_owned(),
                alt: DEFAULT_IMAGE_ALT.to_owned(),
            }
        );
    }

    #[test]
    fn provided_alt_text_is_kept() {
        let fields = SideFields {
            content_type: ContentType::Image,
            image_url: "https://example.com/a.png".to_owned(),
            alt_text: "a diagram".to_owned(),
            ..SideFields::default()
        };
        let SideView::Image { alt, .. } = render_side(Side::Front, &fields) else {
            panic!("expected an image view");
        };
        assert_eq!(alt, "a diagram");
    }

    #[test]
    fn inactive_type_values_are_ignored() {
        // Text is active; the stale image URL must not leak into the view.
        let fields = SideFields {
            image_url: "https://example.com/stale.png".to_owned(),
            ..SideFields::default()
        };
        assert!(matches!(
            render_side(Side::Front, &fields),
            SideView::Placeholder(_)
        ));
    }

    #[test]
    fn rendering_is_idempotent() {
        let fields = SideFields {
            text: "same".to_owned(),
            ..SideFields::default()
        };
        assert_eq!(
            render_side(Side::Front, &fields),
            render_side(Side::Front, &fields)
        );
    }
}
