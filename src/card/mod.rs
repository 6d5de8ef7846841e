// SPDX-License-Identifier: MPL-2.0
//! Domain model for the card being composed.
//!
//! Everything here is UI-free: the editor component owns a [`FormState`] and
//! the preview renderer reads it, but no Iced types or widget concerns appear
//! in this module. [`CardDraft`] is the shape handed across the submission
//! boundary once a card validates.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// One face of a flashcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
}

impl Side {
    /// Both sides, for iteration.
    pub const fn all() -> &'static [Side] {
        &[Side::Front, Side::Back]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content kind selected for a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Text,
    Image,
}

/// Raw input values for one side of the form.
///
/// Values belonging to the inactive content type are retained so switching
/// back restores them, but they are never rendered or submitted while
/// inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideFields {
    pub content_type: ContentType,
    pub text: String,
    pub image_url: String,
    pub alt_text: String,
}

impl SideFields {
    /// Trimmed primary value for the active content type: the text value for
    /// `Text`, the URL for `Image`.
    #[must_use]
    pub fn primary_value(&self) -> &str {
        match self.content_type {
            ContentType::Text => self.text.trim(),
            ContentType::Image => self.image_url.trim(),
        }
    }

    /// Whether this side has no submittable content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary_value().is_empty()
    }
}

/// The whole form: both sides' raw values and selected content types.
///
/// Created with defaults at startup (both sides `Text`, all fields empty),
/// mutated on every keystroke or selection change, and reset by the Clear
/// command or one second after a successful create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub front: SideFields,
    pub back: SideFields,
}

impl FormState {
    #[must_use]
    pub fn side(&self, side: Side) -> &SideFields {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideFields {
        match side {
            Side::Front => &mut self.front,
            Side::Back => &mut self.back,
        }
    }

    /// Selects the active content type for `side`. No validation of prior
    /// content happens; stale values in the deactivated inputs are kept.
    pub fn set_content_type(&mut self, side: Side, content_type: ContentType) {
        self.side_mut(side).content_type = content_type;
    }

    pub fn set_text(&mut self, side: Side, value: String) {
        self.side_mut(side).text = value;
    }

    pub fn set_image_url(&mut self, side: Side, value: String) {
        self.side_mut(side).image_url = value;
    }

    pub fn set_alt_text(&mut self, side: Side, value: String) {
        self.side_mut(side).alt_text = value;
    }

    /// Resets every field to its startup default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Raised when Create is pressed while a primary value is missing.
///
/// Handled locally with a user-visible notification; never logged, retried
/// or escalated. The form stays untouched so the user can edit and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub front_missing: bool,
    pub back_missing: bool,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.front_missing, self.back_missing) {
            (true, true) => write!(f, "both front and back content are missing"),
            (true, false) => write!(f, "front content is missing"),
            (false, true) => write!(f, "back content is missing"),
            (false, false) => write!(f, "card content is valid"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Submitted content for one side of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideContent {
    Text { value: String },
    Image { url: String, alt_text: Option<String> },
}

impl SideContent {
    /// Derives the submittable content from raw fields, or `None` when the
    /// primary value is empty. Values are trimmed; a blank alt text becomes
    /// an absent one.
    fn from_fields(fields: &SideFields) -> Option<Self> {
        match fields.content_type {
            ContentType::Text => {
                let value = fields.text.trim();
                (!value.is_empty()).then(|| SideContent::Text {
                    value: value.to_owned(),
                })
            }
            ContentType::Image => {
                let url = fields.image_url.trim();
                if url.is_empty() {
                    return None;
                }
                let alt = fields.alt_text.trim();
                Some(SideContent::Image {
                    url: url.to_owned(),
                    alt_text: (!alt.is_empty()).then(|| alt.to_owned()),
                })
            }
        }
    }
}

// Wire shape: a text side serializes as a bare string, an image side as
// `{"type":"image","value":...,"alt_text":...}` with `alt_text` omitted when
// absent. Downstream consumers rely on these field names.
impl Serialize for SideContent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SideContent::Text { value } => serializer.serialize_str(value),
            SideContent::Image { url, alt_text } => {
                let len = if alt_text.is_some() { 3 } else { 2 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("type", "image")?;
                map.serialize_entry("value", url)?;
                if let Some(alt) = alt_text {
                    map.serialize_entry("alt_text", alt)?;
                }
                map.end()
            }
        }
    }
}

/// The in-memory, not-yet-submitted card, derived on demand from the form.
/// Never persisted here; the serialized shape is the contract with whatever
/// persistence layer gets attached later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDraft {
    pub front: SideContent,
    pub back: SideContent,
}

impl CardDraft {
    /// Derives a submittable draft from the current form values.
    ///
    /// A draft only exists when both sides have a non-empty primary value;
    /// otherwise the error reports which sides are missing content.
    pub fn from_form(form: &FormState) -> Result<Self, ValidationError> {
        let front = SideContent::from_fields(&form.front);
        let back = SideContent::from_fields(&form.back);
        match (front, back) {
            (Some(front), Some(back)) => Ok(CardDraft { front, back }),
            (front, back) => Err(ValidationError {
                front_missing: front.is_none(),
                back_missing: back.is_none(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        let mut form = FormState::default();
        form.set_text(Side::Front, "What is Rust?".to_owned());
        form.set_content_type(Side::Back, ContentType::Image);
        form.set_image_url(Side::Back, "https://example.com/crab.png".to_owned());
        form
    }

    #[test]
    fn default_form_has_text_type_and_empty_fields() {
        let form = FormState::default();
        for &side in Side::all() {
            let fields = form.side(side);
            assert_eq!(fields.content_type, ContentType::Text);
            assert!(fields.text.is_empty());
            assert!(fields.image_url.is_empty());
            assert!(fields.alt_text.is_empty());
        }
    }

    #[test]
    fn toggling_content_type_retains_stale_values() {
        let mut form = FormState::default();
        form.set_text(Side::Front, "hidden text".to_owned());
        form.set_content_type(Side::Front, ContentType::Image);

        assert_eq!(form.front.text, "hidden text");
        assert!(form.front.is_empty());

        form.set_content_type(Side::Front, ContentType::Text);
        assert_eq!(form.front.primary_value(), "hidden text");
    }

    #[test]
    fn reset_restores_defaults_after_any_edits() {
        let mut form = filled_form();
        form.set_alt_text(Side::Back, "a crab".to_owned());
        form.reset();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn draft_requires_both_sides() {
        let mut form = FormState::default();
        form.set_text(Side::Back, "answer".to_owned());

        let err = CardDraft::from_form(&form).unwrap_err();
        assert!(err.front_missing);
        assert!(!err.back_missing);
    }

    #[test]
    fn whitespace_only_primary_value_is_missing() {
        let mut form = filled_form();
        form.set_text(Side::Front, "   \t".to_owned());

        let err = CardDraft::from_form(&form).unwrap_err();
        assert!(err.front_missing);
    }

    #[test]
    fn validation_failure_leaves_form_untouched() {
        let form = FormState::default();
        let before = form.clone();
        let _ = CardDraft::from_form(&form);
        assert_eq!(form, before);
    }

    #[test]
    fn draft_trims_values() {
        let mut form = filled_form();
        form.set_text(Side::Front, "  Q1  ".to_owned());

        let draft = CardDraft::from_form(&form).expect("draft should validate");
        assert_eq!(
            draft.front,
            SideContent::Text {
                value: "Q1".to_owned()
            }
        );
    }

    #[test]
    fn blank_alt_text_becomes_absent() {
        let mut form = filled_form();
        form.set_alt_text(Side::Back, "   ".to_owned());

        let draft = CardDraft::from_form(&form).expect("draft should validate");
        assert_eq!(
            draft.back,
            SideContent::Image {
                url: "https://example.com/crab.png".to_owned(),
                alt_text: None,
            }
        );
    }

    #[test]
    fn text_side_serializes_as_bare_string() {
        let content = SideContent::Text {
            value: "Q1".to_owned(),
        };
        let json = serde_json::to_value(&content).expect("serialization should succeed");
        assert_eq!(json, serde_json::json!("Q1"));
    }

    #[test]
    fn image_side_serializes_with_type_tag() {
        let content = SideContent::Image {
            url: "https://example.com/crab.png".to_owned(),
            alt_text: Some("a crab".to_owned()),
        };
        let json = serde_json::to_value(&content).expect("serialization should succeed");
        assert_eq!(
            json,
            serde_json::json!({
                "type": "image",
                "value": "https://example.com/crab.png",
                "alt_text": "a crab",
            })
        );
    }

    #[test]
    fn image_side_omits_missing_alt_text() {
        let content = SideContent::Image {
            url: "https://example.com/crab.png".to_owned(),
            alt_text: None,
        };
        let json = serde_json::to_value(&content).expect("serialization should succeed");
        assert_eq!(
            json,
            serde_json::json!({
                "type": "image",
                "value": "https://example.com/crab.png",
            })
        );
    }

    #[test]
    fn draft_payload_matches_submission_contract() {
        let draft = CardDraft::from_form(&filled_form()).expect("draft should validate");
        let json = serde_json::to_value(&draft).expect("serialization should succeed");
        assert_eq!(
            json,
            serde_json::json!({
                "front": "What is Rust?",
                "back": {
                    "type": "image",
                    "value": "https://example.com/crab.png",
                },
            })
        );
    }

    #[test]
    fn validation_error_display_names_missing_sides() {
        let err = ValidationError {
            front_missing: true,
            back_missing: true,
        };
        assert_eq!(format!("{err}"), "both front and back content are missing");
    }
}
