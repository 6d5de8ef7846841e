// SPDX-License-Identifier: MPL-2.0
//! Two-sided live preview card.
//!
//! Shows exactly one face at a time (front unless flipped) and re-renders
//! on every form edit. Image content is fetched asynchronously; while the
//! fetch is in flight a loading box is shown, and a failed or unresolved
//! image falls back to the fixed "Image not found" box.

use crate::card::Side;
use crate::i18n::fluent::I18n;
use crate::preview::{render_side, SideView};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::image::Handle;
use iced::widget::{button, container, text, Column, Container, Image, Row};
use iced::{alignment, Element, Length, Theme};

/// Progress of the asynchronous image fetch for one face.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded(Handle),
    Failed,
}

/// The image currently associated with a face, keyed by the URL it was
/// requested for so stale fetch results can be discarded.
#[derive(Debug, Clone, Default, PartialEq)]
struct ImageSlot {
    url: Option<String>,
    state: FetchState,
}

#[derive(Debug, Clone, PartialEq)]
struct FaceState {
    view: SideView,
    slot: ImageSlot,
}

impl FaceState {
    fn new(side: Side) -> Self {
        Self {
            view: render_side(side, &Default::default()),
            slot: ImageSlot::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    FlipPressed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    flipped: bool,
    front: FaceState,
    back: FaceState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            flipped: false,
            front: FaceState::new(Side::Front),
            back: FaceState::new(Side::Back),
        }
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Back to front face, both faces showing placeholders.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Stores the freshly rendered view model for a face.
    ///
    /// Returns a URL when the face now shows an image that has not been
    /// fetched yet, so the caller can start the fetch.
    pub fn set_view(&mut self, side: Side, view: SideView) -> Option<String> {
        let face = self.face_mut(side);
        let new_url = view.image_url().map(str::to_owned);
        face.view = view;

        if face.slot.url == new_url {
            return None;
        }

        match new_url {
            Some(url) => {
                face.slot = ImageSlot {
                    url: Some(url.clone()),
                    state: FetchState::Loading,
                };
                Some(url)
            }
            None => {
                face.slot = ImageSlot::default();
                None
            }
        }
    }

    /// Records the result of an image fetch. Results for URLs the face no
    /// longer shows are ignored.
    pub fn resolve_image(&mut self, side: Side, url: &str, handle: Option<Handle>) {
        let face = self.face_mut(side);
        if face.slot.url.as_deref() != Some(url) {
            return;
        }
        face.slot.state = match handle {
            Some(handle) => FetchState::Loaded(handle),
            None => FetchState::Failed,
        };
    }

    pub fn view_model(&self, side: Side) -> &SideView {
        &self.face(side).view
    }

    pub fn fetch_state(&self, side: Side) -> &FetchState {
        &self.face(side).slot.state
    }

    fn face(&self, side: Side) -> &FaceState {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }

    fn face_mut(&mut self, side: Side) -> &mut FaceState {
        match side {
            Side::Front => &mut self.front,
            Side::Back => &mut self.back,
        }
    }
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::FlipPressed => state.flip(),
    }
}

/// Context for rendering the preview pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let visible_side = if ctx.state.is_flipped() {
        Side::Back
    } else {
        Side::Front
    };

    let title = text(ctx.i18n.tr("preview-title")).size(typography::TITLE_MD);

    let face_label_key = match visible_side {
        Side::Front => "preview-face-front",
        Side::Back => "preview-face-back",
    };
    let face_label = text(ctx.i18n.tr(face_label_key))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    let face = Container::new(face_content(ctx, visible_side))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_CARD_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::MD)
        .style(face_container_style);

    let flip_button = button(text(ctx.i18n.tr("button-flip")).size(typography::BODY))
        .on_press(Message::FlipPressed)
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XS, spacing::MD])
        .style(button::secondary);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(title).width(Length::Fill))
        .push(face_label);

    let column = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(face)
        .push(
            Container::new(flip_button)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        );

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .into()
}

fn face_content<'a>(ctx: &ViewContext<'a>, side: Side) -> Element<'a, Message> {
    match ctx.state.view_model(side) {
        SideView::Placeholder(message) => text(message.clone())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            })
            .into(),
        SideView::Text(value) => text(value.clone()).size(typography::BODY_LG).into(),
        SideView::Image { .. } => match ctx.state.fetch_state(side) {
            FetchState::Loaded(handle) => Image::new(handle.clone())
                .width(Length::Shrink)
                .height(Length::Fixed(sizing::IMAGE_FALLBACK_BOX))
                .into(),
            FetchState::Loading => fallback_box(ctx.i18n.tr("preview-image-loading")),
            FetchState::Idle | FetchState::Failed => fallback_box("Image not found".to_owned()),
        },
    }
}

/// Fixed 200x200 box standing in for an image that is loading or missing.
fn fallback_box<'a>(label: String) -> Element<'a, Message> {
    Container::new(text(label).size(typography::BODY_SM).style(|_theme: &Theme| {
        text::Style {
            color: Some(palette::GRAY_400),
        }
    }))
    .width(Length::Fixed(sizing::IMAGE_FALLBACK_BOX))
    .height(Length::Fixed(sizing::IMAGE_FALLBACK_BOX))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(|_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(palette::GRAY_100)),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

fn face_container_style(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak;

    container::Style {
        background: Some(iced::Background::Color(weak.color)),
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::SideFields;

    fn image_view(url: &str) -> SideView {
        render_side(
            Side::Front,
            &SideFields {
                content_type: crate::card::ContentType::Image,
                image_url: url.to_owned(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn flip_twice_returns_to_front() {
        let mut state = State::new();
        assert!(!state.is_flipped());
        state.flip();
        assert!(state.is_flipped());
        state.flip();
        assert!(!state.is_flipped());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = State::new();
        state.flip();
        state.set_view(Side::Front, image_view("https://example.com/a.png"));
        state.reset();
        assert_eq!(state, State::default());
    }

    #[test]
    fn set_view_requests_fetch_only_for_new_urls() {
        let mut state = State::new();
        let url = state.set_view(Side::Front, image_view("https://example.com/a.png"));
        assert_eq!(url.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(state.fetch_state(Side::Front), &FetchState::Loading);

        // Same URL again (e.g. alt text edited): no refetch
        let url = state.set_view(Side::Front, image_view("https://example.com/a.png"));
        assert_eq!(url, None);
    }

    #[test]
    fn stale_fetch_results_are_ignored() {
        let mut state = State::new();
        state.set_view(Side::Front, image_view("https://example.com/old.png"));
        state.set_view(Side::Front, image_view("https://example.com/new.png"));

        state.resolve_image(Side::Front, "https://example.com/old.png", None);
        assert_eq!(state.fetch_state(Side::Front), &FetchState::Loading);

        state.resolve_image(Side::Front, "https://example.com/new.png", None);
        assert_eq!(state.fetch_state(Side::Front), &FetchState::Failed);
    }

    #[test]
    fn clearing_the_url_empties_the_slot() {
        let mut state = State::new();
        state.set_view(Side::Front, image_view("https://example.com/a.png"));
        let url = state.set_view(Side::Front, render_side(Side::Front, &SideFields::default()));
        assert_eq!(url, None);
        assert_eq!(state.fetch_state(Side::Front), &FetchState::Idle);
    }
}
