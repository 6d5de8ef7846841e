// SPDX-License-Identifier: MPL-2.0
//! Card composition form.
//!
//! Two stacked sections, one per card side. Each section carries a
//! content-type toggle (text or image) and the matching input fields, with
//! the create/clear command row underneath. Inputs for the non-selected
//! content type keep their values so toggling back restores them.

use crate::card::{ContentType, FormState, Side};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, radio, text, text_input, Column, Container, Row};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ContentTypeSelected(Side, ContentType),
    TextChanged(Side, String),
    ImageUrlChanged(Side, String),
    AltTextChanged(Side, String),
    CreatePressed,
    ClearPressed,
}

/// Outcome of handling a message, for the parent to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Form content changed; the preview should be re-rendered.
    Edited,
    CreateRequested,
    ClearRequested,
}

#[derive(Debug, Default)]
pub struct State {
    form: FormState,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn reset(&mut self) {
        self.form.reset();
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ContentTypeSelected(side, content_type) => {
            state.form.set_content_type(side, content_type);
            Event::Edited
        }
        Message::TextChanged(side, value) => {
            state.form.set_text(side, value);
            Event::Edited
        }
        Message::ImageUrlChanged(side, value) => {
            state.form.set_image_url(side, value);
            Event::Edited
        }
        Message::AltTextChanged(side, value) => {
            state.form.set_alt_text(side, value);
            Event::Edited
        }
        Message::CreatePressed => Event::CreateRequested,
        Message::ClearPressed => Event::ClearRequested,
    }
}

/// Context for rendering the editor.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("editor-title")).size(typography::TITLE_MD);

    let column = Column::new()
        .spacing(spacing::LG)
        .push(title)
        .push(side_section(ctx, Side::Front))
        .push(side_section(ctx, Side::Back))
        .push(action_row(ctx));

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .into()
}

fn side_section<'a>(ctx: &ViewContext<'a>, side: Side) -> Element<'a, Message> {
    let fields = ctx.state.form().side(side);

    let title_key = match side {
        Side::Front => "side-front-title",
        Side::Back => "side-back-title",
    };
    let title = text(ctx.i18n.tr(title_key)).size(typography::TITLE_SM);

    let type_toggle = Row::new()
        .spacing(spacing::MD)
        .push(radio(
            ctx.i18n.tr("content-type-text"),
            ContentType::Text,
            Some(fields.content_type),
            move |content_type| Message::ContentTypeSelected(side, content_type),
        ))
        .push(radio(
            ctx.i18n.tr("content-type-image"),
            ContentType::Image,
            Some(fields.content_type),
            move |content_type| Message::ContentTypeSelected(side, content_type),
        ));

    // Only the inputs for the selected content type are shown; the hidden
    // ones keep their values in FormState.
    let inputs: Element<'a, Message> = match fields.content_type {
        ContentType::Text => {
            let placeholder_key = match side {
                Side::Front => "front-text-placeholder",
                Side::Back => "back-text-placeholder",
            };
            text_input(&ctx.i18n.tr(placeholder_key), &fields.text)
                .on_input(move |value| Message::TextChanged(side, value))
                .size(typography::BODY_LG)
                .into()
        }
        ContentType::Image => Column::new()
            .spacing(spacing::XS)
            .push(
                text_input(&ctx.i18n.tr("image-url-placeholder"), &fields.image_url)
                    .on_input(move |value| Message::ImageUrlChanged(side, value))
                    .size(typography::BODY_LG),
            )
            .push(
                text_input(&ctx.i18n.tr("alt-text-placeholder"), &fields.alt_text)
                    .on_input(move |value| Message::AltTextChanged(side, value))
                    .size(typography::BODY),
            )
            .into(),
    };

    Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(type_toggle)
        .push(inputs)
        .into()
}

fn action_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let create = button(text(ctx.i18n.tr("button-create")).size(typography::BODY))
        .on_press(Message::CreatePressed)
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XS, spacing::MD])
        .style(button::primary);

    let clear = button(text(ctx.i18n.tr("button-clear")).size(typography::BODY))
        .on_press(Message::ClearPressed)
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XS, spacing::MD])
        .style(button::secondary);

    Row::new().spacing(spacing::SM).push(create).push(clear).into()
}
