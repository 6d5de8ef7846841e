// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition.

use super::message::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{self, Toast};
use crate::ui::{editor, preview_pane};
use iced::widget::{Row, Stack};
use iced::{Element, Length};

/// References to everything the view needs to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub editor: &'a editor::State,
    pub preview: &'a preview_pane::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let editor = editor::view(&editor::ViewContext {
        i18n: ctx.i18n,
        state: ctx.editor,
    })
    .map(Message::Editor);

    let preview = preview_pane::view(&preview_pane::ViewContext {
        i18n: ctx.i18n,
        state: ctx.preview,
    })
    .map(Message::Preview);

    let content = Row::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(iced::widget::container(editor).width(Length::FillPortion(1)))
        .push(iced::widget::container(preview).width(Length::FillPortion(1)));

    let overlay = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(overlay)
        .into()
}
