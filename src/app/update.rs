// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Handlers borrow the pieces of state they need through [`UpdateContext`]
//! and return tasks for any asynchronous follow-up work.

use super::message::Message;
use crate::card::{CardDraft, Side};
use crate::preview::{remote, render_side};
use crate::ui::notifications::Notification;
use crate::ui::{editor, notifications, preview_pane};
use iced::Task;
use std::time::Duration;

/// Delay between a successful create and the automatic form clear.
pub const AUTO_CLEAR_DELAY: Duration = Duration::from_secs(1);

/// Mutable borrows of the application state for one update step.
pub struct UpdateContext<'a> {
    pub editor: &'a mut editor::State,
    pub preview: &'a mut preview_pane::State,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_editor_message(ctx: &mut UpdateContext, message: editor::Message) -> Task<Message> {
    match editor::update(ctx.editor, message) {
        editor::Event::Edited => sync_preview_images(ctx),
        editor::Event::CreateRequested => create_card(ctx),
        editor::Event::ClearRequested => {
            clear_form(ctx);
            Task::none()
        }
    }
}

pub fn handle_preview_message(ctx: &mut UpdateContext, message: preview_pane::Message) {
    preview_pane::update(ctx.preview, message);
}

pub fn handle_image_fetched(
    ctx: &mut UpdateContext,
    side: Side,
    url: &str,
    result: Result<remote::FetchedImage, crate::error::Error>,
) {
    let handle = match result {
        Ok(fetched) => {
            log::debug!(
                "Fetched preview image for {side}: {url} ({}x{})",
                fetched.width,
                fetched.height
            );
            Some(fetched.handle)
        }
        Err(error) => {
            log::warn!("Failed to fetch preview image for {side}: {url}: {error}");
            None
        }
    };
    ctx.preview.resolve_image(side, url, handle);
}

/// Validates the form and, when both sides have content, emits the card
/// and schedules the delayed form clear.
pub fn create_card(ctx: &mut UpdateContext) -> Task<Message> {
    match CardDraft::from_form(ctx.editor.form()) {
        Ok(draft) => {
            emit_card(&draft, ctx.editor.form());
            ctx.notifications
                .push(Notification::success("notification-card-created"));
            Task::perform(tokio::time::sleep(AUTO_CLEAR_DELAY), |_| Message::AutoClear)
        }
        Err(error) => {
            log::info!("Create rejected: {error}");
            ctx.notifications
                .push(Notification::error("notification-create-missing-content"));
            Task::none()
        }
    }
}

/// Resets the form and the preview back to their initial state.
pub fn clear_form(ctx: &mut UpdateContext) {
    ctx.editor.reset();
    ctx.preview.reset();
}

/// Re-renders both preview faces from the current form and starts fetches
/// for any newly referenced image URLs.
pub fn sync_preview_images(ctx: &mut UpdateContext) -> Task<Message> {
    let mut tasks = Vec::new();
    for &side in Side::all() {
        let view = render_side(side, ctx.editor.form().side(side));
        if let Some(url) = ctx.preview.set_view(side, view) {
            tasks.push(Task::perform(remote::fetch(url.clone()), move |result| {
                Message::ImageFetched {
                    side,
                    url: url.clone(),
                    result,
                }
            }));
        }
    }
    Task::batch(tasks)
}

fn emit_card(draft: &CardDraft, form: &crate::card::FormState) {
    match serde_json::to_string(draft) {
        Ok(payload) => log::info!("Card created: {payload}"),
        Err(error) => log::error!("Failed to serialize card payload: {error}"),
    }
    for &side in Side::all() {
        let markup = render_side(side, form.side(side)).to_markup();
        log::debug!("Preview markup for {side}: {markup}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ContentType;

    fn context<'a>(
        editor: &'a mut editor::State,
        preview: &'a mut preview_pane::State,
        notifications: &'a mut notifications::Manager,
    ) -> UpdateContext<'a> {
        UpdateContext {
            editor,
            preview,
            notifications,
        }
    }

    #[test]
    fn create_with_empty_form_pushes_an_error_and_keeps_state() {
        let mut editor = editor::State::new();
        let mut preview = preview_pane::State::new();
        let mut notifications = notifications::Manager::new();
        let mut ctx = context(&mut editor, &mut preview, &mut notifications);

        let _ = create_card(&mut ctx);

        let current = notifications.current().expect("error notification");
        assert_eq!(current.message_key(), "notification-create-missing-content");
        assert_eq!(editor.form(), &crate::card::FormState::default());
    }

    #[tokio::test]
    async fn create_with_both_sides_filled_pushes_success() {
        let mut editor = editor::State::new();
        let mut preview = preview_pane::State::new();
        let mut notifications = notifications::Manager::new();

        editor::update(
            &mut editor,
            editor::Message::TextChanged(Side::Front, "What is ownership?".into()),
        );
        editor::update(
            &mut editor,
            editor::Message::TextChanged(Side::Back, "A set of rules the compiler checks.".into()),
        );

        let mut ctx = context(&mut editor, &mut preview, &mut notifications);
        let _ = create_card(&mut ctx);

        let current = notifications.current().expect("success notification");
        assert_eq!(current.message_key(), "notification-card-created");
    }

    #[test]
    fn clear_resets_editor_and_preview() {
        let mut editor = editor::State::new();
        let mut preview = preview_pane::State::new();
        let mut notifications = notifications::Manager::new();

        editor::update(
            &mut editor,
            editor::Message::TextChanged(Side::Front, "draft".into()),
        );
        preview.flip();

        let mut ctx = context(&mut editor, &mut preview, &mut notifications);
        clear_form(&mut ctx);

        assert_eq!(editor.form(), &crate::card::FormState::default());
        assert!(!preview.is_flipped());
    }

    #[test]
    fn editing_an_image_url_marks_the_face_loading() {
        let mut editor = editor::State::new();
        let mut preview = preview_pane::State::new();
        let mut notifications = notifications::Manager::new();

        editor::update(
            &mut editor,
            editor::Message::ContentTypeSelected(Side::Back, ContentType::Image),
        );
        editor::update(
            &mut editor,
            editor::Message::ImageUrlChanged(Side::Back, "https://example.com/a.png".into()),
        );

        let mut ctx = context(&mut editor, &mut preview, &mut notifications);
        let _ = sync_preview_images(&mut ctx);

        assert_eq!(
            preview.fetch_state(Side::Back),
            &preview_pane::FetchState::Loading
        );
        assert_eq!(
            preview.fetch_state(Side::Front),
            &preview_pane::FetchState::Idle
        );
    }
}
