// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the editor and preview.
//!
//! The `App` struct wires together the form editor, the live preview, and
//! the notification slot, and translates messages into side effects like
//! card emission or asynchronous image fetching. Policy decisions (window
//! sizing, the auto-clear delay) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::AUTO_CLEAR_DELAY;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::{editor, notifications, preview_pane};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    editor: editor::State,
    preview: preview_pane::State,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("flipped", &self.preview.is_flipped())
            .field("has_notification", &self.notifications.has_notification())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 620;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            editor: editor::State::new(),
            preview: preview_pane::State::new(),
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state from the config file and launcher flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load() {
            Ok(config) => (config, None),
            Err(error) => {
                log::warn!("Failed to load configuration: {error}");
                (
                    config::Config::default(),
                    Some("notification-config-load-error"),
                )
            }
        };

        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };
        app.theme_mode = config.theme_mode.unwrap_or_default();

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notification())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            editor: &mut self.editor,
            preview: &mut self.preview,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Editor(editor_message) => {
                update::handle_editor_message(&mut ctx, editor_message)
            }
            Message::Preview(preview_message) => {
                update::handle_preview_message(&mut ctx, preview_message);
                Task::none()
            }
            Message::ImageFetched { side, url, result } => {
                update::handle_image_fetched(&mut ctx, side, &url, result);
                Task::none()
            }
            Message::AutoClear => {
                update::clear_form(&mut ctx);
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&view::ViewContext {
            i18n: &self.i18n,
            editor: &self.editor,
            preview: &self.preview,
            notifications: &self.notifications,
        })
    }
}
