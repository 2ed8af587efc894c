// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the page components (header, main panel, footer)
//! to localization, notifications and the theme, and turns the main panel's
//! effects into tasks: file pickers, image decodes and clipboard writes.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::board::{seed, Profile};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageSource};
use crate::ui::main_panel;
use crate::ui::notifications::{self, Notification};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    panel: main_panel::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Resolved once at startup; `system` is not re-detected while running.
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("items", &self.panel.gallery().len())
            .field("modals", &self.panel.modals())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            panel: main_panel::State::default(),
            notifications: notifications::Manager::new(),
            theme: Theme::Light,
        }
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 700;

/// Builds the window settings.
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
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the initial state from settings, the seed and the CLI flags.
    ///
    /// Nothing here fails: unreadable settings, avatar or seed fall back to
    /// defaults and leave a warning toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.clone().map(PathBuf::from));
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut notifications = notifications::Manager::new();

        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let avatar = config
            .profile
            .avatar
            .as_deref()
            .and_then(|path| load_avatar(path, &mut notifications));

        let manifest = flags
            .seed
            .map(PathBuf::from)
            .or_else(|| config.gallery.seed_manifest.clone());
        let (seed, seed_warning) = seed::resolve(manifest.as_deref());
        if let Some(key) = seed_warning {
            notifications.push(Notification::warning(key));
        }

        let profile = Profile::new(config.profile.display_name(), config.profile.bio())
            .with_avatar(avatar);
        let panel = main_panel::State::new(
            profile,
            seed,
            config.forms.late_decode,
            config.gallery.columns(),
        );

        tracing::info!(
            locale = %i18n.current_locale(),
            items = panel.gallery().len(),
            columns = panel.columns(),
            late_decode = ?config.forms.late_decode,
            "board ready"
        );

        let app = App {
            i18n,
            panel,
            notifications,
            theme: config.general.theme_mode.to_theme(),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            panel: &mut self.panel,
            notifications: &mut self.notifications,
        };

        match message {
            Message::MainPanel(panel_message) => {
                update::handle_panel_message(&mut ctx, panel_message)
            }
            Message::EscapePressed => {
                update::handle_panel_message(&mut ctx, main_panel::Message::EscapePressed)
            }
            Message::Footer(footer_message) => {
                update::handle_footer_message(&mut ctx, footer_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            panel: &self.panel,
            notifications: &self.notifications,
        })
    }
}

fn load_avatar(path: &Path, notifications: &mut notifications::Manager) -> Option<ImageSource> {
    match media::load_file(path) {
        Ok(image) => Some(image),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring configured avatar");
            let file = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            notifications.push(
                Notification::warning("notification-avatar-load-error").with_arg("file", file),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::footer;
    use crate::ui::notifications::Severity;
    use tempfile::tempdir;

    fn flags_in(dir: &Path) -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(dir.display().to_string()),
            seed: None,
        }
    }

    #[test]
    fn new_without_settings_uses_defaults() {
        let dir = tempdir().expect("tempdir");
        let (app, _task) = App::new(flags_in(dir.path()));

        assert_eq!(app.panel.profile().display_name, config::DEFAULT_DISPLAY_NAME);
        assert_eq!(app.panel.gallery().len(), seed::built_in().len());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn new_reads_profile_and_columns_from_settings() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("settings.toml"),
            "[profile]\ndisplay_name = \"Cousteau\"\n\n[gallery]\ncolumns = 2\n",
        )
        .expect("write settings");

        let (app, _task) = App::new(flags_in(dir.path()));
        assert_eq!(app.panel.profile().display_name, "Cousteau");
        assert_eq!(app.panel.columns(), 2);
    }

    #[test]
    fn broken_settings_and_avatar_leave_warnings() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(dir.path().join("settings.toml"), "[general]\ntheme_mode = \"sepia\"\n")
            .expect("write settings");

        let (app, _task) = App::new(flags_in(dir.path()));
        let keys: Vec<_> = app
            .notifications
            .visible()
            .map(|n| (n.severity(), n.message_key().to_string()))
            .collect();
        assert_eq!(
            keys,
            [(Severity::Warning, "notification-config-load-error".to_string())]
        );

        let dir = tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("settings.toml"),
            "[profile]\navatar = \"missing.png\"\n",
        )
        .expect("write settings");
        let (app, _task) = App::new(flags_in(dir.path()));
        assert!(app.panel.profile().avatar.is_none());
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-avatar-load-error"));
    }

    #[test]
    fn escape_is_forwarded_to_the_panel() {
        let mut app = App::default();
        let _ = app.update(Message::MainPanel(main_panel::Message::OpenNewPost));
        assert!(app.panel.modals().new_post);

        let _ = app.update(Message::EscapePressed);
        assert!(!app.panel.modals().any_open());
    }

    #[test]
    fn profile_submission_without_image_shows_success_toast() {
        let mut app = App::default();
        let _ = app.update(Message::MainPanel(main_panel::Message::OpenEditProfile));
        let _ = app.update(Message::MainPanel(main_panel::Message::ProfileNameChanged(
            "New name".into(),
        )));
        let _ = app.update(Message::MainPanel(main_panel::Message::SubmitProfile));

        assert_eq!(app.panel.profile().display_name, "New name");
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-profile-updated"));
    }

    #[test]
    fn footer_switches_language_and_title() {
        let mut app = App::default();
        let fr = footer::language_options(&app.i18n)
            .into_iter()
            .find(|option| option.locale.language.as_str() == "fr")
            .expect("french is bundled");

        let _ = app.update(Message::Footer(footer::Message::LanguageSelected(fr)));
        assert_eq!(app.i18n.current_locale().to_string(), "fr");
        assert!(!app.title().starts_with("MISSING"));
    }
}
