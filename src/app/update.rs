// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Component messages are forwarded to their component; what comes back
//! (effects, events) is turned into tasks here.

use super::Message;
use crate::board::{Profile, Ticket};
use crate::i18n::fluent::I18n;
use crate::media::{self, extensions::IMAGE_EXTENSIONS};
use crate::ui::footer::{self, Event as FooterEvent};
use crate::ui::main_panel::{self, Effect};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub panel: &'a mut main_panel::State,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: main_panel::Message,
) -> Task<Message> {
    let effect = ctx.panel.handle_message(message);
    run_effect(ctx, effect)
}

fn run_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::PickProfileImage => pick_image(
            ctx.i18n.tr("edit-profile-image-label"),
            main_panel::Message::ProfileImageChosen,
        ),
        Effect::PickPostImage => pick_image(
            ctx.i18n.tr("new-post-image-label"),
            main_panel::Message::PostImageChosen,
        ),
        Effect::DecodeProfileImage {
            ticket,
            path,
            pending,
        } => decode_profile_image(ticket, path, pending),
        Effect::DecodePostImage {
            ticket,
            path,
            title,
        } => decode_post_image(ticket, path, title),
        Effect::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
        Effect::CopyToClipboard(contents) => {
            tracing::debug!(size = contents.len(), "copying preview link");
            ctx.notifications
                .push(Notification::info("notification-link-copied"));
            iced::clipboard::write(contents)
        }
    }
}

/// Opens the native picker restricted to image files.
fn pick_image(
    title: String,
    to_message: fn(Option<PathBuf>) -> main_panel::Message,
) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::MainPanel(to_message(path)),
    )
}

fn decode_profile_image(ticket: Ticket, path: PathBuf, pending: Profile) -> Task<Message> {
    Task::perform(media::decode_file(path.clone()), move |result| {
        Message::MainPanel(main_panel::Message::ProfileImageDecoded {
            ticket,
            pending,
            path,
            result,
        })
    })
}

fn decode_post_image(ticket: Ticket, path: PathBuf, title: String) -> Task<Message> {
    Task::perform(media::decode_file(path.clone()), move |result| {
        Message::MainPanel(main_panel::Message::PostImageDecoded {
            ticket,
            title,
            path,
            result,
        })
    })
}

pub fn handle_footer_message(
    ctx: &mut UpdateContext<'_>,
    message: footer::Message,
) -> Task<Message> {
    match footer::update(message) {
        FooterEvent::LanguageChanged(locale) => {
            ctx.i18n.set_locale(locale);
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_effect_lands_in_the_manager() {
        let mut i18n = I18n::default();
        let mut panel = main_panel::State::default();
        let mut manager = notifications::Manager::new();
        let mut ctx = UpdateContext {
            i18n: &mut i18n,
            panel: &mut panel,
            notifications: &mut manager,
        };

        let _ = run_effect(
            &mut ctx,
            Effect::Notify(Notification::success("notification-post-created")),
        );
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn clipboard_effect_confirms_with_a_toast() {
        let mut i18n = I18n::default();
        let mut panel = main_panel::State::default();
        let mut manager = notifications::Manager::new();
        let mut ctx = UpdateContext {
            i18n: &mut i18n,
            panel: &mut panel,
            notifications: &mut manager,
        };

        let _ = run_effect(&mut ctx, Effect::CopyToClipboard("data:image/png;base64,".into()));
        assert!(manager
            .visible()
            .any(|n| n.message_key() == "notification-link-copied"));
    }
}
