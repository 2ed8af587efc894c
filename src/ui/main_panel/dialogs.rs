// SPDX-License-Identifier: MPL-2.0
//! Dialogs of the main panel and the blocking alert.
//!
//! Each dialog is a full-window layer: a dimmed backdrop that swallows input
//! with the dialog centered on it. Layers are returned bottom to top.

use super::component::{Message, State};
use super::view::ViewEnv;
use crate::board::{Alert, PostDraft, Preview, ProfileDraft};
use crate::config::CAPTION_MAX_CHARS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{
    button, center, container, image, opaque, text_editor, text_input, Column, Container, Row,
    Space, Text,
};
use iced::{alignment, ContentFit, Element, Length};
use std::path::Path;

/// Overlay layers for every open dialog, alert last.
pub fn layers<'a>(state: &'a State, env: &ViewEnv<'a>) -> Vec<Element<'a, Message>> {
    let modals = state.modals();
    let mut layers = Vec::new();

    if modals.edit_profile {
        layers.push(backdrop(edit_profile(state.profile_draft(), env.i18n)));
    }
    if modals.new_post {
        layers.push(backdrop(new_post(state.post_draft(), env.i18n)));
    }
    if modals.preview {
        if let Some(preview) = state.preview() {
            layers.push(backdrop(preview_dialog(preview, env.i18n)));
        }
    }
    if let Some(alert) = state.alert() {
        layers.push(backdrop(alert_dialog(alert, env.i18n)));
    }

    layers
}

fn backdrop<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    opaque(center(opaque(content)).style(styles::container::backdrop))
}

fn title_bar<'a>(title: String, on_close: Message) -> Element<'a, Message> {
    Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(title)
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(close_button(on_close))
        .into()
}

fn close_button<'a>(on_close: Message) -> Element<'a, Message> {
    button(icons::themed(icons::sized(icons::cross(), sizing::ICON_MD)))
        .on_press(on_close)
        .padding(spacing::XXS)
        .style(styles::button::ghost)
        .into()
}

fn labeled<'a>(label: String, field: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(field)
        .into()
}

/// "Browse" button plus the chosen file name.
fn file_field<'a>(
    chosen: Option<&Path>,
    on_browse: Message,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let name = chosen
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| i18n.tr("form-no-file-chosen"));

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            button(Text::new(i18n.tr("form-browse-button")).size(typography::BODY))
                .on_press(on_browse)
                .style(styles::button::secondary),
        )
        .push(Text::new(name).size(typography::BODY));

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::file_field)
        .into()
}

/// Multi-line field; Enter inserts a line break and never submits.
fn text_area<'a>(
    content: &'a text_editor::Content,
    on_action: fn(text_editor::Action) -> Message,
) -> Element<'a, Message> {
    text_editor(content)
        .on_action(on_action)
        .height(Length::Fixed(sizing::TEXT_AREA_HEIGHT))
        .size(typography::BODY_LG)
        .padding(spacing::XS)
        .into()
}

fn dialog<'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(content.spacing(spacing::MD))
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::modal)
        .into()
}

fn edit_profile<'a>(draft: &'a ProfileDraft, i18n: &'a I18n) -> Element<'a, Message> {
    let name = text_input("", &draft.name)
        .on_input(Message::ProfileNameChanged)
        .on_submit(Message::SubmitProfile)
        .size(typography::BODY_LG)
        .padding(spacing::XS);

    let bio = text_area(draft.bio_editor(), Message::ProfileBioEdited);

    let submit = button(Text::new(i18n.tr("edit-profile-submit")))
        .on_press(Message::SubmitProfile)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    dialog(
        Column::new()
            .push(title_bar(
                i18n.tr("edit-profile-title"),
                Message::CloseEditProfile,
            ))
            .push(labeled(i18n.tr("edit-profile-name-label"), name))
            .push(labeled(i18n.tr("edit-profile-bio-label"), bio))
            .push(labeled(
                i18n.tr("edit-profile-image-label"),
                file_field(
                    draft.image.as_deref(),
                    Message::BrowseProfileImage,
                    i18n,
                ),
            ))
            .push(submit),
    )
}

fn new_post<'a>(draft: &'a PostDraft, i18n: &'a I18n) -> Element<'a, Message> {
    let submit_message = draft.is_submittable().then_some(Message::SubmitPost);

    let caption = text_area(draft.editor(), Message::CaptionEdited);

    let counter = Text::new(format!(
        "{}/{}",
        draft.caption().chars().count(),
        CAPTION_MAX_CHARS
    ))
    .size(typography::CAPTION);

    let submit = button(Text::new(i18n.tr("new-post-submit")))
        .on_press_maybe(submit_message)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    dialog(
        Column::new()
            .push(title_bar(i18n.tr("new-post-title"), Message::CloseNewPost))
            .push(labeled(
                i18n.tr("new-post-image-label"),
                file_field(draft.image.as_deref(), Message::BrowsePostImage, i18n),
            ))
            .push(labeled(i18n.tr("new-post-caption-label"), caption))
            .push(
                Container::new(counter)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            )
            .push(submit),
    )
}

fn preview_dialog<'a>(preview: &'a Preview, i18n: &'a I18n) -> Element<'a, Message> {
    let picture = image(preview.image.handle().clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Shrink)
        .height(Length::Shrink);

    let picture = Container::new(picture)
        .max_width(sizing::PREVIEW_MAX_WIDTH)
        .max_height(sizing::PREVIEW_MAX_HEIGHT);

    let copy_button = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(icons::themed(icons::sized(icons::copy(), sizing::ICON_SM)))
            .push(Text::new(i18n.tr("preview-copy-link")).size(typography::CAPTION)),
    )
    .on_press(Message::CopyPreviewLink)
    .padding([spacing::XXS, spacing::XS])
    .style(styles::button::ghost);

    let caption = container(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(preview.title.as_str()).size(typography::BODY_LG))
            .push(copy_button),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::container::preview_caption);

    let top = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(
            container(close_button(Message::ClosePreview))
                .style(styles::container::preview_caption),
        );

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Left)
            .push(top)
            .push(picture)
            .push(caption),
    )
    .max_width(sizing::PREVIEW_MAX_WIDTH)
    .style(styles::container::preview)
    .into()
}

fn alert_dialog<'a>(alert: Alert, i18n: &'a I18n) -> Element<'a, Message> {
    let ok = button(Text::new(i18n.tr("alert-ok")))
        .on_press(Message::DismissAlert)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(icons::tinted(
                icons::sized(icons::warning(), sizing::ICON_MD),
                crate::ui::design_tokens::palette::WARNING_500,
            ))
            .push(Text::new(i18n.tr(alert.i18n_key())).size(typography::BODY_LG))
            .push(
                Container::new(ok)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            ),
    )
    .width(Length::Fixed(sizing::ALERT_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::alert)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{LateDecodePolicy, Profile};
    use crate::config::Config;

    fn env_state() -> (I18n, State) {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let state = State::new(Profile::new("a", "b"), Vec::new(), LateDecodePolicy::Apply, 3);
        (i18n, state)
    }

    #[test]
    fn no_layers_when_nothing_is_open() {
        let (i18n, state) = env_state();
        assert!(layers(&state, &ViewEnv { i18n: &i18n }).is_empty());
    }

    #[test]
    fn one_layer_per_open_dialog_plus_alert() {
        let (i18n, mut state) = env_state();
        state.handle_message(Message::OpenEditProfile);
        state.handle_message(Message::OpenNewPost);
        state.handle_message(Message::SubmitPost);

        assert_eq!(layers(&state, &ViewEnv { i18n: &i18n }).len(), 3);
    }
}
