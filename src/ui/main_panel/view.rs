// SPDX-License-Identifier: MPL-2.0
//! Page content of the main panel: the profile section and the gallery grid.

use super::component::{Message, State};
use crate::board::GalleryItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, image, text, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let rule = container(Space::new().height(Length::Fixed(1.0)))
        .width(Length::Fill)
        .style(styles::container::divider);

    Column::new()
        .spacing(spacing::XL)
        .padding([spacing::LG, spacing::XXL])
        .width(Length::Fill)
        .push(profile_section(state, env.i18n))
        .push(rule)
        .push(gallery(state))
        .into()
}

fn profile_section<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let profile = state.profile();

    let avatar = image(state.avatar().handle().clone())
        .width(Length::Fixed(sizing::AVATAR))
        .height(Length::Fixed(sizing::AVATAR))
        .content_fit(ContentFit::Cover);

    let edit_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::themed(icons::sized(icons::pencil(), sizing::ICON_SM)))
            .push(Text::new(i18n.tr("profile-edit-button")).size(typography::BODY)),
    )
    .on_press(Message::OpenEditProfile)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::secondary);

    let details = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::PROFILE_TEXT_WIDTH))
        .push(Text::new(profile.display_name.as_str()).size(typography::TITLE_LG))
        .push(
            Text::new(profile.bio.as_str())
                .size(typography::BODY)
                .style(text::secondary),
        )
        .push(edit_button);

    let new_post_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::tinted(
                icons::sized(icons::plus(), sizing::ICON_SM),
                palette::WHITE,
            ))
            .push(Text::new(i18n.tr("profile-new-post-button")).size(typography::BODY)),
    )
    .on_press(Message::OpenNewPost)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary);

    Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Bottom)
        .push(avatar)
        .push(details)
        .push(Space::new().width(Length::Fill))
        .push(new_post_button)
        .into()
}

/// Cards laid out in rows of the configured column count.
fn gallery(state: &State) -> Element<'_, Message> {
    let columns = state.columns();
    let items = state.gallery().items();

    let rows: Vec<Element<'_, Message>> = items
        .chunks(columns)
        .map(|chunk| {
            chunk
                .iter()
                .fold(Row::new().spacing(spacing::LG), |row, item| row.push(card(item)))
                .into()
        })
        .collect();

    Container::new(Column::with_children(rows).spacing(spacing::LG))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn card(item: &GalleryItem) -> Element<'_, Message> {
    let picture = button(
        image(item.image().handle().clone())
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover),
    )
    .padding(0)
    .on_press(Message::OpenPreview(item.id()))
    .style(styles::button::bare);

    let heart = if item.is_liked() {
        icons::tinted(icons::heart_filled(), palette::LIKE_RED)
    } else {
        icons::themed(icons::from_markup(item.icon()))
    };

    let like_button = button(icons::sized(heart, sizing::ICON_MD))
        .padding(spacing::XXS)
        .on_press(Message::ToggleLike(item.id()))
        .style(styles::button::ghost);

    let caption = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(item.title())
                .size(typography::BODY_LG)
                .width(Length::Fill),
        )
        .push(like_button);

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .push(picture)
        .push(caption)
        .into()
}
