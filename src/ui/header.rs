// SPDX-License-Identifier: MPL-2.0
//! Page header: the logo, nothing else.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use iced::widget::{tooltip, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the header. It emits no messages.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let logo = icons::themed(icons::logo())
        .width(Length::Fixed(sizing::LOGO_WIDTH))
        .height(Length::Fixed(sizing::LOGO_HEIGHT));

    let logo = tooltip(
        logo,
        Text::new(ctx.i18n.tr("header-logo-alt")),
        tooltip::Position::Bottom,
    );

    Container::new(logo)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .padding([spacing::LG, spacing::XXL])
        .into()
}
