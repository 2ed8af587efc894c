// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page (header, main panel, footer) scrolls as one column. Open dialogs
//! and then toasts are stacked above it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::main_panel::{self, ViewEnv};
use crate::ui::notifications::{self, Toast};
use crate::ui::{footer, header};
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub panel: &'a main_panel::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let env = ViewEnv { i18n: ctx.i18n };

    let page = Column::new()
        .width(Length::Fill)
        .push(header::view(header::ViewContext { i18n: ctx.i18n }))
        .push(main_panel::view(ctx.panel, &env).map(Message::MainPanel))
        .push(footer::view(footer::ViewContext { i18n: ctx.i18n }).map(Message::Footer));

    let base = Container::new(scrollable(page).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new().push(base);

    for layer in main_panel::layers(ctx.panel, &env) {
        stack = stack.push(layer.map(Message::MainPanel));
    }

    stack
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
