// SPDX-License-Identifier: MPL-2.0
//! Page footer: a static line of text and the language selector.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, pick_list, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};
use std::fmt;
use unic_langid::LanguageIdentifier;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageOption),
}

#[derive(Debug, Clone)]
pub enum Event {
    LanguageChanged(LanguageIdentifier),
}

/// Entry of the language picker, shown by its native name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub locale: LanguageIdentifier,
    label: String,
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(option) => Event::LanguageChanged(option.locale),
    }
}

/// Picker entries, in the order the locales were loaded.
#[must_use]
pub fn language_options(i18n: &I18n) -> Vec<LanguageOption> {
    i18n.available_locales
        .iter()
        .map(|locale| LanguageOption {
            locale: locale.clone(),
            label: native_name(locale),
        })
        .collect()
}

fn native_name(locale: &LanguageIdentifier) -> String {
    match locale.language.as_str() {
        "en" => "English".to_string(),
        "fr" => "Français".to_string(),
        _ => locale.to_string(),
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let options = language_options(ctx.i18n);
    let selected = options
        .iter()
        .find(|option| &option.locale == ctx.i18n.current_locale())
        .cloned();

    let picker = pick_list(options, selected, Message::LanguageSelected)
        .text_size(typography::CAPTION)
        .padding([spacing::XXS, spacing::XS]);

    let line = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("footer-text")).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(ctx.i18n.tr("footer-language-label")).size(typography::CAPTION))
        .push(picker);

    let rule = container(Space::new().height(Length::Fixed(1.0)))
        .width(Length::Fill)
        .style(styles::container::divider);

    Column::new()
        .push(rule)
        .push(
            Container::new(line)
                .width(Length::Fill)
                .padding([spacing::MD, spacing::XXL]),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn options_cover_every_loaded_locale() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let options = language_options(&i18n);
        assert_eq!(options.len(), i18n.available_locales.len());
        assert!(options.iter().any(|o| o.to_string() == "Français"));
    }

    #[test]
    fn selecting_a_language_reports_its_locale() {
        let fr: LanguageIdentifier = "fr".parse().expect("valid locale");
        let option = LanguageOption {
            locale: fr.clone(),
            label: native_name(&fr),
        };
        let Event::LanguageChanged(locale) = update(Message::LanguageSelected(option));
        assert_eq!(locale, fr);
    }
}
