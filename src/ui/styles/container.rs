// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed layer behind an open dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Dialog surface.
pub fn modal(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Dialog holding only a picture; no surface of its own.
pub fn preview(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Caption strip under the preview image.
pub fn preview_caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Thin rule separating the profile from the gallery, and the footer.
pub fn divider(theme: &Theme) -> container::Style {
    let is_dark = theme.extended_palette().is_dark;

    container::Style {
        background: Some(Background::Color(if is_dark {
            palette::GRAY_700
        } else {
            palette::GRAY_200
        })),
        ..Default::default()
    }
}

/// Drop zone showing the chosen file in a form.
pub fn file_field(theme: &Theme) -> container::Style {
    let text = theme.palette().text;

    container::Style {
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Blocking alert, accented like an error toast.
pub fn alert(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            color: palette::WARNING_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
