// SPDX-License-Identifier: MPL-2.0
//! Centralized SVG icon module.
//!
//! Icons are embedded as SVG markup and their handles are cached using
//! `OnceLock`, so each icon is parsed once. Icons are drawn in black and
//! tinted at render time with [`tinted`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `pencil` not `edit_profile`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Heart outline used as the un-liked toggle of every gallery card.
pub const HEART_OUTLINE_SVG: &str = r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"/></svg>"#;

const HEART_FILLED_SVG: &str = r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="black" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"/></svg>"#;

const LOGO_SVG: &str = r#"<svg viewBox="0 0 142 33" xmlns="http://www.w3.org/2000/svg"><text x="0" y="27" font-family="sans-serif" font-size="30" font-weight="700" letter-spacing="2" fill="black">SPOTS</text><circle cx="128" cy="16" r="8" fill="none" stroke="black" stroke-width="3"/><circle cx="128" cy="16" r="2.5" fill="black"/></svg>"#;

const PENCIL_SVG: &str = r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M17 3a2.83 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5z"/></svg>"#;

const PLUS_SVG: &str = r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="none" stroke="black" stroke-width="2.5" stroke-linecap="round"><path d="M12 5v14M5 12h14"/></svg>"#;

const CROSS_SVG: &str = r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="none" stroke="black" stroke-width="2.5" stroke-linecap="round"><path d="M18 6 6 18M6 6l12 12"/></svg>"#;

const COPY_SVG: &str = r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="9" y="9" width="13" height="13" rx="2"/><path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"/></svg>"#;

const CHECKMARK_SVG: &str = r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="none" stroke="black" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"><path d="M20 6 9 17l-5-5"/></svg>"#;

const INFO_SVG: &str = r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="none" stroke="black" stroke-width="2" stroke-linecap="round"><circle cx="12" cy="12" r="10"/><path d="M12 16v-4M12 8h.01"/></svg>"#;

const WARNING_SVG: &str = r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0zM12 9v4M12 17h.01"/></svg>"#;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Defines an icon function returning a cached handle.
macro_rules! define_icon {
    ($name:ident, $source:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a, Theme> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(logo, LOGO_SVG, "Wordmark shown in the header.");
define_icon!(heart_filled, HEART_FILLED_SVG, "Filled heart of a liked card.");
define_icon!(pencil, PENCIL_SVG, "Pencil, for edit buttons.");
define_icon!(plus, PLUS_SVG, "Plus sign, for create buttons.");
define_icon!(cross, CROSS_SVG, "Cross, for close buttons.");
define_icon!(copy, COPY_SVG, "Two overlapping sheets, for copy buttons.");
define_icon!(checkmark, CHECKMARK_SVG, "Check mark.");
define_icon!(info, INFO_SVG, "Circled i.");
define_icon!(warning, WARNING_SVG, "Triangle with exclamation mark.");

/// Renders SVG markup that is not one of the cached icons (card decorations).
pub fn from_markup<'a>(markup: &'static str) -> Svg<'a, Theme> {
    Svg::new(Handle::from_memory(markup.as_bytes()))
}

/// Sets an icon to a square size.
pub fn sized<'a>(icon: Svg<'a, Theme>, size: f32) -> Svg<'a, Theme> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with a fixed color.
pub fn tinted<'a>(icon: Svg<'a, Theme>, color: Color) -> Svg<'a, Theme> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

/// Tints an icon with the theme's text color.
pub fn themed<'a>(icon: Svg<'a, Theme>) -> Svg<'a, Theme> {
    icon.style(|theme: &Theme, _status| svg::Style {
        color: Some(theme.palette().text),
    })
}
