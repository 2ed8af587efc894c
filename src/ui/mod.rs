// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: a
//! component renders from borrowed state and reports user input as messages;
//! anything beyond its own state is returned to the application as an effect
//! or an event.
//!
//! # Page
//!
//! - [`header`] - Logo
//! - [`main_panel`] - Profile, post creation, gallery and their dialogs
//! - [`footer`] - Footer line and language selector
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icons

pub mod design_tokens;
pub mod footer;
pub mod header;
pub mod icons;
pub mod main_panel;
pub mod notifications;
pub mod styles;
pub mod theming;
