// SPDX-License-Identifier: MPL-2.0
//! `spots` is a small profile and photo gallery page built with the Iced GUI
//! framework.
//!
//! A profile (name, bio, avatar) sits above a grid of photos. Photos can be
//! liked, previewed and posted from local image files; the profile can be
//! edited. Everything lives in memory for the lifetime of the window.

pub mod app;
pub mod board;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod ui;
