// SPDX-License-Identifier: MPL-2.0
//! The main panel: profile, post creation and gallery.
//!
//! [`State`] owns the whole board. [`view`] draws the page and [`layers`]
//! draws the open dialogs, which the application stacks above the page,
//! header and footer included.

pub mod component;
mod dialogs;
mod view;

pub use component::{Effect, Message, State};
pub use dialogs::layers;
pub use view::{view, ViewEnv};
