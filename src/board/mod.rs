// SPDX-License-Identifier: MPL-2.0
//! Board data model: profile, gallery, drafts, dialogs and edit sessions.
//!
//! Nothing here knows about iced messages or tasks; the main panel component
//! drives these types from user input.

pub mod drafts;
pub mod gallery;
pub mod modals;
pub mod profile;
pub mod seed;
pub mod session;

pub use drafts::{PostDraft, ProfileDraft};
pub use gallery::{Gallery, GalleryItem, ItemId};
pub use modals::{Alert, ModalFlags, Preview};
pub use profile::Profile;
pub use session::{LateDecodePolicy, SessionTracker, Ticket};
