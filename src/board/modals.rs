// SPDX-License-Identifier: MPL-2.0
//! Dialog visibility and preview content.

use crate::media::ImageSource;

/// Visibility of the three dialogs.
///
/// The flags are independent; nothing keeps more than one from being open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalFlags {
    pub edit_profile: bool,
    pub new_post: bool,
    pub preview: bool,
}

impl ModalFlags {
    pub fn close_all(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn any_open(&self) -> bool {
        self.edit_profile || self.new_post || self.preview
    }
}

/// Image and title shown by the preview dialog.
#[derive(Debug, Clone)]
pub struct Preview {
    pub image: ImageSource,
    pub title: String,
}

/// Blocking alerts. While one is shown it covers every dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    MissingCaption,
}

impl Alert {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Alert::MissingCaption => "alert-missing-caption",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_all_closes_every_subset() {
        for mask in 0..8u8 {
            let mut flags = ModalFlags {
                edit_profile: mask & 1 != 0,
                new_post: mask & 2 != 0,
                preview: mask & 4 != 0,
            };
            assert_eq!(flags.any_open(), mask != 0);
            flags.close_all();
            assert!(!flags.any_open());
        }
    }
}
