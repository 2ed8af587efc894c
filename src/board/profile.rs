// SPDX-License-Identifier: MPL-2.0
//! The profile shown at the top of the board.

use super::drafts::ProfileDraft;
use crate::media::ImageSource;

#[derive(Debug, Clone)]
pub struct Profile {
    pub display_name: String,
    pub bio: String,
    /// `None` renders the placeholder avatar.
    pub avatar: Option<ImageSource>,
}

impl Profile {
    pub fn new(display_name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            bio: bio.into(),
            avatar: None,
        }
    }

    #[must_use]
    pub fn with_avatar(mut self, avatar: Option<ImageSource>) -> Self {
        self.avatar = avatar;
        self
    }

    /// Returns a copy with the draft's text fields applied.
    ///
    /// A field is overwritten only when its draft is non-blank after trimming;
    /// the stored value is the draft as typed. The avatar is left alone.
    #[must_use]
    pub fn with_text_from(&self, draft: &ProfileDraft) -> Profile {
        let mut updated = self.clone();
        if !draft.name.trim().is_empty() {
            updated.display_name = draft.name.clone();
        }
        if !draft.bio().trim().is_empty() {
            updated.bio = draft.bio().to_string();
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text_editor::{Action, Edit};
    use std::sync::Arc;

    fn draft(name: &str, bio: &str) -> ProfileDraft {
        let mut draft = ProfileDraft::default();
        draft.name = name.to_string();
        if !bio.is_empty() {
            draft.edit_bio(Action::Edit(Edit::Paste(Arc::new(bio.to_string()))));
        }
        draft
    }

    #[test]
    fn blank_fields_keep_previous_values() {
        let profile = Profile::new("Jacques", "Explorer");
        let updated = profile.with_text_from(&draft("   ", "\t\n"));
        assert_eq!(updated.display_name, "Jacques");
        assert_eq!(updated.bio, "Explorer");
    }

    #[test]
    fn fields_update_independently() {
        let profile = Profile::new("Jacques", "Explorer");

        let renamed = profile.with_text_from(&draft("Jacques Cousteau", ""));
        assert_eq!(renamed.display_name, "Jacques Cousteau");
        assert_eq!(renamed.bio, "Explorer");

        let rebio = profile.with_text_from(&draft("", "Oceanographer"));
        assert_eq!(rebio.display_name, "Jacques");
        assert_eq!(rebio.bio, "Oceanographer");
    }

    #[test]
    fn multi_line_bio_is_kept_as_typed() {
        let profile = Profile::new("a", "b");
        let updated = profile.with_text_from(&draft("", "line one\nline two"));
        assert_eq!(updated.bio, "line one\nline two");
    }

    #[test]
    fn stored_text_is_not_trimmed() {
        let profile = Profile::new("a", "b");
        let updated = profile.with_text_from(&draft("  Padded  ", ""));
        assert_eq!(updated.display_name, "  Padded  ");
    }
}
