// SPDX-License-Identifier: MPL-2.0
//! Unsaved form input of the two editing dialogs.
//!
//! The bio and the caption are multi-line. Each keeps the editor buffer the
//! dialog renders plus the plain text read back from it after every edit.

use crate::config::{CAPTION_MAX_CHARS, CAPTION_MIN_CHARS};
use iced::widget::text_editor;
use std::fmt;
use std::path::PathBuf;

/// Plain text of an editor buffer.
fn editor_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    // Drop the line ending reported after the last line.
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

/// Draft of the edit-profile form.
#[derive(Default)]
pub struct ProfileDraft {
    pub name: String,
    bio: String,
    bio_editor: text_editor::Content,
    /// Image file chosen as the new avatar.
    pub image: Option<PathBuf>,
}

impl fmt::Debug for ProfileDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileDraft")
            .field("name", &self.name)
            .field("bio", &self.bio)
            .field("image", &self.image)
            .finish()
    }
}

impl ProfileDraft {
    #[must_use]
    pub fn bio(&self) -> &str {
        &self.bio
    }

    #[must_use]
    pub fn bio_editor(&self) -> &text_editor::Content {
        &self.bio_editor
    }

    /// Applies an editor action to the bio. Enter inserts a line break.
    pub fn edit_bio(&mut self, action: text_editor::Action) {
        let is_edit = action.is_edit();
        self.bio_editor.perform(action);
        if is_edit {
            self.bio = editor_text(&self.bio_editor);
        }
    }

    /// Returns true if nothing was typed or chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.bio.is_empty() && self.image.is_none()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Draft of the new-post form.
#[derive(Default)]
pub struct PostDraft {
    caption: String,
    editor: text_editor::Content,
    pub image: Option<PathBuf>,
}

impl fmt::Debug for PostDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostDraft")
            .field("caption", &self.caption)
            .field("image", &self.image)
            .finish()
    }
}

impl PostDraft {
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    #[must_use]
    pub fn editor(&self) -> &text_editor::Content {
        &self.editor
    }

    /// Applies an editor action to the caption.
    ///
    /// An edit that would push the caption past the maximum length is cut
    /// back to it, with the cursor left at the end.
    pub fn edit_caption(&mut self, action: text_editor::Action) {
        let is_edit = action.is_edit();
        self.editor.perform(action);
        if !is_edit {
            return;
        }

        let text = editor_text(&self.editor);
        if text.chars().count() > CAPTION_MAX_CHARS {
            self.set_caption(&text);
        } else {
            self.caption = text;
        }
    }

    /// Replaces the caption, dropping characters past the maximum length.
    pub fn set_caption(&mut self, caption: &str) {
        self.caption = caption.chars().take(CAPTION_MAX_CHARS).collect();
        self.editor = text_editor::Content::with_text(&self.caption);
        self.editor
            .perform(text_editor::Action::Move(text_editor::Motion::DocumentEnd));
    }

    /// Returns true if the caption has something besides whitespace.
    #[must_use]
    pub fn has_caption(&self) -> bool {
        !self.caption.trim().is_empty()
    }

    /// Form-level validity: an image is attached and the caption is either
    /// empty or within the length bounds.
    ///
    /// Submit handlers do not re-check this; it only gates the submit control.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        let len = self.caption.chars().count();
        self.image.is_some() && (len == 0 || (CAPTION_MIN_CHARS..=CAPTION_MAX_CHARS).contains(&len))
    }

    /// Returns true if nothing was typed or chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.caption.is_empty() && self.image.is_none()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text_editor::{Action, Edit};
    use std::sync::Arc;

    fn paste(text: &str) -> Action {
        Action::Edit(Edit::Paste(Arc::new(text.to_string())))
    }

    #[test]
    fn caption_is_capped_at_max_chars() {
        let mut draft = PostDraft::default();
        draft.set_caption(&"é".repeat(CAPTION_MAX_CHARS + 10));
        assert_eq!(draft.caption().chars().count(), CAPTION_MAX_CHARS);
    }

    #[test]
    fn typing_past_the_cap_is_cut_back() {
        let mut draft = PostDraft::default();
        draft.edit_caption(paste(&"a".repeat(CAPTION_MAX_CHARS - 1)));
        draft.edit_caption(paste("bcd"));

        let expected = format!("{}b", "a".repeat(CAPTION_MAX_CHARS - 1));
        assert_eq!(draft.caption(), expected);
        assert_eq!(editor_text(draft.editor()), expected);
    }

    #[test]
    fn caption_keeps_line_breaks() {
        let mut draft = PostDraft::default();
        draft.edit_caption(paste("Sunset\nover the lake"));
        assert_eq!(draft.caption(), "Sunset\nover the lake");

        draft.edit_caption(Action::Edit(Edit::Enter));
        draft.edit_caption(paste("again"));
        assert_eq!(draft.caption(), "Sunset\nover the lake\nagain");
    }

    #[test]
    fn cursor_moves_do_not_touch_the_text() {
        let mut draft = ProfileDraft::default();
        draft.edit_bio(paste("Diver"));
        draft.edit_bio(Action::Move(text_editor::Motion::DocumentStart));
        assert_eq!(draft.bio(), "Diver");
    }

    #[test]
    fn bio_keeps_line_breaks() {
        let mut draft = ProfileDraft::default();
        draft.edit_bio(paste("line one\nline two"));
        assert_eq!(draft.bio(), "line one\nline two");
    }

    #[test]
    fn whitespace_caption_is_not_a_caption() {
        let mut draft = PostDraft::default();
        draft.set_caption("   ");
        assert!(!draft.has_caption());
        draft.set_caption(" Sunset ");
        assert!(draft.has_caption());
    }

    #[test]
    fn submittable_requires_image() {
        let mut draft = PostDraft::default();
        draft.set_caption("Sunset");
        assert!(!draft.is_submittable());

        draft.image = Some(PathBuf::from("sunset.png"));
        assert!(draft.is_submittable());
    }

    #[test]
    fn submittable_checks_caption_length() {
        let mut draft = PostDraft {
            image: Some(PathBuf::from("a.png")),
            ..PostDraft::default()
        };

        // Empty captions pass the form rules; the submit handler rejects them.
        assert!(draft.is_submittable());

        draft.set_caption("x");
        assert!(!draft.is_submittable());

        draft.set_caption("xy");
        assert!(draft.is_submittable());
    }

    #[test]
    fn reset_clears_everything() {
        let mut profile = ProfileDraft {
            name: "n".into(),
            image: Some(PathBuf::from("me.png")),
            ..ProfileDraft::default()
        };
        profile.edit_bio(paste("b"));
        assert!(!profile.is_empty());
        profile.reset();
        assert!(profile.is_empty());
        assert_eq!(editor_text(profile.bio_editor()), "");

        let mut post = PostDraft::default();
        post.set_caption("hello");
        post.image = Some(PathBuf::from("x.png"));
        post.reset();
        assert!(post.is_empty());
        assert_eq!(editor_text(post.editor()), "");
    }
}
