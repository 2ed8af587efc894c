// SPDX-License-Identifier: MPL-2.0
//! Main panel component: owns the board and every behavior of the page.
//!
//! The component never touches the outside world. File pickers, decodes,
//! toasts and the clipboard are requested through [`Effect`] and carried out
//! by the application, which feeds results back as messages.

use crate::board::seed::SeedEntry;
use crate::board::{
    Alert, Gallery, ItemId, LateDecodePolicy, ModalFlags, PostDraft, Preview, Profile,
    ProfileDraft, SessionTracker, Ticket,
};
use crate::config::{DEFAULT_GALLERY_COLUMNS, MAX_GALLERY_COLUMNS, MIN_GALLERY_COLUMNS};
use crate::error::Error;
use crate::media::{placeholder, ImageSource};
use crate::ui::notifications::Notification;
use iced::widget::text_editor;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum Message {
    OpenEditProfile,
    CloseEditProfile,
    ProfileNameChanged(String),
    /// Bio editor input; Enter inserts a line break.
    ProfileBioEdited(text_editor::Action),
    BrowseProfileImage,
    /// `None` when the picker was cancelled.
    ProfileImageChosen(Option<PathBuf>),
    SubmitProfile,
    ProfileImageDecoded {
        ticket: Ticket,
        /// Profile computed when the form was submitted, minus the avatar.
        pending: Profile,
        path: PathBuf,
        result: Result<ImageSource, Error>,
    },

    OpenNewPost,
    CloseNewPost,
    CaptionEdited(text_editor::Action),
    BrowsePostImage,
    PostImageChosen(Option<PathBuf>),
    SubmitPost,
    PostImageDecoded {
        ticket: Ticket,
        title: String,
        path: PathBuf,
        result: Result<ImageSource, Error>,
    },

    ToggleLike(ItemId),
    OpenPreview(ItemId),
    ClosePreview,
    CopyPreviewLink,

    DismissAlert,
    EscapePressed,
}

/// Side effects the application performs after a message was handled.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    PickProfileImage,
    PickPostImage,
    DecodeProfileImage {
        ticket: Ticket,
        path: PathBuf,
        pending: Profile,
    },
    DecodePostImage {
        ticket: Ticket,
        path: PathBuf,
        title: String,
    },
    Notify(Notification),
    CopyToClipboard(String),
}

/// Everything the page shows and edits.
#[derive(Debug)]
pub struct State {
    profile: Profile,
    gallery: Gallery,
    modals: ModalFlags,
    preview: Option<Preview>,
    alert: Option<Alert>,
    profile_draft: ProfileDraft,
    post_draft: PostDraft,
    profile_sessions: SessionTracker,
    post_sessions: SessionTracker,
    late_decode: LateDecodePolicy,
    columns: usize,
    placeholder_avatar: ImageSource,
}

impl Default for State {
    fn default() -> Self {
        Self::new(
            Profile::new(
                crate::config::DEFAULT_DISPLAY_NAME,
                crate::config::DEFAULT_BIO,
            ),
            Vec::new(),
            LateDecodePolicy::default(),
            DEFAULT_GALLERY_COLUMNS,
        )
    }
}

impl State {
    /// Builds the board from an initial profile and the seed entries, in order.
    pub fn new(
        profile: Profile,
        seed: Vec<SeedEntry>,
        late_decode: LateDecodePolicy,
        columns: usize,
    ) -> Self {
        let mut gallery = Gallery::new();
        gallery.extend(seed.into_iter().map(|entry| (entry.image, entry.title)));

        Self {
            profile,
            gallery,
            modals: ModalFlags::default(),
            preview: None,
            alert: None,
            profile_draft: ProfileDraft::default(),
            post_draft: PostDraft::default(),
            profile_sessions: SessionTracker::default(),
            post_sessions: SessionTracker::default(),
            late_decode,
            columns: columns.clamp(MIN_GALLERY_COLUMNS, MAX_GALLERY_COLUMNS),
            placeholder_avatar: placeholder::avatar(),
        }
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn modals(&self) -> ModalFlags {
        self.modals
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn alert(&self) -> Option<Alert> {
        self.alert
    }

    #[must_use]
    pub fn profile_draft(&self) -> &ProfileDraft {
        &self.profile_draft
    }

    #[must_use]
    pub fn post_draft(&self) -> &PostDraft {
        &self.post_draft
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Avatar to draw: the profile's own, or the placeholder.
    #[must_use]
    pub fn avatar(&self) -> &ImageSource {
        self.profile
            .avatar
            .as_ref()
            .unwrap_or(&self.placeholder_avatar)
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::OpenEditProfile => {
                self.modals.edit_profile = true;
                self.profile_sessions.begin();
                Effect::None
            }
            Message::CloseEditProfile => {
                self.modals.edit_profile = false;
                self.profile_draft.reset();
                Effect::None
            }
            Message::ProfileNameChanged(name) => {
                self.profile_draft.name = name;
                Effect::None
            }
            Message::ProfileBioEdited(action) => {
                self.profile_draft.edit_bio(action);
                Effect::None
            }
            Message::BrowseProfileImage => Effect::PickProfileImage,
            Message::ProfileImageChosen(path) => {
                if path.is_some() {
                    self.profile_draft.image = path;
                }
                Effect::None
            }
            Message::SubmitProfile => self.submit_profile(),
            Message::ProfileImageDecoded {
                ticket,
                pending,
                path,
                result,
            } => self.finish_profile_decode(ticket, pending, &path, result),

            Message::OpenNewPost => {
                self.modals.new_post = true;
                self.post_sessions.begin();
                Effect::None
            }
            Message::CloseNewPost => {
                self.modals.new_post = false;
                self.post_draft.reset();
                Effect::None
            }
            Message::CaptionEdited(action) => {
                self.post_draft.edit_caption(action);
                Effect::None
            }
            Message::BrowsePostImage => Effect::PickPostImage,
            Message::PostImageChosen(path) => {
                if path.is_some() {
                    self.post_draft.image = path;
                }
                Effect::None
            }
            Message::SubmitPost => self.submit_post(),
            Message::PostImageDecoded {
                ticket,
                title,
                path,
                result,
            } => self.finish_post_decode(ticket, title, &path, result),

            Message::ToggleLike(id) => {
                match self.gallery.toggle_like(id) {
                    Some(liked) => tracing::debug!(%id, liked, "toggled like"),
                    None => tracing::debug!(%id, "like toggle for unknown item ignored"),
                }
                Effect::None
            }
            Message::OpenPreview(id) => {
                if let Some(item) = self.gallery.get(id) {
                    self.preview = Some(Preview {
                        image: item.image().clone(),
                        title: item.title().to_string(),
                    });
                    self.modals.preview = true;
                }
                Effect::None
            }
            Message::ClosePreview => {
                self.modals.preview = false;
                self.preview = None;
                Effect::None
            }
            Message::CopyPreviewLink => match &self.preview {
                Some(preview) => match preview.image.to_data_uri() {
                    Ok(uri) => Effect::CopyToClipboard(uri),
                    Err(err) => {
                        tracing::warn!(%err, "could not encode preview");
                        Effect::Notify(Notification::error(err.i18n_key()))
                    }
                },
                None => Effect::None,
            },

            Message::DismissAlert => {
                self.alert = None;
                Effect::None
            }
            Message::EscapePressed => {
                if self.alert.take().is_some() {
                    return Effect::None;
                }
                if self.modals.any_open() {
                    tracing::debug!("closing dialogs");
                }
                self.modals.close_all();
                self.preview = None;
                self.profile_draft.reset();
                self.post_draft.reset();
                Effect::None
            }
        }
    }

    fn submit_profile(&mut self) -> Effect {
        let pending = self.profile.with_text_from(&self.profile_draft);
        let image = self.profile_draft.image.take();

        self.modals.edit_profile = false;
        self.profile_draft.reset();

        match image {
            Some(path) => {
                let ticket = self.profile_sessions.ticket();
                tracing::debug!(path = %path.display(), "profile image queued for decoding");
                Effect::DecodeProfileImage {
                    ticket,
                    path,
                    pending,
                }
            }
            None => {
                self.profile = pending;
                tracing::info!("profile updated");
                Effect::Notify(Notification::success("notification-profile-updated"))
            }
        }
    }

    fn finish_profile_decode(
        &mut self,
        ticket: Ticket,
        pending: Profile,
        path: &Path,
        result: Result<ImageSource, Error>,
    ) -> Effect {
        match result {
            Ok(image) => {
                if !self.profile_sessions.accepts(ticket, self.late_decode) {
                    tracing::info!(path = %path.display(), "dropping superseded profile update");
                    return Effect::None;
                }
                self.profile = pending.with_avatar(Some(image));
                tracing::info!(path = %path.display(), "profile updated with new avatar");
                Effect::Notify(Notification::success("notification-profile-updated"))
            }
            Err(err) => decode_failed(path, &err),
        }
    }

    fn submit_post(&mut self) -> Effect {
        if !self.post_draft.has_caption() {
            self.alert = Some(Alert::MissingCaption);
            return Effect::None;
        }

        let title = self.post_draft.caption().to_string();
        let image = self.post_draft.image.take();

        self.modals.new_post = false;
        self.post_draft.reset();

        match image {
            Some(path) => Effect::DecodePostImage {
                ticket: self.post_sessions.ticket(),
                path,
                title,
            },
            None => {
                tracing::debug!("post submitted without an image, nothing to add");
                Effect::None
            }
        }
    }

    fn finish_post_decode(
        &mut self,
        ticket: Ticket,
        title: String,
        path: &Path,
        result: Result<ImageSource, Error>,
    ) -> Effect {
        match result {
            Ok(image) => {
                if !self.post_sessions.accepts(ticket, self.late_decode) {
                    tracing::info!(path = %path.display(), "dropping superseded post");
                    return Effect::None;
                }
                let id = self.gallery.push(image, title);
                tracing::info!(%id, count = self.gallery.len(), "post created");
                Effect::Notify(Notification::success("notification-post-created"))
            }
            Err(err) => decode_failed(path, &err),
        }
    }
}

fn decode_failed(path: &Path, err: &Error) -> Effect {
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    tracing::warn!(file = %file, %err, "image could not be decoded");

    Effect::Notify(
        Notification::error("notification-image-decode-error").with_arg("file", file),
    )
}
