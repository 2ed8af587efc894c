// SPDX-License-Identifier: MPL-2.0
//! Ordered list of posted photos.
//!
//! Items keep insertion order (seed entries first, new posts appended) and
//! are addressed by an [`ItemId`] handed out at creation, never by position.

use crate::media::ImageSource;
use crate::ui::icons;
use std::fmt;

/// Stable identifier of a gallery item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct GalleryItem {
    id: ItemId,
    image: ImageSource,
    title: String,
    liked: bool,
    /// Decorative SVG markup of the like toggle.
    icon: &'static str,
}

impl GalleryItem {
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn image(&self) -> &ImageSource {
        &self.image
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn is_liked(&self) -> bool {
        self.liked
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.icon
    }
}

#[derive(Debug, Default)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    next_id: u64,
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new, not yet liked item and returns its id.
    pub fn push(&mut self, image: ImageSource, title: impl Into<String>) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(GalleryItem {
            id,
            image,
            title: title.into(),
            liked: false,
            icon: icons::HEART_OUTLINE_SVG,
        });
        id
    }

    /// Flips the like state of `id` and returns the new state.
    ///
    /// Returns `None` for unknown ids.
    pub fn toggle_like(&mut self, id: ItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.liked = !item.liked;
        Some(item.liked)
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&GalleryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GalleryItem> {
        self.items.last()
    }
}

impl Extend<(ImageSource, String)> for Gallery {
    fn extend<T: IntoIterator<Item = (ImageSource, String)>>(&mut self, iter: T) {
        for (image, title) in iter {
            self.push(image, title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::RgbaImage;

    fn image() -> ImageSource {
        ImageSource::from_rgba(RgbaImage::new(2, 2))
    }

    #[test]
    fn push_appends_unliked_items_in_order() {
        let mut gallery = Gallery::new();
        let first = gallery.push(image(), "first");
        let second = gallery.push(image(), "second");

        let titles: Vec<_> = gallery.iter().map(GalleryItem::title).collect();
        assert_eq!(titles, ["first", "second"]);
        assert_ne!(first, second);
        assert!(gallery.iter().all(|item| !item.is_liked()));
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut gallery = Gallery::new();
        let id = gallery.push(image(), "post");

        assert_eq!(gallery.toggle_like(id), Some(true));
        assert_eq!(gallery.toggle_like(id), Some(false));
        assert!(!gallery.get(id).map(GalleryItem::is_liked).unwrap_or(true));
    }

    #[test]
    fn toggle_targets_only_the_given_item() {
        let mut gallery = Gallery::new();
        let a = gallery.push(image(), "a");
        let b = gallery.push(image(), "b");

        gallery.toggle_like(b);
        assert_eq!(gallery.get(a).map(GalleryItem::is_liked), Some(false));
        assert_eq!(gallery.get(b).map(GalleryItem::is_liked), Some(true));
    }

    #[test]
    fn toggle_unknown_id_is_ignored() {
        let mut gallery = Gallery::new();
        gallery.push(image(), "only");
        assert_eq!(gallery.toggle_like(ItemId(99)), None);
    }

    #[test]
    fn extend_keeps_order() {
        let mut gallery = Gallery::new();
        gallery.extend(vec![(image(), "x".to_string()), (image(), "y".to_string())]);
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.last().map(GalleryItem::title), Some("y"));
    }
}
