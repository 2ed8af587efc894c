// SPDX-License-Identifier: MPL-2.0
//! Initial gallery content.
//!
//! The board starts either from the built-in entries (generated gradient
//! artwork) or from a TOML manifest listing image files:
//!
//! ```toml
//! [[entry]]
//! image = "photos/val-thorens.jpg"
//! title = "Val Thorens"
//! ```
//!
//! Image paths are relative to the manifest's directory.

use crate::error::{Error, Result};
use crate::media::{self, placeholder, ImageSource};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One seed post.
#[derive(Debug, Clone)]
pub struct SeedEntry {
    pub image: ImageSource,
    pub title: String,
}

/// Title and gradient colors of the built-in entries.
const BUILT_IN: &[(&str, [u8; 3], [u8; 3])] = &[
    ("Val Thorens", [225, 236, 247], [96, 133, 181]),
    ("Restaurant terrace", [244, 201, 138], [170, 84, 52]),
    ("An outdoor cafe", [190, 214, 160], [78, 120, 70]),
    ("A very long bridge, over the forest...", [153, 196, 143], [44, 74, 60]),
    ("Tunnel with morning light", [251, 232, 176], [92, 78, 66]),
    ("Mountain house", [186, 208, 230], [62, 84, 102]),
];

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "entry")]
    entries: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    image: PathBuf,
    title: String,
}

/// Returns the built-in seed entries.
#[must_use]
pub fn built_in() -> Vec<SeedEntry> {
    BUILT_IN
        .iter()
        .map(|(title, from, to)| SeedEntry {
            image: ImageSource::from_rgba(placeholder::gradient(
                placeholder::SEED_IMAGE_SIZE,
                placeholder::SEED_IMAGE_SIZE,
                *from,
                *to,
            )),
            title: (*title).to_string(),
        })
        .collect()
}

/// Loads the entries of a seed manifest.
///
/// The manifest itself must parse; entries whose image cannot be loaded are
/// skipped with a warning.
pub fn load_manifest(path: &Path) -> Result<Vec<SeedEntry>> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| Error::Seed(format!("{}: {}", path.display(), err)))?;
    let manifest: Manifest = toml::from_str(&content)
        .map_err(|err| Error::Seed(format!("{}: {}", path.display(), err)))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let entries = manifest
        .entries
        .into_iter()
        .filter_map(|entry| {
            let image_path = if entry.image.is_relative() {
                base.join(&entry.image)
            } else {
                entry.image.clone()
            };
            match media::load_file(&image_path) {
                Ok(image) => Some(SeedEntry {
                    image,
                    title: entry.title,
                }),
                Err(err) => {
                    tracing::warn!(path = %image_path.display(), %err, "skipping seed entry");
                    None
                }
            }
        })
        .collect::<Vec<_>>();

    tracing::info!(path = %path.display(), count = entries.len(), "loaded seed manifest");
    Ok(entries)
}

/// Picks the seed for a new board.
///
/// Returns the entries and, when the manifest could not be used, the i18n
/// key of a warning to show. The built-in entries are the fallback.
#[must_use]
pub fn resolve(manifest: Option<&Path>) -> (Vec<SeedEntry>, Option<String>) {
    let Some(path) = manifest else {
        return (built_in(), None);
    };

    match load_manifest(path) {
        Ok(entries) => (entries, None),
        Err(err) => {
            tracing::warn!(%err, "falling back to built-in seed");
            (built_in(), Some("notification-seed-load-error".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_png(path: &Path) {
        RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]))
            .save_with_format(path, ImageFormat::Png)
            .expect("write png");
    }

    #[test]
    fn built_in_seed_has_six_titled_entries() {
        let seed = built_in();
        assert_eq!(seed.len(), 6);
        assert_eq!(seed[0].title, "Val Thorens");
        assert!(seed.iter().all(|entry| entry.image.dimensions()
            == (placeholder::SEED_IMAGE_SIZE, placeholder::SEED_IMAGE_SIZE)));
    }

    #[test]
    fn manifest_entries_load_in_order_and_skip_broken_images() {
        let dir = tempdir().expect("tempdir");
        write_png(&dir.path().join("one.png"));
        write_png(&dir.path().join("two.png"));
        std::fs::write(dir.path().join("broken.png"), b"nope").expect("write");

        let manifest = dir.path().join("seed.toml");
        std::fs::write(
            &manifest,
            r#"
[[entry]]
image = "one.png"
title = "One"

[[entry]]
image = "broken.png"
title = "Broken"

[[entry]]
image = "two.png"
title = "Two"
"#,
        )
        .expect("write manifest");

        let entries = load_manifest(&manifest).expect("load");
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["One", "Two"]);
    }

    #[test]
    fn unreadable_manifest_falls_back_to_built_in() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("missing.toml");

        let (entries, warning) = resolve(Some(&missing));
        assert_eq!(entries.len(), built_in().len());
        assert_eq!(warning.as_deref(), Some("notification-seed-load-error"));
    }

    #[test]
    fn malformed_manifest_is_a_seed_error() {
        let dir = tempdir().expect("tempdir");
        let manifest = dir.path().join("seed.toml");
        std::fs::write(&manifest, "[[entry]]\ntitle = 3\n").expect("write");

        assert!(matches!(load_manifest(&manifest), Err(Error::Seed(_))));
    }

    #[test]
    fn no_manifest_means_built_in_without_warning() {
        let (entries, warning) = resolve(None);
        assert_eq!(entries.len(), 6);
        assert!(warning.is_none());
    }
}
