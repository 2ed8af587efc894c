// SPDX-License-Identifier: MPL-2.0
//! Image sources shown by the board.
//!
//! Every picture on screen is an [`ImageSource`]: a ready-to-render iced
//! handle plus what it was made from. Files picked by the user are read
//! whole, fully decoded off the UI thread and kept inline (the file bytes
//! stay around so the image can be exported as a data URI). Seed and
//! placeholder images are generated in memory.

pub mod extensions;
pub mod placeholder;

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use iced::widget::image::Handle;
use image_rs::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A decoded image ready to be drawn, with its provenance.
#[derive(Debug, Clone)]
pub struct ImageSource {
    handle: Handle,
    width: u32,
    height: u32,
    origin: Origin,
}

#[derive(Debug, Clone)]
enum Origin {
    /// Encoded file contents as read from disk.
    File {
        name: String,
        mime: &'static str,
        bytes: Arc<[u8]>,
    },
    /// Pixels generated in memory.
    Generated { pixels: Arc<RgbaImage> },
}

impl ImageSource {
    /// Decodes encoded image bytes (PNG, JPEG, ...).
    ///
    /// The format is sniffed from the content, not from `name`.
    pub fn from_encoded(bytes: Vec<u8>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let (format, decoded) = {
            let reader = image_rs::ImageReader::new(Cursor::new(bytes.as_slice()))
                .with_guessed_format()?;
            let format = reader
                .format()
                .ok_or_else(|| Error::UnsupportedImage(name.clone()))?;
            (format, reader.decode()?)
        };

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        let handle = Handle::from_rgba(width, height, rgba.into_raw());

        Ok(Self {
            handle,
            width,
            height,
            origin: Origin::File {
                name,
                mime: format.to_mime_type(),
                bytes: bytes.into(),
            },
        })
    }

    /// Wraps pixels generated in memory.
    #[must_use]
    pub fn from_rgba(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let handle = Handle::from_rgba(width, height, image.as_raw().clone());
        Self {
            handle,
            width,
            height,
            origin: Origin::Generated {
                pixels: Arc::new(image),
            },
        }
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// File name the image was read from, if it came from a file.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        match &self.origin {
            Origin::File { name, .. } => Some(name.as_str()),
            Origin::Generated { .. } => None,
        }
    }

    /// MIME type of the data URI this image exports to.
    #[must_use]
    pub fn mime(&self) -> &'static str {
        match &self.origin {
            Origin::File { mime, .. } => *mime,
            Origin::Generated { .. } => ImageFormat::Png.to_mime_type(),
        }
    }

    /// Returns true if both values render the same decoded pixels.
    #[must_use]
    pub fn same_image(&self, other: &ImageSource) -> bool {
        self.handle.id() == other.handle.id()
    }

    /// Encodes the image as a `data:` URI.
    ///
    /// File images reuse the bytes read from disk; generated images are encoded
    /// as PNG.
    pub fn to_data_uri(&self) -> Result<String> {
        let payload = match &self.origin {
            Origin::File { bytes, .. } => STANDARD.encode(bytes),
            Origin::Generated { pixels } => {
                let mut buffer = Cursor::new(Vec::new());
                pixels.write_to(&mut buffer, ImageFormat::Png)?;
                STANDARD.encode(buffer.into_inner())
            }
        };
        Ok(format!("data:{};base64,{}", self.mime(), payload))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Reads and decodes an image file without blocking the UI thread.
///
/// Decoding runs on tokio's blocking pool.
pub async fn decode_file(path: PathBuf) -> Result<ImageSource> {
    let bytes = tokio::fs::read(&path).await?;
    let name = display_name(&path);
    tracing::debug!(file = %name, size = bytes.len(), "decoding image");

    tokio::task::spawn_blocking(move || ImageSource::from_encoded(bytes, name))
        .await
        .map_err(|err| Error::Decode(err.to_string()))?
}

/// Reads and decodes an image file on the calling thread.
///
/// Only used at startup, before the first frame is drawn.
pub fn load_file(path: &Path) -> Result<ImageSource> {
    let bytes = std::fs::read(path)?;
    ImageSource::from_encoded(bytes, display_name(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, ImageFormat::Png)
            .expect("encode png");
        buffer.into_inner()
    }

    #[test]
    fn encoded_png_is_decoded() {
        let source = ImageSource::from_encoded(png_bytes(4, 3), "red.png").expect("decode");
        assert_eq!(source.dimensions(), (4, 3));
        assert_eq!(source.mime(), "image/png");
        assert_eq!(source.file_name(), Some("red.png"));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = ImageSource::from_encoded(b"definitely not an image".to_vec(), "notes.png")
            .expect_err("should fail");
        assert!(matches!(err, Error::UnsupportedImage(_)));
    }

    #[test]
    fn truncated_png_is_a_decode_error() {
        let mut bytes = png_bytes(16, 16);
        bytes.truncate(40);
        let err = ImageSource::from_encoded(bytes, "cut.png").expect_err("should fail");
        assert!(!matches!(err, Error::UnsupportedImage(_)));
    }

    #[test]
    fn file_data_uri_reuses_file_bytes() {
        let bytes = png_bytes(2, 2);
        let expected = format!("data:image/png;base64,{}", STANDARD.encode(&bytes));
        let source = ImageSource::from_encoded(bytes, "tiny.png").expect("decode");
        assert_eq!(source.to_data_uri().expect("uri"), expected);
    }

    #[test]
    fn generated_data_uri_round_trips_through_decoder() {
        let source = ImageSource::from_rgba(RgbaImage::from_pixel(3, 5, Rgba([0, 0, 0, 255])));
        let uri = source.to_data_uri().expect("uri");
        let payload = uri
            .strip_prefix("data:image/png;base64,")
            .expect("png data uri");
        let bytes = STANDARD.decode(payload).expect("base64");
        let decoded = ImageSource::from_encoded(bytes, "again.png").expect("decode");
        assert_eq!(decoded.dimensions(), (3, 5));
    }

    #[test]
    fn clones_share_the_same_image() {
        let source = ImageSource::from_rgba(RgbaImage::new(1, 1));
        let other = ImageSource::from_rgba(RgbaImage::new(1, 1));
        assert!(source.same_image(&source.clone()));
        assert!(!source.same_image(&other));
    }

    #[tokio::test]
    async fn decode_file_reads_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("photo.png");
        std::fs::write(&path, png_bytes(8, 6)).expect("write png");

        let source = decode_file(path).await.expect("decode");
        assert_eq!(source.dimensions(), (8, 6));
        assert_eq!(source.file_name(), Some("photo.png"));
    }

    #[tokio::test]
    async fn decode_file_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = decode_file(dir.path().join("missing.png"))
            .await
            .expect_err("should fail");
        assert!(matches!(err, Error::Io(_)));
    }
}
