// SPDX-License-Identifier: MPL-2.0
//! Images generated in memory: seed artwork and the avatar placeholder.

use super::ImageSource;
use image_rs::{Rgba, RgbaImage};

/// Side length of generated seed images.
pub const SEED_IMAGE_SIZE: u32 = 300;

/// Side length of the generated avatar placeholder.
pub const AVATAR_SIZE: u32 = 190;

const AVATAR_BACKGROUND: [u8; 3] = [214, 214, 214];
const AVATAR_SILHOUETTE: [u8; 3] = [160, 160, 160];

fn lerp(from: u8, to: u8, t: f32) -> u8 {
    let value = f32::from(from) + (f32::from(to) - f32::from(from)) * t;
    value.round().clamp(0.0, 255.0) as u8
}

/// Diagonal gradient from the top-left `from` color to the bottom-right `to` color.
#[must_use]
pub fn gradient(width: u32, height: u32, from: [u8; 3], to: [u8; 3]) -> RgbaImage {
    let span = (width + height).saturating_sub(2).max(1) as f32;
    RgbaImage::from_fn(width, height, |x, y| {
        let t = (x + y) as f32 / span;
        Rgba([
            lerp(from[0], to[0], t),
            lerp(from[1], to[1], t),
            lerp(from[2], to[2], t),
            255,
        ])
    })
}

/// Gray head-and-shoulders silhouette shown when the profile has no avatar.
#[must_use]
pub fn avatar() -> ImageSource {
    let size = AVATAR_SIZE as f32;
    let head = (size * 0.5, size * 0.38, size * 0.2);
    let body = (size * 0.5, size * 0.98, size * 0.4);

    let image = RgbaImage::from_fn(AVATAR_SIZE, AVATAR_SIZE, |x, y| {
        let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
        let inside = |(cx, cy, r): (f32, f32, f32)| (px - cx).powi(2) + (py - cy).powi(2) <= r * r;
        let [r, g, b] = if inside(head) || inside(body) {
            AVATAR_SILHOUETTE
        } else {
            AVATAR_BACKGROUND
        };
        Rgba([r, g, b, 255])
    });

    ImageSource::from_rgba(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_runs_corner_to_corner() {
        let image = gradient(10, 10, [0, 0, 0], [255, 100, 50]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(9, 9).0, [255, 100, 50, 255]);
    }

    #[test]
    fn gradient_handles_single_pixel() {
        let image = gradient(1, 1, [10, 20, 30], [40, 50, 60]);
        assert_eq!(image.get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn avatar_is_generated_at_fixed_size() {
        let avatar = avatar();
        assert_eq!(avatar.dimensions(), (AVATAR_SIZE, AVATAR_SIZE));
        assert!(avatar.file_name().is_none());
    }
}
