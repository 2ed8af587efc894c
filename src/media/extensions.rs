// SPDX-License-Identifier: MPL-2.0
//! File extensions offered by the image pickers.

/// Image extensions the decoder is built with.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "ico", "tif", "tiff",
];
