// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Profile**: Initial profile text shown before any edit
//! - **Gallery**: Grid layout bounds
//! - **Post**: Caption length rules of the new post form

// ==========================================================================
// Profile Defaults
// ==========================================================================

/// Display name shown until the user edits the profile.
pub const DEFAULT_DISPLAY_NAME: &str =
    "Aliaune Damala Bouga Time Bongo Puru Nacka Lu Lu Lu Badara Akon...";

/// Bio shown until the user edits the profile.
pub const DEFAULT_BIO: &str = "Known mononymously as Akon, is a Senegalese-American singer, \
record producer, and entrepreneur. An influential figure in modern world....";

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of cards per gallery row.
pub const DEFAULT_GALLERY_COLUMNS: usize = 3;

/// Minimum number of cards per gallery row.
pub const MIN_GALLERY_COLUMNS: usize = 1;

/// Maximum number of cards per gallery row.
pub const MAX_GALLERY_COLUMNS: usize = 6;

// ==========================================================================
// Post Form Defaults
// ==========================================================================

/// Shortest caption the new post form accepts (when not empty).
pub const CAPTION_MIN_CHARS: usize = 2;

/// Longest caption the new post form accepts.
pub const CAPTION_MAX_CHARS: usize = 50;
