// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! The file is only ever read. Profile and gallery content is never written
//! back; settings only shape how a session starts.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[profile]` - Initial profile name, bio and avatar
//! - `[gallery]` - Grid layout and an optional seed manifest
//! - `[forms]` - What happens to image decodes that finish late
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument or `SPOTS_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use spots::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("{} columns", config.gallery.columns());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::board::session::LateDecodePolicy;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Initial profile content.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ProfileConfig {
    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    /// Image file used as the initial avatar.
    #[serde(default)]
    pub avatar: Option<PathBuf>,
}

impl ProfileConfig {
    /// Returns the configured display name or the built-in one.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    /// Returns the configured bio or the built-in one.
    #[must_use]
    pub fn bio(&self) -> &str {
        self.bio.as_deref().unwrap_or(DEFAULT_BIO)
    }
}

/// Gallery layout and seed content.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GalleryConfig {
    /// Cards per row.
    #[serde(default)]
    pub columns: Option<usize>,

    /// TOML manifest replacing the built-in seed entries.
    #[serde(default)]
    pub seed_manifest: Option<PathBuf>,
}

impl GalleryConfig {
    /// Returns the column count, clamped to the supported range.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
            .unwrap_or(DEFAULT_GALLERY_COLUMNS)
            .clamp(MIN_GALLERY_COLUMNS, MAX_GALLERY_COLUMNS)
    }
}

/// Form submission behavior.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct FormsConfig {
    #[serde(default)]
    pub late_decode: LateDecodePolicy,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub forms: FormsConfig,
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "ignoring unreadable settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// Relative paths inside the file (avatar, seed manifest) are resolved
/// against the directory containing the file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&content)?;

    if let Some(base) = path.parent() {
        config.profile.avatar = config.profile.avatar.map(|p| resolve_relative(base, p));
        config.gallery.seed_manifest = config
            .gallery
            .seed_manifest
            .map(|p| resolve_relative(base, p));
    }

    Ok(config)
}

fn resolve_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_settings(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).expect("write settings");
        path
    }

    #[test]
    fn default_config_uses_built_in_profile() {
        let config = Config::default();
        assert_eq!(config.profile.display_name(), DEFAULT_DISPLAY_NAME);
        assert_eq!(config.profile.bio(), DEFAULT_BIO);
        assert_eq!(config.gallery.columns(), DEFAULT_GALLERY_COLUMNS);
        assert_eq!(config.forms.late_decode, LateDecodePolicy::Apply);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn empty_file_loads_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = write_settings(dir.path(), "");
        let config = load_from_path(&path).expect("load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn sections_are_parsed() {
        let dir = tempdir().expect("tempdir");
        let path = write_settings(
            dir.path(),
            r#"
[general]
language = "fr"
theme_mode = "Dark"

[profile]
display_name = "Jacques Cousteau"

[gallery]
columns = 4

[forms]
late_decode = "discard-superseded"
"#,
        );

        let config = load_from_path(&path).expect("load");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.profile.display_name(), "Jacques Cousteau");
        assert_eq!(config.profile.bio(), DEFAULT_BIO);
        assert_eq!(config.gallery.columns(), 4);
        assert_eq!(config.forms.late_decode, LateDecodePolicy::DiscardSuperseded);
    }

    #[test]
    fn omitted_fields_read_as_none() {
        let config: Config = toml::from_str("[profile]\nbio = \"Diver\"\n").expect("parse");
        assert_eq!(config.profile.bio.as_deref(), Some("Diver"));
        assert!(config.profile.display_name.is_none());
        assert!(config.profile.avatar.is_none());
        assert!(config.general.language.is_none());
        assert!(config.gallery.columns.is_none());
        assert!(config.gallery.seed_manifest.is_none());
    }

    #[test]
    fn columns_are_clamped() {
        let too_many = GalleryConfig {
            columns: Some(40),
            seed_manifest: None,
        };
        assert_eq!(too_many.columns(), MAX_GALLERY_COLUMNS);

        let zero = GalleryConfig {
            columns: Some(0),
            seed_manifest: None,
        };
        assert_eq!(zero.columns(), MIN_GALLERY_COLUMNS);
    }

    #[test]
    fn relative_paths_resolve_against_settings_dir() {
        let dir = tempdir().expect("tempdir");
        let path = write_settings(
            dir.path(),
            r#"
[profile]
avatar = "me.png"

[gallery]
seed_manifest = "seed/seed.toml"
"#,
        );

        let config = load_from_path(&path).expect("load");
        assert_eq!(config.profile.avatar, Some(dir.path().join("me.png")));
        assert_eq!(
            config.gallery.seed_manifest,
            Some(dir.path().join("seed/seed.toml"))
        );
    }

    #[test]
    fn invalid_theme_mode_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = write_settings(dir.path(), "[general]\ntheme_mode = \"neon\"\n");
        assert!(matches!(
            load_from_path(&path),
            Err(crate::error::Error::Config(_))
        ));
    }

    #[test]
    fn unreadable_file_falls_back_with_warning() {
        let dir = tempdir().expect("tempdir");
        write_settings(dir.path(), "[gallery]\ncolumns = \"many\"\n");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_is_not_a_warning() {
        let dir = tempdir().expect("tempdir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
