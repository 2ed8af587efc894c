// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the library.
///
/// The enum is `Clone` because failures travel inside UI messages
/// (decode results are delivered to `update` as `Result<_, Error>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// The file was read but its contents could not be decoded as an image.
    Decode(String),
    /// The file does not look like any image format we can display.
    UnsupportedImage(String),
    /// The seed manifest could not be used.
    Seed(String),
}

impl Error {
    /// Returns the i18n message key used when this error reaches the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Decode(_) => "error-image-decode",
            Error::UnsupportedImage(_) => "error-image-unsupported",
            Error::Seed(_) => "error-seed",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::UnsupportedImage(e) => write!(f, "Unsupported image: {}", e),
            Error::Seed(e) => write!(f, "Seed Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::Unsupported(e) => Error::UnsupportedImage(e.to_string()),
            image_rs::ImageError::IoError(e) => Error::Io(e.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn every_variant_has_an_i18n_key() {
        let errors = [
            Error::Io(String::new()),
            Error::Config(String::new()),
            Error::Decode(String::new()),
            Error::UnsupportedImage(String::new()),
            Error::Seed(String::new()),
        ];
        for err in errors {
            assert!(err.i18n_key().starts_with("error-"));
        }
    }
}
