//! Common error types.

use std::fmt;

/// A shortcut type equivalent to `Result<T, ocr_fixtures::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error that occurs within the crate.
#[derive(Debug)]
pub enum Error {
    /// An error occured while trying to parse a font file.
    FontError(&'static str),

    /// Failed to encode a canvas as PNG.
    EncodingError(String),

    /// An error occured when trying to read a font file or when trying to write an image file.
    IoError(std::io::Error),

    /// Tried to encode a canvas with no pixels.
    EmptyCanvasError,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::FontError(msg) => write!(f, "Font error: {msg}"),
            Self::EncodingError(msg) => write!(f, "Encoding error: {msg}"),
            Self::IoError(error) => write!(f, "IO error: {error}"),
            Self::EmptyCanvasError => write!(f, "Tried encoding an empty canvas"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        match err {
            png::EncodingError::IoError(err) => Self::IoError(err),
            png::EncodingError::Format(err) => Self::EncodingError(err.to_string()),
            png::EncodingError::LimitsExceeded => {
                Self::EncodingError("limits exceeded".to_string())
            }
            png::EncodingError::Parameter(err) => Self::EncodingError(err.to_string()),
        }
    }
}
