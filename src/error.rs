//! Custom error types for the conversion layer.

use std::fmt;
use std::str::Utf8Error;
use std::string::FromUtf8Error;

/// An error that can occur while converting records to or from JSON text.
///
/// Field-level decode failures on [`Resilient`](crate::Resilient) fields are
/// recovered inside the field itself and never appear here; this type carries
/// only document-level failures. [`code`](ConvertError::code) gives each
/// failure class a stable numeric identifier.
#[derive(Debug)]
pub enum ConvertError {
    /// The encoded document bytes were not valid UTF-8 text.
    TextEncoding(FromUtf8Error),
    /// The input bytes were not valid UTF-8 text.
    TextDecoding(Utf8Error),
    /// The document failed to encode or decode structurally.
    Json(serde_json::Error),
}

impl ConvertError {
    /// Stable numeric code identifying the failure class.
    pub fn code(&self) -> u32 {
        match self {
            ConvertError::TextEncoding(_) => 1,
            ConvertError::TextDecoding(_) => 2,
            ConvertError::Json(_) => 3,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::TextEncoding(err) => {
                write!(f, "encoded document is not valid UTF-8 text: {}", err)
            }
            ConvertError::TextDecoding(err) => {
                write!(f, "document bytes are not valid UTF-8 text: {}", err)
            }
            ConvertError::Json(err) => write!(f, "JSON conversion failed: {}", err),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::TextEncoding(err) => Some(err),
            ConvertError::TextDecoding(err) => Some(err),
            ConvertError::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Json(err)
    }
}
