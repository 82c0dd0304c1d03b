//! Error types for the manuform library.

use std::io;
use thiserror::Error;

/// Result type alias for manuform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during conversion and rewriting.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing or unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No converter is registered for the given extension pair.
    #[error("Unsupported conversion: .{from} -> .{to}")]
    UnsupportedConversion {
        /// Source file extension (lowercase, without the dot).
        from: String,
        /// Destination file extension (lowercase, without the dot).
        to: String,
    },

    /// The source file's bytes could not be parsed as the claimed format.
    #[error("{format} parsing error: {reason}")]
    FormatParse {
        /// Name of the format that failed to parse (e.g. "docx").
        format: &'static str,
        /// The underlying cause, rendered as text.
        reason: String,
    },

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Wrap a third-party parse failure for the given format.
    pub fn parse(format: &'static str, cause: impl std::fmt::Display) -> Self {
        Error::FormatParse {
            format,
            reason: cause.to_string(),
        }
    }

    /// Build an `UnsupportedConversion` from the two extensions.
    pub fn unsupported(from: impl Into<String>, to: impl Into<String>) -> Self {
        Error::UnsupportedConversion {
            from: from.into(),
            to: to.into(),
        }
    }
}
