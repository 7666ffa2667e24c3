//! Error types for gzinfo operations.
//!
//! Every failure the header decoder can report falls into one of three
//! caller-facing kinds (usage, format, truncation) plus plain I/O failures
//! of the byte source itself. [`GzInfoError::kind`] exposes that grouping.

use std::fmt;
use std::io;
use thiserror::Error;

/// The main error type for gzinfo operations.
#[derive(Debug, Error)]
pub enum GzInfoError {
    /// I/O error from the underlying byte source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The decoder was called incorrectly (missing input, no resolvable filename).
    #[error("Usage error: {message}")]
    Usage {
        /// Description of the misuse.
        message: String,
    },

    /// The stream does not start with the GZIP magic number.
    #[error("Not a gzipped file: expected {expected:02x?}, found {found:02x?}")]
    InvalidMagic {
        /// Expected magic bytes.
        expected: Vec<u8>,
        /// Bytes actually read from the source.
        found: Vec<u8>,
    },

    /// The header names a compression method other than deflate.
    #[error("Unknown compression method: {method}")]
    UnsupportedMethod {
        /// The compression method byte found in the header.
        method: u8,
    },

    /// The source ran out of bytes in the middle of a required field.
    #[error(
        "Compressed file ended before the end-of-stream marker was reached: \
         expected {expected} more bytes"
    )]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },
}

/// Result type alias for gzinfo operations.
pub type Result<T> = std::result::Result<T, GzInfoError>;

/// Coarse classification of a [`GzInfoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller bug: bad arguments or no filename could be resolved.
    Usage,
    /// Input is not a supported GZIP stream.
    Format,
    /// Input ended mid-field.
    Truncation,
    /// The byte source failed.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Usage => "usage",
            Self::Format => "format",
            Self::Truncation => "truncation",
            Self::Io => "i/o",
        };
        f.write_str(name)
    }
}

impl GzInfoError {
    /// Create a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create an invalid magic error.
    pub fn invalid_magic(expected: impl Into<Vec<u8>>, found: impl Into<Vec<u8>>) -> Self {
        Self::InvalidMagic {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an unsupported method error.
    pub fn unsupported_method(method: u8) -> Self {
        Self::UnsupportedMethod { method }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::Usage { .. } => ErrorKind::Usage,
            Self::InvalidMagic { .. } | Self::UnsupportedMethod { .. } => ErrorKind::Format,
            Self::UnexpectedEof { .. } => ErrorKind::Truncation,
        }
    }
}
