//! # gzinfo Core
//!
//! Core components shared by the gzinfo crates:
//!
//! - [`source`]: the [`ByteSource`] capability and its path/stream variants
//! - [`read`]: exact-read helpers that loop over partial reads
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```rust
//! use gzinfo_core::read::read_exact_bytes;
//! use gzinfo_core::source::{ByteSource, StreamSource};
//!
//! let data = [0x1F, 0x8B, 0x08];
//! let mut source = StreamSource::new(&data[..]).with_name("data.gz");
//! let magic = read_exact_bytes(&mut source, 2).unwrap();
//! assert_eq!(magic, [0x1F, 0x8B]);
//! assert_eq!(source.name(), Some("data.gz"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod read;
pub mod source;

// Re-exports for convenience
pub use error::{ErrorKind, GzInfoError, Result};
pub use source::{ByteSource, PathSource, SeekableSource, StreamSource};
