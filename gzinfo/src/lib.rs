//! # gzinfo
//!
//! Recover the original filename and a few header fields (compression
//! method, flag byte, modification time) from a GZIP stream without
//! decompressing its payload.
//!
//! Only the header of the first member is read (RFC 1952). When the header
//! carries no FNAME field the name of the input itself is used, minus a
//! trailing `.gzip`, or a caller-supplied default.
//!
//! ## Example
//!
//! ```rust
//! use gzinfo::HeaderDecoder;
//! use std::io::Cursor;
//!
//! let mut data = vec![0x1F, 0x8B, 0x08, 0x08, 0, 0, 0, 0, 0x00, 0x03];
//! data.extend_from_slice(b"notes.txt\0");
//!
//! let info = HeaderDecoder::new()
//!     .decode(&mut Cursor::new(data))
//!     .unwrap()
//!     .expect("stream is not empty");
//! assert_eq!(info.fname(), "notes.txt");
//! assert_eq!(info.method(), 8);
//! ```
//!
//! ## Inputs
//!
//! [`HeaderDecoder::decode_path`] opens and closes a file itself.
//! [`HeaderDecoder::decode`] borrows any [`ByteSource`]; wrap plain readers
//! in [`StreamSource`] or [`SeekableSource`] to give them a name or the
//! ability to be repositioned.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod decoder;
pub mod header;

// Re-exports
pub use decoder::{HeaderDecoder, read_header};
pub use gzinfo_core::{
    ByteSource, ErrorKind, GzInfoError, PathSource, Result, SeekableSource, StreamSource,
};
pub use header::{CM_DEFLATE, GZIP_MAGIC, HeaderInfo, flags};
