//! GZIP header decoding (RFC 1952).
//!
//! Only the first member's header is read. The decoder validates the magic
//! number and compression method, skips the FEXTRA field when present and
//! collects the NUL-terminated FNAME field. FCOMMENT and FHCRC are never
//! consulted, and the deflate payload is left untouched.

use crate::header::{CM_DEFLATE, FIXED_TAIL_LEN, GZIP_MAGIC, HeaderInfo, flags};
use encoding_rs::mem::decode_latin1;
use gzinfo_core::error::{GzInfoError, Result};
use gzinfo_core::read::{read_byte, read_exact_bytes, read_exact_into, read_up_to};
use gzinfo_core::source::{ByteSource, PathSource};
use std::path::Path;

/// Suffix removed from a fallback filename.
const GZIP_SUFFIX: &str = ".gzip";

/// Reads GZIP headers from byte sources.
#[derive(Debug, Clone, Default)]
pub struct HeaderDecoder {
    default_filename: Option<String>,
}

impl HeaderDecoder {
    /// Create a decoder with no default filename.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filename to report when the header has no FNAME field and the
    /// source has no name of its own.
    pub fn with_default_filename(mut self, name: impl Into<String>) -> Self {
        self.default_filename = Some(name.into());
        self
    }

    /// The configured default filename.
    pub fn default_filename(&self) -> Option<&str> {
        self.default_filename.as_deref()
    }

    /// Open `path` and decode the header of the file's raw bytes.
    ///
    /// The file is closed before returning, whatever the outcome.
    pub fn decode_path(&self, path: impl AsRef<Path>) -> Result<Option<HeaderInfo>> {
        let mut source = PathSource::open(path)?;
        self.decode(&mut source)
    }

    /// Decode the header at the current position of `source`.
    ///
    /// Returns `Ok(None)` when the source is empty. On success, and for an
    /// empty source, the source is moved back to its start if it supports
    /// that. The source is never closed.
    pub fn decode<S: ByteSource + ?Sized>(&self, source: &mut S) -> Result<Option<HeaderInfo>> {
        let mut magic = [0u8; 2];
        let seen = read_up_to(source, &mut magic)?;
        if seen == 0 {
            source.seek_to_start()?;
            return Ok(None);
        }
        if magic[..seen] != GZIP_MAGIC {
            return Err(GzInfoError::invalid_magic(GZIP_MAGIC, &magic[..seen]));
        }

        let mut fixed = [0u8; FIXED_TAIL_LEN];
        read_exact_into(source, &mut fixed)?;
        let method = fixed[0];
        let flag = fixed[1];
        let last_mtime = u32::from_le_bytes([fixed[2], fixed[3], fixed[4], fixed[5]]);
        // fixed[6..8] are XFL and OS, unused.

        if method != CM_DEFLATE {
            return Err(GzInfoError::unsupported_method(method));
        }

        let fname = if flag & flags::FNAME == 0 {
            self.fallback_name(source)?
        } else {
            if flag & flags::FEXTRA != 0 {
                skip_extra(source)?;
            }
            read_fname(source)?
        };

        source.seek_to_start()?;
        Ok(Some(HeaderInfo::new(fname, method, flag, last_mtime)))
    }

    /// Filename for a header without FNAME: the source's name, else the default.
    fn fallback_name<S: ByteSource + ?Sized>(&self, source: &S) -> Result<String> {
        let name = source
            .name()
            .or(self.default_filename.as_deref())
            .ok_or_else(|| {
                GzInfoError::usage(
                    "header has no filename and neither the source nor a default provides one",
                )
            })?;
        Ok(strip_gzip_suffix(name).to_string())
    }
}

/// Decode a GZIP header from exactly one of `path` or `stream`.
///
/// A path is opened and closed here; a stream is borrowed and left open.
pub fn read_header(
    path: Option<&Path>,
    stream: Option<&mut dyn ByteSource>,
    default_filename: Option<&str>,
) -> Result<Option<HeaderInfo>> {
    let mut decoder = HeaderDecoder::new();
    if let Some(name) = default_filename {
        decoder = decoder.with_default_filename(name);
    }

    match (path, stream) {
        (Some(path), None) => decoder.decode_path(path),
        (None, Some(stream)) => decoder.decode(stream),
        (None, None) => Err(GzInfoError::usage(
            "either a path or a stream must be supplied",
        )),
        (Some(_), Some(_)) => Err(GzInfoError::usage(
            "a path and a stream cannot both be supplied",
        )),
    }
}

/// Read and discard the length-prefixed extra field.
fn skip_extra<S: ByteSource + ?Sized>(source: &mut S) -> Result<()> {
    let mut xlen = [0u8; 2];
    read_exact_into(source, &mut xlen)?;
    read_exact_bytes(source, usize::from(u16::from_le_bytes(xlen)))?;
    Ok(())
}

/// Read the NUL-terminated, Latin-1 encoded filename.
///
/// End of input also terminates the name.
fn read_fname<S: ByteSource + ?Sized>(source: &mut S) -> Result<String> {
    let mut bytes = Vec::new();
    while let Some(byte) = read_byte(source)? {
        if byte == 0 {
            break;
        }
        bytes.push(byte);
    }
    Ok(decode_latin1(&bytes).into_owned())
}

fn strip_gzip_suffix(name: &str) -> &str {
    name.strip_suffix(GZIP_SUFFIX).unwrap_or(name)
}
