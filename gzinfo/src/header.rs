//! GZIP header constants and the decoded header record.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// GZIP magic bytes.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// GZIP compression method: DEFLATE.
pub const CM_DEFLATE: u8 = 8;

/// Size of the fixed header after the magic bytes (method, flags, mtime, xfl, os).
pub const FIXED_TAIL_LEN: usize = 8;

/// GZIP header flags.
pub mod flags {
    /// Text file.
    pub const FTEXT: u8 = 0x01;
    /// Header CRC present.
    pub const FHCRC: u8 = 0x02;
    /// Extra field present.
    pub const FEXTRA: u8 = 0x04;
    /// Original filename present.
    pub const FNAME: u8 = 0x08;
    /// Comment present.
    pub const FCOMMENT: u8 = 0x10;

    /// All named flags, lowest bit first.
    pub const ALL: [(u8, &str); 5] = [
        (FTEXT, "FTEXT"),
        (FHCRC, "FHCRC"),
        (FEXTRA, "FEXTRA"),
        (FNAME, "FNAME"),
        (FCOMMENT, "FCOMMENT"),
    ];
}

/// Header fields recovered from the first member of a GZIP stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderInfo {
    fname: String,
    method: u8,
    flag: u8,
    last_mtime: u32,
}

impl HeaderInfo {
    pub(crate) fn new(fname: String, method: u8, flag: u8, last_mtime: u32) -> Self {
        Self {
            fname,
            method,
            flag,
            last_mtime,
        }
    }

    /// Original filename, from the header or from the input's own name.
    pub fn fname(&self) -> &str {
        &self.fname
    }

    /// Consume the record and return the filename.
    pub fn into_fname(self) -> String {
        self.fname
    }

    /// Compression method. Always [`CM_DEFLATE`].
    pub fn method(&self) -> u8 {
        self.method
    }

    /// Raw flag byte.
    pub fn flag(&self) -> u8 {
        self.flag
    }

    /// Modification time as stored (Unix seconds, 0 = unset).
    pub fn last_mtime(&self) -> u32 {
        self.last_mtime
    }

    /// Check whether every bit in `mask` is set in the flag byte.
    pub fn has_flag(&self, mask: u8) -> bool {
        self.flag & mask == mask
    }

    /// Whether the filename came from the header's FNAME field.
    pub fn name_in_header(&self) -> bool {
        self.has_flag(flags::FNAME)
    }

    /// Whether the compressor marked the payload as text.
    pub fn is_text(&self) -> bool {
        self.has_flag(flags::FTEXT)
    }

    /// Modification time, or `None` if the header leaves it unset.
    pub fn mtime(&self) -> Option<SystemTime> {
        match self.last_mtime {
            0 => None,
            secs => Some(UNIX_EPOCH + Duration::from_secs(u64::from(secs))),
        }
    }

    /// Names of the RFC 1952 flags that are set.
    pub fn flag_names(&self) -> Vec<&'static str> {
        flags::ALL
            .iter()
            .filter(|(bit, _)| self.flag & bit != 0)
            .map(|&(_, name)| name)
            .collect()
    }
}
