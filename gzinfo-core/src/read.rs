//! Exact-read helpers.
//!
//! A single `Read::read` call may return fewer bytes than asked for. These
//! helpers loop over partial reads and turn a premature end of input into
//! [`GzInfoError::UnexpectedEof`].

use crate::error::{GzInfoError, Result};
use std::io::{ErrorKind, Read};

/// Fill `buf` completely, or fail with `UnexpectedEof`.
///
/// The error carries the number of bytes still missing when the source
/// returned zero bytes.
pub fn read_exact_into<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    let filled = read_up_to(reader, buf)?;
    if filled < buf.len() {
        return Err(GzInfoError::unexpected_eof(buf.len() - filled));
    }
    Ok(())
}

/// Read exactly `n` bytes into a new buffer.
pub fn read_exact_bytes<R: Read + ?Sized>(reader: &mut R, n: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; n];
    read_exact_into(reader, &mut buf)?;
    Ok(buf)
}

/// Fill as much of `buf` as the source provides before end of input.
///
/// Returns the number of bytes read; anything less than `buf.len()` means
/// the source is exhausted.
pub fn read_up_to<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Read a single byte, or `None` at end of input.
pub fn read_byte<R: Read + ?Sized>(reader: &mut R) -> Result<Option<u8>> {
    let mut buf = [0u8; 1];
    match read_up_to(reader, &mut buf)? {
        0 => Ok(None),
        _ => Ok(Some(buf[0])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Hands out at most `chunk` bytes per call.
    struct Trickle<'a> {
        data: &'a [u8],
        chunk: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    /// Fails once with `Interrupted` before every successful read.
    struct Flaky<R> {
        inner: R,
        interrupt: bool,
    }

    impl<R: Read> Read for Flaky<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.inner.read(buf)
        }
    }

    #[test]
    fn test_exact_read_accumulates_partial_reads() {
        let mut reader = Trickle {
            data: &[1, 2, 3, 4, 5, 6, 7, 8, 9],
            chunk: 3,
        };
        let bytes = read_exact_bytes(&mut reader, 8).unwrap();
        assert_eq!(bytes, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(read_byte(&mut reader).unwrap(), Some(9));
        assert_eq!(read_byte(&mut reader).unwrap(), None);
    }

    #[test]
    fn test_exact_read_short_source() {
        let mut reader = Cursor::new(vec![0u8; 5]);
        let err = read_exact_bytes(&mut reader, 8).unwrap_err();
        assert!(matches!(err, GzInfoError::UnexpectedEof { expected: 3 }));
    }

    #[test]
    fn test_exact_read_zero_bytes() {
        let mut reader = Cursor::new(Vec::<u8>::new());
        assert!(read_exact_bytes(&mut reader, 0).unwrap().is_empty());
    }

    #[test]
    fn test_interrupted_reads_are_retried() {
        let mut reader = Flaky {
            inner: Cursor::new(vec![0xAAu8, 0xBB]),
            interrupt: false,
        };
        let mut buf = [0u8; 2];
        read_exact_into(&mut reader, &mut buf).unwrap();
        assert_eq!(buf, [0xAA, 0xBB]);
    }

    #[test]
    fn test_read_up_to_stops_at_eof() {
        let mut reader = Cursor::new(vec![0x1Fu8]);
        let mut buf = [0u8; 2];
        assert_eq!(read_up_to(&mut reader, &mut buf).unwrap(), 1);
        assert_eq!(buf[0], 0x1F);
    }
}
