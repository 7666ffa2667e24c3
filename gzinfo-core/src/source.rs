//! Byte sources the header decoder reads from.
//!
//! A [`ByteSource`] is a sequential reader that may additionally be able to
//! jump back to its first byte and may know its own name. The decoder uses
//! the name as the fallback filename and repositions the source after a
//! successful (or empty) decode so the caller can read it again.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Stdin, StdinLock};
use std::path::Path;

/// A readable byte stream with optional repositioning and an optional name.
pub trait ByteSource: Read {
    /// Move back to the first byte of the source.
    ///
    /// Returns `Ok(false)` when the source cannot be repositioned.
    fn seek_to_start(&mut self) -> io::Result<bool> {
        Ok(false)
    }

    /// The name this source was opened under, if any.
    fn name(&self) -> Option<&str> {
        None
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn seek_to_start(&mut self) -> io::Result<bool> {
        (**self).seek_to_start()
    }

    fn name(&self) -> Option<&str> {
        (**self).name()
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn seek_to_start(&mut self) -> io::Result<bool> {
        (**self).seek_to_start()
    }

    fn name(&self) -> Option<&str> {
        (**self).name()
    }
}

impl<T: AsRef<[u8]>> ByteSource for Cursor<T> {
    fn seek_to_start(&mut self) -> io::Result<bool> {
        self.set_position(0);
        Ok(true)
    }
}

impl ByteSource for Stdin {}

impl ByteSource for StdinLock<'_> {}

/// A file opened from a path, read as raw (still compressed) bytes.
#[derive(Debug)]
pub struct PathSource {
    file: File,
    name: String,
}

impl PathSource {
    /// Open `path` for reading.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(Self {
            file,
            name: path.to_string_lossy().into_owned(),
        })
    }

    /// Consume the source and return the underlying file.
    pub fn into_inner(self) -> File {
        self.file
    }
}

impl Read for PathSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl ByteSource for PathSource {
    fn seek_to_start(&mut self) -> io::Result<bool> {
        self.file.seek(SeekFrom::Start(0))?;
        Ok(true)
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// A caller-supplied reader that cannot be repositioned.
///
/// Wrap `&mut reader` to keep ownership with the caller.
#[derive(Debug)]
pub struct StreamSource<R> {
    inner: R,
    name: Option<String>,
}

impl<R: Read> StreamSource<R> {
    /// Wrap an unnamed reader.
    pub fn new(inner: R) -> Self {
        Self { inner, name: None }
    }

    /// Attach a name to the stream.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get a reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for StreamSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read> ByteSource for StreamSource<R> {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A caller-supplied reader that can be repositioned to its start.
#[derive(Debug)]
pub struct SeekableSource<R> {
    inner: R,
    name: Option<String>,
}

impl<R: Read + Seek> SeekableSource<R> {
    /// Wrap an unnamed seekable reader.
    pub fn new(inner: R) -> Self {
        Self { inner, name: None }
    }

    /// Attach a name to the stream.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get a reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> Read for SeekableSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read + Seek> ByteSource for SeekableSource<R> {
    fn seek_to_start(&mut self) -> io::Result<bool> {
        self.inner.seek(SeekFrom::Start(0))?;
        Ok(true)
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
