//! Header decoding through the public API, with path and stream inputs.

use gzinfo::{
    ByteSource, ErrorKind, GzInfoError, HeaderDecoder, SeekableSource, StreamSource, flags,
    read_header,
};
use std::fs::File;
use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// Build a header: magic, deflate, `flag`, `mtime`, XFL=0, OS=3 (Unix).
fn header(flag: u8, mtime: u32) -> Vec<u8> {
    let mut data = vec![0x1F, 0x8B, 0x08, flag];
    data.extend_from_slice(&mtime.to_le_bytes());
    data.extend_from_slice(&[0x00, 0x03]);
    data
}

/// Create a temporary file with the given contents and return its path.
fn create_temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gzinfo_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    let path = dir.join(name);
    let mut file = File::create(&path).expect("Failed to create temp file");
    file.write_all(contents)
        .expect("Failed to write to temp file");
    file.sync_all().expect("Failed to sync temp file");
    path
}

/// Remove a temporary file.
fn remove_temp_file(path: &Path) {
    let _ = std::fs::remove_file(path);
}

/// Hands out one byte per read call.
struct OneByteAtATime<R>(R);

impl<R: Read> Read for OneByteAtATime<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let end = buf.len().min(1);
        self.0.read(&mut buf[..end])
    }
}

impl<R: Read> ByteSource for OneByteAtATime<R> {}

#[test]
fn test_stream_name_used_without_fname() {
    let mtime = 1_600_000_000;
    for flag in [0, flags::FTEXT, flags::FEXTRA, flags::FHCRC | flags::FCOMMENT] {
        let mut source =
            StreamSource::new(Cursor::new(header(flag, mtime))).with_name("dump.sql.gzip");
        let info = HeaderDecoder::new()
            .decode(&mut source)
            .unwrap()
            .expect("header present");

        assert_eq!(info.fname(), "dump.sql");
        assert_eq!(info.method(), 8);
        assert_eq!(info.flag(), flag);
        assert_eq!(info.last_mtime(), mtime);
    }
}

#[test]
fn test_fname_with_and_without_extra() {
    let mut plain = header(flags::FNAME, 0);
    plain.extend_from_slice(b"name\0");

    let mut extra = header(flags::FNAME | flags::FEXTRA, 0);
    extra.extend_from_slice(&4u16.to_le_bytes());
    extra.extend_from_slice(b"AB\x02\x00");
    extra.extend_from_slice(b"name\0");

    for data in [plain, extra] {
        let info = HeaderDecoder::new()
            .decode(&mut Cursor::new(data))
            .unwrap()
            .unwrap();
        assert_eq!(info.fname(), "name");
    }
}

#[test]
fn test_empty_source_is_rewound() {
    let mut cursor = Cursor::new(Vec::<u8>::new());
    assert!(HeaderDecoder::new().decode(&mut cursor).unwrap().is_none());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_successful_decode_rewinds_seekable_stream() {
    let mut data = header(flags::FNAME, 0);
    data.extend_from_slice(b"a.txt\0compressed-bytes");
    let mut cursor = Cursor::new(data.clone());

    {
        let mut source = SeekableSource::new(&mut cursor);
        let info = HeaderDecoder::new().decode(&mut source).unwrap().unwrap();
        assert_eq!(info.fname(), "a.txt");
    }

    // The caller still owns the stream and can read it from byte 0.
    let mut reread = Vec::new();
    cursor.read_to_end(&mut reread).unwrap();
    assert_eq!(reread, data);
}

#[test]
fn test_format_errors() {
    let err = HeaderDecoder::new()
        .decode(&mut Cursor::new(vec![0x00u8, 0x00, 0x08, 0x00]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("[00, 00]"));

    let mut data = header(0, 0);
    data[2] = 0x01;
    let err = HeaderDecoder::new()
        .with_default_filename("x")
        .decode(&mut Cursor::new(data))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(matches!(err, GzInfoError::UnsupportedMethod { method: 1 }));
}

#[test]
fn test_truncated_after_five_bytes() {
    let data = vec![0x1Fu8, 0x8B, 0x08, 0x00, 0x01, 0x02, 0x03];
    let err = HeaderDecoder::new()
        .with_default_filename("x")
        .decode(&mut Cursor::new(data))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncation);
}

#[test]
fn test_latin1_high_bytes() {
    let name = "r\u{e9}sum\u{e9} \u{c6}\u{f8}\u{ff}";
    let mut data = header(flags::FNAME, 0);
    // Every char above is in U+0000..=U+00FF, so each maps to one byte.
    data.extend(name.chars().map(|c| c as u8));
    data.push(0);

    let info = HeaderDecoder::new()
        .decode(&mut Cursor::new(data))
        .unwrap()
        .unwrap();
    assert_eq!(info.fname(), name);
}

#[test]
fn test_usage_errors() {
    let err = read_header(None, None, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);

    let mut source = StreamSource::new(Cursor::new(header(0, 0)));
    let err = read_header(None, Some(&mut source), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
}

#[test]
fn test_one_byte_reads() {
    let mut data = header(flags::FNAME | flags::FEXTRA, 99);
    data.extend_from_slice(&2u16.to_le_bytes());
    data.extend_from_slice(&[0xEE, 0xEE]);
    data.extend_from_slice(b"slow.log\0");

    let info = HeaderDecoder::new()
        .decode(&mut OneByteAtATime(Cursor::new(data)))
        .unwrap()
        .unwrap();
    assert_eq!(info.fname(), "slow.log");
    assert_eq!(info.last_mtime(), 99);
}

#[test]
fn test_path_uses_embedded_name() {
    let mut data = header(flags::FNAME, 1234);
    data.extend_from_slice(b"original.txt\0\x03\x00");
    let path = create_temp_file("embedded.gz", &data);

    let info = read_header(Some(path.as_path()), None, None).unwrap().unwrap();
    assert_eq!(info.fname(), "original.txt");
    assert_eq!(info.last_mtime(), 1234);

    remove_temp_file(&path);
}

#[test]
fn test_path_name_fallback_strips_gzip() {
    let path = create_temp_file("backup.tar.gzip", &header(0, 0));

    let info = HeaderDecoder::new().decode_path(&path).unwrap().unwrap();
    let expected = path.to_string_lossy();
    assert_eq!(info.fname(), expected.strip_suffix(".gzip").unwrap());

    remove_temp_file(&path);
}

#[test]
fn test_path_gz_suffix_kept() {
    let path = create_temp_file("backup.tar.gz", &header(0, 0));

    let info = HeaderDecoder::new().decode_path(&path).unwrap().unwrap();
    assert_eq!(info.fname(), path.to_string_lossy());

    remove_temp_file(&path);
}

#[test]
fn test_empty_file() {
    let path = create_temp_file("empty.gz", b"");
    assert!(HeaderDecoder::new().decode_path(&path).unwrap().is_none());
    remove_temp_file(&path);
}

#[test]
fn test_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("gzinfo_test_does_not_exist.gz");
    let err = HeaderDecoder::new().decode_path(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}
