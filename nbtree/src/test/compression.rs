use std::io::Write;

use flate2::{write::GzEncoder, Compression as Level};

use crate::{
    compression::{decompress, prepare, Compression, Decompressed},
    error::{ErrorKind, Result},
};

pub(crate) fn gzip(data: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Level::default());
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

#[test]
fn inflates_gzip() {
    let raw = b"some nbt, honest".to_vec();
    let gz = gzip(&raw);

    let out = decompress(&gz);
    assert!(out.is_inflated());
    assert_eq!(out.as_slice(), raw.as_slice());
}

#[test]
fn passes_through_raw() {
    let raw = [0x0A, 0x00, 0x00, 0x00];

    let out = decompress(&raw);
    assert_eq!(out, Decompressed::Passthrough(&raw[..]));
}

#[test]
fn passes_through_empty() {
    assert_eq!(decompress(&[]), Decompressed::Passthrough(&[][..]));
}

#[test]
fn passes_through_corrupt_gzip() {
    let mut gz = gzip(b"abcdefgh");
    gz.truncate(gz.len() / 2);

    let out = decompress(&gz);
    assert!(!out.is_inflated());
    assert_eq!(out.as_slice(), gz.as_slice());
}

#[test]
fn idempotent_on_uncompressed() {
    let raw = [0x0A, 0x00, 0x01, b'x', 0x00];

    let once = decompress(&raw).into_vec();
    let twice = decompress(&once).into_vec();
    assert_eq!(once, twice);
}

#[test]
fn forced_modes() -> Result<()> {
    let raw = [0x0A, 0x00, 0x00, 0x00];
    let gz = gzip(&raw);

    assert_eq!(prepare(&gz, Compression::Gzip, 4)?.as_slice(), &raw);
    assert_eq!(prepare(&gz, Compression::None, 4)?.as_slice(), gz.as_slice());
    assert_eq!(prepare(&raw, Compression::Auto, 4)?.as_slice(), &raw);

    let err = prepare(&raw, Compression::Gzip, 4).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Decompression);
    Ok(())
}

#[test]
fn inflated_size_is_bounded() -> Result<()> {
    let raw = vec![0u8; 4096];
    let gz = gzip(&raw);
    assert!(gz.len() < 100);

    assert_eq!(prepare(&gz, Compression::Auto, 4096)?.as_slice(), raw.as_slice());
    for mode in [Compression::Auto, Compression::Gzip] {
        let err = prepare(&gz, mode, 4095).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InflateLimit(4095));
    }
    Ok(())
}

