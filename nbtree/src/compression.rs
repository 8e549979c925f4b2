//! Gzip detection for whole NBT files.
//!
//! Files such as `level.dat` and player data are gzipped, while NBT pulled out
//! of region files or sent over the network usually is not. [`decompress`]
//! probes the input by trying to inflate it and falls back to the raw bytes
//! when that fails.
use std::io::Read;

use flate2::read::GzDecoder;
use log::debug;

use crate::error::{Error, ErrorKind, Result};

/// How the decoder treats compression on its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Try gzip, use the input as-is if it doesn't inflate.
    #[default]
    Auto,
    /// Input must be gzip.
    Gzip,
    /// Input is raw NBT.
    None,
}

/// Outcome of probing some input for gzip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decompressed<'a> {
    Inflated(Vec<u8>),
    Passthrough(&'a [u8]),
}

impl<'a> Decompressed<'a> {
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Decompressed::Inflated(data) => data,
            Decompressed::Passthrough(data) => data,
        }
    }

    pub fn is_inflated(&self) -> bool {
        matches!(self, Decompressed::Inflated(_))
    }

    pub fn into_vec(self) -> Vec<u8> {
        match self {
            Decompressed::Inflated(data) => data,
            Decompressed::Passthrough(data) => data.to_vec(),
        }
    }
}

impl<'a> AsRef<[u8]> for Decompressed<'a> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Largest inflated size accepted by default. A few kilobytes of gzip can
/// otherwise expand into gigabytes.
pub const MAX_INFLATED_LEN: usize = 64 * 1024 * 1024;

/// Inflate `raw` if it is gzip, otherwise hand it back untouched. A failed
/// probe is not an error. Input inflating past [`MAX_INFLATED_LEN`] also
/// passes through.
pub fn decompress(raw: &[u8]) -> Decompressed<'_> {
    if raw.is_empty() {
        return Decompressed::Passthrough(raw);
    }

    match gunzip(raw, MAX_INFLATED_LEN) {
        Ok(data) => {
            debug!("inflated {} gzip bytes to {}", raw.len(), data.len());
            Decompressed::Inflated(data)
        }
        Err(e) => {
            debug!("input is not gzip ({}), using {} raw bytes", e, raw.len());
            Decompressed::Passthrough(raw)
        }
    }
}

/// Apply a [`Compression`] mode to some input, inflating at most `max_len`
/// bytes. Unlike [`decompress`], gzip input that inflates past `max_len` is
/// an error in every mode.
pub fn prepare(raw: &[u8], mode: Compression, max_len: usize) -> Result<Decompressed<'_>> {
    match mode {
        Compression::Auto if raw.is_empty() => Ok(Decompressed::Passthrough(raw)),
        Compression::Auto => match gunzip(raw, max_len) {
            Ok(data) => {
                debug!("inflated {} gzip bytes to {}", raw.len(), data.len());
                Ok(Decompressed::Inflated(data))
            }
            Err(e) if matches!(e.kind(), ErrorKind::InflateLimit(_)) => Err(e),
            Err(e) => {
                debug!("input is not gzip ({}), using {} raw bytes", e, raw.len());
                Ok(Decompressed::Passthrough(raw))
            }
        },
        Compression::Gzip => gunzip(raw, max_len).map(Decompressed::Inflated),
        Compression::None => Ok(Decompressed::Passthrough(raw)),
    }
}

fn gunzip(raw: &[u8], max_len: usize) -> Result<Vec<u8>> {
    // One byte past the limit tells a full buffer apart from an oversized one.
    let limit = (max_len as u64).saturating_add(1);
    let mut decoder = GzDecoder::new(raw).take(limit);
    let mut buf = vec![];
    decoder
        .read_to_end(&mut buf)
        .map_err(Error::decompression)?;

    if buf.len() > max_len {
        return Err(Error::inflate_limit(max_len));
    }
    Ok(buf)
}
