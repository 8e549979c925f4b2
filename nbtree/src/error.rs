//! Contains the Error and Result type used by the decoder.
use crate::Tag;

/// An error raised while decoding NBT. Every error aborts the whole decode,
/// no partial tree is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A read asked for more bytes than the buffer had left.
    TruncatedInput {
        needed: usize,
        remaining: usize,
        offset: usize,
    },

    /// A kind-id byte outside of the known tags. The offset is that of the
    /// kind-id byte itself.
    UnknownTagKind { byte: u8, offset: usize },

    /// The top level tag was not a compound.
    MalformedRoot(Tag),

    /// A slice of a byte buffer fell outside of it.
    OutOfBounds { start: usize, end: usize, len: usize },

    /// A numeric view was taken over a slice of the wrong size.
    WidthMismatch { expected: usize, actual: usize },

    /// A list or array declared a negative length.
    NegativeLength(i32),

    /// A list or array declared more elements than the options allow.
    SequenceTooLong { len: usize, max: usize },

    /// A list of End tags with a non-zero length.
    InvalidList,

    /// Compounds and lists nested deeper than the options allow.
    DepthLimit(usize),

    /// Expected modified UTF-8 text but was not valid. Contained bytes are the
    /// invalid data.
    Nonunicode(Vec<u8>),

    /// Gzip was forced but the input would not inflate.
    Decompression,

    /// Gzip input inflated to more bytes than the options allow.
    InflateLimit(usize),

    /// Exact decoding found bytes after the root compound.
    TrailingBytes(usize),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.kind, ErrorKind::TruncatedInput { .. })
    }

    pub(crate) fn truncated(needed: usize, remaining: usize, offset: usize) -> Self {
        Self {
            msg: format!(
                "eof: needed {} bytes at offset {} but only {} remain",
                needed, offset, remaining
            ),
            kind: ErrorKind::TruncatedInput {
                needed,
                remaining,
                offset,
            },
        }
    }

    pub(crate) fn unknown_tag(byte: u8, offset: usize) -> Self {
        Self {
            msg: format!("unexpected byte {} at data index {}", byte, offset),
            kind: ErrorKind::UnknownTagKind { byte, offset },
        }
    }

    pub(crate) fn malformed_root(tag: Tag) -> Self {
        Self {
            msg: format!("invalid nbt: root was {:?}, expected Compound", tag),
            kind: ErrorKind::MalformedRoot(tag),
        }
    }

    pub(crate) fn out_of_bounds(start: usize, end: usize, len: usize) -> Self {
        Self {
            msg: format!(
                "slice({}:{}) is out of bounds for buffer of length {}",
                start, end, len
            ),
            kind: ErrorKind::OutOfBounds { start, end, len },
        }
    }

    pub(crate) fn width_mismatch(expected: usize, actual: usize) -> Self {
        Self {
            msg: format!("expected {} bytes, got {}", expected, actual),
            kind: ErrorKind::WidthMismatch { expected, actual },
        }
    }

    pub(crate) fn negative_length(len: i32) -> Self {
        Self {
            msg: format!("size was negative: {}", len),
            kind: ErrorKind::NegativeLength(len),
        }
    }

    pub(crate) fn sequence_too_long(len: usize, max: usize) -> Self {
        Self {
            msg: format!(
                "size ({}) greater than max sequence length ({})",
                len, max
            ),
            kind: ErrorKind::SequenceTooLong { len, max },
        }
    }

    pub(crate) fn invalid_list() -> Self {
        Self {
            msg: "unexpected list of type 'end' with non-zero length".into(),
            kind: ErrorKind::InvalidList,
        }
    }

    pub(crate) fn depth_limit(max: usize) -> Self {
        Self {
            msg: format!("nesting deeper than {} levels", max),
            kind: ErrorKind::DepthLimit(max),
        }
    }

    pub(crate) fn nonunicode(d: &[u8]) -> Self {
        Self {
            msg: format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(d)
            ),
            kind: ErrorKind::Nonunicode(d.to_vec()),
        }
    }

    pub(crate) fn decompression(e: std::io::Error) -> Self {
        Self {
            msg: format!("gzip decompression failed: {}", e),
            kind: ErrorKind::Decompression,
        }
    }

    pub(crate) fn inflate_limit(max: usize) -> Self {
        Self {
            msg: format!("gzip data inflates to more than {} bytes", max),
            kind: ErrorKind::InflateLimit(max),
        }
    }

    pub(crate) fn trailing_bytes(n: usize) -> Self {
        Self {
            msg: format!("{} unread bytes after root compound", n),
            kind: ErrorKind::TrailingBytes(n),
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}
