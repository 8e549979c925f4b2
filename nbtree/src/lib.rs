//! nbtree decodes NBT data from *Minecraft: Java Edition* into an owned tree
//! of tags. This format is used by the game to store various things, such as
//! the world data and player inventories.
//!
//! * For decoding a whole document see [`decode_root`].
//! * For the decoded tree see [`Root`], [`Compound`], [`List`] and [`Value`].
//! * For decoding tag by tag see [`de::Decoder`] and [`reader::Reader`].
//!
//! Gzipped input, as found in `level.dat` and player files, is detected and
//! inflated before decoding. See [`compression`] for controlling that.
//!
//! # Quick example
//!
//! This prints the player compound out of a `level.dat` file.
//!
//! ```no_run
//! use nbtree::{decode_root, error::Result};
//!
//! fn main() -> Result<()> {
//!     let args: Vec<_> = std::env::args().skip(1).collect();
//!     let data = std::fs::read(&args[0]).unwrap();
//!
//!     let level = decode_root(&data)?;
//!     let player = level.path(&["Data", "Player"]).and_then(|v| v.as_compound());
//!
//!     println!("{:#?}", player);
//!     Ok(())
//! }
//! ```
//!
//! # Logging
//!
//! The decoder logs through the [`log`](https://docs.rs/log) facade. The
//! outcome of the gzip probe is logged at `debug`, and every tag decoded is
//! logged at `trace`.

pub mod bytes;
pub mod compression;
pub mod de;
pub mod error;
pub mod reader;

mod value;

pub use de::{
    decode_root, decode_root_exact, decode_root_exact_with_opts, decode_root_with_opts, decode_tag,
};
pub use value::*;

#[cfg(test)]
mod test;

use compression::Compression;

/// An NBT tag kind. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of unnamed values that all have the same tag.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

// Written out by hand rather than derived, the set of tags very rarely
// changes.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

/// Options for decoding. The defaults match what Minecraft itself accepts.
///
/// ```
/// use nbtree::{compression::Compression, DecodeOpts};
///
/// let opts = DecodeOpts::new()
///     .max_depth(64)
///     .compression(Compression::None);
/// # let _ = opts;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOpts {
    pub(crate) max_depth: usize,
    pub(crate) max_seq_len: usize,
    pub(crate) compression: Compression,
    pub(crate) max_inflated_len: usize,
}

impl DecodeOpts {
    pub fn new() -> Self {
        Self {
            max_depth: 512,
            max_seq_len: i32::MAX as usize,
            compression: Compression::Auto,
            max_inflated_len: compression::MAX_INFLATED_LEN,
        }
    }

    /// Maximum nesting of compounds and lists.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    /// Maximum declared length of any list or array.
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }

    pub fn compression(mut self, value: Compression) -> Self {
        self.compression = value;
        self
    }

    /// Maximum size of gzipped input once inflated.
    pub fn max_inflated_len(mut self, value: usize) -> Self {
        self.max_inflated_len = value;
        self
    }
}

impl Default for DecodeOpts {
    fn default() -> Self {
        Self::new()
    }
}
