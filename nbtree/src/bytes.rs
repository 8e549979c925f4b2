//! A borrowed, bounds checked view of some bytes.
//!
//! [`Bytes`] never copies. Slicing gives another view into the same data, and
//! the numeric views decode directly out of the borrowed slice. The byte order
//! of the numeric views is picked with a [`ByteOrder`] type parameter, NBT
//! itself is always [`BigEndian`](byteorder::BigEndian).
//!
//! ```
//! use byteorder::{BigEndian, LittleEndian};
//! use nbtree::bytes::Bytes;
//!
//! # fn main() -> nbtree::error::Result<()> {
//! let bytes = Bytes::new(&[0x00, 0x00, 0x00, 0x7B]);
//! assert_eq!(bytes.as_i32::<BigEndian>()?, 123);
//! assert_eq!(bytes.as_i32::<LittleEndian>()?, 0x7B00_0000);
//! assert_eq!(bytes.slice(3, 4)?.at(0)?, 0x7B);
//! # Ok(())
//! # }
//! ```
use std::borrow::Cow;

use byteorder::ByteOrder;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bytes<'a> {
    data: &'a [u8],
}

impl<'a> Bytes<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'a, u8> {
        self.data.iter()
    }

    /// Byte at `index`.
    pub fn at(&self, index: usize) -> Result<u8> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| Error::out_of_bounds(index, index.saturating_add(1), self.len()))
    }

    /// View of `[start, end)`. Fails if either end is past the buffer or if
    /// `end < start`. An empty view, even `slice(0, 0)`, is fine.
    pub fn slice(&self, start: usize, end: usize) -> Result<Bytes<'a>> {
        if end < start || end > self.len() {
            return Err(Error::out_of_bounds(start, end, self.len()));
        }
        Ok(Bytes::new(&self.data[start..end]))
    }

    /// Unsigned integer of 1 to 8 bytes.
    pub fn as_uint<B: ByteOrder>(&self) -> Result<u64> {
        self.check_int_width()?;
        Ok(B::read_uint(self.data, self.len()))
    }

    /// Signed integer of 1 to 8 bytes, sign extended from the top bit of the
    /// most significant byte.
    pub fn as_int<B: ByteOrder>(&self) -> Result<i64> {
        self.check_int_width()?;
        Ok(B::read_int(self.data, self.len()))
    }

    pub fn as_i8(&self) -> Result<i8> {
        self.check_width(1)?;
        Ok(self.data[0] as i8)
    }

    pub fn as_i16<B: ByteOrder>(&self) -> Result<i16> {
        self.check_width(std::mem::size_of::<i16>())?;
        Ok(B::read_i16(self.data))
    }

    pub fn as_i32<B: ByteOrder>(&self) -> Result<i32> {
        self.check_width(std::mem::size_of::<i32>())?;
        Ok(B::read_i32(self.data))
    }

    pub fn as_i64<B: ByteOrder>(&self) -> Result<i64> {
        self.check_width(std::mem::size_of::<i64>())?;
        Ok(B::read_i64(self.data))
    }

    pub fn as_f32<B: ByteOrder>(&self) -> Result<f32> {
        self.check_width(std::mem::size_of::<f32>())?;
        Ok(B::read_f32(self.data))
    }

    pub fn as_f64<B: ByteOrder>(&self) -> Result<f64> {
        self.check_width(std::mem::size_of::<f64>())?;
        Ok(B::read_f64(self.data))
    }

    /// Decodes the bytes as Java's modified UTF-8, which is how NBT stores
    /// all of its text. Borrows when the bytes are already valid UTF-8.
    pub fn as_str(&self) -> Result<Cow<'a, str>> {
        cesu8::from_java_cesu8(self.data).map_err(|_| Error::nonunicode(self.data))
    }

    pub fn as_hex(&self) -> String {
        self.data.iter().map(|b| format!("{:02X}", b)).collect()
    }

    fn check_width(&self, expected: usize) -> Result<()> {
        if self.len() == expected {
            Ok(())
        } else {
            Err(Error::width_mismatch(expected, self.len()))
        }
    }

    fn check_int_width(&self) -> Result<()> {
        match self.len() {
            1..=8 => Ok(()),
            n => Err(Error::width_mismatch(n.clamp(1, 8), n)),
        }
    }
}

impl<'a> From<&'a [u8]> for Bytes<'a> {
    fn from(data: &'a [u8]) -> Self {
        Bytes::new(data)
    }
}

impl<'a> AsRef<[u8]> for Bytes<'a> {
    fn as_ref(&self) -> &[u8] {
        self.data
    }
}

impl<'a> IntoIterator for Bytes<'a> {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
