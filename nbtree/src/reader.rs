//! Sequential reading over a [`Bytes`] buffer.
use byteorder::BigEndian;

use crate::{
    bytes::Bytes,
    error::{Error, Result},
    Tag,
};

/// A forward-only cursor over a byte buffer. The cursor never moves backwards,
/// and a failed read leaves it where it was.
///
/// ```
/// use nbtree::reader::Reader;
///
/// # fn main() -> nbtree::error::Result<()> {
/// let mut reader = Reader::new(&[0x00, 0x03, b'f', b'o', b'o']);
/// assert_eq!(reader.consume_str()?, "foo");
/// assert!(reader.is_eof());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    bytes: Bytes<'a>,
    cursor: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::from_bytes(Bytes::new(data))
    }

    pub fn from_bytes(bytes: Bytes<'a>) -> Self {
        Self { bytes, cursor: 0 }
    }

    /// Current offset into the buffer.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.len() - self.cursor
    }

    pub fn is_eof(&self) -> bool {
        self.cursor >= self.len()
    }

    /// Take the next `n` bytes.
    pub fn read(&mut self, n: usize) -> Result<Bytes<'a>> {
        if n > self.remaining() {
            return Err(Error::truncated(n, self.remaining(), self.cursor));
        }
        let bs = self.bytes.slice(self.cursor, self.cursor + n)?;
        self.cursor += n;
        Ok(bs)
    }

    pub fn consume(&mut self) -> Result<u8> {
        self.read(1)?.at(0)
    }

    /// The next byte without advancing, or `None` at the end of the buffer.
    pub fn peek(&self) -> Option<u8> {
        self.bytes.at(self.cursor).ok()
    }

    pub fn consume_i8(&mut self) -> Result<i8> {
        self.read(1)?.as_i8()
    }

    pub fn consume_i16(&mut self) -> Result<i16> {
        self.read(std::mem::size_of::<i16>())?.as_i16::<BigEndian>()
    }

    pub fn consume_i32(&mut self) -> Result<i32> {
        self.read(std::mem::size_of::<i32>())?.as_i32::<BigEndian>()
    }

    pub fn consume_i64(&mut self) -> Result<i64> {
        self.read(std::mem::size_of::<i64>())?.as_i64::<BigEndian>()
    }

    pub fn consume_f32(&mut self) -> Result<f32> {
        self.read(std::mem::size_of::<f32>())?.as_f32::<BigEndian>()
    }

    pub fn consume_f64(&mut self) -> Result<f64> {
        self.read(std::mem::size_of::<f64>())?.as_f64::<BigEndian>()
    }

    /// Reads a kind-id byte. An unknown kind reports the offset of the byte
    /// that was read.
    pub fn consume_tag(&mut self) -> Result<Tag> {
        let offset = self.cursor;
        let byte = self.consume()?;
        Tag::try_from(byte).map_err(|_| Error::unknown_tag(byte, offset))
    }

    /// Reads a 2 byte big-endian length followed by that much modified UTF-8.
    pub fn consume_str(&mut self) -> Result<String> {
        let len = self.read(2)?.as_uint::<BigEndian>()? as usize;
        Ok(self.read(len)?.as_str()?.into_owned())
    }

    /// Reads the 4 byte signed length that prefixes lists and arrays.
    pub fn consume_len(&mut self) -> Result<usize> {
        let len = self.consume_i32()?;
        usize::try_from(len).map_err(|_| Error::negative_length(len))
    }
}
