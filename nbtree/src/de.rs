//! Recursive decoding of NBT into a [`Root`] tree.
//!
//! Decoding is a single forward pass. Every tag consumes exactly the bytes
//! that belong to it, so the position of the next tag is only known once the
//! previous one is fully decoded. Any failure aborts the whole decode.
//!
//! Compounds and lists that are still open are kept on a stack of layers
//! rather than on the call stack, so only the `max_depth` option limits
//! how deeply the input may nest.
//!
//! ```
//! use nbtree::{decode_root, Value};
//!
//! # fn main() -> nbtree::error::Result<()> {
//! // TAG_Compound('')
//! // {
//! //     TAG_Int('foo'): 123
//! // }
//! let data = b"\
//!     \x0a\x00\x00\
//!         \x03\x00\x03foo\x00\x00\x00\x7b\
//!     \x00";
//!
//! let root = decode_root(data)?;
//! assert_eq!(root.name, "");
//! assert_eq!(root.get("foo"), Some(&Value::Int(123)));
//! # Ok(())
//! # }
//! ```
use byteorder::{BigEndian, ByteOrder};
use log::trace;

use crate::{
    compression,
    error::{Error, Result},
    reader::Reader,
    Compound, DecodeOpts, List, Name, NamedTag, Root, Tag, Value,
};

/// Decode a whole NBT document, inflating it first if it is gzipped. The
/// first tag must be a compound. Bytes after the root compound are ignored.
pub fn decode_root(input: &[u8]) -> Result<Root> {
    decode_root_with_opts(input, DecodeOpts::default())
}

/// Like [`decode_root`] with non-default options.
pub fn decode_root_with_opts(input: &[u8], opts: DecodeOpts) -> Result<Root> {
    let data = compression::prepare(input, opts.compression, opts.max_inflated_len)?;
    let mut reader = Reader::new(data.as_slice());
    let mut decoder = Decoder::new(&mut reader, opts);
    decoder.decode_root()
}

/// Like [`decode_root`] but fails if anything follows the root compound.
pub fn decode_root_exact(input: &[u8]) -> Result<Root> {
    decode_root_exact_with_opts(input, DecodeOpts::default())
}

/// Like [`decode_root_exact`] with non-default options.
pub fn decode_root_exact_with_opts(input: &[u8], opts: DecodeOpts) -> Result<Root> {
    let data = compression::prepare(input, opts.compression, opts.max_inflated_len)?;
    let mut reader = Reader::new(data.as_slice());
    let root = Decoder::new(&mut reader, opts).decode_root()?;

    match reader.remaining() {
        0 => Ok(root),
        n => Err(Error::trailing_bytes(n)),
    }
}

/// Decode a single tag from the reader with default options. See
/// [`Decoder::decode_tag`].
pub fn decode_tag(
    reader: &mut Reader<'_>,
    should_read_name: bool,
    forced_kind: Option<Tag>,
) -> Result<NamedTag> {
    Decoder::new(reader, DecodeOpts::default()).decode_tag(should_read_name, forced_kind)
}

/// Decodes tags from a [`Reader`]. The decoder borrows the reader exclusively
/// for as long as it lives, and leaves the cursor just after the last tag it
/// decoded.
pub struct Decoder<'r, 'a> {
    reader: &'r mut Reader<'a>,
    opts: DecodeOpts,
}

/// A compound or list whose children are still being read.
enum Layer {
    Compound {
        name: Name,
        entries: Vec<NamedTag>,
    },
    List {
        name: Name,
        element: Tag,
        remaining: usize,
        items: Vec<Value>,
    },
}

impl Layer {
    fn push(&mut self, child: NamedTag) {
        match self {
            Layer::Compound { entries, .. } => entries.push(child),
            Layer::List { items, .. } => items.push(child.value),
        }
    }

    fn finish(self) -> NamedTag {
        match self {
            Layer::Compound { name, entries } => {
                NamedTag::new(name, Value::Compound(Compound::new(entries)))
            }
            Layer::List {
                name,
                element,
                items,
                ..
            } => NamedTag::new(name, Value::List(List::new(element, items))),
        }
    }
}

impl<'r, 'a> Decoder<'r, 'a> {
    pub fn new(reader: &'r mut Reader<'a>, opts: DecodeOpts) -> Self {
        Self { reader, opts }
    }

    /// Decode the root compound and its name.
    pub fn decode_root(&mut self) -> Result<Root> {
        let tag = self.reader.consume_tag()?;
        if tag != Tag::Compound {
            return Err(Error::malformed_root(tag));
        }

        let root = self.decode_tag(true, Some(Tag::Compound))?;
        match root {
            NamedTag {
                name: Some(name),
                value: Value::Compound(compound),
            } => Ok(Root { name, compound }),
            other => Err(Error::malformed_root(other.tag())),
        }
    }

    /// Decode one tag.
    ///
    /// The kind-id byte is read from the input unless `forced_kind` is given,
    /// which is how list elements are read since the list header declares
    /// their kind once. The name is only read if `should_read_name` is set,
    /// otherwise the tag has no name. End tags never have a name.
    pub fn decode_tag(
        &mut self,
        should_read_name: bool,
        forced_kind: Option<Tag>,
    ) -> Result<NamedTag> {
        let (tag, name) = self.read_header(should_read_name, forced_kind)?;
        if !is_container(tag) {
            let value = self.decode_scalar(tag)?;
            return Ok(NamedTag::new(name, value));
        }

        let mut parents = vec![];
        let mut current = self.open_layer(tag, name, 0)?;
        loop {
            match self.next_child(&mut current)? {
                Some((tag, name)) if is_container(tag) => {
                    let child = self.open_layer(tag, name, parents.len() + 1)?;
                    parents.push(std::mem::replace(&mut current, child));
                }
                Some((tag, name)) => {
                    let value = self.decode_scalar(tag)?;
                    current.push(NamedTag::new(name, value));
                }
                None => {
                    let done = current.finish();
                    match parents.pop() {
                        Some(parent) => {
                            current = parent;
                            current.push(done);
                        }
                        None => return Ok(done),
                    }
                }
            }
        }
    }

    fn read_header(
        &mut self,
        should_read_name: bool,
        forced_kind: Option<Tag>,
    ) -> Result<(Tag, Name)> {
        let tag = match forced_kind {
            Some(tag) => tag,
            None => self.reader.consume_tag()?,
        };

        if tag == Tag::End {
            return Ok((tag, None));
        }

        let name = match should_read_name {
            true => Some(self.reader.consume_str()?),
            false => None,
        };

        trace!("{:?}({:?}) at {}", tag, name, self.reader.position());
        Ok((tag, name))
    }

    /// Header of the next child of `layer`, or `None` once it is complete.
    fn next_child(&mut self, layer: &mut Layer) -> Result<Option<(Tag, Name)>> {
        match layer {
            Layer::Compound { .. } => {
                let (tag, name) = self.read_header(true, None)?;
                Ok((tag != Tag::End).then_some((tag, name)))
            }
            Layer::List {
                element, remaining, ..
            } => {
                if *remaining == 0 {
                    return Ok(None);
                }
                *remaining -= 1;
                self.read_header(false, Some(*element)).map(Some)
            }
        }
    }

    /// Start a compound or list with `open` others already around it.
    fn open_layer(&mut self, tag: Tag, name: Name, open: usize) -> Result<Layer> {
        if open >= self.opts.max_depth {
            return Err(Error::depth_limit(self.opts.max_depth));
        }

        if tag == Tag::Compound {
            return Ok(Layer::Compound {
                name,
                entries: vec![],
            });
        }

        let element = self.reader.consume_tag()?;
        let len = self.consume_seq_len()?;

        // Old chunks store empty lists as lists of End, so only a non-empty
        // one is wrong. A long list of End would otherwise be a tiny payload
        // expanding into a huge tree.
        if element == Tag::End && len != 0 {
            return Err(Error::invalid_list());
        }

        // Every element takes at least one byte, except End which is empty.
        Ok(Layer::List {
            name,
            element,
            remaining: len,
            items: Vec::with_capacity(len.min(self.reader.remaining())),
        })
    }

    fn decode_scalar(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::End => Value::End,
            Tag::Byte => Value::Byte(self.reader.consume_i8()?),
            Tag::Short => Value::Short(self.reader.consume_i16()?),
            Tag::Int => Value::Int(self.reader.consume_i32()?),
            Tag::Long => Value::Long(self.reader.consume_i64()?),
            Tag::Float => Value::Float(self.reader.consume_f32()?),
            Tag::Double => Value::Double(self.reader.consume_f64()?),
            Tag::String => Value::String(self.reader.consume_str()?),
            Tag::ByteArray => {
                let len = self.consume_seq_len()?;
                let data = self.reader.read(len)?;
                Value::ByteArray(data.iter().map(|b| *b as i8).collect())
            }
            Tag::IntArray => {
                let len = self.consume_seq_len()?;
                let data = self.reader.read(try_size(len, 4)?)?;
                Value::IntArray(
                    data.as_slice()
                        .chunks_exact(4)
                        .map(BigEndian::read_i32)
                        .collect(),
                )
            }
            Tag::LongArray => {
                let len = self.consume_seq_len()?;
                let data = self.reader.read(try_size(len, 8)?)?;
                Value::LongArray(
                    data.as_slice()
                        .chunks_exact(8)
                        .map(BigEndian::read_i64)
                        .collect(),
                )
            }
            Tag::List | Tag::Compound => panic!("containers are decoded as layers"),
        })
    }

    fn consume_seq_len(&mut self) -> Result<usize> {
        let len = self.reader.consume_len()?;
        if len > self.opts.max_seq_len {
            return Err(Error::sequence_too_long(len, self.opts.max_seq_len));
        }
        Ok(len)
    }
}

fn is_container(tag: Tag) -> bool {
    matches!(tag, Tag::List | Tag::Compound)
}

fn try_size(len: usize, width: usize) -> Result<usize> {
    len.checked_mul(width)
        .ok_or_else(|| Error::sequence_too_long(len, usize::MAX / width))
}
