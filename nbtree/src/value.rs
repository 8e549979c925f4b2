use serde::{
    ser::{SerializeMap, SerializeSeq},
    Serialize,
};

use crate::Tag;

/// An optional tag name. Elements of a list and End markers have no name,
/// which is different to the empty name `Some("")` the root compound usually
/// carries.
pub type Name = Option<String>;

/// The payload of a decoded tag. Compounds and Lists own their children.
///
/// ```
/// use nbtree::{Tag, Value};
///
/// let v = Value::Int(123);
/// assert_eq!(v.tag(), Tag::Int);
/// assert_eq!(v.as_i64(), Some(123));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

/// A decoded tag: its name, if it has one, and its payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedTag {
    pub name: Name,
    pub value: Value,
}

impl NamedTag {
    pub fn new(name: Name, value: Value) -> Self {
        Self { name, value }
    }

    pub fn tag(&self) -> Tag {
        self.value.tag()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A homogeneous sequence of unnamed values.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element: Tag,
    items: Vec<Value>,
}

impl List {
    pub(crate) fn new(element: Tag, items: Vec<Value>) -> Self {
        Self { element, items }
    }

    /// The declared kind of the elements. Empty lists are frequently declared
    /// as lists of End.
    pub fn element(&self) -> Tag {
        self.element
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Named tags in the order they were read. Names are not required to be
/// unique, lookups return the first match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    entries: Vec<NamedTag>,
}

impl Compound {
    pub(crate) fn new(entries: Vec<NamedTag>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First child with the given name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entry(name).map(|e| &e.value)
    }

    /// First child with the given name, along with its name.
    pub fn entry(&self, name: &str) -> Option<&NamedTag> {
        self.entries
            .iter()
            .filter(|e| e.value.tag() != Tag::End)
            .find(|e| e.name() == Some(name))
    }

    pub fn get_compound(&self, name: &str) -> Option<&Compound> {
        self.get(name).and_then(Value::as_compound)
    }

    pub fn get_list(&self, name: &str) -> Option<&List> {
        self.get(name).and_then(Value::as_list)
    }

    /// Follow a chain of names through nested compounds. Every step but the
    /// last has to be a compound.
    ///
    /// ```
    /// # use nbtree::Compound;
    /// fn player(level: &Compound) -> Option<&Compound> {
    ///     level.path(&["Data", "Player"])?.as_compound()
    /// }
    /// ```
    pub fn path(&self, names: &[&str]) -> Option<&Value> {
        let (last, parents) = names.split_last()?;
        let mut current = self;
        for name in parents {
            current = current.get_compound(name)?;
        }
        current.get(last)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedTag> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = &'a NamedTag;
    type IntoIter = std::slice::Iter<'a, NamedTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Compound {
    type Item = NamedTag;
    type IntoIter = std::vec::IntoIter<NamedTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// The top level compound of an NBT document along with its name, which is
/// usually empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Root {
    pub name: String,
    pub compound: Compound,
}

impl std::ops::Deref for Root {
    type Target = Compound;

    fn deref(&self) -> &Self::Target {
        &self.compound
    }
}

impl From<Root> for Compound {
    fn from(root: Root) -> Self {
        root.compound
    }
}

impl Value {
    /// The kind of tag this value was decoded from.
    pub fn tag(&self) -> Tag {
        match self {
            Value::End => Tag::End,
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }
}

// Values serialize without their tags, so a tree comes out the way a person
// would write it by hand in JSON. Compounds keep their read order.

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::End => serializer.serialize_unit(),
            Value::Byte(v) => serializer.serialize_i8(*v),
            Value::Short(v) => serializer.serialize_i16(*v),
            Value::Int(v) => serializer.serialize_i32(*v),
            Value::Long(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f32(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::ByteArray(v) => v.serialize(serializer),
            Value::String(v) => serializer.serialize_str(v),
            Value::List(v) => v.serialize(serializer),
            Value::Compound(v) => v.serialize(serializer),
            Value::IntArray(v) => v.serialize(serializer),
            Value::LongArray(v) => v.serialize(serializer),
        }
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in &self.items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl Serialize for Compound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.name().unwrap_or_default(), &entry.value)?;
        }
        map.end()
    }
}
