//! Rendering of decoded NBT for the command line tools.
use std::io::{self, Write};

use nbtree::{Compound, List, Name, Value};

/// Write a tree one tag per line, children indented under their parent.
///
/// ```txt
/// Compound('')
///     Int('DataVersion') - 3465
///     List('Pos', Double, 3)
///         Double() - 0.5
/// ```
pub fn dump<W: Write>(out: &mut W, name: &Name, value: &Value) -> io::Result<()> {
    Dumper { out, indent: 0 }.value(name, value)
}

struct Dumper<'w, W: Write> {
    out: &'w mut W,
    indent: usize,
}

impl<'w, W: Write> Dumper<'w, W> {
    fn value(&mut self, name: &Name, value: &Value) -> io::Result<()> {
        let pad = self.indent;

        match value {
            Value::Compound(c) => {
                writeln!(self.out, "{:pad$}{}", "", label(value, name, &[]), pad = pad)?;
                self.compound(c)
            }
            Value::List(l) => {
                let args = [format!("{:?}", l.element()), l.len().to_string()];
                writeln!(self.out, "{:pad$}{}", "", label(value, name, &args), pad = pad)?;
                self.list(l)
            }
            other => writeln!(
                self.out,
                "{:pad$}{} - {}",
                "",
                label(value, name, &[]),
                scalar(other),
                pad = pad
            ),
        }
    }

    fn compound(&mut self, c: &Compound) -> io::Result<()> {
        self.indent += 4;
        for entry in c {
            self.value(&entry.name, &entry.value)?;
        }
        self.indent -= 4;
        Ok(())
    }

    fn list(&mut self, l: &List) -> io::Result<()> {
        self.indent += 4;
        for item in l {
            self.value(&None, item)?;
        }
        self.indent -= 4;
        Ok(())
    }
}

fn label(value: &Value, name: &Name, args: &[String]) -> String {
    let parts: Vec<String> = name
        .iter()
        .map(|n| format!("'{}'", n.escape_debug()))
        .chain(args.iter().cloned())
        .collect();
    format!("{:?}({})", value.tag(), parts.join(", "))
}

fn scalar(value: &Value) -> String {
    match value {
        Value::End => String::new(),
        Value::Byte(v) => v.to_string(),
        Value::Short(v) => v.to_string(),
        Value::Int(v) => v.to_string(),
        Value::Long(v) => v.to_string(),
        Value::Float(v) => v.to_string(),
        Value::Double(v) => v.to_string(),
        Value::String(v) => format!("'{}'", v.escape_debug()),
        Value::ByteArray(v) => format!("{:?}", v),
        Value::IntArray(v) => format!("{:?}", v),
        Value::LongArray(v) => format!("{:?}", v),
        // Containers are written by the dumper itself.
        Value::List(_) | Value::Compound(_) => String::new(),
    }
}

/// Split a dotted path like `Data.Player` into names.
pub fn parse_path(path: &str) -> Vec<&str> {
    path.split('.').filter(|s| !s.is_empty()).collect()
}
