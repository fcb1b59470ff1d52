//! JSON rendering.
//!
//! The committed JSON and TypeScript artifacts escape every non-ASCII
//! character as `\uXXXX` (UTF-16 code units, lowercase hex). serde_json
//! writes UTF-8 as-is, so strings go through [`AsciiFormatter`], which wraps
//! another formatter and only changes how string fragments are written.

use std::{collections::BTreeMap, io};

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};

use super::{stored_value, unescape};
use crate::core::TranslationTable;

/// Formatter that escapes non-ASCII characters and DEL, delegating layout to `F`.
#[derive(Debug, Clone, Default)]
pub struct AsciiFormatter<F> {
    inner: F,
}

impl<F: Formatter> AsciiFormatter<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: Formatter> Formatter for AsciiFormatter<F> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, c) in fragment.char_indices() {
            if c.is_ascii() && c != '\x7f' {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}

fn to_ascii_json<F: Formatter>(value: &impl Serialize, formatter: F) -> io::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, AsciiFormatter::new(formatter));
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Encode `value` as a single-line, ASCII-only JSON string literal.
pub fn to_ascii_json_string(value: &str) -> io::Result<String> {
    to_ascii_json(&value, CompactFormatter)
}

/// Render the JSON map for `language`: sorted keys, tab indentation, unescaped values.
pub fn render_json(table: &TranslationTable, language: &str) -> io::Result<String> {
    let map: BTreeMap<&str, String> = table
        .iter()
        .map(|(key, values)| (key, unescape(stored_value(values, language))))
        .collect();
    to_ascii_json(&map, PrettyFormatter::with_indent(b"\t"))
}
