use std::io::Write;

use tagnbt::{ByteArray, Compound, IntArray, List, LongArray, Tag, TagType};

use crate::error::{Error, Result};
use crate::tokens::{self, *};

pub(crate) fn write_escaped_str<W: Write>(mut writer: W, v: &str) -> Result<()> {
    writer.write_all(b"\"")?;
    let bytes = v.as_bytes();
    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if byte != b'"' && byte != b'\\' {
            continue;
        }
        if start < i {
            writer.write_all(v[start..i].as_bytes())?;
        }
        writer.write_all(&[b'\\', byte])?;
        start = i + 1;
    }
    if start != bytes.len() {
        writer.write_all(v[start..].as_bytes())?;
    }
    Ok(writer.write_all(b"\"")?)
}

/// An emitter for SNBT.
///
/// With an empty indent the output is compact, on one line. Any other indent
/// turns on pretty printing: one compound entry per line, and list elements
/// on their own lines when they are containers.
pub struct TagStringWriter<W: Write> {
    out: W,
    indent: String,
    legacy: bool,
    level: isize,
    // A value separator must be printed before the next object.
    needs_separator: bool,
}

impl<W: Write> TagStringWriter<W> {
    pub fn new(out: W, indent: impl Into<String>) -> Self {
        Self {
            out,
            indent: indent.into(),
            legacy: false,
            level: 0,
            needs_separator: false,
        }
    }

    /// Emit the legacy dialect: indexed list elements, and int arrays as
    /// plain lists. Byte and long arrays cannot be written.
    pub fn legacy(mut self, legacy: bool) -> Self {
        self.legacy = legacy;
        self
    }

    fn pretty(&self) -> bool {
        !self.indent.is_empty()
    }

    pub fn write_tag(&mut self, tag: &Tag) -> Result<()> {
        match tag {
            Tag::Compound(c) => self.write_compound(c),
            Tag::List(l) => self.write_list(l),
            Tag::ByteArray(a) => self.write_byte_array(a),
            Tag::IntArray(a) => self.write_int_array(a),
            Tag::LongArray(a) => self.write_long_array(a),
            Tag::String(s) => self.string(s),
            Tag::Byte(v) => self.integer(*v, Some(TYPE_BYTE)),
            Tag::Short(v) => self.integer(*v, Some(TYPE_SHORT)),
            Tag::Int(v) => self.integer(*v, None),
            Tag::Long(v) => self.integer(*v, Some('L')),
            Tag::Float(v) => {
                let mut buffer = ryu::Buffer::new();
                self.number(buffer.format(*v), Some(TYPE_FLOAT))
            }
            Tag::Double(v) => {
                let mut buffer = ryu::Buffer::new();
                self.number(buffer.format(*v), Some(TYPE_DOUBLE))
            }
            Tag::End => Err(Error::bespoke("cannot write TAG_End as snbt")),
        }
    }

    fn write_compound(&mut self, compound: &Compound) -> Result<()> {
        self.begin_compound()?;
        for (key, value) in compound {
            self.key(key)?;
            self.write_tag(value)?;
        }
        self.end_compound()
    }

    fn write_list(&mut self, list: &List) -> Result<()> {
        let line_breaks = self.pretty() && breaks_lines(list.element_type());
        self.begin_list()?;
        for (idx, el) in list.iter().enumerate() {
            self.print_and_reset_separator(!line_breaks)?;
            if line_breaks {
                self.newline_indent()?;
            }
            if self.legacy {
                let mut buffer = itoa::Buffer::new();
                self.out.write_all(buffer.format(idx).as_bytes())?;
                self.append_separator(COMPOUND_KEY_TERMINATOR)?;
            }
            self.write_tag(el)?;
        }
        self.end_list(line_breaks)
    }

    fn write_byte_array(&mut self, array: &ByteArray) -> Result<()> {
        if self.legacy {
            return Err(Error::legacy_array());
        }
        self.begin_array('B')?;
        for &b in array.iter() {
            self.print_and_reset_separator(true)?;
            self.integer(b, Some('B'))?;
        }
        self.end_list(false)
    }

    fn write_int_array(&mut self, array: &IntArray) -> Result<()> {
        if self.legacy {
            self.begin_list()?;
        } else {
            self.begin_array('I')?;
        }
        for &i in array.iter() {
            self.print_and_reset_separator(true)?;
            self.integer(i, None)?;
        }
        self.end_list(false)
    }

    fn write_long_array(&mut self, array: &LongArray) -> Result<()> {
        if self.legacy {
            return Err(Error::legacy_array());
        }
        self.begin_array('L')?;
        for &l in array.iter() {
            self.print_and_reset_separator(true)?;
            self.integer(l, Some(TYPE_LONG))?;
        }
        self.end_list(false)
    }

    fn begin_array(&mut self, element_type: char) -> Result<()> {
        self.begin_list()?;
        self.push(element_type)?;
        self.push(ARRAY_SIGNATURE_SEPARATOR)?;
        if self.pretty() {
            self.push(' ')?;
        }
        Ok(())
    }

    pub fn begin_compound(&mut self) -> Result<()> {
        self.print_and_reset_separator(false)?;
        self.level += 1;
        self.push(COMPOUND_BEGIN)
    }

    pub fn end_compound(&mut self) -> Result<()> {
        self.level -= 1;
        self.newline_indent()?;
        self.push(COMPOUND_END)?;
        self.needs_separator = true;
        Ok(())
    }

    /// Write a compound key and the `:` after it. Keys are quoted only when
    /// they hold chars that cannot appear unquoted.
    pub fn key(&mut self, key: &str) -> Result<()> {
        self.print_and_reset_separator(false)?;
        self.newline_indent()?;
        if key.chars().all(tokens::id) {
            self.out.write_all(key.as_bytes())?;
        } else {
            write_escaped_str(&mut self.out, key)?;
        }
        self.append_separator(COMPOUND_KEY_TERMINATOR)
    }

    /// Write a string value. Strings are always quoted so they never read
    /// back as numbers or booleans.
    pub fn string(&mut self, value: &str) -> Result<()> {
        write_escaped_str(&mut self.out, value)?;
        self.needs_separator = true;
        Ok(())
    }

    /// Write a number from its digits and optional type suffix.
    pub fn number(&mut self, digits: &str, suffix: Option<char>) -> Result<()> {
        self.out.write_all(digits.as_bytes())?;
        if let Some(suffix) = suffix {
            self.push(suffix)?;
        }
        self.needs_separator = true;
        Ok(())
    }

    fn integer<I: itoa::Integer>(&mut self, value: I, suffix: Option<char>) -> Result<()> {
        let mut buffer = itoa::Buffer::new();
        self.number(buffer.format(value), suffix)
    }

    pub fn begin_list(&mut self) -> Result<()> {
        self.print_and_reset_separator(false)?;
        self.level += 1;
        self.push(ARRAY_BEGIN)
    }

    /// Close a list. `line_breaks` must match whether the elements were put
    /// on their own lines.
    pub fn end_list(&mut self, line_breaks: bool) -> Result<()> {
        self.level -= 1;
        if line_breaks {
            self.newline_indent()?;
        }
        self.push(ARRAY_END)?;
        self.needs_separator = true;
        Ok(())
    }

    fn append_separator(&mut self, separator: char) -> Result<()> {
        self.push(separator)?;
        if self.pretty() {
            self.push(' ')?;
        }
        Ok(())
    }

    fn print_and_reset_separator(&mut self, pad: bool) -> Result<()> {
        if self.needs_separator {
            self.push(VALUE_SEPARATOR)?;
            if pad && self.pretty() {
                self.push(' ')?;
            }
            self.needs_separator = false;
        }
        Ok(())
    }

    fn newline_indent(&mut self) -> Result<()> {
        if self.pretty() {
            self.push(NEWLINE)?;
            for _ in 0..self.level {
                self.out.write_all(self.indent.as_bytes())?;
            }
        }
        Ok(())
    }

    fn push(&mut self, c: char) -> Result<()> {
        let mut buf = [0; 4];
        self.out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        Ok(())
    }

    /// Check every begin had its end, flush, and give back the output.
    pub fn finish(mut self) -> Result<W> {
        if self.level != 0 {
            return Err(Error::unbalanced());
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

fn breaks_lines(element_type: TagType) -> bool {
    matches!(
        element_type,
        TagType::Compound
            | TagType::List
            | TagType::ByteArray
            | TagType::IntArray
            | TagType::LongArray
    )
}
