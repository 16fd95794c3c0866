//! tagsnbt reads and writes the stringified form of NBT (SNBT), as typed
//! into *Minecraft* commands, using the tag tree from [`tagnbt`].
//!
//! ```
//! use tagnbt::{Compound, CompoundSetter};
//!
//! # fn main() -> tagsnbt::error::Result<()> {
//! let c = tagsnbt::from_str(r#"{name: "Steve", level: 5b, pos: [L; 1l, 2l]}"#)?;
//! assert_eq!(c.get_byte("level"), 5);
//! assert_eq!(c.get_string("name"), "Steve");
//!
//! let written = tagsnbt::to_string(&Compound::new().put_short("s", 3))?;
//! assert_eq!(written, "{s:3s}");
//! # Ok(())
//! # }
//! ```
//!
//! Use [`SnbtIo`] to configure indentation and the legacy dialect:
//!
//! ```
//! use tagnbt::{Compound, CompoundSetter};
//! use tagsnbt::SnbtIo;
//!
//! # fn main() -> tagsnbt::error::Result<()> {
//! let io = SnbtIo::builder().indent(2).build();
//! let out = io.as_string(&Compound::new().put_int("a", 1))?;
//! assert_eq!(out, "{\n  a: 1\n}");
//! # Ok(())
//! # }
//! ```

use std::io::Write;

use tagnbt::{Codec, Compound, Tag};

use error::{Error, Result};

pub mod error;
mod input;
mod parser;
mod ser;
mod tokens;

pub use input::CharBuffer;
pub use parser::TagStringReader;
pub use ser::TagStringWriter;

#[cfg(test)]
mod tests;

/// Reads and writes SNBT with a fixed configuration.
///
/// By default the legacy dialect is accepted on read but never emitted, and
/// output is compact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnbtIo {
    accept_legacy: bool,
    emit_legacy: bool,
    indent: String,
}

impl Default for SnbtIo {
    fn default() -> Self {
        SnbtIo::builder().build()
    }
}

impl SnbtIo {
    pub fn builder() -> SnbtIoBuilder {
        SnbtIoBuilder::default()
    }

    fn reader(&self, input: &str) -> TagStringReader {
        let mut reader = TagStringReader::new(input);
        reader.legacy(self.accept_legacy);
        reader
    }

    fn writer<W: Write>(&self, out: W) -> TagStringWriter<W> {
        TagStringWriter::new(out, self.indent.as_str()).legacy(self.emit_legacy)
    }

    /// Parse a whole document holding a single compound. Anything but
    /// whitespace after the compound is an error.
    pub fn as_compound(&self, input: &str) -> Result<Compound> {
        let mut reader = self.reader(input);
        let compound = reader.compound()?;
        check_trailing(&mut reader)?;
        Ok(compound)
    }

    /// Parse a whole document holding a single tag of any type.
    pub fn as_tag(&self, input: &str) -> Result<Tag> {
        let mut reader = self.reader(input);
        let tag = reader.tag()?;
        check_trailing(&mut reader)?;
        Ok(tag)
    }

    pub fn as_string(&self, input: &Compound) -> Result<String> {
        let mut buf = Vec::new();
        self.to_writer(input, &mut buf)?;
        into_string(buf)
    }

    pub fn tag_to_string(&self, input: &Tag) -> Result<String> {
        let mut writer = self.writer(Vec::new());
        writer.write_tag(input)?;
        into_string(writer.finish()?)
    }

    /// Write `input` to `dest`. The destination is flushed but otherwise
    /// left to the caller.
    pub fn to_writer<W: Write>(&self, input: &Compound, dest: W) -> Result<()> {
        let mut writer = self.writer(dest);
        writer.write_tag(&Tag::Compound(input.clone()))?;
        writer.finish()?;
        Ok(())
    }
}

fn check_trailing(reader: &mut TagStringReader) -> Result<()> {
    let buffer = reader.buffer();
    if buffer.skip_whitespace().has_more() {
        return Err(Error::trailing_content(buffer.index()));
    }
    Ok(())
}

fn into_string(buf: Vec<u8>) -> Result<String> {
    String::from_utf8(buf).map_err(|e| Error::bespoke(e.to_string()))
}

impl Codec<Compound> for SnbtIo {
    type Error = Error;

    fn encode(&self, value: &Compound) -> Result<String> {
        self.as_string(value)
    }

    fn decode(&self, input: &str) -> Result<Compound> {
        self.as_compound(input)
    }
}

/// Builder for [`SnbtIo`].
#[derive(Debug, Clone)]
pub struct SnbtIoBuilder {
    accept_legacy: bool,
    emit_legacy: bool,
    indent: String,
}

impl Default for SnbtIoBuilder {
    fn default() -> Self {
        Self {
            accept_legacy: true,
            emit_legacy: false,
            indent: String::new(),
        }
    }
}

impl SnbtIoBuilder {
    pub fn accept_legacy(mut self, accept_legacy: bool) -> Self {
        self.accept_legacy = accept_legacy;
        self
    }

    pub fn emit_legacy(mut self, emit_legacy: bool) -> Self {
        self.emit_legacy = emit_legacy;
        self
    }

    /// Indent nested output by `spaces` spaces per level. Zero gives compact
    /// output.
    pub fn indent(mut self, spaces: usize) -> Self {
        self.indent = " ".repeat(spaces);
        self
    }

    /// Indent nested output by `tabs` tabs per level.
    pub fn indent_tab(mut self, tabs: usize) -> Self {
        self.indent = "\t".repeat(tabs);
        self
    }

    pub fn build(self) -> SnbtIo {
        SnbtIo {
            accept_legacy: self.accept_legacy,
            emit_legacy: self.emit_legacy,
            indent: self.indent,
        }
    }
}

/// Parse a compound with the default configuration.
pub fn from_str(input: &str) -> Result<Compound> {
    SnbtIo::default().as_compound(input)
}

/// Write a compound as compact SNBT.
pub fn to_string(input: &Compound) -> Result<String> {
    SnbtIo::default().as_string(input)
}

/// Write a compound as SNBT indented by four spaces.
pub fn to_string_pretty(input: &Compound) -> Result<String> {
    SnbtIo::builder().indent(4).build().as_string(input)
}
