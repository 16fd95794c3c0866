use std::convert::TryInto;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use byteorder::{BigEndian, WriteBytesExt};
use log::debug;

use crate::error::{Error, Result};
use crate::{Compound, Compression, List, Tag, TagType};

pub(crate) trait WriteNbt: Write {
    fn write_tag_type(&mut self, tag_type: TagType) -> Result<()> {
        self.write_u8(tag_type.id())?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, key: &str) -> Result<()> {
        let key = cesu8::to_java_cesu8(key);
        let len_bytes: u16 = key.len().try_into().map_err(|_| {
            Error::bespoke(format!(
                "string of {} encoded bytes is too long, the maximum is {}",
                key.len(),
                u16::MAX
            ))
        })?;
        self.write_u16::<BigEndian>(len_bytes)?;
        self.write_all(&key)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        self.write_i32::<BigEndian>(
            len.try_into()
                .map_err(|_| Error::bespoke("len too large".to_owned()))?,
        )?;

        Ok(())
    }

    fn write_payload(&mut self, tag: &Tag) -> Result<()> {
        match tag {
            Tag::End => {}
            Tag::Byte(v) => self.write_i8(*v)?,
            Tag::Short(v) => self.write_i16::<BigEndian>(*v)?,
            Tag::Int(v) => self.write_i32::<BigEndian>(*v)?,
            Tag::Long(v) => self.write_i64::<BigEndian>(*v)?,
            Tag::Float(v) => self.write_f32::<BigEndian>(*v)?,
            Tag::Double(v) => self.write_f64::<BigEndian>(*v)?,
            Tag::String(v) => self.write_size_prefixed_str(v)?,
            Tag::ByteArray(v) => {
                self.write_len(v.len())?;
                let bytes: Vec<u8> = v.iter().map(|b| *b as u8).collect();
                self.write_all(&bytes)?;
            }
            Tag::IntArray(v) => {
                self.write_len(v.len())?;
                for i in v.iter() {
                    self.write_i32::<BigEndian>(*i)?;
                }
            }
            Tag::LongArray(v) => {
                self.write_len(v.len())?;
                for l in v.iter() {
                    self.write_i64::<BigEndian>(*l)?;
                }
            }
            Tag::List(v) => self.write_list(v)?,
            Tag::Compound(v) => self.write_compound(v)?,
        }
        Ok(())
    }

    fn write_list(&mut self, list: &List) -> Result<()> {
        self.write_tag_type(list.element_type())?;
        self.write_len(list.len())?;
        for tag in list {
            self.write_payload(tag)?;
        }
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound) -> Result<()> {
        for (key, tag) in compound {
            self.write_tag_type(tag.tag_type())?;
            self.write_size_prefixed_str(key)?;
            self.write_payload(tag)?;
        }
        self.write_tag_type(TagType::End)
    }
}

impl<T> WriteNbt for T where T: Write {}

/// Writes binary NBT documents. The mirror of [`Reader`][crate::Reader].
///
/// The output stream is never closed. Pass `&mut W` to keep using it
/// afterwards. Compression and buffering layers created by the writer are
/// finished before a write returns successfully.
#[derive(Debug, Clone, Copy, Default)]
pub struct Writer {
    _priv: (),
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `compound` as a root with an empty name.
    pub fn write<W: Write>(&self, output: W, compound: &Compound, compression: Compression) -> Result<()> {
        self.write_named(output, "", compound, compression)
    }

    pub fn write_named<W: Write>(
        &self,
        output: W,
        name: &str,
        compound: &Compound,
        compression: Compression,
    ) -> Result<()> {
        self.write_root(output, Some(name), compound, compression)
    }

    /// Write `compound` as a root without a name, as used in network framing.
    pub fn write_nameless<W: Write>(
        &self,
        output: W,
        compound: &Compound,
        compression: Compression,
    ) -> Result<()> {
        self.write_root(output, None, compound, compression)
    }

    pub fn write_path(
        &self,
        path: impl AsRef<Path>,
        compound: &Compound,
        compression: Compression,
    ) -> Result<()> {
        self.write(File::create(path)?, compound, compression)
    }

    pub fn write_named_path(
        &self,
        path: impl AsRef<Path>,
        name: &str,
        compound: &Compound,
        compression: Compression,
    ) -> Result<()> {
        self.write_named(File::create(path)?, name, compound, compression)
    }

    /// Write the bare payload of `tag`, with no type id or name. Nothing is
    /// compressed or buffered.
    pub fn write_tag<W: Write>(&self, mut output: W, tag: &Tag) -> Result<()> {
        output.write_payload(tag)
    }

    fn write_root<W: Write>(
        &self,
        output: W,
        name: Option<&str>,
        compound: &Compound,
        compression: Compression,
    ) -> Result<()> {
        let mut out = compression.compress(output);
        out.write_tag_type(TagType::Compound)?;
        if let Some(name) = name {
            out.write_size_prefixed_str(name)?;
        }
        out.write_compound(compound)?;
        out.finish()?;

        debug!(
            "wrote root compound {:?} with {} entries ({:?})",
            name.unwrap_or_default(),
            compound.len(),
            compression
        );
        Ok(())
    }
}
