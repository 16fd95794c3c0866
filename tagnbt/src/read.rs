use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, warn};

use crate::error::{Error, Result};
use crate::list::ListBuilder;
use crate::{Compound, CompoundBuilder, Compression, Tag, TagType, TrackingReader};

/// The byte ceiling of [`Reader::default_limit`].
pub const DEFAULT_MAX_BYTES: i64 = 0x2000A;

// Lists are allocated up to this many elements ahead of reading them.
const LIST_PREALLOC: usize = 1024;

/// Reads binary NBT documents.
///
/// The root of a document must be a compound. It is either named, the usual
/// form for files, or nameless as used in network framing.
///
/// Every read is guarded by a [`TrackingReader`], so nesting deeper than
/// [`MAX_DEPTH`][crate::MAX_DEPTH] always fails and a byte ceiling can be
/// set for untrusted input.
///
/// ```
/// use tagnbt::{Compression, Reader};
///
/// // TAG_Compound "" { TAG_Byte "a": 1 }
/// let data = [10u8, 0, 0, 1, 0, 1, b'a', 1, 0];
/// let compound = Reader::default_limit().read(&data[..], Compression::None).unwrap();
/// assert_eq!(compound.get_byte("a"), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reader {
    max_bytes: i64,
}

impl Default for Reader {
    fn default() -> Self {
        Self::default_limit()
    }
}

impl Reader {
    /// Only nesting depth is limited.
    pub fn unlimited() -> Self {
        Self { max_bytes: -1 }
    }

    /// Reads at most [`DEFAULT_MAX_BYTES`].
    pub fn default_limit() -> Self {
        Self::with_max_bytes(DEFAULT_MAX_BYTES)
    }

    /// Reads at most `max_bytes`. Zero or less disables the ceiling.
    pub fn with_max_bytes(max_bytes: i64) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> Option<u64> {
        u64::try_from(self.max_bytes).ok().filter(|max| *max > 0)
    }

    /// Read a named root compound, discarding the name.
    pub fn read<R: Read>(&self, input: R, compression: Compression) -> Result<Compound> {
        self.read_named(input, compression).map(|(_, compound)| compound)
    }

    /// Read a named root compound along with its name.
    pub fn read_named<R: Read>(
        &self,
        input: R,
        compression: Compression,
    ) -> Result<(String, Compound)> {
        let mut input = TrackingReader::new(compression.decompress(input), self.max_bytes);
        let result = read_root(&mut input, true);
        self.finish(result, &input, compression)
    }

    /// Read a root compound that has no name.
    pub fn read_nameless<R: Read>(&self, input: R, compression: Compression) -> Result<Compound> {
        let mut input = TrackingReader::new(compression.decompress(input), self.max_bytes);
        let result = read_root(&mut input, false);
        self.finish(result, &input, compression)
            .map(|(_, compound)| compound)
    }

    pub fn read_path(&self, path: impl AsRef<Path>, compression: Compression) -> Result<Compound> {
        self.read(BufReader::new(File::open(path)?), compression)
    }

    pub fn read_named_path(
        &self,
        path: impl AsRef<Path>,
        compression: Compression,
    ) -> Result<(String, Compound)> {
        self.read_named(BufReader::new(File::open(path)?), compression)
    }

    /// Read the bare payload of a tag of `tag_type`, with no type id or name
    /// in front of it. The input is not decompressed.
    pub fn read_tag<R: Read>(&self, input: R, tag_type: TagType) -> Result<Tag> {
        let mut input = TrackingReader::new(input, self.max_bytes);
        read_payload(&mut input, tag_type).map_err(|e| {
            if e.is_limit() {
                warn!("aborted nbt read: {}", e);
            }
            e
        })
    }

    fn finish<R: Read>(
        &self,
        result: Result<(String, Compound)>,
        input: &TrackingReader<R>,
        compression: Compression,
    ) -> Result<(String, Compound)> {
        match &result {
            Ok((name, compound)) => debug!(
                "read root compound {:?} with {} entries ({} bytes, {:?})",
                name,
                compound.len(),
                input.bytes_read(),
                compression
            ),
            Err(e) if e.is_limit() => warn!(
                "aborted nbt read after {} bytes: {}",
                input.bytes_read(),
                e
            ),
            Err(_) => {}
        }
        result
    }
}

fn read_root<R: Read>(input: &mut TrackingReader<R>, named: bool) -> Result<(String, Compound)> {
    let tag_type = input.consume_tag_type()?;
    if tag_type != TagType::Compound {
        return Err(Error::no_root_compound(tag_type));
    }
    let name = if named {
        input.consume_str()?
    } else {
        String::new()
    };
    let compound = read_compound(input)?;
    Ok((name, compound))
}

pub(crate) fn read_payload<R: Read>(input: &mut TrackingReader<R>, tag_type: TagType) -> Result<Tag> {
    Ok(match tag_type {
        TagType::End => Tag::End,
        TagType::Byte => Tag::Byte(input.read_i8()?),
        TagType::Short => Tag::Short(input.read_i16::<BigEndian>()?),
        TagType::Int => Tag::Int(input.read_i32::<BigEndian>()?),
        TagType::Long => Tag::Long(input.read_i64::<BigEndian>()?),
        TagType::Float => Tag::Float(input.read_f32::<BigEndian>()?),
        TagType::Double => Tag::Double(input.read_f64::<BigEndian>()?),
        TagType::String => Tag::String(input.consume_str()?),
        TagType::ByteArray => {
            let len = input.consume_len()?;
            let data = input.scoped(len as u64, |input| input.consume_i8_array(len))?;
            Tag::ByteArray(data.into())
        }
        TagType::IntArray => {
            let len = input.consume_len()?;
            let data = input.scoped(len as u64 * 4, |input| input.consume_i32_array(len))?;
            Tag::IntArray(data.into())
        }
        TagType::LongArray => {
            let len = input.consume_len()?;
            let data = input.scoped(len as u64 * 8, |input| input.consume_i64_array(len))?;
            Tag::LongArray(data.into())
        }
        TagType::List => Tag::List(read_list(input)?),
        TagType::Compound => Tag::Compound(read_compound(input)?),
    })
}

fn read_list<R: Read>(input: &mut TrackingReader<R>) -> Result<crate::List> {
    let element_type = input.consume_tag_type()?;
    let len = input.consume_len()?;

    if element_type == TagType::End && len > 0 {
        return Err(Error::illegal_element(format!(
            "list of {} declared {} elements",
            TagType::End,
            len
        )));
    }

    // Every element takes at least one byte.
    input.scoped(len as u64, |input| {
        let mut builder = ListBuilder::with_capacity(element_type, len.min(LIST_PREALLOC));
        for _ in 0..len {
            let tag = read_payload(input, element_type)?;
            builder.push(tag)?;
        }
        Ok(builder.build())
    })
}

fn read_compound<R: Read>(input: &mut TrackingReader<R>) -> Result<Compound> {
    input.scoped(0, |input| {
        let mut builder = CompoundBuilder::new();
        loop {
            let tag_type = input.consume_tag_type()?;
            if tag_type == TagType::End {
                break;
            }
            let key = input.consume_str()?;
            let value = read_payload(input, tag_type)?;
            builder.insert(key, value);
        }
        Ok(builder.build())
    })
}
