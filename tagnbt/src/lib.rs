//! tagnbt is an immutable tag tree for the NBT format used by *Minecraft:
//! Java Edition*, together with a streaming binary reader and writer.
//!
//! * For the tag tree see [`Tag`], [`Compound`] and [`List`].
//! * For NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//! * For reading binary NBT see [`Reader`], for writing see [`Writer`].
//! * For the stringified form (SNBT) see the companion `tagsnbt` crate.
//!
//! Every tag is immutable. "Editing" a compound or list returns a new value
//! and leaves the original untouched:
//!
//! ```
//! use tagnbt::{Compound, CompoundSetter};
//!
//! let empty = Compound::new();
//! let one = empty.put_int("x", 5);
//!
//! assert!(empty.is_empty());
//! assert_eq!(one.get_byte("x"), 5);
//! ```
//!
//! # Reading and writing
//!
//! ```
//! use tagnbt::{Compound, CompoundSetter, Compression, Reader, Writer};
//!
//! # fn main() -> tagnbt::error::Result<()> {
//! let level = Compound::new()
//!     .put_string("LevelName", "world")
//!     .put_long("RandomSeed", 42);
//!
//! let mut buf = Vec::new();
//! Writer::new().write_named(&mut buf, "Data", &level, Compression::Gzip)?;
//!
//! let (name, read) = Reader::default_limit().read_named(buf.as_slice(), Compression::Gzip)?;
//! assert_eq!(name, "Data");
//! assert_eq!(read, level);
//! # Ok(())
//! # }
//! ```
//!
//! Readers guard against hostile input: nesting is limited to
//! [`MAX_DEPTH`] levels and an optional byte ceiling rejects oversized
//! length fields before anything is allocated.

pub mod error;

mod arrays;
mod compound;
mod compression;
mod holder;
mod input;
mod list;
mod read;
mod ser;
mod tag;
mod write_nbt;

pub use arrays::*;
pub use compound::{Compound, CompoundBuilder, CompoundSetter};
pub use compression::Compression;
pub use holder::{Codec, TagHolder};
pub use input::{TrackingReader, MAX_DEPTH};
pub use list::{List, ListBuilder};
pub use read::{Reader, DEFAULT_MAX_BYTES};
pub use tag::Tag;
pub use write_nbt::Writer;

#[cfg(test)]
mod test;

use std::convert::TryFrom;
use std::fmt;

use error::{Error, Result};

/// The type of an NBT tag. This does not carry the value or the name of the
/// data.
///
/// The discriminant is the id used on the wire.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum TagType {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other tags, all of the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl TagType {
    /// Every tag type, indexed by its id.
    pub const ALL: [TagType; 13] = [
        TagType::End,
        TagType::Byte,
        TagType::Short,
        TagType::Int,
        TagType::Long,
        TagType::Float,
        TagType::Double,
        TagType::ByteArray,
        TagType::String,
        TagType::List,
        TagType::Compound,
        TagType::IntArray,
        TagType::LongArray,
    ];

    /// Look up a type by its wire id.
    pub fn from_id(id: u8) -> Result<TagType> {
        TagType::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| Error::invalid_tag(id))
    }

    /// The wire id of this type.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Whether values of this type are numbers and can be coerced into each
    /// other by the typed accessors.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            TagType::Byte
                | TagType::Short
                | TagType::Int
                | TagType::Long
                | TagType::Float
                | TagType::Double
        )
    }

    /// Relaxed type equality: true if the types are the same, or if both are
    /// numeric.
    pub fn test(self, other: TagType) -> bool {
        self == other || (self.is_numeric() && other.is_numeric())
    }

    pub fn name(self) -> &'static str {
        match self {
            TagType::End => "TAG_End",
            TagType::Byte => "TAG_Byte",
            TagType::Short => "TAG_Short",
            TagType::Int => "TAG_Int",
            TagType::Long => "TAG_Long",
            TagType::Float => "TAG_Float",
            TagType::Double => "TAG_Double",
            TagType::ByteArray => "TAG_Byte_Array",
            TagType::String => "TAG_String",
            TagType::List => "TAG_List",
            TagType::Compound => "TAG_Compound",
            TagType::IntArray => "TAG_Int_Array",
            TagType::LongArray => "TAG_Long_Array",
        }
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for TagType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        TagType::from_id(value)
    }
}

impl From<TagType> for u8 {
    fn from(tag: TagType) -> Self {
        tag.id()
    }
}
