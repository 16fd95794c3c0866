use std::hash::{Hash, Hasher};

use crate::{ByteArray, Compound, IntArray, List, LongArray, TagType};

/// Tag is a complete NBT value. It owns its data, and Compounds and Lists
/// hold further tags to form a tree.
///
/// Tags are immutable. Container variants share their contents, so cloning a
/// tag is cheap.
///
/// Equality is structural. Floating point values compare by bit pattern
/// (with every NaN equal to every other NaN), which makes `Tag` usable as a
/// hash key.
///
/// ```
/// # use tagnbt::{Compound, CompoundSetter, Tag, TagType};
/// let compound = Compound::new().put_int("DataVersion", 3465);
/// match compound.get("DataVersion") {
///     Some(Tag::Int(ver)) => println!("Version: {}", ver),
///     _ => {}
/// }
/// assert_eq!(Tag::from(5i8).tag_type(), TagType::Byte);
/// ```
#[derive(Debug, Clone)]
pub enum Tag {
    /// Only meaningful as the terminator of a compound on the wire, and as the
    /// element type of an empty list. It can never be stored in a list.
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(ByteArray),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(IntArray),
    LongArray(LongArray),
}

impl Tag {
    /// The type descriptor for this tag's variant.
    pub fn tag_type(&self) -> TagType {
        match self {
            Tag::End => TagType::End,
            Tag::Byte(_) => TagType::Byte,
            Tag::Short(_) => TagType::Short,
            Tag::Int(_) => TagType::Int,
            Tag::Long(_) => TagType::Long,
            Tag::Float(_) => TagType::Float,
            Tag::Double(_) => TagType::Double,
            Tag::ByteArray(_) => TagType::ByteArray,
            Tag::String(_) => TagType::String,
            Tag::List(_) => TagType::List,
            Tag::Compound(_) => TagType::Compound,
            Tag::IntArray(_) => TagType::IntArray,
            Tag::LongArray(_) => TagType::LongArray,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.tag_type().is_numeric()
    }

    // The numeric conversions follow primitive cast rules: integers are
    // truncated to the target width, floats saturate to int first.

    pub fn as_i8(&self) -> Option<i8> {
        match *self {
            Tag::Byte(v) => Some(v),
            Tag::Short(v) => Some(v as i8),
            Tag::Int(v) => Some(v as i8),
            Tag::Long(v) => Some(v as i8),
            Tag::Float(v) => Some(v as i32 as i8),
            Tag::Double(v) => Some(v as i32 as i8),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match *self {
            Tag::Byte(v) => Some(v as i16),
            Tag::Short(v) => Some(v),
            Tag::Int(v) => Some(v as i16),
            Tag::Long(v) => Some(v as i16),
            Tag::Float(v) => Some(v as i32 as i16),
            Tag::Double(v) => Some(v as i32 as i16),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            Tag::Byte(v) => Some(v as i32),
            Tag::Short(v) => Some(v as i32),
            Tag::Int(v) => Some(v),
            Tag::Long(v) => Some(v as i32),
            Tag::Float(v) => Some(v as i32),
            Tag::Double(v) => Some(v as i32),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Tag::Byte(v) => Some(v as i64),
            Tag::Short(v) => Some(v as i64),
            Tag::Int(v) => Some(v as i64),
            Tag::Long(v) => Some(v),
            Tag::Float(v) => Some(v as i64),
            Tag::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Tag::Byte(v) => Some(v as f32),
            Tag::Short(v) => Some(v as f32),
            Tag::Int(v) => Some(v as f32),
            Tag::Long(v) => Some(v as f32),
            Tag::Float(v) => Some(v),
            Tag::Double(v) => Some(v as f32),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Tag::Byte(v) => Some(v as f64),
            Tag::Short(v) => Some(v as f64),
            Tag::Int(v) => Some(v as f64),
            Tag::Long(v) => Some(v as f64),
            Tag::Float(v) => Some(v as f64),
            Tag::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&ByteArray> {
        match self {
            Tag::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&IntArray> {
        match self {
            Tag::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&LongArray> {
        match self {
            Tag::LongArray(v) => Some(v),
            _ => None,
        }
    }
}

fn f32_eq(a: f32, b: f32) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

fn f64_eq(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Tag::End, Tag::End) => true,
            (Tag::Byte(a), Tag::Byte(b)) => a == b,
            (Tag::Short(a), Tag::Short(b)) => a == b,
            (Tag::Int(a), Tag::Int(b)) => a == b,
            (Tag::Long(a), Tag::Long(b)) => a == b,
            (Tag::Float(a), Tag::Float(b)) => f32_eq(*a, *b),
            (Tag::Double(a), Tag::Double(b)) => f64_eq(*a, *b),
            (Tag::ByteArray(a), Tag::ByteArray(b)) => a == b,
            (Tag::String(a), Tag::String(b)) => a == b,
            (Tag::List(a), Tag::List(b)) => a == b,
            (Tag::Compound(a), Tag::Compound(b)) => a == b,
            (Tag::IntArray(a), Tag::IntArray(b)) => a == b,
            (Tag::LongArray(a), Tag::LongArray(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag_type().hash(state);
        match self {
            Tag::End => {}
            Tag::Byte(v) => v.hash(state),
            Tag::Short(v) => v.hash(state),
            Tag::Int(v) => v.hash(state),
            Tag::Long(v) => v.hash(state),
            Tag::Float(v) if v.is_nan() => f32::NAN.to_bits().hash(state),
            Tag::Float(v) => v.to_bits().hash(state),
            Tag::Double(v) if v.is_nan() => f64::NAN.to_bits().hash(state),
            Tag::Double(v) => v.to_bits().hash(state),
            Tag::ByteArray(v) => v.hash(state),
            Tag::String(v) => v.hash(state),
            Tag::List(v) => v.hash(state),
            Tag::Compound(v) => v.hash(state),
            Tag::IntArray(v) => v.hash(state),
            Tag::LongArray(v) => v.hash(state),
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Tag {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Tag {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(LongArray, LongArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Tag {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

// ------------- comparisons against plain values -------------

fn eq_i64(value: &Tag, other: i64) -> bool {
    match value {
        Tag::Float(_) | Tag::Double(_) => false,
        _ => value.as_i64().map_or(false, |i| i == other),
    }
}

fn eq_f64(value: &Tag, other: f64) -> bool {
    value.as_f64().map_or(false, |i| i == other)
}

fn eq_str(value: &Tag, other: &str) -> bool {
    value.as_str().map_or(false, |i| i == other)
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        eq_str(self, other)
    }
}

impl<'a> PartialEq<&'a str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        eq_str(self, other)
    }
}

impl PartialEq<String> for Tag {
    fn eq(&self, other: &String) -> bool {
        eq_str(self, other.as_str())
    }
}

macro_rules! partialeq_numeric {
    ($($eq:ident [$($ty:ty)*])*) => {
        $($(
            impl PartialEq<$ty> for Tag {
                fn eq(&self, other: &$ty) -> bool {
                    $eq(self, *other as _)
                }
            }

            impl PartialEq<Tag> for $ty {
                fn eq(&self, other: &Tag) -> bool {
                    $eq(other, *self as _)
                }
            }
        )*)*
    }
}

partialeq_numeric! {
    eq_i64[i8 i16 i32 i64]
    eq_f64[f32 f64]
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Tag {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use Tag::*;

        Ok(match u.arbitrary::<TagType>()? {
            TagType::End => return Err(arbitrary::Error::IncorrectFormat),
            TagType::Byte => Byte(u.arbitrary()?),
            TagType::Short => Short(u.arbitrary()?),
            TagType::Int => Int(u.arbitrary()?),
            TagType::Long => Long(u.arbitrary()?),
            TagType::Float => Float(u.arbitrary()?),
            TagType::Double => Double(u.arbitrary()?),
            TagType::ByteArray => ByteArray(u.arbitrary()?),
            TagType::String => String(u.arbitrary()?),
            TagType::Compound => Compound(u.arbitrary()?),
            TagType::IntArray => IntArray(u.arbitrary()?),
            TagType::LongArray => LongArray(u.arbitrary()?),
            TagType::List => List(u.arbitrary()?),
        })
    }
}
