use std::convert::TryFrom;

use crate::TagType;

#[allow(clippy::float_cmp)]
mod compound;
mod holder;
#[allow(clippy::float_cmp)]
mod list;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(TagType::$tag), $val);
            assert_eq!(TagType::ALL[$val], TagType::$tag);
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(TagType::try_from(value).is_err())
    }
}

#[test]
fn numeric_compatibility() {
    for a in TagType::ALL {
        for b in TagType::ALL {
            let expected = a == b || (a.is_numeric() && b.is_numeric());
            assert_eq!(a.test(b), expected, "{} vs {}", a, b);
        }
    }
    assert!(!TagType::End.is_numeric());
    assert!(!TagType::ByteArray.is_numeric());
    assert!(TagType::Double.is_numeric());
}

#[test]
fn type_names() {
    assert_eq!(TagType::Compound.to_string(), "TAG_Compound");
    assert_eq!(TagType::LongArray.name(), "TAG_Long_Array");
}
