use tagnbt::{Compound, CompoundSetter, List, Tag, TagHolder};

use crate::{from_str, to_string, to_string_pretty, SnbtIo};

#[allow(clippy::float_cmp)]
mod de_tests;

fn mixed() -> Compound {
    let inner = Compound::new()
        .put_string("name", "Cool \"name\"")
        .put_double("f", -5.0e-40);
    let flags = List::new()
        .add_all(vec![Tag::Byte(1), Tag::Byte(0), Tag::Byte(1)])
        .unwrap();

    Compound::builder()
        .put_byte("byte", -3)
        .put_short("short", 1000)
        .put_int("int", -70000)
        .put_long("long", i64::MAX)
        .put_float("float", 0.25)
        .put_double("double", 1e300)
        .put_string("text", "back\\slash and 'quotes'")
        .put_string("numberish", "12")
        .put_string("empty", "")
        .put_byte_array("bytes", vec![-128i8, 0, 127])
        .put_int_array("ints", vec![-1, 3, 2000])
        .put_long_array("longs", vec![i64::MIN])
        .put("flags", flags)
        .put("inner", inner.clone())
        .put("inners", List::new().add(inner).unwrap())
        .put("with space", Compound::new())
        .build()
}

#[test]
fn test_mixed_round_trip() {
    let data = mixed();
    let compact = to_string(&data).unwrap();
    assert!(!compact.contains('\n'));
    assert_eq!(from_str(&compact).unwrap(), data);

    let pretty = to_string_pretty(&data).unwrap();
    assert!(pretty.contains("\n    byte: -3b,"));
    assert_eq!(from_str(&pretty).unwrap(), data);
}

#[test]
fn test_tab_indent_round_trip() {
    let io = SnbtIo::builder().indent_tab(1).build();
    let data = mixed();
    let out = io.as_string(&data).unwrap();
    assert!(out.contains("\n\tbyte: -3b,"));
    assert_eq!(io.as_compound(&out).unwrap(), data);
}

#[test]
fn test_string_values_stay_strings() {
    let data = Compound::new()
        .put_string("a", "true")
        .put_string("b", "5b")
        .put_string("c", "1.5");
    assert_eq!(from_str(&to_string(&data).unwrap()).unwrap(), data);
}

#[test]
fn test_holder() {
    let io = SnbtIo::default();
    let data = Compound::new().put_int("a", 1);
    let holder = TagHolder::encode(&data, &io).unwrap();
    assert_eq!(holder.string(), "{a:1}");
    assert_eq!(holder.get::<Compound, _>(&io).unwrap(), data);

    let broken = TagHolder::new("{a:");
    assert!(broken.get::<Compound, _>(&io).is_err());
}
