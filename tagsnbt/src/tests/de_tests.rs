use tagnbt::{ByteArray, IntArray, List, LongArray, Tag, TagType};

use crate::{from_str, SnbtIo};

fn tag(input: &str) -> Tag {
    SnbtIo::default().as_tag(input).unwrap()
}

fn strict() -> SnbtIo {
    SnbtIo::builder().accept_legacy(false).build()
}

#[test]
fn test_num() {
    assert_eq!(tag("5b"), Tag::Byte(5));
    assert_eq!(tag("5B"), Tag::Byte(5));
    assert_eq!(tag("+2229S"), Tag::Short(2229));
    assert_eq!(tag("5"), Tag::Int(5));
    assert_eq!(tag("-0042"), Tag::Int(-42));
    assert_eq!(tag("28292849L"), Tag::Long(28292849));
    assert_eq!(tag("28292849l"), Tag::Long(28292849));
}

#[test]
fn test_float() {
    assert_eq!(tag("1.204f"), Tag::Float(1.204));
    assert_eq!(tag(".3F"), Tag::Float(0.3));
    assert_eq!(tag("1.204d"), Tag::Double(1.204));
    assert_eq!(tag("5.0"), Tag::Double(5.0));
    assert_eq!(tag("9."), Tag::Double(9.0));
    assert_eq!(tag("-5000.e-2"), Tag::Double(-50.0));
    assert_eq!(tag("1e3f"), Tag::Float(1000.0));
}

#[test]
fn test_not_quite_numbers() {
    assert_eq!(tag("1.33.28d"), Tag::String("1.33.28d".into()));
    assert_eq!(tag("12.88S"), Tag::String("12.88S".into()));
    assert_eq!(tag("128b"), Tag::String("128b".into()));
    assert_eq!(tag("2147483648"), Tag::Double(2147483648.0));
    assert_eq!(tag("inf"), Tag::String("inf".into()));
    assert_eq!(tag("nan"), Tag::String("nan".into()));
    assert_eq!(tag("Infinity"), Tag::String("Infinity".into()));
    assert_eq!(tag("-"), Tag::String("-".into()));
}

#[test]
fn test_nan() {
    assert!(matches!(tag("NaN"), Tag::Double(v) if v.is_nan()));
    assert!(matches!(tag("NaNd"), Tag::Double(v) if v.is_nan()));
    assert!(matches!(tag("NaNf"), Tag::Float(v) if v.is_nan()));
}

#[test]
fn test_bool() {
    assert_eq!(tag("true"), Tag::Byte(1));
    assert_eq!(tag("FALSE"), Tag::Byte(0));
    assert_eq!(tag("truey"), Tag::String("truey".into()));
}

#[test]
fn test_str() {
    assert_eq!(tag("simple"), Tag::String("simple".into()));
    assert_eq!(tag("\"with space\""), Tag::String("with space".into()));
    assert_eq!(tag(r#""esc\"aped""#), Tag::String("esc\"aped".into()));
    assert_eq!(tag(r"'single \'quoted\''"), Tag::String("single 'quoted'".into()));
    assert_eq!(tag(r#"'mixed "quotes"'"#), Tag::String("mixed \"quotes\"".into()));
    assert_eq!(tag(r#""back\\slash""#), Tag::String("back\\slash".into()));
    assert_eq!(tag("\"\""), Tag::String("".into()));
    assert_eq!(tag(r"un\,quoted"), Tag::String("un,quoted".into()));
}

#[test]
fn test_list() {
    let ints = List::of(TagType::Int, vec![Tag::Int(1), Tag::Int(2), Tag::Int(3)]).unwrap();
    assert_eq!(tag("[1,2,3]"), Tag::List(ints.clone()));
    assert_eq!(tag("[ 1 , 2 , 3 ]"), Tag::List(ints));
    assert_eq!(tag("[]"), Tag::List(List::new()));
    assert_eq!(tag("[ ]"), Tag::List(List::new()));

    let nested = tag("[[1b],[]]");
    let nested = nested.as_list().unwrap();
    assert_eq!(nested.element_type(), TagType::List);
    assert_eq!(nested.get_list(0).get_byte(0), 1);
}

#[test]
fn test_list_mixed_types_fail() {
    let err = SnbtIo::default().as_tag("[1, 2b]").unwrap_err();
    assert!(err.position().is_some());
    assert!(SnbtIo::default().as_tag("[1, \"a\"]").is_err());
}

#[test]
fn test_arrays() {
    assert_eq!(tag("[B;1B,2B,3B]"), Tag::ByteArray(ByteArray::new(vec![1, 2, 3])));
    assert_eq!(tag("[B; -1b, 2b]"), Tag::ByteArray(ByteArray::new(vec![-1, 2])));
    assert_eq!(tag("[I;1,2,3]"), Tag::IntArray(IntArray::new(vec![1, 2, 3])));
    assert_eq!(tag("[i; 1, -2]"), Tag::IntArray(IntArray::new(vec![1, -2])));
    assert_eq!(tag("[L;1l,2l,3l]"), Tag::LongArray(LongArray::new(vec![1, 2, 3])));
    assert_eq!(tag("[L;1L]"), Tag::LongArray(LongArray::new(vec![1])));

    assert_eq!(tag("[B;]"), Tag::ByteArray(ByteArray::default()));
    assert_eq!(tag("[I; ]"), Tag::IntArray(IntArray::default()));
    assert_eq!(tag("[L;]"), Tag::LongArray(LongArray::default()));
}

#[test]
fn test_bad_arrays() {
    let io = SnbtIo::default();
    assert!(io.as_tag("[I;1b]").is_err());
    assert!(io.as_tag("[I;1,2").is_err());
    assert!(io.as_tag("[B;300b]").is_err());
    assert!(io.as_tag("[B;1,2]").is_err());
    assert!(io.as_tag("[I;1.5]").is_err());
    assert!(io.as_tag("[I;2147483648]").is_err());
    assert!(io.as_tag("[I;'1']").is_err());
    assert!(io.as_tag("[I;[I;1]]").is_err());
    assert!(io.as_tag("[X;1]").is_err());
}

#[test]
fn test_compound() {
    let c = from_str(r#"{ a: 1b, "quoted key": "v", nested: {x: [I; 1]}, 'single': 2.5f }"#)
        .unwrap();
    assert_eq!(c.len(), 4);
    assert_eq!(c.get("a"), Some(&Tag::Byte(1)));
    assert_eq!(c.get_string("quoted key"), "v");
    assert_eq!(c.get_compound("nested").get_int_array("x").as_slice(), &[1]);
    assert_eq!(c.get_float("single"), 2.5);

    assert!(from_str("{}").unwrap().is_empty());
    assert!(from_str("  { }  ").unwrap().is_empty());
}

#[test]
fn test_duplicate_keys_last_wins() {
    let c = from_str("{a:1,a:2}").unwrap();
    assert_eq!(c.len(), 1);
    assert_eq!(c.get_int("a"), 2);
}

#[test]
fn test_unterminated() {
    let io = SnbtIo::default();
    assert!(io.as_compound("{a:1").is_err());
    assert!(io.as_compound("{a:1,}").is_err());
    assert!(io.as_compound("{a 1}").is_err());
    assert!(io.as_compound("{a:\"open}").is_err());
    assert!(io.as_tag("").is_err());
    assert!(io.as_tag("[1,2").is_err());
}

#[test]
fn test_not_a_compound() {
    let err = from_str("[1]").unwrap_err();
    assert_eq!(err.position(), Some(0));
}

#[test]
fn test_trailing_content() {
    let err = from_str("{a:1} extra").unwrap_err();
    assert_eq!(err.position(), Some(6));
    assert!(from_str("{a:1}  \n\t").is_ok());
    assert!(SnbtIo::default().as_tag("1 2").is_err());
}

fn nested_lists(depth: usize) -> String {
    format!("{}1{}", "[".repeat(depth), "]".repeat(depth))
}

fn nested_compounds(depth: usize) -> String {
    format!("{}1{}", "{a:".repeat(depth), "}".repeat(depth))
}

#[test]
fn test_deep_nesting_rejected() {
    let err = SnbtIo::default().as_tag(&nested_lists(600)).unwrap_err();
    assert!(err.message().contains("nested"));
    assert!(SnbtIo::default().as_tag(&nested_lists(100)).is_ok());
}

#[test]
fn test_nesting_limit_boundary() {
    let io = SnbtIo::default();
    assert!(io.as_tag(&nested_lists(512)).is_ok());
    assert!(io.as_tag(&nested_lists(513)).is_err());

    let deepest = from_str(&nested_compounds(512)).unwrap();
    assert_eq!(deepest.len(), 1);
    let err = from_str(&nested_compounds(513)).unwrap_err();
    assert!(err.message().contains("nested"));
}

#[test]
fn test_nested_int_arrays_rejected() {
    let input = format!("{{a:{}}}", "[I;".repeat(200_000));
    assert!(from_str(&input).is_err());
    assert!(SnbtIo::default().as_tag(&"[I;".repeat(200_000)).is_err());
}

#[test]
fn test_legacy_list() {
    let list = tag(r#"[0:"Tag #1",1:"Tag #2"]"#);
    let list = list.as_list().unwrap();
    assert_eq!(list.element_type(), TagType::String);
    assert_eq!(list.get_string(0), "Tag #1");
    assert_eq!(list.get_string(1), "Tag #2");

    let ints = tag("[0:1,1:2]");
    assert_eq!(
        ints,
        Tag::List(List::of(TagType::Int, vec![Tag::Int(1), Tag::Int(2)]).unwrap())
    );

    assert!(strict().as_tag("[0:1,1:2]").is_err());
}

#[test]
fn test_legacy_key() {
    // Legacy keys run to the colon, spaces included.
    let c = from_str("{a :1}").unwrap();
    assert_eq!(c.get_int("a "), 1);
    // Strict keys stop at the first non id char, and whitespace before the
    // colon is skipped.
    let c = strict().as_compound("{a :1}").unwrap();
    assert_eq!(c.get_int("a"), 1);
    assert!(c.get("a ").is_none());

    let input = r#"{test*compound: "hello world"}"#;
    let c = SnbtIo::default().as_compound(input).unwrap();
    assert_eq!(c.get_string("test*compound"), "hello world");

    assert!(strict().as_compound(input).is_err());
}
