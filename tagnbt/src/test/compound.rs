use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::{Compound, CompoundSetter, List, Tag, TagType};

fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut h = DefaultHasher::new();
    t.hash(&mut h);
    h.finish()
}

#[test]
fn put_leaves_original_untouched() {
    let c = Compound::new().put_int("a", 1);
    let c2 = c.put_int("b", 2);

    assert_eq!(c.len(), 1);
    assert!(!c.contains_key("b"));
    assert_eq!(c2.len(), 2);
    assert_ne!(c, c2);
}

#[test]
fn put_same_value_is_equal() {
    let c = Compound::new().put_int("a", 1);
    assert_eq!(c.put_int("a", 1), c);
    assert_ne!(c.put_int("a", 2), c);
}

#[test]
fn put_replaces() {
    let c = Compound::new().put_int("a", 1).put_string("a", "x");
    assert_eq!(c.len(), 1);
    assert_eq!(c.get("a"), Some(&Tag::String("x".to_owned())));
}

#[test]
fn remove() {
    let c = Compound::new().put_int("a", 1).put_int("b", 2);
    let removed = c.remove("a");
    assert_eq!(removed.len(), 1);
    assert_eq!(c.len(), 2);

    let (same, tag) = c.remove_entry("missing");
    assert_eq!(same, c);
    assert_eq!(tag, None);

    let (_, tag) = c.remove_entry("b");
    assert_eq!(tag, Some(Tag::Int(2)));
}

#[test]
fn put_all() {
    let a = Compound::new().put_int("x", 1).put_int("y", 1);
    let b = Compound::new().put_int("y", 2).put_int("z", 2);
    let all = a.put_all(&b);

    assert_eq!(all.len(), 3);
    assert_eq!(all.get_int("x"), 1);
    assert_eq!(all.get_int("y"), 2);
    assert_eq!(a.get_int("y"), 1);
    assert_eq!(a.put_all(&Compound::new()), a);
}

#[test]
fn numeric_coercion() {
    let c = Compound::new().put_int("x", 5);
    assert_eq!(c.get_byte("x"), 5);
    assert_eq!(c.get_short("x"), 5);
    assert_eq!(c.get_long("x"), 5);
    assert_eq!(c.get_float("x"), 5.0);
    assert_eq!(c.get_double("x"), 5.0);

    let c = Compound::new().put_int("x", 300);
    assert_eq!(c.get_byte("x"), 300i32 as i8);

    let c = Compound::new().put_double("x", 1e20);
    assert_eq!(c.get_int("x"), i32::MAX);
    assert_eq!(c.get_byte("x"), -1);
}

#[test]
fn mismatched_type_gives_default() {
    let c = Compound::new().put_string("x", "s").put_int("n", 1);
    assert_eq!(c.get_byte("x"), 0);
    assert_eq!(c.get_byte_or("x", 9), 9);
    assert_eq!(c.get_int_or("missing", -3), -3);
    assert_eq!(c.get_string("n"), "");
    assert_eq!(c.get_string_or("n", "dflt"), "dflt");
    assert!(c.get_compound("x").is_empty());
    assert!(c.get_list("x").is_empty());
    assert!(c.get_byte_array("x").is_empty());
    assert!(c.get_int_array("x").is_empty());
    assert!(c.get_long_array("x").is_empty());
}

#[test]
fn bools() {
    let c = Compound::new()
        .put_bool("t", true)
        .put_bool("f", false)
        .put_int("two", 2);
    assert!(c.get_bool("t"));
    assert!(!c.get_bool("f"));
    assert!(c.get_bool("two"));
    assert!(c.get_bool_or("missing", true));
    assert_eq!(c.get("t"), Some(&Tag::Byte(1)));
}

#[test]
fn contains_uses_numeric_compatibility() {
    let c = Compound::new().put_short("s", 1).put_string("str", "x");
    assert!(c.contains("s", TagType::Double));
    assert!(c.contains("s", TagType::Short));
    assert!(!c.contains("s", TagType::String));
    assert!(c.contains("str", TagType::String));
    assert!(!c.contains("str", TagType::Int));
    assert!(!c.contains("missing", TagType::Int));
}

#[test]
fn list_of_checks_element_type() {
    let ints = List::new().add(1i32).unwrap();
    let c = Compound::new().put("l", ints.clone()).put("e", List::new());

    assert_eq!(c.get_list_of("l", TagType::Int), ints);
    // Numeric compatibility applies to the element type too.
    assert_eq!(c.get_list_of("l", TagType::Byte), ints);
    assert!(c.get_list_of("l", TagType::String).is_empty());
    assert!(c.get_list_of("e", TagType::Int).is_empty());

    let fallback = List::new().add("x").unwrap();
    assert_eq!(c.get_list_of_or("l", TagType::String, fallback.clone()), fallback);
}

#[test]
fn builder_matches_edits() {
    let built = Compound::builder()
        .put_int("a", 1)
        .put_string("b", "two")
        .put_long_array("c", vec![3i64])
        .build();
    let edited = Compound::new()
        .put_int("a", 1)
        .put_string("b", "two")
        .put_long_array("c", vec![3i64]);
    assert_eq!(built, edited);
    assert_eq!(hash_of(&built), hash_of(&edited));

    assert_eq!(Compound::builder().build(), Compound::new());
}

#[test]
fn hash_is_structural() {
    let a: Compound = (0..50).map(|i| (format!("k{}", i), Tag::Int(i))).collect();
    let b: Compound = (0..50).rev().map(|i| (format!("k{}", i), Tag::Int(i))).collect();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn iteration() {
    let c = Compound::new().put_int("a", 1).put_int("b", 2);
    let mut keys: Vec<_> = c.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, ["a", "b"]);

    let sum: i32 = c.iter().filter_map(|(_, v)| v.as_i32()).sum();
    assert_eq!(sum, 3);
    assert_eq!((&c).into_iter().count(), 2);
}

#[cfg(feature = "preserve-order")]
#[test]
fn preserves_insertion_order() {
    let c = Compound::new()
        .put_int("z", 1)
        .put_int("a", 2)
        .put_int("m", 3)
        .remove("a")
        .put_int("b", 4);
    let keys: Vec<_> = c.keys().collect();
    assert_eq!(keys, ["z", "m", "b"]);
}
