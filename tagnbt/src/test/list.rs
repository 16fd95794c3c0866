use crate::error::ErrorKind;
use crate::{Compound, CompoundSetter, List, Tag, TagType};

#[test]
fn first_add_pins_type() {
    let empty = List::new();
    assert_eq!(empty.element_type(), TagType::End);

    let list = empty.add(Tag::Short(1)).unwrap();
    assert_eq!(list.element_type(), TagType::Short);
    assert!(empty.is_empty());
}

#[test]
fn mismatched_add_fails() {
    let list = List::new().add(Tag::Int(1)).unwrap();
    let err = list.add(Tag::Long(2)).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IllegalElement);
    assert_eq!(list.len(), 1);
}

#[test]
fn end_never_added() {
    for list in [List::new(), List::new().add(Tag::Int(1)).unwrap()] {
        let err = list.add(Tag::End).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::IllegalElement);
    }
    assert!(List::builder().add(Tag::End).is_err());
}

#[test]
fn of_checks_every_element() {
    let ok = List::of(TagType::Byte, vec![Tag::Byte(1), Tag::Byte(2)]).unwrap();
    assert_eq!(ok.len(), 2);

    assert!(List::of(TagType::Byte, vec![Tag::Byte(1), Tag::Int(2)]).is_err());
    assert!(List::of(TagType::End, vec![Tag::Byte(1)]).is_err());

    let empty_typed = List::of(TagType::Compound, vec![]).unwrap();
    assert_eq!(empty_typed.element_type(), TagType::Compound);
    assert!(empty_typed.add(Tag::Int(1)).is_err());
}

#[test]
fn add_all_is_all_or_nothing() {
    let list = List::new().add(Tag::Int(1)).unwrap();
    let more = list.add_all(vec![Tag::Int(2), Tag::Int(3)]).unwrap();
    assert_eq!(more.len(), 3);

    assert!(list.add_all(vec![Tag::Int(2), Tag::Byte(3)]).is_err());
    assert!(List::new()
        .add_all(vec![Tag::Byte(2), Tag::Int(3)])
        .is_err());

    assert_eq!(list.add_all(vec![]).unwrap(), list);
    assert_eq!(
        List::new().add_all(vec![Tag::Double(1.0)]).unwrap().element_type(),
        TagType::Double
    );
}

#[test]
fn set_and_remove() {
    let list = List::of(TagType::Int, vec![Tag::Int(1), Tag::Int(2)]).unwrap();

    let (set, old) = list.set_entry(0, Tag::Int(10)).unwrap();
    assert_eq!(old, Tag::Int(1));
    assert_eq!(set.get_int(0), 10);
    assert_eq!(list.get_int(0), 1);

    assert!(list.set(0, Tag::String("x".into())).is_err());
    assert!(list.set(5, Tag::Int(1)).is_err());

    let (removed, old) = list.remove_entry(1).unwrap();
    assert_eq!(old, Tag::Int(2));
    assert_eq!(removed.len(), 1);
    assert!(list.remove(2).is_err());

    // Emptying a list keeps its type.
    let emptied = removed.remove(0).unwrap();
    assert!(emptied.is_empty());
    assert_eq!(emptied.element_type(), TagType::Int);
}

#[test]
fn typed_getters() {
    let list = List::of(TagType::Double, vec![Tag::Double(2.5), Tag::Double(-1.0)]).unwrap();
    assert_eq!(list.get_int(0), 2);
    assert_eq!(list.get_float(0), 2.5);
    assert_eq!(list.get_byte(1), -1);
    assert_eq!(list.get_int(7), 0);
    assert_eq!(list.get_int_or(7, 4), 4);
    assert_eq!(list.get_string(0), "");

    let strings = List::new().add("a").unwrap().add("b").unwrap();
    assert_eq!(strings.get_string(1), "b");
    assert_eq!(strings.get_int_or(0, 9), 9);

    let compounds = List::new()
        .add(Compound::new().put_int("x", 1))
        .unwrap();
    assert_eq!(compounds.get_compound(0).get_int("x"), 1);
    assert!(compounds.get_compound(1).is_empty());
    assert!(compounds.get_list(0).is_empty());
}

#[test]
fn equality_ignores_empty_element_type() {
    let typed = List::of(TagType::String, vec![]).unwrap();
    assert_eq!(typed, List::new());

    let a = List::new().add(1i32).unwrap();
    let b = List::of(TagType::Int, vec![Tag::Int(1)]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, List::new().add(1i64).unwrap());
}

#[test]
fn builder() {
    let mut builder = List::builder_of(TagType::String);
    builder.push("a").unwrap().push("b").unwrap();
    assert!(builder.push(1i32).is_err());
    assert_eq!(builder.len(), 2);

    let list = builder.build();
    assert_eq!(list.element_type(), TagType::String);
    assert_eq!(list.iter().filter_map(Tag::as_str).collect::<Vec<_>>(), ["a", "b"]);

    assert_eq!(List::builder().build(), List::new());
}
