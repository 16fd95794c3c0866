use std::num::ParseIntError;

use crate::{Codec, TagHolder};

struct Decimal;

impl Codec<i64> for Decimal {
    type Error = ParseIntError;

    fn encode(&self, value: &i64) -> Result<String, ParseIntError> {
        Ok(value.to_string())
    }

    fn decode(&self, encoded: &str) -> Result<i64, ParseIntError> {
        encoded.parse()
    }
}

#[test]
fn encode_then_get() {
    let holder = TagHolder::encode(&42i64, &Decimal).unwrap();
    assert_eq!(holder.string(), "42");
    assert_eq!(holder.get::<i64, _>(&Decimal), Ok(42));
}

#[test]
fn decode_errors_surface() {
    let holder = TagHolder::new("not a number");
    assert!(holder.get::<i64, _>(&Decimal).is_err());
    assert_eq!(holder.to_string(), "not a number");
}
