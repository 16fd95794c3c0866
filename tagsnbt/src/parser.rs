use std::str::FromStr;

use log::trace;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};
use tagnbt::{Compound, CompoundBuilder, List, ListBuilder, Tag, MAX_DEPTH};

use crate::error::Result;
use crate::input::CharBuffer;
use crate::tokens::{self, *};

// Number syntax accepted for SNBT numbers. Plain decimal forms only, plus
// the `NaN` and `Infinity` literals for floats. No hex, no locale dependent
// separators.

fn integer(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

fn float(input: &str) -> IResult<&str, &str> {
    alt((decimal, non_finite))(input)
}

fn non_finite(input: &str) -> IResult<&str, &str> {
    alt((
        tag("NaN"),
        recognize(pair(opt(one_of("+-")), tag("Infinity"))),
    ))(input)
}

fn decimal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/// Parse all of `s` as a decimal integer of type `T`. Out of range values
/// give `None`.
pub(crate) fn parse_integer<T: FromStr>(s: &str) -> Option<T> {
    all_consuming(integer)(s).ok()?;
    s.parse().ok()
}

/// Parse all of `s` as a floating point number of type `T`.
pub(crate) fn parse_float<T: FromStr>(s: &str) -> Option<T> {
    all_consuming(float)(s).ok()?;
    s.parse().ok()
}

/// Remove backslash escapes. The char after each backslash is kept as is.
fn unescape(with_escapes: &str) -> String {
    let mut output = String::with_capacity(with_escapes.len());
    let mut chars = with_escapes.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE_MARKER {
            if let Some(escaped) = chars.next() {
                output.push(escaped);
            }
        } else {
            output.push(c);
        }
    }
    output
}

/// A recursive descent reader for SNBT.
///
/// Each method reads one production starting at the current position of the
/// buffer. Use [`SnbtIo`][crate::SnbtIo] for whole documents.
pub struct TagStringReader {
    buffer: CharBuffer,
    accept_legacy: bool,
    depth: usize,
}

impl TagStringReader {
    pub fn new(input: &str) -> Self {
        Self {
            buffer: CharBuffer::new(input),
            accept_legacy: false,
            depth: 0,
        }
    }

    /// Also accept the legacy dialect: indexed list elements such as
    /// `[0:a,1:b]`, and unquoted keys made of any chars but `:`.
    pub fn legacy(&mut self, accept_legacy: bool) -> &mut Self {
        self.accept_legacy = accept_legacy;
        self
    }

    pub fn buffer(&mut self) -> &mut CharBuffer {
        &mut self.buffer
    }

    fn scoped<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(self
                .buffer
                .make_error(format!("snbt nested deeper than {}", MAX_DEPTH)));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    pub fn compound(&mut self) -> Result<Compound> {
        self.buffer.expect(COMPOUND_BEGIN)?;
        if self.buffer.take_if(COMPOUND_END) {
            return Ok(Compound::new());
        }

        self.scoped(|reader| {
            let mut builder = CompoundBuilder::new();
            while reader.buffer.has_more() {
                let key = reader.key()?;
                let value = reader.tag()?;
                builder.insert(key, value);
                if reader.separator_or_complete_with(COMPOUND_END)? {
                    return Ok(builder.build());
                }
            }
            Err(reader.buffer.make_error("unterminated compound tag"))
        })
    }

    pub fn list(&mut self) -> Result<List> {
        self.buffer.expect(ARRAY_BEGIN)?;
        let prefixed_index = self.accept_legacy
            && self.buffer.skip_whitespace().peek() == Some('0')
            && self.buffer.peek_at(1) == Some(COMPOUND_KEY_TERMINATOR);
        if prefixed_index {
            trace!("legacy indexed list at char {}", self.buffer.index());
        } else if self.buffer.take_if(ARRAY_END) {
            return Ok(List::new());
        }

        self.scoped(|reader| {
            let mut builder = ListBuilder::new();
            while reader.buffer.has_more() {
                if prefixed_index {
                    reader.buffer.take_until(COMPOUND_KEY_TERMINATOR)?;
                }

                let next = reader.tag()?;
                if let Err(e) = builder.push(next) {
                    return Err(reader.buffer.make_error(e.to_string()));
                }
                if reader.separator_or_complete_with(ARRAY_END)? {
                    return Ok(builder.build());
                }
            }
            Err(reader
                .buffer
                .make_error("reached end of input without end of list tag"))
        })
    }

    /// A typed array such as `[I;1,2,3]`. `element_type` is the letter after
    /// the bracket.
    pub fn array(&mut self, element_type: char) -> Result<Tag> {
        self.buffer
            .expect(ARRAY_BEGIN)?
            .expect(element_type)?
            .expect(ARRAY_SIGNATURE_SEPARATOR)?;

        match element_type.to_ascii_lowercase() {
            TYPE_BYTE => Ok(Tag::ByteArray(self.byte_array()?.into())),
            TYPE_INT => Ok(Tag::IntArray(self.int_array()?.into())),
            TYPE_LONG => Ok(Tag::LongArray(self.long_array()?.into())),
            other => Err(self.buffer.make_error(format!(
                "type {} is not a valid element type in an array",
                other
            ))),
        }
    }

    fn byte_array(&mut self) -> Result<Vec<i8>> {
        self.suffixed_array(TYPE_BYTE, "all elements of a byte array must be bytes")
    }

    fn long_array(&mut self) -> Result<Vec<i64>> {
        self.suffixed_array(TYPE_LONG, "all elements of a long array must be longs")
    }

    // Byte and long array elements always carry their suffix, so each
    // element is everything up to the next suffix char.
    fn suffixed_array<T: FromStr>(&mut self, suffix: char, msg: &str) -> Result<Vec<T>> {
        let mut values = Vec::new();
        if self.buffer.take_if(ARRAY_END) {
            return Ok(values);
        }

        while self.buffer.has_more() {
            let value = self.buffer.skip_whitespace().take_until(suffix)?;
            match parse_integer(&value) {
                Some(v) => values.push(v),
                None => return Err(self.buffer.make_error(msg)),
            }

            if self.separator_or_complete_with(ARRAY_END)? {
                return Ok(values);
            }
        }
        Err(self
            .buffer
            .make_error("reached end of input without array close"))
    }

    // Int array elements carry no suffix. Each is a run of id chars that
    // must parse as an i32.
    fn int_array(&mut self) -> Result<Vec<i32>> {
        let mut values = Vec::new();
        if self.buffer.take_if(ARRAY_END) {
            return Ok(values);
        }

        while self.buffer.has_more() {
            let mut value = String::new();
            self.buffer.skip_whitespace();
            while let Some(c) = self.buffer.peek().filter(|&c| tokens::id(c)) {
                value.push(c);
                self.buffer.advance();
            }
            match parse_integer(&value) {
                Some(v) => values.push(v),
                None => {
                    return Err(self
                        .buffer
                        .make_error("all elements of an int array must be ints"))
                }
            }
            if self.separator_or_complete_with(ARRAY_END)? {
                return Ok(values);
            }
        }
        Err(self
            .buffer
            .make_error("reached end of input without array close"))
    }

    /// A compound key, along with the `:` after it.
    pub fn key(&mut self) -> Result<String> {
        self.buffer.skip_whitespace();
        let key = match self.buffer.peek() {
            Some(quote @ (SINGLE_QUOTE | DOUBLE_QUOTE)) => {
                self.buffer.advance();
                unescape(&self.buffer.take_until(quote)?)
            }
            _ => self.unquoted_key()?,
        };
        self.buffer.expect(COMPOUND_KEY_TERMINATOR)?;
        Ok(key)
    }

    fn unquoted_key(&mut self) -> Result<String> {
        let mut builder = String::new();
        while let Some(peek) = self.buffer.peek() {
            if !tokens::id(peek) {
                if !self.accept_legacy || peek == COMPOUND_KEY_TERMINATOR {
                    break;
                }
                // Legacy keys run up to the colon. Escape markers are
                // dropped.
                self.buffer.advance();
                if peek != ESCAPE_MARKER {
                    builder.push(peek);
                }
                continue;
            }
            builder.push(self.buffer.take()?);
        }
        Ok(builder)
    }

    /// Any tag.
    pub fn tag(&mut self) -> Result<Tag> {
        let start = match self.buffer.skip_whitespace().peek() {
            Some(c) => c,
            None => return Err(self.buffer.make_error("expected a tag but got end of input")),
        };

        match start {
            COMPOUND_BEGIN => Ok(Tag::Compound(self.compound()?)),
            ARRAY_BEGIN => {
                if self.buffer.has_more_at(2)
                    && self.buffer.peek_at(2) == Some(ARRAY_SIGNATURE_SEPARATOR)
                {
                    let element_type = self.buffer.peek_at(1).unwrap_or_default();
                    self.array(element_type)
                } else {
                    Ok(Tag::List(self.list()?))
                }
            }
            SINGLE_QUOTE | DOUBLE_QUOTE => {
                self.buffer.advance();
                Ok(Tag::String(unescape(&self.buffer.take_until(start)?)))
            }
            _ => self.scalar(),
        }
    }

    // An unquoted value. Numbers are recognised by their suffix, or, with no
    // suffix, as an int and then a double. Anything else is a boolean or a
    // string.
    fn scalar(&mut self) -> Result<Tag> {
        let mut builder = String::new();
        let mut possibly_numeric = true;

        while let Some(current) = self.buffer.peek() {
            if possibly_numeric && !tokens::numeric(current) && !builder.is_empty() {
                let result = match current.to_ascii_lowercase() {
                    TYPE_BYTE => Some(parse_integer(&builder).map(Tag::Byte)),
                    TYPE_SHORT => Some(parse_integer(&builder).map(Tag::Short)),
                    TYPE_LONG => Some(parse_integer(&builder).map(Tag::Long)),
                    TYPE_FLOAT => Some(parse_float(&builder).map(Tag::Float)),
                    TYPE_DOUBLE => Some(parse_float(&builder).map(Tag::Double)),
                    _ => None,
                };
                match result {
                    Some(Some(tag)) => {
                        self.buffer.advance();
                        return Ok(tag);
                    }
                    Some(None) => possibly_numeric = false,
                    None => {}
                }
            }

            if current == ESCAPE_MARKER {
                self.buffer.advance();
                builder.push(self.buffer.take()?);
            } else if tokens::id(current) {
                builder.push(current);
                self.buffer.advance();
            } else {
                break;
            }
        }

        if possibly_numeric {
            if let Some(v) = parse_integer(&builder) {
                return Ok(Tag::Int(v));
            }
            if let Some(v) = parse_float(&builder) {
                return Ok(Tag::Double(v));
            }
        }

        if builder.eq_ignore_ascii_case(LITERAL_TRUE) {
            Ok(Tag::Byte(1))
        } else if builder.eq_ignore_ascii_case(LITERAL_FALSE) {
            Ok(Tag::Byte(0))
        } else {
            Ok(Tag::String(builder))
        }
    }

    fn separator_or_complete_with(&mut self, end: char) -> Result<bool> {
        if self.buffer.take_if(end) {
            return Ok(true);
        }
        self.buffer.expect(VALUE_SEPARATOR)?;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(parse_integer::<i32>("12"), Some(12));
        assert_eq!(parse_integer::<i32>("+12"), Some(12));
        assert_eq!(parse_integer::<i32>("-007"), Some(-7));
        assert_eq!(parse_integer::<i8>("128"), None);
        assert_eq!(parse_integer::<i32>("1.0"), None);
        assert_eq!(parse_integer::<i32>(""), None);
        assert_eq!(parse_integer::<i32>("-"), None);
    }

    #[test]
    fn floats() {
        assert_eq!(parse_float::<f64>("9."), Some(9.0));
        assert_eq!(parse_float::<f64>(".5"), Some(0.5));
        assert_eq!(parse_float::<f64>("-1.5e3"), Some(-1500.0));
        assert_eq!(parse_float::<f64>("1E+2"), Some(100.0));
        assert_eq!(parse_float::<f64>("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float::<f64>("-Infinity"), Some(f64::NEG_INFINITY));
        assert!(parse_float::<f32>("NaN").map_or(false, f32::is_nan));
        assert_eq!(parse_float::<f64>("inf"), None);
        assert_eq!(parse_float::<f64>("infinity"), None);
        assert_eq!(parse_float::<f64>("nan"), None);
        assert_eq!(parse_float::<f64>("1.33.28"), None);
        assert_eq!(parse_float::<f64>("1e"), None);
        assert_eq!(parse_float::<f64>("."), None);
        assert_eq!(parse_float::<f64>("0x10"), None);
    }

    #[test]
    fn unescapes() {
        assert_eq!(unescape(r#"a\"b"#), r#"a"b"#);
        assert_eq!(unescape(r"a\\b"), r"a\b");
        assert_eq!(unescape("plain"), "plain");
    }
}
