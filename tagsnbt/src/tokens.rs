// Characters with a meaning in SNBT.

pub const COMPOUND_BEGIN: char = '{';
pub const COMPOUND_END: char = '}';
pub const COMPOUND_KEY_TERMINATOR: char = ':';

pub const ARRAY_BEGIN: char = '[';
pub const ARRAY_END: char = ']';
pub const ARRAY_SIGNATURE_SEPARATOR: char = ';';

pub const VALUE_SEPARATOR: char = ',';

pub const SINGLE_QUOTE: char = '\'';
pub const DOUBLE_QUOTE: char = '"';
pub const ESCAPE_MARKER: char = '\\';

pub const TYPE_BYTE: char = 'b';
pub const TYPE_SHORT: char = 's';
pub const TYPE_INT: char = 'i';
pub const TYPE_LONG: char = 'l';
pub const TYPE_FLOAT: char = 'f';
pub const TYPE_DOUBLE: char = 'd';

pub const LITERAL_TRUE: &str = "true";
pub const LITERAL_FALSE: &str = "false";

pub const NEWLINE: char = '\n';

/// Whether `c` may appear in an unquoted key or string.
pub fn id(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+')
}

/// Whether `c` may appear in the digits of a number, before any type
/// suffix.
pub fn numeric(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | 'e' | 'E' | '.')
}
