//! Contains the Error and Result type used by the reader, writer and the tag
//! containers.
use std::fmt::Display;

use crate::TagType;

/// Various errors that can occur while reading, writing or building tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Any other errors. Users should not match on this variant and should
    /// instead use a wildcard `_`. Errors in this category may be moved to new variants.
    Other,

    /// EOF that occurred part way through some NBT value.
    UnexpectedEof,

    /// A type id outside of the known range. Contains the offending id.
    InvalidTag(u8),

    /// The root of a document was not a compound.
    NotCompound,

    /// Expected unicode data but was not valid. Contained bytes are the
    /// invalid data.
    Nonunicode(Vec<u8>),

    /// Containers were nested deeper than [`MAX_DEPTH`][crate::MAX_DEPTH].
    DepthLimit,

    /// The input was larger than the configured byte ceiling.
    SizeLimit,

    /// A tag was added to a list that cannot hold it.
    IllegalElement,

    /// Any other IO error from the underlying stream.
    Io(std::io::ErrorKind),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind,
        }
    }

    pub(crate) fn bespoke(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Other, msg)
    }

    pub(crate) fn invalid_tag(tag: u8) -> Self {
        Self::new(
            ErrorKind::InvalidTag(tag),
            format!("invalid nbt tag value: {}", tag),
        )
    }

    pub(crate) fn no_root_compound(found: TagType) -> Self {
        Self::new(
            ErrorKind::NotCompound,
            format!(
                "expected root tag to be a {}, was {}",
                TagType::Compound,
                found
            ),
        )
    }

    pub(crate) fn nonunicode_string(data: &[u8]) -> Self {
        Self::new(
            ErrorKind::Nonunicode(data.to_vec()),
            format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(data)
            ),
        )
    }

    pub(crate) fn depth_limit(max: usize) -> Self {
        Self::new(
            ErrorKind::DepthLimit,
            format!("nbt read exceeded maximum depth of {}", max),
        )
    }

    pub(crate) fn size_limit(max: u64) -> Self {
        Self::new(
            ErrorKind::SizeLimit,
            format!(
                "the read nbt was longer than the maximum allowed size of {} bytes",
                max
            ),
        )
    }

    pub(crate) fn illegal_element(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::IllegalElement, msg)
    }

    /// Whether this error was raised by one of the reader's resource guards.
    pub fn is_limit(&self) -> bool {
        matches!(self.kind, ErrorKind::DepthLimit | ErrorKind::SizeLimit)
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self {
                msg: "eof: unexpectedly ran out of input".to_owned(),
                kind: ErrorKind::UnexpectedEof,
            },
            kind => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Io(kind),
            },
        }
    }
}

