//! Contains the Error and Result type used by the SNBT reader and writer.
use std::fmt::Display;

/// Various errors that can occur while reading or writing SNBT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    position: Option<usize>,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{} (at char {})", self.msg, pos),
            None => f.write_str(&self.msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::bespoke(format!("io error: {}", e))
    }
}

impl From<tagnbt::error::Error> for Error {
    fn from(e: tagnbt::error::Error) -> Self {
        Error::bespoke(e.to_string())
    }
}

impl Error {
    /// The char index in the input where a parse error was found. Errors
    /// from writing have no position.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// The message without the position.
    pub fn message(&self) -> &str {
        &self.msg
    }

    pub(crate) fn at(pos: usize, msg: impl Into<String>) -> Error {
        Error {
            msg: msg.into(),
            position: Some(pos),
        }
    }

    pub(crate) fn unexpected_eof(pos: usize) -> Error {
        Error::at(pos, "eof: unexpectedly ran out of input")
    }

    pub(crate) fn trailing_content(pos: usize) -> Error {
        Error::at(pos, "document had trailing content after the first tag")
    }

    pub(crate) fn unbalanced() -> Error {
        Error::bespoke("document finished with unbalanced start and end objects")
    }

    pub(crate) fn legacy_array() -> Error {
        Error::bespoke("legacy snbt only supports integer arrays")
    }

    pub(crate) fn bespoke(msg: impl Into<String>) -> Error {
        Error {
            msg: msg.into(),
            position: None,
        }
    }
}
