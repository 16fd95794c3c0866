use std::fmt;

/// Converts values to and from a string form. Implemented by whatever knows
/// how to encode `T`. The SNBT crate implements it for compounds.
pub trait Codec<T> {
    type Error;

    fn encode(&self, value: &T) -> Result<String, Self::Error>;
    fn decode(&self, encoded: &str) -> Result<T, Self::Error>;
}

/// An already encoded tag, kept as a string until someone asks for the
/// value.
///
/// This lets code that stores tag payloads, such as hover events in text
/// components, do so without depending on how tags are encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagHolder {
    string: String,
}

impl TagHolder {
    /// Hold a payload that is already encoded.
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
        }
    }

    /// Encode `value` with `codec` and hold the result.
    pub fn encode<T, C: Codec<T>>(value: &T, codec: &C) -> Result<Self, C::Error> {
        Ok(Self::new(codec.encode(value)?))
    }

    /// Decode the held payload with `codec`.
    pub fn get<T, C: Codec<T>>(&self, codec: &C) -> Result<T, C::Error> {
        codec.decode(&self.string)
    }

    /// The raw payload.
    pub fn string(&self) -> &str {
        &self.string
    }
}

impl fmt::Display for TagHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

impl From<String> for TagHolder {
    fn from(string: String) -> Self {
        Self::new(string)
    }
}
