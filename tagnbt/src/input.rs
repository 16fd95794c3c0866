use std::io::Read;

use byteorder::{BigEndian, ByteOrder, ReadBytesExt};

use crate::error::{Error, Result};
use crate::TagType;

/// How deep containers may be nested while reading. The root compound is
/// level one.
pub const MAX_DEPTH: usize = 512;

pub(crate) fn try_size(size: i32, multiplier: usize) -> Result<usize> {
    let size: usize = size
        .try_into()
        .map_err(|_| Error::bespoke(format!("size was negative: {}", size)))?;

    size.checked_mul(multiplier)
        .ok_or_else(|| Error::bespoke("size too large".to_string()))
}

/// A reader that counts every byte pulled through it and keeps track of how
/// deeply nested the current read is.
///
/// Containers are read inside [`scoped`][Self::scoped], which rejects the
/// read if it would go deeper than [`MAX_DEPTH`], or if the size the
/// container declares would take the total past the byte ceiling. The check
/// happens before anything is allocated for the container.
#[derive(Debug)]
pub struct TrackingReader<R> {
    inner: R,
    counter: u64,
    depth: usize,
    max_bytes: Option<u64>,
}

impl<R: Read> TrackingReader<R> {
    /// Track `inner` against a ceiling of `max_bytes`. A ceiling of zero or
    /// less only tracks depth.
    pub fn new(inner: R, max_bytes: i64) -> Self {
        Self {
            inner,
            counter: 0,
            depth: 0,
            max_bytes: u64::try_from(max_bytes).ok().filter(|max| *max > 0),
        }
    }

    /// Total bytes read so far.
    pub fn bytes_read(&self) -> u64 {
        self.counter
    }

    /// Current container nesting.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_bytes(&self) -> Option<u64> {
        self.max_bytes
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Enter a container expected to need at least `expected` more bytes,
    /// run `f`, then leave it again. The depth is restored whether or not
    /// `f` succeeds.
    pub fn scoped<T>(
        &mut self,
        expected: u64,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::depth_limit(MAX_DEPTH));
        }
        self.ensure_max_length(expected)?;

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;

        let value = result?;
        self.ensure_max_length(0)?;
        Ok(value)
    }

    fn ensure_max_length(&self, expected: u64) -> Result<()> {
        match self.max_bytes {
            Some(max) if self.counter.saturating_add(expected) > max => {
                Err(Error::size_limit(max))
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn consume_tag_type(&mut self) -> Result<TagType> {
        let id = self.read_u8()?;
        TagType::from_id(id)
    }

    /// An array or list length. Negative lengths are refused.
    pub(crate) fn consume_len(&mut self) -> Result<usize> {
        let len = self.read_i32::<BigEndian>()?;
        try_size(len, 1)
    }

    pub(crate) fn consume_str(&mut self) -> Result<String> {
        let len = self.read_u16::<BigEndian>()? as usize;
        let buf = self.consume_bytes(len)?;

        match cesu8::from_java_cesu8(&buf) {
            Ok(s) => Ok(s.into_owned()),
            Err(_) => Err(Error::nonunicode_string(&buf)),
        }
    }

    /// Read exactly `n` bytes. The buffer grows as data arrives rather than
    /// being allocated up front, so a lying length on an unlimited reader
    /// runs out of input instead of memory.
    pub(crate) fn consume_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.by_ref().take(n as u64).read_to_end(&mut buf)?;
        if buf.len() < n {
            return Err(Error::from(std::io::Error::from(
                std::io::ErrorKind::UnexpectedEof,
            )));
        }
        Ok(buf)
    }

    pub(crate) fn consume_i8_array(&mut self, len: usize) -> Result<Vec<i8>> {
        let buf = self.consume_bytes(len)?;
        Ok(buf.into_iter().map(|b| b as i8).collect())
    }

    pub(crate) fn consume_i32_array(&mut self, len: usize) -> Result<Vec<i32>> {
        let buf = self.consume_bytes(try_size(len as i32, 4)?)?;
        let mut out = vec![0; len];
        BigEndian::read_i32_into(&buf, &mut out);
        Ok(out)
    }

    pub(crate) fn consume_i64_array(&mut self, len: usize) -> Result<Vec<i64>> {
        let buf = self.consume_bytes(try_size(len as i32, 8)?)?;
        let mut out = vec![0; len];
        BigEndian::read_i64_into(&buf, &mut out);
        Ok(out)
    }
}

impl<R: Read> Read for TrackingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.counter += n as u64;
        Ok(n)
    }
}
