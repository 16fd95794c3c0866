use std::io::{self, BufReader, BufWriter, Read, Write};

use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};

/// The outer stream transform applied around binary NBT. Level files and
/// player data are usually gzip compressed, chunk data zlib compressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Compression {
    #[default]
    None,
    Gzip,
    Zlib,
}

impl Compression {
    pub(crate) fn decompress<R: Read>(self, input: R) -> Decompressor<R> {
        match self {
            Compression::None => Decompressor::None(input),
            Compression::Gzip => Decompressor::Gzip(BufReader::new(GzDecoder::new(input))),
            Compression::Zlib => Decompressor::Zlib(BufReader::new(ZlibDecoder::new(input))),
        }
    }

    pub(crate) fn compress<W: Write>(self, output: W) -> Compressor<W> {
        let level = flate2::Compression::default();
        match self {
            Compression::None => Compressor::None(BufWriter::new(output)),
            Compression::Gzip => Compressor::Gzip(BufWriter::new(GzEncoder::new(output, level))),
            Compression::Zlib => Compressor::Zlib(BufWriter::new(ZlibEncoder::new(output, level))),
        }
    }
}

/// Uncompressed input is read directly, so nothing past the end of the
/// document is taken from the caller's stream.
pub(crate) enum Decompressor<R: Read> {
    None(R),
    Gzip(BufReader<GzDecoder<R>>),
    Zlib(BufReader<ZlibDecoder<R>>),
}

impl<R: Read> Read for Decompressor<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Decompressor::None(r) => r.read(buf),
            Decompressor::Gzip(r) => r.read(buf),
            Decompressor::Zlib(r) => r.read(buf),
        }
    }
}

/// Owns the buffering and compression layers over a caller's stream. Those
/// layers must be [`finish`][Compressor::finish]ed to write out the trailing
/// data, which hands the caller's stream back without closing it.
pub(crate) enum Compressor<W: Write> {
    None(BufWriter<W>),
    Gzip(BufWriter<GzEncoder<W>>),
    Zlib(BufWriter<ZlibEncoder<W>>),
}

fn unbuffer<W: Write>(w: BufWriter<W>) -> io::Result<W> {
    w.into_inner().map_err(|e| e.into_error())
}

impl<W: Write> Compressor<W> {
    pub(crate) fn finish(self) -> io::Result<W> {
        let mut inner = match self {
            Compressor::None(w) => unbuffer(w)?,
            Compressor::Gzip(w) => unbuffer(w)?.finish()?,
            Compressor::Zlib(w) => unbuffer(w)?.finish()?,
        };
        inner.flush()?;
        Ok(inner)
    }
}

impl<W: Write> Write for Compressor<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Compressor::None(w) => w.write(buf),
            Compressor::Gzip(w) => w.write(buf),
            Compressor::Zlib(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Compressor::None(w) => w.flush(),
            Compressor::Gzip(w) => w.flush(),
            Compressor::Zlib(w) => w.flush(),
        }
    }
}
