use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use tagnbt::Compression;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

pub const COMPRESSIONS: &[&str] = &["gzip", "zlib", "none"];

pub fn parse_compression(name: &str) -> Option<Compression> {
    match name {
        "gzip" => Some(Compression::Gzip),
        "zlib" => Some(Compression::Zlib),
        "none" => Some(Compression::None),
        _ => None,
    }
}

/// Open `path` for reading, with `-` meaning stdin.
pub fn open_input(path: &str) -> Result<Box<dyn Read>> {
    if path == "-" {
        Ok(Box::new(io::stdin()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// Open `path` for writing, with `-` meaning stdout.
pub fn open_output(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(io::stdout()))
    } else {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_compression_parses() {
        for name in COMPRESSIONS {
            assert!(parse_compression(name).is_some());
        }
        assert_eq!(parse_compression("lz4"), None);
    }
}
