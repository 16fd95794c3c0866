#![no_main]
use libfuzzer_sys::fuzz_target;

use tagnbt::{Compression, Reader, Writer};

fuzz_target!(|data: &[u8]| {
    if let Ok(c) = Reader::default_limit().read(data, Compression::None) {
        let mut buf = Vec::new();
        Writer::new().write(&mut buf, &c, Compression::None).unwrap();
        let again = Reader::unlimited().read(buf.as_slice(), Compression::None).unwrap();
        assert_eq!(again, c);
    }
});
