#![no_main]
use libfuzzer_sys::fuzz_target;

use tagnbt::{Compound, Compression, Reader, Writer};

fuzz_target!(|c: Compound| {
    let mut buf = Vec::new();
    if Writer::new().write(&mut buf, &c, Compression::None).is_ok() {
        // Trees deeper than the reader allows are the only expected failure.
        if let Ok(read) = Reader::unlimited().read(buf.as_slice(), Compression::None) {
            assert_eq!(read, c);
        }
    }
});
