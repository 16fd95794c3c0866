#![no_main]
use libfuzzer_sys::fuzz_target;

use tagsnbt::SnbtIo;

fuzz_target!(|data: &str| {
    let io = SnbtIo::default();
    if let Ok(c) = io.as_compound(data) {
        let _ = io.as_string(&c);
    }
});
