#![no_main]

use dexcore::mutf8::decode_mutf8;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // decode_mutf8 must never panic and must never report consuming more
    // bytes than it was handed, no matter the claimed char_count
    let mut pos = 0usize;
    let char_count = data.len() as u32;
    if let Ok(s) = decode_mutf8(data, &mut pos, char_count) {
        assert!(pos <= data.len());
        let _ = s.len();
    }
});
