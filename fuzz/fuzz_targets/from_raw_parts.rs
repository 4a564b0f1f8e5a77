#![no_main]

use dexcore::dex::DexFile;

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
    // must never panic, regardless of how malformed the header or section
    // map turn out to be
    if let Ok(dex) = DexFile::open(data) {
        let _ = dex.class_count();
    }
});
