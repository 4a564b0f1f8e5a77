#![no_main]

use dexcore::dex::opcode::decode_instruction;

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
    // decode_instruction must never panic, and must never advance the
    // cursor past the end of the buffer it was handed
    let mut cursor = 0u64;
    while (cursor as usize) < data.len() {
        match decode_instruction(data, &mut cursor) {
            Ok(op) => {
                assert!(!op.mnemonic.is_empty());
            }
            Err(_) => break,
        }
    }
});
