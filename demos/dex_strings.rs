#![allow(unused)]

use dexcore::dex::{DexContainer, DexFile};
use dexcore::mutf8::decode_mutf8;
use dexcore::Result;

fn dex_strings<C: DexContainer>(dex: &DexFile<C>) -> Result<()> {
    // get_string resolves an id straight to a UTF-8 Rust String; the
    // underlying bytes are MUTF-8 (the encoded-NUL, surrogate-pair variant
    // the format uses) and get decoded on every call, not cached
    let name = dex.get_string(0)?;

    // every string id is exposed, so you can walk the whole pool
    for name in dex.iter_strings() {
        let name = name?;
    }

    Ok(())
}

pub fn mutf8_strings() -> Result<()> {
    // decode_mutf8 walks the encoded-NUL, surrogate-pair MUTF-8 variant
    // this format uses; it takes the expected UTF-16 code-unit count up
    // front (as stored in the string_id_item) rather than scanning for a
    // terminator, and advances `pos` past what it consumed
    let data = b"Hello, World!";
    let mut pos = 0;
    let name = decode_mutf8(data, &mut pos, data.len() as u32)?;
    assert_eq!(pos, data.len());
    assert_eq!(name, "Hello, World!");
    Ok(())
}

fn main() {
    // ...
}
