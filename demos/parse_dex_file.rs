#![allow(unused)]

use dexcore::dex::container::map_file;
use dexcore::dex::verifier::VerifyPreset;
use dexcore::dex::DexFile;

fn parse_dex_file(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    // external files are opened through a memory-mapped container; open()
    // runs its structural checks unconditionally, verify() is opt-in for
    // anything past that (here, the checksum)
    let mmap = map_file(path)?;
    let dex = DexFile::open(mmap)?;
    dex.verify(VerifyPreset::ChecksumOnly)?;
    // ...
    Ok(())
}

fn parse_in_memory_file(data: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
    // anything implementing DexContainer works the same way; an owned
    // buffer or a borrowed slice both satisfy it
    let dex = DexFile::open(data)?;
    Ok(())
}

fn parse_borrowed_slice(data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    let dex = DexFile::open(data)?;
    Ok(())
}

fn parse_dex_file_unverified(data: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
    // open() always validates the header and section map; there's no
    // lower-cost "trust me" constructor, since a malformed map would make
    // every later pool accessor unsafe to call
    let dex = DexFile::open(data)?;

    // the checksum and structural re-check are still opt-in past that
    dex.verify(VerifyPreset::HeaderOnly)?;
    Ok(())
}

fn main() {
    // ...
}
