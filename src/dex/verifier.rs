//! Optional post-open checks beyond what [`super::DexFile::open`] already
//! enforces: an adler32 checksum over the post-header bytes, matched
//! against the value the header claims.
//!
//! Checksum verification touches every byte of the image, so it is never
//! run implicitly — callers opt in via [`verify`].

use adler32::RollingAdler32;

use crate::error::DexError;
use crate::Result;

use super::container::DexContainer;
use super::DexFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyPreset {
    /// Only re-check the structural invariants `open` already validated.
    HeaderOnly,
    /// `HeaderOnly` plus the adler32 checksum.
    ChecksumOnly,
}

impl<C: DexContainer> DexFile<C> {
    /// Computes the adler32 checksum over the image from byte 12 onward
    /// (the portion the header's `checksum` field covers; the magic and
    /// checksum fields themselves are excluded).
    pub fn calculate_checksum(&self) -> u32 {
        let data = self.container.data();
        let covered = &data[12..];
        let mut adler = RollingAdler32::new();
        adler.update_buffer(covered);
        adler.hash()
    }

    /// Re-validates the header and, if `preset` asks for it, the checksum.
    /// `open` already performs the structural checks unconditionally, so
    /// `HeaderOnly` here is mostly useful for re-confirming a previously
    /// opened handle hasn't been mutated out from under a borrowed
    /// container (e.g. a `Vec<u8>` the caller still owns).
    pub fn verify(&self, preset: VerifyPreset) -> Result<()> {
        if !self.header.has_valid_magic() {
            return Err(DexError::BadMagic);
        }

        if preset == VerifyPreset::ChecksumOnly {
            let actual = self.calculate_checksum();
            if actual != self.header.checksum {
                return Err(DexError::ChecksumMismatch { expected: self.header.checksum, actual });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dex::header::HEADER_SIZE;

    fn minimal_dex() -> Vec<u8> {
        // HEADER_SIZE bytes of header, followed by a 4-byte map list with
        // zero entries at offset HEADER_SIZE (map_off points there).
        let mut data = vec![0u8; HEADER_SIZE + 4];
        data[0..8].copy_from_slice(b"dex\n035\0");
        data[32..36].copy_from_slice(&(data.len() as u32).to_le_bytes()); // file_size
        data[36..40].copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes()); // header_size
        data[40..44].copy_from_slice(&0x1234_5678u32.to_le_bytes()); // endian_tag
        data[52..56].copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes()); // map_off
        data
    }

    #[test]
    fn checksum_matches_when_header_is_correct() {
        let mut data = minimal_dex();
        let checksum = {
            let mut adler = RollingAdler32::new();
            adler.update_buffer(&data[12..]);
            adler.hash()
        };
        data[8..12].copy_from_slice(&checksum.to_le_bytes());

        let dex = DexFile::open(data).unwrap();
        assert!(dex.verify(VerifyPreset::ChecksumOnly).is_ok());
    }

    #[test]
    fn checksum_mismatch_is_reported() {
        let mut data = minimal_dex();
        data[8..12].copy_from_slice(&0xdeadbeefu32.to_le_bytes());

        let dex = DexFile::open(data).unwrap();
        let err = dex.verify(VerifyPreset::ChecksumOnly).unwrap_err();
        assert!(matches!(err, DexError::ChecksumMismatch { .. }));
    }
}
