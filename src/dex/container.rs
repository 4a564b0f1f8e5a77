//! Byte sources a [`super::DexFile`] can be built over. The handle only ever
//! needs random read access to the whole image, so any `AsRef<[u8]>` works;
//! this covers a memory-mapped file, an owned buffer, or a borrowed slice.

use std::path::Path;

use crate::Result;

pub trait DexContainer: AsRef<[u8]> {
    fn data(&self) -> &[u8] {
        self.as_ref()
    }

    fn file_size(&self) -> usize {
        self.data().len()
    }
}

impl DexContainer for memmap2::Mmap {}
impl DexContainer for Vec<u8> {}
impl<'a> DexContainer for &'a [u8] {}

/// Memory-maps `path` for the lifetime of the returned container.
pub fn map_file(path: impl AsRef<Path>) -> Result<memmap2::Mmap> {
    let file = std::fs::File::open(path.as_ref())?;
    log::debug!("memory-mapping {:?}", path.as_ref());
    // Safety: the file is not expected to be mutated concurrently by another
    // process for the lifetime of the mapping; this mirrors the rest of the
    // DEX-tooling ecosystem's use of `memmap2`.
    let mmap = unsafe { memmap2::Mmap::map(&file) }?;
    Ok(mmap)
}
