//! Seekable random-access view over a DEX image.
//!
//! The image is always fully resident (mapped or buffered) before a reader is
//! constructed, so "seeking" is a cursor move rather than a syscall; the
//! seek-then-read discipline is kept because every pool accessor and the
//! instruction decoder are specified in those terms, and it's what lets the
//! instruction decoder drive an arbitrary absolute file-offset cursor.

use crate::error::DexError;
use crate::leb128;
use crate::Result;

pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn seek(&mut self, absolute_offset: u64) {
        self.pos = absolute_offset as usize;
    }

    pub fn position(&self) -> u64 {
        self.pos as u64
    }

    fn require(&self, needed: usize) -> Result<()> {
        if self.pos.saturating_add(needed) > self.data.len() {
            return Err(DexError::Truncated {
                offset: self.pos as u64,
                needed,
                available: self.data.len().saturating_sub(self.pos),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.require(1)?;
        let v = self.data[self.pos];
        self.pos += 1;
        Ok(v)
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.require(2)?;
        let v = u16::from_le_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(v)
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.require(4)?;
        let bytes = [
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ];
        self.pos += 4;
        Ok(u32::from_le_bytes(bytes))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.require(n)?;
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_uleb128(&mut self) -> Result<u32> {
        leb128::read_uleb128(self.data, &mut self.pos)
    }

    pub fn read_sleb128(&mut self) -> Result<i32> {
        leb128::read_sleb128(self.data, &mut self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian_reads() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        let mut r = ByteReader::new(&data);
        assert_eq!(r.read_u8().unwrap(), 0x01);
        assert_eq!(r.read_u16_le().unwrap(), 0x0302);

        let mut r2 = ByteReader::new(&data);
        r2.seek(2);
        assert_eq!(r2.read_u32_le().unwrap(), u32::from_le_bytes([0x03, 0x04, 0x05, 0x06]));
    }

    #[test]
    fn seek_then_read() {
        let data = [0xAA, 0xBB, 0xCC, 0xDD];
        let mut r = ByteReader::new(&data);
        r.seek(2);
        assert_eq!(r.position(), 2);
        assert_eq!(r.read_u8().unwrap(), 0xCC);
    }

    #[test]
    fn truncated_read() {
        let data = [0x01];
        let mut r = ByteReader::new(&data);
        let err = r.read_u32_le().unwrap_err();
        assert!(matches!(err, DexError::Truncated { .. }));
    }

    #[test]
    fn leb128_through_reader() {
        let data = [0xE5, 0x8E, 0x26];
        let mut r = ByteReader::new(&data);
        assert_eq!(r.read_uleb128().unwrap(), 624485);
        assert_eq!(r.position(), 3);
    }
}
