//! Hand-rolled ULEB128/SLEB128 decoding over a plain byte slice.
//!
//! DEX only ever uses these to encode 32-bit quantities, so both decoders cap
//! at five payload bytes (5 * 7 = 35 bits, enough to cover a 32-bit value plus
//! its continuation bits) and fail with `LebOverflow` past that.

use crate::error::DexError;
use crate::Result;

const MAX_BYTES: usize = 5;

pub fn read_uleb128(data: &[u8], pos: &mut usize) -> Result<u32> {
    let start = *pos;
    let mut result: u32 = 0;
    let mut shift: u32 = 0;

    for i in 0..MAX_BYTES {
        let offset = *pos;
        let byte = *data.get(offset).ok_or(DexError::Truncated {
            offset: offset as u64,
            needed: 1,
            available: data.len().saturating_sub(offset),
        })?;
        *pos += 1;

        result |= ((byte & 0x7F) as u32) << shift;
        if byte & 0x80 == 0 {
            return Ok(result);
        }
        shift += 7;
        if i == MAX_BYTES - 1 {
            return Err(DexError::LebOverflow(start as u64));
        }
    }
    unreachable!()
}

pub fn read_sleb128(data: &[u8], pos: &mut usize) -> Result<i32> {
    let start = *pos;
    let mut result: i32 = 0;
    let mut shift: u32 = 0;
    let mut byte: u8;

    loop {
        let offset = *pos;
        byte = *data.get(offset).ok_or(DexError::Truncated {
            offset: offset as u64,
            needed: 1,
            available: data.len().saturating_sub(offset),
        })?;
        *pos += 1;

        result |= ((byte & 0x7F) as i32) << shift;
        shift += 7;
        if byte & 0x80 == 0 {
            break;
        }
        if *pos - start >= MAX_BYTES {
            return Err(DexError::LebOverflow(start as u64));
        }
    }

    if shift < 32 && (byte & 0x40) != 0 {
        result |= -1i32 << shift;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uleb128_vectors() {
        assert_eq!(read_uleb128(&[0x00], &mut 0).unwrap(), 0);
        assert_eq!(read_uleb128(&[0x7F], &mut 0).unwrap(), 127);
        assert_eq!(read_uleb128(&[0x80, 0x01], &mut 0).unwrap(), 128);
        assert_eq!(read_uleb128(&[0xE5, 0x8E, 0x26], &mut 0).unwrap(), 624485);
    }

    #[test]
    fn uleb128_advances_position() {
        let mut pos = 0;
        let data = [0x80, 0x01, 0xFF];
        let v = read_uleb128(&data, &mut pos).unwrap();
        assert_eq!(v, 128);
        assert_eq!(pos, 2);
    }

    #[test]
    fn sleb128_vectors() {
        assert_eq!(read_sleb128(&[0x7F], &mut 0).unwrap(), -1);
        assert_eq!(read_sleb128(&[0xC0, 0x00], &mut 0).unwrap(), 64);
        assert_eq!(read_sleb128(&[0xC0, 0xBB, 0x78], &mut 0).unwrap(), -123456);
    }

    #[test]
    fn uleb128_overflow() {
        let data = [0x80, 0x80, 0x80, 0x80, 0x80, 0x01];
        let err = read_uleb128(&data, &mut 0).unwrap_err();
        assert!(matches!(err, DexError::LebOverflow(0)));
    }

    #[test]
    fn uleb128_truncated() {
        let data = [0x80, 0x80];
        let err = read_uleb128(&data, &mut 0).unwrap_err();
        assert!(matches!(err, DexError::Truncated { .. }));
    }
}
