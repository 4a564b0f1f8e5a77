//! The fixed 112-byte DEX header, read via a zero-copy `plain::Plain` cast
//! over the mapped image (the one place this crate casts directly over raw
//! bytes rather than going through `ByteReader` — the header's layout is
//! entirely fixed-width and this avoids duplicating its field list twice).

#[repr(C)]
#[derive(Debug, Clone)]
pub struct Header {
    magic: [u8; 8],

    /// Adler32 checksum of the rest of the file (everything but `magic` and
    /// this field); used to detect file corruption.
    pub checksum: u32,

    /// SHA-1 signature of the rest of the file (everything but `magic`,
    /// `checksum`, and this field); used to uniquely identify files.
    signature: [u8; 20],

    /// Size of the entire file including the header.
    pub file_size: u32,

    /// Size of the header (this struct), in bytes. Always 0x70.
    pub header_size: u32,

    /// Endian tag; only little-endian (0x12345678) images are supported.
    pub endian_tag: u32,

    pub link_size: u32,
    pub link_off: u32,

    /// Offset from the start of the file to the map item.
    pub map_off: u32,

    pub string_ids_size: u32,
    pub string_ids_off: u32,

    pub type_ids_size: u32,
    pub type_ids_off: u32,

    pub proto_ids_size: u32,
    pub proto_ids_off: u32,

    pub field_ids_size: u32,
    pub field_ids_off: u32,

    pub method_ids_size: u32,
    pub method_ids_off: u32,

    pub class_defs_size: u32,
    pub class_defs_off: u32,

    pub data_size: u32,
    pub data_off: u32,
}

unsafe impl plain::Plain for Header {}

pub const HEADER_SIZE: usize = std::mem::size_of::<Header>();
pub const LITTLE_ENDIAN_TAG: u32 = 0x1234_5678;

impl Header {
    pub fn get_magic(&self) -> &[u8; 8] {
        &self.magic
    }

    pub fn get_signature(&self) -> &[u8; 20] {
        &self.signature
    }

    /// Parses the three ASCII-digit version out of `magic[4..7]`.
    pub fn get_version(&self) -> u32 {
        let version_raw = &self.magic[4..7];
        String::from_utf8_lossy(version_raw).parse().unwrap_or(0)
    }

    /// `dex\n` + three ASCII digits + a trailing NUL.
    pub fn has_valid_magic(&self) -> bool {
        self.magic[0..4] == *b"dex\n"
            && self.magic[4..7].iter().all(|b| b.is_ascii_digit())
            && self.magic[7] == 0x00
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_size_is_0x70() {
        assert_eq!(HEADER_SIZE, 0x70);
    }
}
