//! The DEX section map: a table mapping section type-codes to (count, offset)
//! pairs, stored at the header's `map_off`.

use std::collections::BTreeMap;

use crate::error::DexError;
use crate::reader::ByteReader;
use crate::Result;

/// Well-known DEX section type codes (not exhaustive of every pseudo-section,
/// but every one this crate's accessors resolve against).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SectionTypeCode(pub u16);

impl SectionTypeCode {
    pub const HEADER_ITEM: SectionTypeCode = SectionTypeCode(0x0000);
    pub const STRING_ID_ITEM: SectionTypeCode = SectionTypeCode(0x0001);
    pub const TYPE_ID_ITEM: SectionTypeCode = SectionTypeCode(0x0002);
    pub const PROTO_ID_ITEM: SectionTypeCode = SectionTypeCode(0x0003);
    pub const FIELD_ID_ITEM: SectionTypeCode = SectionTypeCode(0x0004);
    pub const METHOD_ID_ITEM: SectionTypeCode = SectionTypeCode(0x0005);
    pub const CLASS_DEF_ITEM: SectionTypeCode = SectionTypeCode(0x0006);
    pub const CALL_SITE_ID_ITEM: SectionTypeCode = SectionTypeCode(0x0007);
    pub const METHOD_HANDLE_ITEM: SectionTypeCode = SectionTypeCode(0x0008);
    pub const MAP_LIST: SectionTypeCode = SectionTypeCode(0x1000);
    pub const TYPE_LIST: SectionTypeCode = SectionTypeCode(0x1001);
    pub const STRING_DATA_ITEM: SectionTypeCode = SectionTypeCode(0x2002);
    pub const CLASS_DATA_ITEM: SectionTypeCode = SectionTypeCode(0x2000);
    pub const CODE_ITEM: SectionTypeCode = SectionTypeCode(0x2001);
}

#[derive(Debug, Clone, Copy)]
pub struct SectionMapEntry {
    pub count: u32,
    pub offset: u32,
}

/// A mapping from section type-code to (count, offset), decoded once at open
/// time. Duplicate type-codes are rejected as malformed.
#[derive(Debug, Default)]
pub struct SectionMap {
    entries: BTreeMap<u16, SectionMapEntry>,
}

impl SectionMap {
    pub fn parse(data: &[u8], map_off: u32) -> Result<Self> {
        let mut reader = ByteReader::new(data);
        reader.seek(map_off as u64);
        let count = reader.read_u32_le()?;

        let mut entries = BTreeMap::new();
        for _ in 0..count {
            let type_code = reader.read_u16_le()?;
            let _unused = reader.read_u16_le()?;
            let item_count = reader.read_u32_le()?;
            let offset = reader.read_u32_le()?;

            if entries
                .insert(type_code, SectionMapEntry { count: item_count, offset })
                .is_some()
            {
                return Err(DexError::MalformedMap(format!(
                    "duplicate section map entry for type code {:#06x}",
                    type_code
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, type_code: SectionTypeCode) -> Option<SectionMapEntry> {
        self.entries.get(&type_code.0).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_map(entries: &[(u16, u32, u32)]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&(entries.len() as u32).to_le_bytes());
        for (type_code, count, offset) in entries {
            buf.extend_from_slice(&type_code.to_le_bytes());
            buf.extend_from_slice(&0u16.to_le_bytes());
            buf.extend_from_slice(&count.to_le_bytes());
            buf.extend_from_slice(&offset.to_le_bytes());
        }
        buf
    }

    #[test]
    fn parses_entries() {
        let data = build_map(&[(0x0001, 3, 0x70), (0x1000, 1, 0x200)]);
        let map = SectionMap::parse(&data, 0).unwrap();
        assert_eq!(map.len(), 2);
        let entry = map.get(SectionTypeCode::STRING_ID_ITEM).unwrap();
        assert_eq!(entry.count, 3);
        assert_eq!(entry.offset, 0x70);
    }

    #[test]
    fn rejects_duplicates() {
        let data = build_map(&[(0x0001, 3, 0x70), (0x0001, 1, 0x200)]);
        let err = SectionMap::parse(&data, 0).unwrap_err();
        assert!(matches!(err, DexError::MalformedMap(_)));
    }
}
