//! The DEX image handle: owns the byte source, the decoded header and
//! section map, and exposes every pool accessor plus the instruction
//! decoder. This is the crate's single entry point — see [`DexFile::open`].

pub mod class_accessor;
pub mod container;
pub mod header;
pub mod instruction;
pub mod map;
pub mod modifiers;
pub mod opcode;
pub mod pool;
pub mod verifier;

use plain::Plain;

use crate::error::DexError;
use crate::reader::ByteReader;
use crate::Result;

pub use container::{map_file, DexContainer};
pub use header::Header;
pub use map::{SectionMap, SectionTypeCode};
pub use pool::{Class, Field, Method, Prototype};

pub(crate) const STRING_ITEM_SIZE: usize = 4;
pub(crate) const TYPE_ITEM_SIZE: usize = 4;
pub(crate) const PROTO_ITEM_SIZE: usize = 12;
pub(crate) const FIELD_ITEM_SIZE: usize = 8;
pub(crate) const METHOD_ITEM_SIZE: usize = 8;
pub(crate) const CLASS_DEF_ITEM_SIZE: usize = 32;
pub(crate) const METHOD_HANDLE_ITEM_SIZE: usize = 8;
pub(crate) const CALL_SITE_ID_ITEM_SIZE: usize = 4;

pub struct DexFile<C: DexContainer> {
    pub(crate) container: C,
    pub(crate) header: Header,
    pub(crate) map: SectionMap,
}

impl<C: DexContainer> DexFile<C> {
    /// Parses the header, validates it, and decodes the section map. Fails
    /// fast on any header problem; a successfully opened handle is
    /// guaranteed to have a readable header and map, but not that every pool
    /// entry is well-formed (those failures surface lazily from the
    /// accessor that touches them).
    pub fn open(container: C) -> Result<Self> {
        let data = container.data();
        log::debug!("opening dex image of {} bytes", data.len());

        if data.len() < header::HEADER_SIZE {
            return Err(DexError::Truncated {
                offset: 0,
                needed: header::HEADER_SIZE,
                available: data.len(),
            });
        }

        let header: Header = Header::from_bytes(&data[..header::HEADER_SIZE])
            .map_err(|_| DexError::BadMagic)?
            .clone();

        if !header.has_valid_magic() {
            return Err(DexError::BadMagic);
        }
        if header.endian_tag != header::LITTLE_ENDIAN_TAG {
            return Err(DexError::UnsupportedEndian(header.endian_tag));
        }

        let file_size = data.len() as u32;
        for (name, offset) in [
            ("string_ids", header.string_ids_off),
            ("type_ids", header.type_ids_off),
            ("proto_ids", header.proto_ids_off),
            ("field_ids", header.field_ids_off),
            ("method_ids", header.method_ids_off),
            ("class_defs", header.class_defs_off),
            ("map", header.map_off),
        ] {
            if offset > file_size {
                return Err(DexError::MalformedMap(format!(
                    "{name} offset {offset} exceeds file size {file_size}"
                )));
            }
        }

        let map = SectionMap::parse(data, header.map_off)?;
        log::trace!("section map has {} entries", map.len());

        Ok(Self { container, header, map })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    fn data(&self) -> &[u8] {
        self.container.data()
    }

    pub(crate) fn reader_at(&self, offset: u64) -> ByteReader<'_> {
        let mut r = ByteReader::new(self.data());
        r.seek(offset);
        r
    }

    pub fn string_count(&self) -> u32 {
        self.header.string_ids_size
    }

    pub fn type_count(&self) -> u32 {
        self.header.type_ids_size
    }

    pub fn prototype_count(&self) -> u32 {
        self.header.proto_ids_size
    }

    pub fn field_count(&self) -> u32 {
        self.header.field_ids_size
    }

    pub fn method_count(&self) -> u32 {
        self.header.method_ids_size
    }

    pub fn class_count(&self) -> u32 {
        self.header.class_defs_size
    }

    /// Decodes one instruction at the absolute file offset `*cursor`,
    /// advancing `cursor` past it on success. On failure the cursor's
    /// position is unspecified; the caller must treat decoding as
    /// terminated.
    pub fn decode_opcode(&self, cursor: &mut u64) -> Result<opcode::Opcode> {
        opcode::decode_instruction(self.data(), cursor)
    }

    /// Consumes the handle. Entities borrowed from it cannot outlive this
    /// call; the byte source (and any mapping) is dropped here.
    pub fn close(self) {
        log::debug!("closing dex image");
    }
}
