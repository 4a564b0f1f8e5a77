//! Indexed accessors over the six id pools (strings, types, prototypes,
//! fields, methods, class defs) plus the two newer DEX-038+ pools
//! (method handles, call sites). Each accessor range-checks the id against
//! the pool's declared count, seeks to `pool_offset + id * item_size`, and
//! reads the fixed-layout record.
//!
//! Entity values ([`Prototype`], [`Field`], [`Method`], [`Class`]) carry a
//! borrowed reference back to the [`super::DexFile`] they came from so they
//! can resolve cross-pool links (names, types, nested pools) lazily, on
//! demand, rather than eagerly materializing every string up front.

use crate::error::DexError;
use crate::mutf8::decode_mutf8;
use crate::type_desc::type_to_string;
use crate::Result;

use super::class_accessor::ClassAccessor;
use super::container::DexContainer;
use super::map::SectionTypeCode;
use super::{
    DexFile, CALL_SITE_ID_ITEM_SIZE, CLASS_DEF_ITEM_SIZE, FIELD_ITEM_SIZE, METHOD_HANDLE_ITEM_SIZE,
    METHOD_ITEM_SIZE, PROTO_ITEM_SIZE, STRING_ITEM_SIZE, TYPE_ITEM_SIZE,
};

/// Sentinel used by `superclass_type_id` and `source_file_string_id` where
/// the format permits "none" (e.g. `java.lang.Object` has no superclass).
pub const NO_INDEX: u32 = 0xFFFF_FFFF;

fn check_id(pool: &'static str, id: u32, count: u32) -> Result<()> {
    if id >= count {
        return Err(DexError::OutOfRange { pool, id, count });
    }
    Ok(())
}

impl<C: DexContainer> DexFile<C> {
    // ---- strings ---------------------------------------------------

    /// Resolves string id `id` by seeking to its data-offset entry, then
    /// decoding the ULEB128 character count followed by that many MUTF-8
    /// characters.
    pub fn get_string(&self, id: u32) -> Result<String> {
        check_id("strings", id, self.string_count())?;
        let mut r = self.reader_at(self.header().string_ids_off as u64 + STRING_ITEM_SIZE as u64 * id as u64);
        let data_off = r.read_u32_le()?;

        let data = self.data();
        let mut pos = data_off as usize;
        let char_count = crate::leb128::read_uleb128(data, &mut pos)?;
        decode_mutf8(data, &mut pos, char_count)
    }

    pub fn iter_strings(&self) -> impl Iterator<Item = Result<String>> + '_ {
        (0..self.string_count()).map(move |id| self.get_string(id))
    }

    // ---- types -------------------------------------------------------

    fn type_string_id(&self, id: u32) -> Result<u32> {
        check_id("types", id, self.type_count())?;
        let mut r = self.reader_at(self.header().type_ids_off as u64 + TYPE_ITEM_SIZE as u64 * id as u64);
        r.read_u32_le()
    }

    /// Resolves type id `id` to its human type name (e.g. `Ljava/lang/String;`
    /// becomes `java.lang.String`).
    pub fn get_type_name(&self, id: u32) -> Result<String> {
        let string_id = self.type_string_id(id)?;
        Ok(type_to_string(&self.get_string(string_id)?))
    }

    pub fn iter_type_names(&self) -> impl Iterator<Item = Result<String>> + '_ {
        (0..self.type_count()).map(move |id| self.get_type_name(id))
    }

    // ---- type lists (shared by prototypes and class interfaces) ------

    /// Reads a type-list at `offset`: a `u32` count followed by that many
    /// `u16` type ids. `offset == 0` is the format's "empty list" sentinel.
    pub(crate) fn read_type_list(&self, offset: u32) -> Result<Vec<u32>> {
        if offset == 0 {
            return Ok(Vec::new());
        }
        let mut r = self.reader_at(offset as u64);
        let count = r.read_u32_le()?;
        let mut ids = Vec::with_capacity(count as usize);
        for _ in 0..count {
            ids.push(r.read_u16_le()? as u32);
        }
        Ok(ids)
    }

    // ---- prototypes ----------------------------------------------------

    pub fn get_prototype(&self, id: u32) -> Result<Prototype<'_, C>> {
        check_id("prototypes", id, self.prototype_count())?;
        let mut r = self.reader_at(self.header().proto_ids_off as u64 + PROTO_ITEM_SIZE as u64 * id as u64);
        let shorty_string_id = r.read_u32_le()?;
        let return_type_id = r.read_u32_le()?;
        let parameters_off = r.read_u32_le()?;
        Ok(Prototype { dex: self, id, shorty_string_id, return_type_id, parameters_off })
    }

    pub fn iter_prototypes(&self) -> impl Iterator<Item = Result<Prototype<'_, C>>> + '_ {
        (0..self.prototype_count()).map(move |id| self.get_prototype(id))
    }

    // ---- fields ----------------------------------------------------

    pub fn get_field(&self, id: u32) -> Result<Field<'_, C>> {
        check_id("fields", id, self.field_count())?;
        let mut r = self.reader_at(self.header().field_ids_off as u64 + FIELD_ITEM_SIZE as u64 * id as u64);
        let defining_class_type_id = r.read_u16_le()? as u32;
        let type_id = r.read_u16_le()? as u32;
        let name_string_id = r.read_u32_le()?;
        Ok(Field { dex: self, id, defining_class_type_id, type_id, name_string_id })
    }

    pub fn iter_fields(&self) -> impl Iterator<Item = Result<Field<'_, C>>> + '_ {
        (0..self.field_count()).map(move |id| self.get_field(id))
    }

    // ---- methods ----------------------------------------------------

    /// Resolves method id `id`. `code_offset` is supplied by callers walking
    /// a class's class-data block (the method-id pool itself carries no code
    /// pointer); pass `None` to resolve the bare signature.
    pub fn get_method(&self, id: u32, code_offset: Option<u32>) -> Result<Method<'_, C>> {
        check_id("methods", id, self.method_count())?;
        let mut r = self.reader_at(self.header().method_ids_off as u64 + METHOD_ITEM_SIZE as u64 * id as u64);
        let defining_class_type_id = r.read_u16_le()? as u32;
        let prototype_id = r.read_u16_le()? as u32;
        let name_string_id = r.read_u32_le()?;
        let code = match code_offset {
            Some(0) | None => None,
            Some(off) => Some(self.read_code_block(off)?),
        };
        Ok(Method { dex: self, id, defining_class_type_id, prototype_id, name_string_id, code })
    }

    pub fn iter_methods(&self) -> impl Iterator<Item = Result<Method<'_, C>>> + '_ {
        (0..self.method_count()).map(move |id| self.get_method(id, None))
    }

    fn read_code_block(&self, code_offset: u32) -> Result<CodeBlock> {
        let mut r = self.reader_at(code_offset as u64);
        let registers_size = r.read_u16_le()?;
        let ins_size = r.read_u16_le()?;
        let outs_size = r.read_u16_le()?;
        let tries_size = r.read_u16_le()?;
        let debug_info_off = r.read_u32_le()?;
        let insns_size = r.read_u32_le()?;
        let insns_offset = r.position();
        Ok(CodeBlock {
            code_offset,
            registers_size,
            ins_size,
            outs_size,
            tries_size,
            debug_info_off,
            insns_size,
            insns_offset,
        })
    }

    // ---- class defs ----------------------------------------------------

    pub fn get_class(&self, id: u32) -> Result<Class<'_, C>> {
        check_id("class_defs", id, self.class_count())?;
        let mut r = self.reader_at(self.header().class_defs_off as u64 + CLASS_DEF_ITEM_SIZE as u64 * id as u64);
        let class_type_id = r.read_u32_le()?;
        let access_flags = r.read_u32_le()?;
        let superclass_type_id = r.read_u32_le()?;
        let interfaces_off = r.read_u32_le()?;
        let source_file_string_id = r.read_u32_le()?;
        let annotations_off = r.read_u32_le()?;
        let class_data_off = r.read_u32_le()?;
        let static_values_off = r.read_u32_le()?;
        Ok(Class {
            dex: self,
            id,
            class_type_id,
            access_flags,
            superclass_type_id,
            interfaces_off,
            source_file_string_id,
            annotations_off,
            class_data_off,
            static_values_off,
        })
    }

    pub fn iter_classes(&self) -> impl Iterator<Item = Result<Class<'_, C>>> + '_ {
        (0..self.class_count()).map(move |id| self.get_class(id))
    }

    // ---- method handles / call sites (ambient; newer DEX versions) ------

    pub fn method_handle_count(&self) -> u32 {
        self.map.get(SectionTypeCode::METHOD_HANDLE_ITEM).map(|e| e.count).unwrap_or(0)
    }

    pub fn get_method_handle(&self, id: u32) -> Result<MethodHandle> {
        let entry = self
            .map
            .get(SectionTypeCode::METHOD_HANDLE_ITEM)
            .ok_or(DexError::OutOfRange { pool: "method_handles", id, count: 0 })?;
        check_id("method_handles", id, entry.count)?;
        let mut r = self.reader_at(entry.offset as u64 + METHOD_HANDLE_ITEM_SIZE as u64 * id as u64);
        let handle_type = r.read_u16_le()?;
        let _unused1 = r.read_u16_le()?;
        let field_or_method_id = r.read_u16_le()?;
        let _unused2 = r.read_u16_le()?;
        Ok(MethodHandle { id, handle_type, field_or_method_id })
    }

    pub fn call_site_count(&self) -> u32 {
        self.map.get(SectionTypeCode::CALL_SITE_ID_ITEM).map(|e| e.count).unwrap_or(0)
    }

    pub fn get_call_site(&self, id: u32) -> Result<CallSite> {
        let entry = self
            .map
            .get(SectionTypeCode::CALL_SITE_ID_ITEM)
            .ok_or(DexError::OutOfRange { pool: "call_sites", id, count: 0 })?;
        check_id("call_sites", id, entry.count)?;
        let mut r = self.reader_at(entry.offset as u64 + CALL_SITE_ID_ITEM_SIZE as u64 * id as u64);
        let data_off = r.read_u32_le()?;
        Ok(CallSite { id, data_off })
    }
}

/// A resolved method-handle record: its kind and the field-or-method id it
/// refers to. The encoded-array payload it may additionally carry is not
/// decoded (encoded-value decoding is out of scope).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodHandle {
    pub id: u32,
    pub handle_type: u16,
    pub field_or_method_id: u16,
}

/// A call-site record: just the raw data offset to its encoded-array
/// payload, which this crate does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub id: u32,
    pub data_off: u32,
}

/// The fixed header of a method's code item, plus the absolute file offset
/// of its first instruction — the starting cursor for
/// [`super::DexFile::decode_opcode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeBlock {
    pub code_offset: u32,
    pub registers_size: u16,
    pub ins_size: u16,
    pub outs_size: u16,
    pub tries_size: u16,
    pub debug_info_off: u32,
    pub insns_size: u32,
    pub insns_offset: u64,
}

/// A prototype: shorty signature, return type, and parameter type list.
pub struct Prototype<'a, C: DexContainer> {
    dex: &'a DexFile<C>,
    pub id: u32,
    pub shorty_string_id: u32,
    pub return_type_id: u32,
    pub parameters_off: u32,
}

impl<'a, C: DexContainer> Prototype<'a, C> {
    pub fn shorty(&self) -> Result<String> {
        self.dex.get_string(self.shorty_string_id)
    }

    pub fn return_type_name(&self) -> Result<String> {
        self.dex.get_type_name(self.return_type_id)
    }

    pub fn parameter_type_ids(&self) -> Result<Vec<u32>> {
        self.dex.read_type_list(self.parameters_off)
    }

    pub fn parameter_type_names(&self) -> Result<Vec<String>> {
        self.parameter_type_ids()?.into_iter().map(|id| self.dex.get_type_name(id)).collect()
    }
}

/// A field id, resolved lazily: name, declared type, and defining class.
pub struct Field<'a, C: DexContainer> {
    dex: &'a DexFile<C>,
    pub id: u32,
    pub defining_class_type_id: u32,
    pub type_id: u32,
    pub name_string_id: u32,
}

impl<'a, C: DexContainer> Field<'a, C> {
    pub fn name(&self) -> Result<String> {
        self.dex.get_string(self.name_string_id)
    }

    pub fn type_name(&self) -> Result<String> {
        self.dex.get_type_name(self.type_id)
    }

    pub fn defining_class_name(&self) -> Result<String> {
        self.dex.get_type_name(self.defining_class_type_id)
    }
}

/// A method id, resolved lazily: name, prototype, defining class, and an
/// optional code block when the caller supplied a non-zero `code_offset`.
pub struct Method<'a, C: DexContainer> {
    dex: &'a DexFile<C>,
    pub id: u32,
    pub defining_class_type_id: u32,
    pub prototype_id: u32,
    pub name_string_id: u32,
    pub code: Option<CodeBlock>,
}

impl<'a, C: DexContainer> Method<'a, C> {
    /// The handle this method was resolved from, for callers (e.g.
    /// renderers) that need to drive [`super::DexFile::decode_opcode`] over
    /// this method's code block.
    pub fn dex(&self) -> &'a DexFile<C> {
        self.dex
    }

    pub fn name(&self) -> Result<String> {
        self.dex.get_string(self.name_string_id)
    }

    pub fn prototype(&self) -> Result<Prototype<'_, C>> {
        self.dex.get_prototype(self.prototype_id)
    }

    pub fn defining_class_name(&self) -> Result<String> {
        self.dex.get_type_name(self.defining_class_type_id)
    }

    pub fn has_code(&self) -> bool {
        self.code.is_some()
    }

    pub fn code(&self) -> Option<&CodeBlock> {
        self.code.as_ref()
    }
}

/// A class definition, resolved lazily: name, superclass, interfaces,
/// source file, and (via the class-data block) declared fields and methods.
pub struct Class<'a, C: DexContainer> {
    dex: &'a DexFile<C>,
    pub id: u32,
    pub class_type_id: u32,
    pub access_flags: u32,
    pub superclass_type_id: u32,
    pub interfaces_off: u32,
    pub source_file_string_id: u32,
    pub annotations_off: u32,
    pub class_data_off: u32,
    pub static_values_off: u32,
}

impl<'a, C: DexContainer> Class<'a, C> {
    pub fn dex(&self) -> &'a DexFile<C> {
        self.dex
    }

    pub fn name(&self) -> Result<String> {
        self.dex.get_type_name(self.class_type_id)
    }

    pub fn superclass_name(&self) -> Result<Option<String>> {
        if self.superclass_type_id == NO_INDEX {
            return Ok(None);
        }
        Ok(Some(self.dex.get_type_name(self.superclass_type_id)?))
    }

    pub fn source_file(&self) -> Result<Option<String>> {
        if self.source_file_string_id == NO_INDEX {
            return Ok(None);
        }
        Ok(Some(self.dex.get_string(self.source_file_string_id)?))
    }

    pub fn interface_type_ids(&self) -> Result<Vec<u32>> {
        self.dex.read_type_list(self.interfaces_off)
    }

    pub fn interface_names(&self) -> Result<Vec<String>> {
        self.interface_type_ids()?.into_iter().map(|id| self.dex.get_type_name(id)).collect()
    }

    fn class_accessor(&self) -> Result<Option<ClassAccessor<'_, C>>> {
        if self.class_data_off == 0 {
            return Ok(None);
        }
        Ok(Some(ClassAccessor::new(self.dex, self.class_data_off)?))
    }

    pub fn static_fields(&self) -> Result<Vec<Field<'_, C>>> {
        match self.class_accessor()? {
            Some(acc) => acc.static_fields().collect(),
            None => Ok(Vec::new()),
        }
    }

    pub fn instance_fields(&self) -> Result<Vec<Field<'_, C>>> {
        match self.class_accessor()? {
            Some(acc) => acc.instance_fields().collect(),
            None => Ok(Vec::new()),
        }
    }

    pub fn direct_methods(&self) -> Result<Vec<Method<'_, C>>> {
        match self.class_accessor()? {
            Some(acc) => acc.direct_methods().collect(),
            None => Ok(Vec::new()),
        }
    }

    pub fn virtual_methods(&self) -> Result<Vec<Method<'_, C>>> {
        match self.class_accessor()? {
            Some(acc) => acc.virtual_methods().collect(),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dex::header::HEADER_SIZE;
    use crate::dex::DexFile;

    /// Builds a minimal DEX image with a map-only section, one string
    /// ("Hello"), one type pointing at it, and zero of everything else.
    fn minimal_dex_with_one_string() -> Vec<u8> {
        let string_data_off = HEADER_SIZE as u32 + 4; // after the single string-id slot
        let type_ids_off = string_data_off + 1 + 5 + 1; // uleb(1) + "Hello" + NUL

        let mut data = vec![0u8; HEADER_SIZE];
        data[0..8].copy_from_slice(b"dex\n035\0");
        data[40..44].copy_from_slice(&0x1234_5678u32.to_le_bytes()); // endian_tag
        data[56..60].copy_from_slice(&1u32.to_le_bytes()); // string_ids_size
        data[60..64].copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes()); // string_ids_off
        data[64..68].copy_from_slice(&1u32.to_le_bytes()); // type_ids_size
        data[68..72].copy_from_slice(&type_ids_off.to_le_bytes()); // type_ids_off

        // string_ids[0] -> string_data_off
        data.extend_from_slice(&string_data_off.to_le_bytes());
        // string data: uleb128(5) + "Hello" + NUL
        data.push(5);
        data.extend_from_slice(b"Hello");
        data.push(0);
        // type_ids[0] -> string id 0
        data.extend_from_slice(&0u32.to_le_bytes());

        let map_off = data.len() as u32;
        data[52..56].copy_from_slice(&map_off.to_le_bytes()); // map_off
        data.extend_from_slice(&0u32.to_le_bytes()); // zero map entries

        data[32..36].copy_from_slice(&(data.len() as u32).to_le_bytes()); // file_size
        data[36..40].copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes()); // header_size
        data
    }

    #[test]
    fn resolves_one_string() {
        let data = minimal_dex_with_one_string();
        let dex = DexFile::open(data).unwrap();
        assert_eq!(dex.string_count(), 1);
        assert_eq!(dex.get_string(0).unwrap(), "Hello");
    }

    #[test]
    fn out_of_range_string_fails() {
        let data = minimal_dex_with_one_string();
        let dex = DexFile::open(data).unwrap();
        let err = dex.get_string(1).unwrap_err();
        assert!(matches!(err, DexError::OutOfRange { pool: "strings", id: 1, count: 1 }));
    }

    #[test]
    fn resolves_type_name_through_string_pool() {
        let data = minimal_dex_with_one_string();
        let dex = DexFile::open(data).unwrap();
        // "Hello" isn't a valid type descriptor but type_to_string still
        // runs the interpreter over whatever the string pool hands back.
        assert_eq!(dex.get_type_name(0).unwrap(), type_to_string("Hello"));
    }

    #[test]
    fn empty_type_list_from_zero_offset() {
        let data = minimal_dex_with_one_string();
        let dex = DexFile::open(data).unwrap();
        assert_eq!(dex.read_type_list(0).unwrap(), Vec::<u32>::new());
    }
}
