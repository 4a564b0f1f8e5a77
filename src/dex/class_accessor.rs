//! The class-data ULEB128 walk backing [`super::pool::Class::static_fields`]
//! and friends: four section counts followed by that many delta-encoded
//! entries per section. A field entry is (id-delta, access-flags); a method
//! entry additionally carries a code-item offset. Ids within a section are
//! the running sum of deltas, not absolute — this mirrors how the format
//! keeps the encoding small for classes with many members.

use crate::reader::ByteReader;
use crate::Result;

use super::container::DexContainer;
use super::pool::{Field, Method};
use super::DexFile;

pub struct ClassAccessor<'a, C: DexContainer> {
    dex: &'a DexFile<C>,
    num_static_fields: u32,
    num_instance_fields: u32,
    num_direct_methods: u32,
    num_virtual_methods: u32,
    fields_start: u64,
}

impl<'a, C: DexContainer> ClassAccessor<'a, C> {
    pub fn new(dex: &'a DexFile<C>, class_data_off: u32) -> Result<Self> {
        let mut r = dex.reader_at(class_data_off as u64);
        let num_static_fields = r.read_uleb128()?;
        let num_instance_fields = r.read_uleb128()?;
        let num_direct_methods = r.read_uleb128()?;
        let num_virtual_methods = r.read_uleb128()?;
        Ok(Self {
            dex,
            num_static_fields,
            num_instance_fields,
            num_direct_methods,
            num_virtual_methods,
            fields_start: r.position(),
        })
    }

    pub fn static_fields(&self) -> FieldWalk<'a, C> {
        FieldWalk::new(self.dex, self.fields_start, self.num_static_fields)
    }

    pub fn instance_fields(&self) -> FieldWalk<'a, C> {
        // The instance-field section starts right after the static-field
        // section; walking static fields first to find that boundary is
        // unavoidable since entries are delta-encoded and variable-length.
        let mut skip = FieldWalk::new(self.dex, self.fields_start, self.num_static_fields);
        let cursor = skip.drain_and_get_cursor();
        FieldWalk::new(self.dex, cursor, self.num_instance_fields)
    }

    pub fn direct_methods(&self) -> MethodWalk<'a, C> {
        let mut skip_static = FieldWalk::new(self.dex, self.fields_start, self.num_static_fields);
        let after_static = skip_static.drain_and_get_cursor();
        let mut skip_instance = FieldWalk::new(self.dex, after_static, self.num_instance_fields);
        let methods_start = skip_instance.drain_and_get_cursor();
        MethodWalk::new(self.dex, methods_start, self.num_direct_methods)
    }

    pub fn virtual_methods(&self) -> MethodWalk<'a, C> {
        let mut skip_static = FieldWalk::new(self.dex, self.fields_start, self.num_static_fields);
        let after_static = skip_static.drain_and_get_cursor();
        let mut skip_instance = FieldWalk::new(self.dex, after_static, self.num_instance_fields);
        let after_instance = skip_instance.drain_and_get_cursor();
        let mut skip_direct = MethodWalk::new(self.dex, after_instance, self.num_direct_methods);
        let virtual_start = skip_direct.drain_and_get_cursor();
        MethodWalk::new(self.dex, virtual_start, self.num_virtual_methods)
    }
}

/// Restartable, id-accumulating walk over one field section.
pub struct FieldWalk<'a, C: DexContainer> {
    dex: &'a DexFile<C>,
    pos: u64,
    remaining: u32,
    running_id: u32,
}

impl<'a, C: DexContainer> FieldWalk<'a, C> {
    fn new(dex: &'a DexFile<C>, pos: u64, remaining: u32) -> Self {
        Self { dex, pos, remaining, running_id: 0 }
    }

    /// Consumes the rest of this walk purely to advance past it, returning
    /// the cursor position immediately after the last entry.
    fn drain_and_get_cursor(&mut self) -> u64 {
        while self.next().is_some() {}
        self.pos
    }
}

impl<'a, C: DexContainer> Iterator for FieldWalk<'a, C> {
    type Item = Result<Field<'a, C>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let mut r = ByteReader::new(self.dex.data());
        r.seek(self.pos);
        let delta = match r.read_uleb128() {
            Ok(v) => v,
            Err(e) => return Some(Err(e)),
        };
        let _access_flags = match r.read_uleb128() {
            Ok(v) => v,
            Err(e) => return Some(Err(e)),
        };
        self.pos = r.position();
        self.running_id = self.running_id.wrapping_add(delta);
        Some(self.dex.get_field(self.running_id))
    }
}

/// Restartable, id-accumulating walk over one method section.
pub struct MethodWalk<'a, C: DexContainer> {
    dex: &'a DexFile<C>,
    pos: u64,
    remaining: u32,
    running_id: u32,
}

impl<'a, C: DexContainer> MethodWalk<'a, C> {
    fn new(dex: &'a DexFile<C>, pos: u64, remaining: u32) -> Self {
        Self { dex, pos, remaining, running_id: 0 }
    }

    fn drain_and_get_cursor(&mut self) -> u64 {
        while self.next().is_some() {}
        self.pos
    }
}

impl<'a, C: DexContainer> Iterator for MethodWalk<'a, C> {
    type Item = Result<Method<'a, C>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let mut r = ByteReader::new(self.dex.data());
        r.seek(self.pos);
        let delta = match r.read_uleb128() {
            Ok(v) => v,
            Err(e) => return Some(Err(e)),
        };
        let _access_flags = match r.read_uleb128() {
            Ok(v) => v,
            Err(e) => return Some(Err(e)),
        };
        let code_offset = match r.read_uleb128() {
            Ok(v) => v,
            Err(e) => return Some(Err(e)),
        };
        self.pos = r.position();
        self.running_id = self.running_id.wrapping_add(delta);
        let code_offset = if code_offset == 0 { None } else { Some(code_offset) };
        Some(self.dex.get_method(self.running_id, code_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dex::header::HEADER_SIZE;
    use crate::dex::DexFile;

    /// A DEX with one static field (id 0, access 0x9 = PUBLIC|STATIC), zero
    /// instance fields, one direct method (id 0, no code), zero virtual
    /// methods, and just enough of the field/method pools to resolve.
    fn dex_with_class_data() -> (Vec<u8>, u32) {
        let mut data = vec![0u8; HEADER_SIZE];
        data[0..8].copy_from_slice(b"dex\n035\0");
        data[40..44].copy_from_slice(&0x1234_5678u32.to_le_bytes());

        // one string ("x"), shared by field/method names and the bogus type.
        let string_ids_off = data.len() as u32;
        data.extend_from_slice(&0u32.to_le_bytes()); // placeholder, patched below
        let string_data_off = data.len() as u32;
        data.push(1);
        data.extend_from_slice(b"x");
        data.push(0);
        data[string_ids_off as usize..string_ids_off as usize + 4]
            .copy_from_slice(&string_data_off.to_le_bytes());

        // one type, pointing at string 0.
        let type_ids_off = data.len() as u32;
        data.extend_from_slice(&0u32.to_le_bytes());

        // one field id: class=type0, type=type0, name=string0.
        let field_ids_off = data.len() as u32;
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());

        // one method id: class=type0, proto=0 (unused, never resolved here since
        // direct_methods() resolves via get_method which doesn't touch proto
        // unless .prototype() is called), name=string0.
        let method_ids_off = data.len() as u32;
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());

        // class-data: 1 static field, 0 instance, 1 direct method, 0 virtual.
        let class_data_off = data.len() as u32;
        data.push(1); // num_static_fields
        data.push(0); // num_instance_fields
        data.push(1); // num_direct_methods
        data.push(0); // num_virtual_methods
        data.push(0); // static field[0]: id delta = 0
        data.push(0x09); // access flags = PUBLIC | STATIC
        data.push(0); // direct method[0]: id delta = 0
        data.push(0x09); // access flags
        data.push(0); // code_offset = 0 (no code)

        let map_off = data.len() as u32;
        data.extend_from_slice(&0u32.to_le_bytes());

        data[32..36].copy_from_slice(&(data.len() as u32).to_le_bytes()); // file_size
        data[36..40].copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes()); // header_size
        data[52..56].copy_from_slice(&map_off.to_le_bytes());
        data[56..60].copy_from_slice(&1u32.to_le_bytes()); // string_ids_size
        data[60..64].copy_from_slice(&string_ids_off.to_le_bytes());
        data[64..68].copy_from_slice(&1u32.to_le_bytes()); // type_ids_size
        data[68..72].copy_from_slice(&type_ids_off.to_le_bytes());
        data[80..84].copy_from_slice(&1u32.to_le_bytes()); // field_ids_size
        data[84..88].copy_from_slice(&field_ids_off.to_le_bytes());
        data[88..92].copy_from_slice(&1u32.to_le_bytes()); // method_ids_size
        data[92..96].copy_from_slice(&method_ids_off.to_le_bytes());

        (data, class_data_off)
    }

    #[test]
    fn walks_static_fields_and_direct_methods() {
        let (data, class_data_off) = dex_with_class_data();
        let dex = DexFile::open(data).unwrap();
        let acc = ClassAccessor::new(&dex, class_data_off).unwrap();

        let statics: Vec<_> = acc.static_fields().collect::<Result<_>>().unwrap();
        assert_eq!(statics.len(), 1);
        assert_eq!(statics[0].id, 0);

        let instances: Vec<_> = acc.instance_fields().collect::<Result<_>>().unwrap();
        assert!(instances.is_empty());

        let directs: Vec<_> = acc.direct_methods().collect::<Result<_>>().unwrap();
        assert_eq!(directs.len(), 1);
        assert!(!directs[0].has_code());

        let virtuals: Vec<_> = acc.virtual_methods().collect::<Result<_>>().unwrap();
        assert!(virtuals.is_empty());
    }
}
