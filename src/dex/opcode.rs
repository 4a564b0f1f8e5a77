//! The instruction decoder: turns the Dalvik code-unit stream at a cursor
//! into one [`Opcode`], tagged by format with typed, named operands rather
//! than the teacher's generic `vreg::A/B/C/H` accessors over a raw buffer.
//!
//! Pool-index operands are tagged by kind ([`PoolIndex`]) but never
//! resolved here — resolution against the id pools is `pool`'s job, kept
//! separate so decoding never needs a live [`super::DexFile`].

use crate::error::DexError;
use crate::reader::ByteReader;
use crate::Result;

use super::instruction::{descriptor_for, signatures, Code, Format, IndexType};

/// A pool reference an operand carries, tagged by which pool it indexes
/// into. Never dereferenced by the decoder itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PoolIndex {
    String(u32),
    Type(u32),
    Field(u32),
    Method(u32),
    Prototype(u32),
    CallSite(u32),
    MethodHandle(u32),
    None,
}

impl PoolIndex {
    fn tag(index_type: IndexType, raw: u32) -> Self {
        match index_type {
            IndexType::StringRef => PoolIndex::String(raw),
            IndexType::TypeRef => PoolIndex::Type(raw),
            IndexType::FieldRef => PoolIndex::Field(raw),
            IndexType::MethodRef => PoolIndex::Method(raw),
            IndexType::ProtoRef => PoolIndex::Prototype(raw),
            IndexType::CallSiteRef => PoolIndex::CallSite(raw),
            IndexType::MethodHandleRef => PoolIndex::MethodHandle(raw),
            _ => PoolIndex::None,
        }
    }
}

/// The registers and immediate/index operands of one instruction, shaped by
/// its format. Branch/switch targets are already resolved to absolute code
/// offsets; wide literals and `21h` immediates are already shifted into
/// place.
#[derive(Clone, Debug, PartialEq)]
pub enum OperandBundle {
    /// k10x: no operands.
    NoArgs,
    /// k12x, k11n with a 4-bit immediate folded in for const/4 (`value` is
    /// `None` for plain two-register moves).
    TwoRegs { a: u8, b: u8, value: Option<i32> },
    /// k11x: a single register.
    OneReg { a: u8 },
    /// k10t, k20t, k30t: an unconditional/return-free branch target,
    /// expressed as an absolute code-unit offset from the start of the code
    /// item.
    Goto { target: i64 },
    /// k22x, k32x: move between two registers, second one wide-indexed.
    RegPair { a: u32, b: u32 },
    /// k21t: conditional-on-register-vs-zero branch.
    IfZ { a: u8, target: i64 },
    /// k21s, k21h, k31i: a register and a (possibly already-shifted)
    /// signed immediate.
    RegImm { a: u8, value: i64 },
    /// k21c, k31c: a register and a tagged pool index.
    RegIndex { a: u8, index: PoolIndex },
    /// k23x: three registers.
    ThreeRegs { a: u8, b: u8, c: u8 },
    /// k22b: two registers and an 8-bit signed immediate.
    TwoRegsImm8 { a: u8, b: u8, value: i8 },
    /// k22t: two registers and a branch target.
    IfRegs { a: u8, b: u8, target: i64 },
    /// k22s: two registers and a 16-bit signed immediate.
    TwoRegsImm16 { a: u8, b: u8, value: i16 },
    /// k22c: two registers and a tagged pool index.
    TwoRegsIndex { a: u8, b: u8, index: PoolIndex },
    /// k31t: a register and an absolute code-unit offset to a payload
    /// pseudo-instruction (packed-switch, sparse-switch, fill-array-data).
    PayloadRef { a: u8, payload_offset: i64 },
    /// k35c: inline-register invoke/filled-new-array form. `args` holds up
    /// to 5 register numbers in `vC, vD, vE, vF, vG` order.
    InvokeInline { args: Vec<u8>, index: PoolIndex },
    /// k3rc: range-register invoke/filled-new-array form.
    InvokeRange { first_reg: u16, count: u8, index: PoolIndex },
    /// k45cc: invoke-polymorphic, inline-register form.
    InvokePolymorphicInline { args: Vec<u8>, method: PoolIndex, proto: PoolIndex },
    /// k4rcc: invoke-polymorphic, range-register form.
    InvokePolymorphicRange { first_reg: u16, count: u8, method: PoolIndex, proto: PoolIndex },
    /// k51l: a register and a 64-bit wide literal.
    WideLiteral { a: u8, value: i64 },
    /// A packed-switch payload table. `targets` are absolute code-unit
    /// offsets computed against this payload's own offset, since that's the
    /// only address this decode call has — not against the `packed-switch`
    /// instruction that referenced it (real Dalvik measures them from
    /// there). A caller holding both offsets can re-base by subtracting the
    /// payload's offset back out and adding the switch instruction's own.
    PackedSwitchPayload { first_key: i32, targets: Vec<i32> },
    /// A sparse-switch payload table; `targets` has the same payload-offset
    /// base as `PackedSwitchPayload`.
    SparseSwitchPayload { keys: Vec<i32>, targets: Vec<i32> },
    /// A fill-array-data payload table.
    ArrayDataPayload { element_width: u16, data: Vec<u8> },
}

/// One decoded instruction: its mnemonic and raw opcode byte, the number of
/// 16-bit code units it occupies, its offset in the code-unit stream, and
/// its typed operands.
#[derive(Clone, Debug, PartialEq)]
pub struct Opcode {
    pub mnemonic: &'static str,
    pub opcode: u8,
    pub length: u32,
    pub offset: u64,
    pub operands: OperandBundle,
}

fn split_nibbles(byte: u8) -> (u8, u8) {
    (byte >> 4, byte & 0x0f)
}

/// Decodes one instruction at the absolute code-unit-stream offset
/// `*cursor`, advancing `cursor` past it on success. `data` is the whole
/// image buffer; `*cursor` is a byte offset into it (DEX code items are
/// always 2-byte aligned, so this stays a multiple of 2 for well-formed
/// input).
pub fn decode_instruction(data: &[u8], cursor: &mut u64) -> Result<Opcode> {
    let start = *cursor;
    let mut r = ByteReader::new(data);
    r.seek(start);

    let first_unit = r.read_u16_le()?;
    let opcode_byte = (first_unit & 0xff) as u8;
    let high_byte = (first_unit >> 8) as u8;

    if opcode_byte == Code::NOP as u8 && high_byte == 0 {
        if let Some(bundle) = try_decode_payload(data, start, &mut r)? {
            let length = (r.position() - start) / 2;
            *cursor = r.position();
            return Ok(Opcode {
                mnemonic: "nop",
                opcode: opcode_byte,
                length: length as u32,
                offset: start,
                operands: bundle,
            });
        }
    }

    let desc = descriptor_for(opcode_byte);
    if desc.index_type == IndexType::Unknown && desc.verify_flags == super::instruction::verify_flags::VerifyError {
        return Err(DexError::UnknownOpcode { opcode: opcode_byte, offset: start });
    }

    let operands = decode_operands(desc.format, desc.index_type, desc.opcode, high_byte, &mut r, start)
        .map_err(|_| DexError::BadInstructionFormat { opcode: opcode_byte, offset: start })?;

    let length = (r.position() - start) / 2;
    *cursor = r.position();
    Ok(Opcode {
        mnemonic: desc.name,
        opcode: opcode_byte,
        length: length as u32,
        offset: start,
        operands,
    })
}

fn decode_operands(
    format: Format,
    index_type: IndexType,
    opcode: Code,
    high_byte: u8,
    r: &mut ByteReader<'_>,
    start: u64,
) -> Result<OperandBundle> {
    Ok(match format {
        Format::k10x => OperandBundle::NoArgs,
        Format::k12x => {
            let (b, a) = split_nibbles(high_byte);
            OperandBundle::TwoRegs { a, b, value: None }
        }
        Format::k11n => {
            let (imm, a) = split_nibbles(high_byte);
            let value = sign_extend(imm as i64, 4) as i32;
            OperandBundle::TwoRegs { a, b: 0, value: Some(value) }
        }
        Format::k11x => OperandBundle::OneReg { a: high_byte },
        Format::k10t => {
            let delta = high_byte as i8 as i64;
            OperandBundle::Goto { target: start as i64 + delta * 2 }
        }
        Format::k20t => {
            let delta = r.read_u16_le()? as i16 as i64;
            OperandBundle::Goto { target: start as i64 + delta * 2 }
        }
        Format::k22x => {
            let b = r.read_u16_le()? as u32;
            OperandBundle::RegPair { a: high_byte as u32, b }
        }
        Format::k21t => {
            let delta = r.read_u16_le()? as i16 as i64;
            OperandBundle::IfZ { a: high_byte, target: start as i64 + delta * 2 }
        }
        Format::k21s => {
            let value = r.read_u16_le()? as i16 as i64;
            OperandBundle::RegImm { a: high_byte, value }
        }
        Format::k21h => {
            let raw = r.read_u16_le()? as i16 as i64;
            let shift = if opcode == Code::CONST_WIDE_HIGH16 { 48 } else { 16 };
            let value = raw << shift;
            OperandBundle::RegImm { a: high_byte, value }
        }
        Format::k21c => {
            let idx = r.read_u16_le()? as u32;
            OperandBundle::RegIndex { a: high_byte, index: PoolIndex::tag(index_type, idx) }
        }
        Format::k23x => {
            let next = r.read_u16_le()?;
            let (c, b) = ((next >> 8) as u8, (next & 0xff) as u8);
            OperandBundle::ThreeRegs { a: high_byte, b, c }
        }
        Format::k22b => {
            let next = r.read_u16_le()?;
            let (imm, b) = ((next >> 8) as u8 as i8, (next & 0xff) as u8);
            OperandBundle::TwoRegsImm8 { a: high_byte, b, value: imm }
        }
        Format::k22t => {
            let (b, a) = split_nibbles(high_byte);
            let delta = r.read_u16_le()? as i16 as i64;
            OperandBundle::IfRegs { a, b, target: start as i64 + delta * 2 }
        }
        Format::k22s => {
            let (b, a) = split_nibbles(high_byte);
            let value = r.read_u16_le()? as i16;
            OperandBundle::TwoRegsImm16 { a, b, value }
        }
        Format::k22c => {
            let (b, a) = split_nibbles(high_byte);
            let idx = r.read_u16_le()? as u32;
            OperandBundle::TwoRegsIndex { a, b, index: PoolIndex::tag(index_type, idx) }
        }
        Format::k32x => {
            let a = r.read_u16_le()? as u32;
            let b = r.read_u16_le()? as u32;
            OperandBundle::RegPair { a, b }
        }
        Format::k30t => {
            let delta = read_u32_as_i64(r)?;
            OperandBundle::Goto { target: start as i64 + delta * 2 }
        }
        Format::k31t => {
            let delta = read_u32_as_i64(r)?;
            OperandBundle::PayloadRef { a: high_byte, payload_offset: start as i64 + delta * 2 }
        }
        Format::k31i => {
            let value = read_u32_as_i64(r)?;
            OperandBundle::RegImm { a: high_byte, value }
        }
        Format::k31c => {
            let idx = r.read_u32_le()?;
            OperandBundle::RegIndex { a: high_byte, index: PoolIndex::tag(index_type, idx) }
        }
        Format::k35c => {
            let (count, g) = split_nibbles(high_byte);
            let idx = r.read_u16_le()? as u32;
            let fedc = r.read_u16_le()?;
            let (f, e, d, c) = (
                ((fedc >> 12) & 0xf) as u8,
                ((fedc >> 8) & 0xf) as u8,
                ((fedc >> 4) & 0xf) as u8,
                (fedc & 0xf) as u8,
            );
            let all = [c, d, e, f, g];
            let args = all[..count as usize].to_vec();
            OperandBundle::InvokeInline { args, index: PoolIndex::tag(index_type, idx) }
        }
        Format::k3rc => {
            let count = high_byte;
            let idx = r.read_u16_le()? as u32;
            let first_reg = r.read_u16_le()?;
            OperandBundle::InvokeRange { first_reg, count, index: PoolIndex::tag(index_type, idx) }
        }
        Format::k45cc => {
            let (count, g) = split_nibbles(high_byte);
            let method_idx = r.read_u16_le()? as u32;
            let fedc = r.read_u16_le()?;
            let (f, e, d, c) = (
                ((fedc >> 12) & 0xf) as u8,
                ((fedc >> 8) & 0xf) as u8,
                ((fedc >> 4) & 0xf) as u8,
                (fedc & 0xf) as u8,
            );
            let proto_idx = r.read_u16_le()? as u32;
            let all = [c, d, e, f, g];
            let args = all[..count as usize].to_vec();
            OperandBundle::InvokePolymorphicInline {
                args,
                method: PoolIndex::tag(IndexType::MethodRef, method_idx),
                proto: PoolIndex::tag(IndexType::ProtoRef, proto_idx),
            }
        }
        Format::k4rcc => {
            let count = high_byte;
            let method_idx = r.read_u16_le()? as u32;
            let first_reg = r.read_u16_le()?;
            let proto_idx = r.read_u16_le()? as u32;
            OperandBundle::InvokePolymorphicRange {
                first_reg,
                count,
                method: PoolIndex::tag(IndexType::MethodRef, method_idx),
                proto: PoolIndex::tag(IndexType::ProtoRef, proto_idx),
            }
        }
        Format::k51l => {
            let lo = r.read_u16_le()? as u64;
            let mid_lo = r.read_u16_le()? as u64;
            let mid_hi = r.read_u16_le()? as u64;
            let hi = r.read_u16_le()? as u64;
            let value = (lo | (mid_lo << 16) | (mid_hi << 32) | (hi << 48)) as i64;
            OperandBundle::WideLiteral { a: high_byte, value }
        }
        Format::kInvalidFormat => return Err(DexError::BadInstructionFormat { opcode: 0, offset: start }),
    })
}

fn read_u32_as_i64(r: &mut ByteReader<'_>) -> Result<i64> {
    let lo = r.read_u16_le()? as u32;
    let hi = r.read_u16_le()? as u32;
    Ok(((hi << 16) | lo) as i32 as i64)
}

fn sign_extend(value: i64, bits: u32) -> i64 {
    let shift = 64 - bits;
    (value << shift) >> shift
}

/// Recognizes and decodes the three inline payload pseudo-instructions that
/// live behind a `nop` (0x0000) code unit: packed-switch, sparse-switch, and
/// fill-array-data tables. Returns `None` if this `nop` is a plain no-op.
fn try_decode_payload(_data: &[u8], start: u64, r: &mut ByteReader<'_>) -> Result<Option<OperandBundle>> {
    let mark = r.position();
    let signature = match r.read_u16_le() {
        Ok(s) => s,
        Err(_) => {
            r.seek(mark);
            return Ok(None);
        }
    };

    match signature {
        s if s == signatures::PackedSwitchSignature => {
            let size = r.read_u16_le()? as usize;
            let first_key = r.read_u32_le()? as i32;
            let mut targets = Vec::with_capacity(size);
            for _ in 0..size {
                let delta = r.read_u32_le()? as i32;
                targets.push(start as i32 + delta * 2);
            }
            Ok(Some(OperandBundle::PackedSwitchPayload { first_key, targets }))
        }
        s if s == signatures::SparseSwitchSignature => {
            let size = r.read_u16_le()? as usize;
            let mut keys = Vec::with_capacity(size);
            for _ in 0..size {
                keys.push(r.read_u32_le()? as i32);
            }
            let mut targets = Vec::with_capacity(size);
            for _ in 0..size {
                let delta = r.read_u32_le()? as i32;
                targets.push(start as i32 + delta * 2);
            }
            Ok(Some(OperandBundle::SparseSwitchPayload { keys, targets }))
        }
        s if s == signatures::ArrayDataSignature => {
            let element_width = r.read_u16_le()?;
            let size = r.read_u32_le()? as usize;
            let total_bytes = size * element_width as usize;
            let data = r.read_bytes(total_bytes)?.to_vec();
            // Payload tables are padded to an even number of code units.
            if total_bytes % 2 != 0 {
                let _ = r.read_u8();
            }
            Ok(Some(OperandBundle::ArrayDataPayload { element_width, data }))
        }
        _ => {
            r.seek(mark);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_units(units: &[u16]) -> Vec<u8> {
        let mut buf = Vec::with_capacity(units.len() * 2);
        for u in units {
            buf.extend_from_slice(&u.to_le_bytes());
        }
        buf
    }

    #[test]
    fn decodes_return_void() {
        let data = code_units(&[0x0000]);
        let mut cursor = 0u64;
        let op = decode_instruction(&data, &mut cursor).unwrap();
        assert_eq!(op.mnemonic, "return-void");
        assert_eq!(op.length, 1);
        assert_eq!(cursor, 2);
    }

    #[test]
    fn decodes_const4() {
        // const/4 v1, #7  -> opcode 0x12, high byte = (imm<<4)|a = 0x71
        let data = code_units(&[0x7112]);
        let mut cursor = 0u64;
        let op = decode_instruction(&data, &mut cursor).unwrap();
        assert_eq!(op.mnemonic, "const/4");
        match op.operands {
            OperandBundle::TwoRegs { a, value: Some(v), .. } => {
                assert_eq!(a, 1);
                assert_eq!(v, 7);
            }
            other => panic!("unexpected operands: {other:?}"),
        }
    }

    #[test]
    fn decodes_goto_branch_target() {
        // goto +2 (one instruction ahead), opcode 0x28, high byte = 0x02
        let data = code_units(&[0x0228, 0x0000, 0x0000]);
        let mut cursor = 0u64;
        let op = decode_instruction(&data, &mut cursor).unwrap();
        match op.operands {
            OperandBundle::Goto { target } => assert_eq!(target, 4),
            other => panic!("unexpected operands: {other:?}"),
        }
    }

    #[test]
    fn decodes_invoke_static_inline_args() {
        // invoke-static {v1, v2}, meth@0x0005 -> opcode 0x71 (low byte), A=2 (count), G=1
        // high byte = (count<<4)|G = 0x21; method idx = 0x0005; regs FEDC = c=1, d=2
        let data = code_units(&[0x2171, 0x0005, 0x0021]);
        let mut cursor = 0u64;
        let op = decode_instruction(&data, &mut cursor).unwrap();
        assert_eq!(op.mnemonic, "invoke-static");
        match op.operands {
            OperandBundle::InvokeInline { args, index } => {
                assert_eq!(args, vec![1, 2]);
                assert_eq!(index, PoolIndex::Method(5));
            }
            other => panic!("unexpected operands: {other:?}"),
        }
    }

    #[test]
    fn decodes_packed_switch_payload() {
        let data = code_units(&[0x0000, signatures::PackedSwitchSignature, 0x0002, 0x0000, 0x0000, 0x0004, 0x0000, 0x0008, 0x0000]);
        let mut cursor = 0u64;
        let op = decode_instruction(&data, &mut cursor).unwrap();
        match op.operands {
            // targets are absolute offsets against this payload's own start
            // (offset 0 here), i.e. delta * 2, not against a switch
            // instruction — see the doc comment on `PackedSwitchPayload`.
            OperandBundle::PackedSwitchPayload { first_key, targets } => {
                assert_eq!(first_key, 0);
                assert_eq!(targets, vec![8, 16]);
            }
            other => panic!("unexpected operands: {other:?}"),
        }
    }

    #[test]
    fn unknown_opcode_slot_errors() {
        let data = code_units(&[0x003e]);
        let mut cursor = 0u64;
        let err = decode_instruction(&data, &mut cursor).unwrap_err();
        assert!(matches!(err, DexError::UnknownOpcode { opcode: 0x3e, .. }));
    }
}
