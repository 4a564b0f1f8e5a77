use std::fmt::Debug;

use thiserror::Error;

#[derive(Error)]
pub enum DexError {
    #[error("bad magic/version in dex header")]
    BadMagic,

    #[error("unsupported endian tag: {0:#010x}")]
    UnsupportedEndian(u32),

    #[error("truncated read at offset {offset}: needed {needed} bytes, {available} available")]
    Truncated { offset: u64, needed: usize, available: usize },

    #[error("index {id} into {pool} pool is out of range (count={count})")]
    OutOfRange { pool: &'static str, id: u32, count: u32 },

    #[error("leb128 sequence at offset {0} exceeds five payload bytes")]
    LebOverflow(u64),

    #[error("malformed mutf8 at offset {offset}: {reason}")]
    BadMutf8 { offset: u64, reason: &'static str },

    #[error("malformed section map: {0}")]
    MalformedMap(String),

    #[error("unknown opcode {opcode:#04x} at offset {offset}")]
    UnknownOpcode { opcode: u8, offset: u64 },

    #[error("instruction {opcode:#04x} at offset {offset} has a malformed operand encoding")]
    BadInstructionFormat { opcode: u8, offset: u64 },

    #[error("checksum mismatch: header says {expected:#010x}, computed {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("no renderer registered under the name '{0}'")]
    UnknownRenderer(String),

    #[error("i/o error opening dex image: {0}")]
    Io(#[from] std::io::Error),
}

/// Constructs a `DexError` variant with less boilerplate at call sites, mirroring
/// the common shapes used throughout the decoder.
#[macro_export]
macro_rules! dex_err {
    ($name:ident) => {
        Err($crate::error::DexError::$name)
    };
    ($name:ident, $($arg:tt)*) => {
        Err($crate::error::DexError::$name($($arg)*))
    };
    ($name:ident { $($arg:tt)* }) => {
        Err($crate::error::DexError::$name { $($arg)* })
    };
}

impl Debug for DexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
