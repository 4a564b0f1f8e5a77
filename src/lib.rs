use std::result;

pub mod dex;
pub mod error;
pub mod leb128;
pub mod mutf8;
pub mod reader;
pub mod render;
pub mod type_desc;

pub type Result<T> = result::Result<T, error::DexError>;
