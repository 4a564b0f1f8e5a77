//! The renderer contract external pretty-printers satisfy, plus a writer
//! registry that maps a renderer name to an instance, and one trivial
//! in-tree renderer (`plain`) that proves the contract is usable end to end.
//!
//! Per the spec this crate is only a *producer* for renderers to consume —
//! it decodes pools and instructions but never resolves pool references into
//! prose itself. A renderer that does that (turning a `const-string v0,
//! "foo"` pool index into the literal `"foo"`) is an external collaborator;
//! `plain` deliberately stops at raw mnemonics and ids so the registry has
//! something to dispatch to without reaching outside this crate's scope.
//!
//! The trait is parameterized over the image's container type rather than
//! carrying generic methods, so `Box<dyn Renderer<C>>` stays object-safe —
//! a registry is built for one concrete `C` (whatever the front-end opened
//! its image with) and holds any number of renderers against it.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::dex::container::DexContainer;
use crate::dex::opcode::{Opcode, OperandBundle};
use crate::dex::pool::{Class, Method};
use crate::error::DexError;
use crate::Result;

/// Options a renderer may honor when dumping a whole class.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    /// Emit each method's raw instruction bytes alongside its mnemonic.
    pub emit_raw_bytes: bool,
    /// Emit access-flag and pool-id annotations, not just names.
    pub verbose: bool,
}

/// The contract a pretty-printer satisfies. `render_class` walks a class's
/// fields and methods; `render_method` is the single-method entry point
/// `render_class` is expected to delegate to for each method it visits.
pub trait Renderer<C: DexContainer> {
    /// A stable, registry-unique name (e.g. `"plain"`).
    fn name(&self) -> &'static str;

    /// The file extension this renderer's output conventionally carries
    /// (e.g. `"txt"`, `"smali"`), without a leading dot.
    fn extension(&self) -> &'static str;

    fn render_class(&self, class: &Class<'_, C>, options: DisplayOptions, out: &mut dyn Write) -> Result<()>;

    fn render_method(
        &self,
        class: &Class<'_, C>,
        method: &Method<'_, C>,
        out: &mut dyn Write,
        indent: usize,
        emit_raw_bytes: bool,
    ) -> Result<()>;
}

/// Maps renderer names to boxed instances for one container type `C`.
/// Renderers register themselves explicitly — this crate never scans loaded
/// types to discover them (see the design notes on runtime type-enumeration
/// discovery).
pub struct WriterRegistry<C: DexContainer> {
    renderers: BTreeMap<&'static str, Box<dyn Renderer<C>>>,
}

impl<C: DexContainer> Default for WriterRegistry<C> {
    fn default() -> Self {
        Self { renderers: BTreeMap::new() }
    }
}

impl<C: DexContainer> WriterRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Renderer<C> + 'static>(&mut self, renderer: T) {
        self.renderers.insert(renderer.name(), Box::new(renderer));
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.renderers.keys().copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    pub fn extension_of(&self, name: &str) -> Option<&'static str> {
        self.renderers.get(name).map(|r| r.extension())
    }

    pub fn get(&self, name: &str) -> Result<&dyn Renderer<C>> {
        self.renderers.get(name).map(|r| r.as_ref()).ok_or_else(|| DexError::UnknownRenderer(name.to_string()))
    }

    /// Registers the crate's built-in renderers. Called by front-ends that
    /// want the stock set without hand-registering each one.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(PlainRenderer);
        registry
    }
}

/// The crate's one built-in renderer: dumps mnemonics and raw operand/pool
/// ids without resolving them against the string/type pools. Exists to
/// exercise the registry contract, not to be a production disassembler.
pub struct PlainRenderer;

impl PlainRenderer {
    fn write_operands(&self, operands: &OperandBundle, out: &mut dyn Write) -> io::Result<()> {
        match operands {
            OperandBundle::NoArgs => Ok(()),
            OperandBundle::TwoRegs { a, b, value: None } => write!(out, " v{a}, v{b}"),
            OperandBundle::TwoRegs { a, value: Some(v), .. } => write!(out, " v{a}, #{v}"),
            OperandBundle::OneReg { a } => write!(out, " v{a}"),
            OperandBundle::Goto { target } => write!(out, " {target:#x}"),
            OperandBundle::RegPair { a, b } => write!(out, " v{a}, v{b}"),
            OperandBundle::IfZ { a, target } => write!(out, " v{a}, {target:#x}"),
            OperandBundle::RegImm { a, value } => write!(out, " v{a}, #{value}"),
            OperandBundle::RegIndex { a, index } => write!(out, " v{a}, {index:?}"),
            OperandBundle::ThreeRegs { a, b, c } => write!(out, " v{a}, v{b}, v{c}"),
            OperandBundle::TwoRegsImm8 { a, b, value } => write!(out, " v{a}, v{b}, #{value}"),
            OperandBundle::IfRegs { a, b, target } => write!(out, " v{a}, v{b}, {target:#x}"),
            OperandBundle::TwoRegsImm16 { a, b, value } => write!(out, " v{a}, v{b}, #{value}"),
            OperandBundle::TwoRegsIndex { a, b, index } => write!(out, " v{a}, v{b}, {index:?}"),
            OperandBundle::PayloadRef { a, payload_offset } => write!(out, " v{a}, {payload_offset:#x}"),
            OperandBundle::InvokeInline { args, index } => write!(out, " {args:?}, {index:?}"),
            OperandBundle::InvokeRange { first_reg, count, index } => {
                write!(out, " v{first_reg}..v{}, {index:?}", *first_reg as u32 + *count as u32)
            }
            OperandBundle::InvokePolymorphicInline { args, method, proto } => {
                write!(out, " {args:?}, {method:?}, {proto:?}")
            }
            OperandBundle::InvokePolymorphicRange { first_reg, count, method, proto } => {
                write!(out, " v{first_reg}..v{}, {method:?}, {proto:?}", *first_reg as u32 + *count as u32)
            }
            OperandBundle::WideLiteral { a, value } => write!(out, " v{a}, #{value}"),
            OperandBundle::PackedSwitchPayload { first_key, targets } => {
                write!(out, " packed-switch-payload first_key={first_key} cases={}", targets.len())
            }
            OperandBundle::SparseSwitchPayload { keys, .. } => {
                write!(out, " sparse-switch-payload cases={}", keys.len())
            }
            OperandBundle::ArrayDataPayload { element_width, data } => {
                write!(out, " fill-array-data-payload width={element_width} bytes={}", data.len())
            }
        }
    }

    fn write_opcode(&self, op: &Opcode, out: &mut dyn Write, indent: usize, emit_raw_bytes: bool) -> Result<()> {
        write!(out, "{:indent$}{:#06x}: {}", "", op.offset, op.mnemonic, indent = indent)?;
        self.write_operands(&op.operands, out)?;
        if emit_raw_bytes {
            write!(out, "  ; len={}", op.length)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

impl<C: DexContainer> Renderer<C> for PlainRenderer {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render_class(&self, class: &Class<'_, C>, options: DisplayOptions, out: &mut dyn Write) -> Result<()> {
        let name = class.name()?;
        write!(out, "class {name}")?;
        if let Some(superclass) = class.superclass_name()? {
            write!(out, " extends {superclass}")?;
        }
        writeln!(out)?;
        if options.verbose {
            writeln!(out, "  access_flags={:#x}", class.access_flags)?;
            for iface in class.interface_names()? {
                writeln!(out, "  implements {iface}")?;
            }
            if let Some(source_file) = class.source_file()? {
                writeln!(out, "  source_file={source_file}")?;
            }
        }

        for field in class.static_fields()? {
            writeln!(out, "  static field {} {}", field.type_name()?, field.name()?)?;
        }
        for field in class.instance_fields()? {
            writeln!(out, "  field {} {}", field.type_name()?, field.name()?)?;
        }

        for method in class.direct_methods()? {
            self.render_method(class, &method, out, 1, options.emit_raw_bytes)?;
        }
        for method in class.virtual_methods()? {
            self.render_method(class, &method, out, 1, options.emit_raw_bytes)?;
        }
        Ok(())
    }

    fn render_method(
        &self,
        _class: &Class<'_, C>,
        method: &Method<'_, C>,
        out: &mut dyn Write,
        indent: usize,
        emit_raw_bytes: bool,
    ) -> Result<()> {
        let proto = method.prototype()?;
        let pad = "  ".repeat(indent);
        writeln!(
            out,
            "{pad}method {} {}({})",
            proto.return_type_name()?,
            method.name()?,
            proto.parameter_type_names()?.join(", "),
        )?;

        // An abstract/native method (or one resolved without a class-data
        // code offset) has no code block to walk.
        if let Some(code) = method.code() {
            let dex = method.dex();
            let mut cursor = code.insns_offset;
            let end = cursor + code.insns_size as u64 * 2;
            while cursor < end {
                let op = dex.decode_opcode(&mut cursor)?;
                self.write_opcode(&op, out, indent + 1, emit_raw_bytes)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dex::header::HEADER_SIZE;
    use crate::dex::DexFile;

    fn minimal_dex() -> Vec<u8> {
        let mut data = vec![0u8; HEADER_SIZE + 4];
        data[0..8].copy_from_slice(b"dex\n035\0");
        data[32..36].copy_from_slice(&(data.len() as u32).to_le_bytes());
        data[36..40].copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes());
        data[40..44].copy_from_slice(&0x1234_5678u32.to_le_bytes());
        data[52..56].copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes());
        data
    }

    #[test]
    fn registry_knows_about_plain() {
        let registry: WriterRegistry<Vec<u8>> = WriterRegistry::with_builtins();
        assert!(registry.contains("plain"));
        assert_eq!(registry.extension_of("plain"), Some("txt"));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["plain"]);
    }

    #[test]
    fn unknown_renderer_reports_error() {
        let registry: WriterRegistry<Vec<u8>> = WriterRegistry::with_builtins();
        assert!(matches!(registry.get("resolved"), Err(DexError::UnknownRenderer(_))));
    }

    #[test]
    fn plain_renders_an_empty_class() {
        let data = minimal_dex();
        // Build a one-class image by hand would duplicate the pool tests;
        // here we only exercise that a handle with zero classes never
        // reaches render_class, keeping this a registry-level smoke test.
        let dex = DexFile::open(data).unwrap();
        assert_eq!(dex.class_count(), 0);
        let registry: WriterRegistry<Vec<u8>> = WriterRegistry::with_builtins();
        assert!(registry.get("plain").is_ok());
    }
}
