//! A thin CLI front-end over `dexcore`: opens a DEX file, looks up a
//! renderer by name in the writer registry, and dumps every class def
//! through it. Proves the registry/renderer contract is usable end to end;
//! a richer, pool-resolving renderer remains an external collaborator.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use dexcore::dex::container::map_file;
use dexcore::dex::verifier::VerifyPreset;
use dexcore::dex::DexFile;
use dexcore::render::{DisplayOptions, WriterRegistry};

#[derive(Parser, Debug)]
#[command(name = "dexcore", about = "Decode and dump an Android DEX file")]
struct Args {
    /// Path to the .dex file to open.
    path: PathBuf,

    /// Renderer to dispatch to, by registered name.
    #[arg(long, default_value = "plain")]
    renderer: String,

    /// Re-validate the header's structural invariants after opening.
    #[arg(long)]
    verify: bool,

    /// Additionally recompute and compare the adler32 checksum.
    #[arg(long)]
    verify_checksum: bool,

    /// Emit raw instruction lengths alongside mnemonics.
    #[arg(long)]
    emit_raw_bytes: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: Args) -> anyhow::Result<()> {
    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    let mmap = map_file(&args.path).with_context(|| format!("opening {}", args.path.display()))?;
    let dex = DexFile::open(mmap).with_context(|| format!("parsing {}", args.path.display()))?;

    if args.verify || args.verify_checksum {
        let preset = if args.verify_checksum { VerifyPreset::ChecksumOnly } else { VerifyPreset::HeaderOnly };
        dex.verify(preset).context("verification failed")?;
        log::info!("verification passed");
    }

    let registry = WriterRegistry::with_builtins();
    let renderer = registry.get(&args.renderer)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let options = DisplayOptions { emit_raw_bytes: args.emit_raw_bytes, verbose: args.verbose > 0 };

    for class in dex.iter_classes() {
        let class = class?;
        renderer.render_class(&class, options, &mut out).with_context(|| format!("rendering {}", class.name().unwrap_or_default()))?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dexcore: {e:#}");
            ExitCode::FAILURE
        }
    }
}
