//! Ramulator2 memory system CLI.
//!
//! This binary exposes the resolver and the memory system presets. It performs:
//! 1. **Resolve:** Locate the Ramulator2 configuration file for a memory type and channel count.
//! 2. **Describe:** Build the single-channel DDR4-2400 system, place it on a board, and print its memory map.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `info`).

use std::error::Error as _;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use r2sys_core::ConfigResolver;
use r2sys_core::common::format_mem_size;
use r2sys_core::config::Config;
use r2sys_core::soc::builder::{DEFAULT_MEM_BASE, SimpleBoard};
use r2sys_core::soc::memory::presets::{
    DDR4_2400_DEFAULT_SIZE, DDR4_2400_MEM_TYPE, single_channel_ddr4_2400_with_size,
};
use r2sys_core::soc::traits::{MemoryController as _, MemorySystem as _};

#[derive(Parser, Debug)]
#[command(
    name = "r2sys",
    author,
    version,
    about = "Resolve Ramulator2 configurations and inspect memory systems",
    long_about = "Resolve Ramulator2 configurations and inspect memory systems.\n\nThe install is looked up under <base-dir>/ext/ramulator2/ramulator2 (base dir defaults to the working directory). RAMULATOR2_DIR overrides the install directory and R2SYS_OUTDIR the output directory.\n\nExamples:\n  r2sys resolve --mem-type DDR4_4Gb_x8_2400\n  r2sys describe --size 2GiB --mem-base 0x80000000\n  r2sys --base-dir ~/gem5 --outdir /tmp/run0 describe"
)]
struct Cli {
    /// JSON configuration file (resolver layout and run options).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory the Ramulator2 install layout is resolved against.
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    /// Output directory handed to Ramulator2.
    #[arg(long, global = true)]
    outdir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the configuration file and output directory for a memory type.
    Resolve {
        /// Ramulator2 memory type name.
        #[arg(short, long, default_value = DDR4_2400_MEM_TYPE)]
        mem_type: String,

        /// Number of memory channels.
        #[arg(short, long, default_value_t = 1)]
        channels: u32,
    },

    /// Build the single-channel DDR4-2400 system and print its memory map.
    Describe {
        /// Memory size (e.g. 1024MB, 2GiB).
        #[arg(short, long, default_value = DDR4_2400_DEFAULT_SIZE)]
        size: String,

        /// Physical base address of main memory (decimal or 0x-prefixed hex).
        #[arg(long, default_value_t = DEFAULT_MEM_BASE, value_parser = parse_addr)]
        mem_base: u64,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        process::exit(1);
    }
}

/// Installs the stderr subscriber honouring `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the configuration from file, environment, and flags, then runs the subcommand.
fn run(cli: Cli) -> r2sys_core::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    config.apply_process_env();
    config.apply_overrides(cli.base_dir, cli.outdir);

    debug!(?config, "effective configuration");
    let resolver = ConfigResolver::from_config(&config);
    match cli.command {
        Commands::Resolve { mem_type, channels } => cmd_resolve(&resolver, &mem_type, channels),
        Commands::Describe { size, mem_base } => cmd_describe(&resolver, &size, mem_base),
    }
}

fn cmd_resolve(resolver: &ConfigResolver, mem_type: &str, channels: u32) -> r2sys_core::Result<()> {
    let resolved = resolver.resolve(mem_type, channels)?;
    println!("config_path: {}", resolved.config_path.display());
    println!("output_dir:  {}", resolved.output_dir.display());
    Ok(())
}

fn cmd_describe(resolver: &ConfigResolver, size: &str, mem_base: u64) -> r2sys_core::Result<()> {
    let memory = single_channel_ddr4_2400_with_size(resolver, Some(size))?;
    let board = SimpleBoard::new("board", mem_base, Box::new(memory))?;
    let memory = board.memory();

    println!("Memory: {} ({} bytes)", format_mem_size(memory.get_size()), memory.get_size());
    for ctrl in memory.get_memory_controllers() {
        println!("  controller {} [{}]", ctrl.name(), ctrl.mem_type());
        println!("    config_path: {}", ctrl.config_path().display());
        println!("    output_dir:  {}", ctrl.output_dir().display());
    }
    for entry in board.memory_map() {
        println!("  {} -> {}", entry.range, entry.port);
    }
    Ok(())
}

/// Parses an address given in decimal or `0x`-prefixed hexadecimal.
fn parse_addr(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid address `{s}`: {e}"))
}
