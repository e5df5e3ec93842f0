//! tourinsoft-map: Project Tourinsoft records onto the database import schema
//!
//! Accepts either a JSON array of source records (e.g. the output of
//! keep-essentials) or a raw feed document, which is cleaned first.
//!
//! Usage:
//!   tourinsoft-map input.json
//!   tourinsoft-map input.json -o import/events.json

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use keep_essentials::{map_file, write_json_file};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tourinsoft-map")]
#[command(about = "Map Tourinsoft records onto the fixed import schema", long_about = None)]
struct Args {
    /// Input file: array of records or feed document
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (the directory is created if needed)
    #[arg(long, short = 'o', default_value = "filament_format_output/output.json")]
    output: PathBuf,

    /// Compact output (no pretty-printing)
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let records = map_file(&args.input)
        .with_context(|| format!("Failed to map {}", args.input.display()))?;

    write_json_file(&args.output, &records, !args.compact)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!("{} records have been written to: {}", records.len(), args.output.display());

    Ok(())
}
