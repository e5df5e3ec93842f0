//! keep-essentials: Clean a Tourinsoft syndication feed into flat records
//!
//! Usage:
//!   # Clean a feed, output to stdout
//!   keep-essentials source1.json
//!
//!   # Write to a file (the directory is created if needed)
//!   keep-essentials source1.json -o output/source1_clean.json
//!
//!   # Keep colliding fields apart by prefixing their parent keys
//!   keep-essentials source1.json --path-keys --separator .

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use keep_essentials::{clean_file, write_json_file, CleanConfig, JsonWriter};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keep-essentials")]
#[command(about = "Strip metadata noise from a JSON feed and flatten its entries", long_about = None)]
struct Args {
    /// Input feed file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Prefix flattened keys with their enclosing object keys instead of
    /// letting same-named fields overwrite each other
    #[arg(long)]
    path_keys: bool,

    /// Separator for path-qualified keys (default: "_")
    #[arg(long, requires = "path_keys")]
    separator: Option<String>,

    /// Comma-separated extra keys to drop
    #[arg(long)]
    ignore_keys: Option<String>,

    /// Compact output (no pretty-printing)
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = CleanConfig::default();
    if args.path_keys {
        config = config.path_qualified();
    }
    if let Some(sep) = args.separator {
        config = config.with_separator(sep);
    }
    if let Some(keys) = args.ignore_keys {
        config = config.with_ignored_keys(
            keys.split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
        );
    }

    let records = clean_file(&args.input, config)
        .with_context(|| format!("Failed to clean {}", args.input.display()))?;

    if let Some(output) = args.output {
        write_json_file(&output, &records, !args.compact)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!("Cleaned JSON ({} records) has been written to: {}", records.len(), output.display());
    } else {
        let mut writer = JsonWriter::new(std::io::stdout().lock());
        if args.compact {
            writer = writer.compact();
        }
        writer.write_json(&records)?;
        writer.flush()?;
    }

    Ok(())
}
