//! flatsheet: convert JSON into flat, spreadsheet-ready CSV
//!
//! Usage:
//!   # Read from file, output to stdout
//!   flatsheet data.json
//!
//!   # Read from stdin, output to stdout
//!   echo '{"id": 1, "tags": ["a", "b"]}' | flatsheet
//!
//!   # Write to a file
//!   flatsheet data.json -o data.csv

// Use MiMalloc allocator for better performance
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use flatsheet::convert;
use std::io::Read;

#[derive(Parser, Debug)]
#[command(name = "flatsheet")]
#[command(about = "Convert JSON into flat, spreadsheet-ready CSV", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Output file (use stdout if omitted)
    #[arg(long, short = 'o')]
    output: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let csv = convert(&raw).context("Conversion failed")?;

    match &args.output {
        Some(path) => {
            // The CSV text carries no trailing newline; add one at the
            // file boundary
            std::fs::write(path, format!("{csv}\n"))
                .with_context(|| format!("Failed to write output file: {}", path))?;
        }
        None => println!("{csv}"),
    }

    Ok(())
}
