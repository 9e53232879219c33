use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use textbatch::conversion;

const RESULT_FILE: &str = "ConversionResults.txt";

/// Converts the numbers in a data file to binary and hexadecimal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path of the input file, one number per line.
    file_path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let begin = Instant::now();
    let tokens = conversion::read_tokens_from_path(&cli.file_path)
        .with_context(|| format!("cannot read {}", cli.file_path.display()))?;
    let rows = conversion::convert_tokens(&tokens);
    let elapsed = begin.elapsed();

    conversion::render_report(&rows, elapsed, io::stdout().lock())?;

    let file = File::create(RESULT_FILE).with_context(|| format!("cannot create {RESULT_FILE}"))?;
    let mut writer = BufWriter::new(file);
    conversion::render_report(&rows, elapsed, &mut writer)?;
    writer.flush()?;

    Ok(())
}
