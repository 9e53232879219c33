use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use textbatch::statistics::{self, SampleStats};

const RESULT_FILE: &str = "ResultadosEstadisticos.txt";

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!("usage: compute-statistics <input-file>");
        return ExitCode::FAILURE;
    };

    let begin = Instant::now();
    // A single bad line fails the whole read; the report then renders with
    // every statistic absent.
    let samples = match statistics::read_samples_from_path(&path) {
        Ok(samples) => samples,
        Err(err) => {
            eprintln!("error reading {path}: {err}");
            Vec::new()
        }
    };
    let stats = SampleStats::compute(&samples);
    let elapsed = begin.elapsed();

    if let Err(err) = print_and_save(&stats, elapsed) {
        eprintln!("error writing {RESULT_FILE}: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_and_save(stats: &SampleStats, elapsed: Duration) -> io::Result<()> {
    statistics::render_report(stats, elapsed, io::stdout().lock())?;

    let mut writer = BufWriter::new(File::create(RESULT_FILE)?);
    statistics::render_report(stats, elapsed, &mut writer)?;
    writer.flush()?;

    println!("results saved to {RESULT_FILE}");
    Ok(())
}
