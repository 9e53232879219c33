use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use textbatch::word_count::{self, WordCounts};

const RESULT_FILE: &str = "WordCountResults.txt";

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        println!("usage: word-count <input-file>");
        return ExitCode::SUCCESS;
    };

    let begin = Instant::now();
    let counts = match word_count::count_words_from_path(&path) {
        Ok(counts) => counts,
        Err(err) => {
            // Report and produce nothing; an unreadable file is not a
            // partial result.
            eprintln!("error reading {path}: {err}");
            return ExitCode::SUCCESS;
        }
    };
    let elapsed = begin.elapsed();

    if let Err(err) = print_and_save(&counts, elapsed) {
        eprintln!("error writing {RESULT_FILE}: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_and_save(counts: &WordCounts, elapsed: Duration) -> io::Result<()> {
    word_count::render_counts(counts, io::stdout().lock())?;

    let mut writer = BufWriter::new(File::create(RESULT_FILE)?);
    word_count::render_report(counts, elapsed, &mut writer)?;
    writer.flush()
}
