//! Descriptive statistics over a file holding one numeric literal per line.
//!
//! The read is all-or-nothing: the first line that does not parse fails the
//! whole file and the caller continues with an empty sample set, for which
//! every statistic reports as absent.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use fnv::FnvHashMap;

use crate::InputError;

/// Descriptive statistics of one sample set. Every field is `None` when the
/// set is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStats {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Values sharing the maximum occurrence count, in first-seen order.
    /// `None` when no value occurs more than once.
    pub mode: Option<Vec<f64>>,
    /// Population variance. Exactly 0 for a single-sample set.
    pub variance: Option<f64>,
    pub std_dev: Option<f64>,
}

impl SampleStats {
    pub fn compute(samples: &[f64]) -> Self {
        let mean = mean(samples);
        let variance = variance(samples, mean);
        Self {
            mean,
            median: median(samples),
            mode: mode(samples),
            variance,
            std_dev: variance.map(f64::sqrt),
        }
    }
}

fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    Some(if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    })
}

fn mode(samples: &[f64]) -> Option<Vec<f64>> {
    let mut counts: FnvHashMap<u64, usize> = FnvHashMap::default();
    let mut first_seen: Vec<f64> = Vec::new();
    for &sample in samples {
        let count = counts.entry(key_bits(sample)).or_insert(0);
        if *count == 0 {
            first_seen.push(sample);
        }
        *count += 1;
    }

    let max_count = counts.values().copied().max()?;
    if max_count < 2 {
        return None;
    }
    first_seen.retain(|&value| counts[&key_bits(value)] == max_count);
    Some(first_seen)
}

// Mode counts values by bit pattern; fold -0.0 into 0.0 so both spellings
// of zero count as the same value.
fn key_bits(sample: f64) -> u64 {
    if sample == 0.0 {
        0.0_f64.to_bits()
    } else {
        sample.to_bits()
    }
}

fn variance(samples: &[f64], mean: Option<f64>) -> Option<f64> {
    let mean = mean?;
    if samples.len() == 1 {
        return Some(0.0);
    }
    let squared_deviations = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
    Some(squared_deviations / samples.len() as f64)
}

/// Reads one float per line, leading/trailing whitespace trimmed. Fails on
/// the first line that does not parse; no partial sample set is returned.
pub fn read_samples(mut reader: impl BufRead) -> Result<Vec<f64>, InputError> {
    let mut samples: Vec<f64> = Vec::new();
    let mut line_buf = String::new();
    let mut line = 0;
    loop {
        line_buf.clear();
        if reader.read_line(&mut line_buf)? == 0 {
            break;
        }
        line += 1;

        let token = line_buf.trim();
        match fast_float::parse(token) {
            Ok(value) => samples.push(value),
            Err(_) => {
                return Err(InputError::NotANumber {
                    line,
                    token: token.to_owned(),
                })
            }
        }
    }
    Ok(samples)
}

pub fn read_samples_from_path(path: impl AsRef<Path>) -> Result<Vec<f64>, InputError> {
    let reader = crate::open_input(path.as_ref())?;
    read_samples(reader)
}

/// Renders the report body shared by the console and the result file:
/// five labelled statistics followed by the elapsed-time line. Absent
/// statistics render as `n/a`, an absent mode as `no mode`.
pub fn render_report(
    stats: &SampleStats,
    elapsed: Duration,
    mut out: impl Write,
) -> io::Result<()> {
    writeln!(out, "Mean: {}", fmt_stat(stats.mean))?;
    writeln!(out, "Median: {}", fmt_stat(stats.median))?;
    writeln!(out, "Mode: {}", fmt_mode(stats.mode.as_deref()))?;
    writeln!(out, "Variance: {}", fmt_stat(stats.variance))?;
    writeln!(out, "Standard deviation: {}", fmt_stat(stats.std_dev))?;
    writeln!(out, "Elapsed time: {elapsed:?}")
}

fn fmt_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |value| value.to_string())
}

fn fmt_mode(mode: Option<&[f64]>) -> String {
    mode.map_or_else(
        || "no mode".to_owned(),
        |values| {
            values
                .iter()
                .map(f64::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        },
    )
}
