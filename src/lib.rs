#![deny(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::must_use_candidate,
    // clippy::restriction,
    // clippy::pedantic
)]
// now allow a few rules which are denied by the above statement
// --> they are ridiculous and not necessary
#![allow(
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::fallible_impl_from
)]
// I can't do anything about this; fault of the dependencies
#![allow(clippy::multiple_crate_versions)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]

//! Batch text-analysis toolbox: three independent line-oriented pipelines
//! (descriptive statistics, number-base conversion, word frequencies).
//!
//! Each binary reads a text file in one pass, prints its results to the
//! console and rewrites a fixed-name report file that ends with the elapsed
//! wall-clock time of the computation.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

pub mod conversion;
pub mod statistics;
pub mod word_count;

const READ_BUFFER_SIZE: usize = 0x10000 /* 64 KiB */;

/// Failure while reading one of the line-oriented input files.
#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A line that must hold a numeric literal does not parse as one. Only
    /// the statistics reader fails this way; the converter degrades bad
    /// tokens to per-token warnings instead.
    #[error("line {line} is not a number: {token:?}")]
    NotANumber { line: usize, token: String },
}

fn open_input(path: &Path) -> std::io::Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::with_capacity(READ_BUFFER_SIZE, file))
}
