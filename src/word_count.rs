//! Case-insensitive word-frequency counting over arbitrary text.

use std::collections::hash_map::Entry;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use fnv::FnvHashMap;

use crate::InputError;

/// Frequency table of lowercased, whitespace-delimited tokens, preserving
/// the order in which tokens were first seen.
#[derive(Debug, Default)]
pub struct WordCounts {
    index: FnvHashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl WordCounts {
    /// Tokenizes one line on whitespace and counts every token.
    pub fn add_line(&mut self, line: &str) {
        for token in line.split_whitespace() {
            self.add(token);
        }
    }

    fn add(&mut self, token: &str) {
        match self.index.entry(token.to_lowercase()) {
            Entry::Occupied(slot) => self.entries[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                let word = slot.key().clone();
                slot.insert(self.entries.len());
                self.entries.push((word, 1));
            }
        }
    }

    /// Tokens and counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counts every token of the input, one line at a time.
pub fn count_words(mut reader: impl BufRead) -> Result<WordCounts, InputError> {
    let mut counts = WordCounts::default();
    let mut line_buf = String::new();
    loop {
        line_buf.clear();
        if reader.read_line(&mut line_buf)? == 0 {
            break;
        }
        counts.add_line(&line_buf);
    }
    Ok(counts)
}

pub fn count_words_from_path(path: impl AsRef<Path>) -> Result<WordCounts, InputError> {
    let reader = crate::open_input(path.as_ref())?;
    count_words(reader)
}

/// One `token: count` line per distinct token, in first-seen order. This is
/// the full console output of the word-count tool.
pub fn render_counts(counts: &WordCounts, mut out: impl Write) -> io::Result<()> {
    for (word, count) in counts.iter() {
        writeln!(out, "{word}: {count}")?;
    }
    Ok(())
}

/// The result-file body: the counts plus the trailing elapsed-time line.
pub fn render_report(
    counts: &WordCounts,
    elapsed: Duration,
    mut out: impl Write,
) -> io::Result<()> {
    render_counts(counts, &mut out)?;
    writeln!(out)?;
    writeln!(out, "Elapsed time: {elapsed:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn entries(counts: &WordCounts) -> Vec<(String, u64)> {
        counts
            .iter()
            .map(|(word, count)| (word.to_owned(), count))
            .collect()
    }

    #[test]
    fn test_counting_is_case_insensitive() {
        let mut counts = WordCounts::default();
        counts.add_line("The the dog");
        assert_eq!(
            entries(&counts),
            vec![("the".to_owned(), 2), ("dog".to_owned(), 1)]
        );
    }

    #[test]
    fn test_first_seen_order_is_kept_across_lines() {
        let counts = count_words(Cursor::new("b a\n\na c b\n")).unwrap();
        assert_eq!(
            entries(&counts),
            vec![
                ("b".to_owned(), 2),
                ("a".to_owned(), 2),
                ("c".to_owned(), 1)
            ]
        );
    }

    #[test]
    fn test_unicode_tokens_fold_case() {
        let counts = count_words(Cursor::new("Ñandú ñandú\n")).unwrap();
        assert_eq!(entries(&counts), vec![("ñandú".to_owned(), 2)]);
    }

    #[test]
    fn test_empty_input_counts_nothing() {
        let counts = count_words(Cursor::new("")).unwrap();
        assert!(counts.is_empty());
        assert_eq!(counts.len(), 0);
    }

    #[test]
    fn test_report_rendering() {
        let counts = count_words(Cursor::new("The the dog\n")).unwrap();
        let mut out = Vec::new();
        render_report(&counts, Duration::from_millis(3), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "the: 2\n\
             dog: 1\n\
             \n\
             Elapsed time: 3ms\n"
        );
    }
}
