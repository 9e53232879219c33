//! Decimal → binary/hexadecimal conversion of a file holding one number
//! per line.
//!
//! Unlike the statistics reader, bad tokens are not fatal here: each one is
//! reported on stderr and skipped, and the table only contains the tokens
//! that parsed.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use likely_stable::unlikely;

use crate::InputError;

/// One accepted input token with its integer digit renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedToken {
    /// The token as it appeared in the input, fractional part included.
    pub raw: String,
    pub binary: String,
    pub hexadecimal: String,
}

/// Reads one trimmed raw token per line. Which tokens are numbers is
/// decided later, per token, by [`convert_tokens`].
pub fn read_tokens(mut reader: impl BufRead) -> Result<Vec<String>, InputError> {
    let mut tokens = Vec::new();
    let mut line_buf = String::new();
    loop {
        line_buf.clear();
        if reader.read_line(&mut line_buf)? == 0 {
            break;
        }
        tokens.push(line_buf.trim().to_owned());
    }
    Ok(tokens)
}

pub fn read_tokens_from_path(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let reader = crate::open_input(path.as_ref())?;
    read_tokens(reader)
}

/// Converts every parseable token; warns on stderr about fractional values
/// (converted from their truncated integer part) and about tokens that are
/// no numbers at all (omitted from the output entirely).
pub fn convert_tokens(tokens: &[String]) -> Vec<ConvertedToken> {
    let mut rows = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.is_empty() {
            continue;
        }

        let Ok(value) = fast_float::parse::<f64, _>(token.as_str()) else {
            eprintln!("warning: invalid token {token:?} in input, skipped");
            continue;
        };
        if unlikely(!value.is_finite()) {
            eprintln!("warning: invalid token {token:?} in input, skipped");
            continue;
        }
        if unlikely(value.fract() != 0.0) {
            eprintln!(
                "warning: {token:?} is not a whole number; \
                 binary/hexadecimal use the truncated integer part"
            );
        }

        let integer = value.trunc() as i64;
        rows.push(ConvertedToken {
            raw: token.clone(),
            binary: to_binary(integer),
            hexadecimal: to_hex(integer),
        });
    }
    rows
}

/// Binary digits without a `0b` prefix. Negative values keep a leading
/// sign in front of the magnitude's digits.
pub fn to_binary(value: i64) -> String {
    if value < 0 {
        format!("-{:b}", value.unsigned_abs())
    } else {
        format!("{value:b}")
    }
}

/// Lowercase hexadecimal digits without a `0x` prefix, sign handling as in
/// [`to_binary`].
pub fn to_hex(value: i64) -> String {
    if value < 0 {
        format!("-{:x}", value.unsigned_abs())
    } else {
        format!("{value:x}")
    }
}

/// Renders the tab-separated conversion table followed by the elapsed-time
/// line, shared by the console and `ConversionResults.txt`.
pub fn render_report(
    rows: &[ConvertedToken],
    elapsed: Duration,
    mut out: impl Write,
) -> io::Result<()> {
    writeln!(out, "Decimal\tBinary\tHexadecimal")?;
    for row in rows {
        writeln!(out, "{}\t{}\t{}", row.raw, row.binary, row.hexadecimal)?;
    }
    writeln!(out)?;
    writeln!(out, "Elapsed time: {elapsed:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|token| (*token).to_owned()).collect()
    }

    #[test]
    fn test_whole_number_converts() {
        let rows = convert_tokens(&tokens(&["10"]));
        assert_eq!(
            rows,
            vec![ConvertedToken {
                raw: "10".to_owned(),
                binary: "1010".to_owned(),
                hexadecimal: "a".to_owned(),
            }]
        );
    }

    #[test]
    fn test_fractional_number_truncates_but_keeps_raw_token() {
        let rows = convert_tokens(&tokens(&["3.5"]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].raw, "3.5");
        assert_eq!(rows[0].binary, "11");
        assert_eq!(rows[0].hexadecimal, "3");
    }

    #[test]
    fn test_invalid_token_is_omitted_from_output() {
        let rows = convert_tokens(&tokens(&["10", "3.5", "abc"]));
        let raws: Vec<&str> = rows.iter().map(|row| row.raw.as_str()).collect();
        assert_eq!(raws, vec!["10", "3.5"]);
    }

    #[test]
    fn test_non_finite_tokens_are_invalid() {
        assert!(convert_tokens(&tokens(&["inf", "nan"])).is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert!(convert_tokens(&tokens(&["", ""])).is_empty());
    }

    #[test]
    fn test_digit_rendering() {
        assert_eq!(to_binary(0), "0");
        assert_eq!(to_hex(0), "0");
        assert_eq!(to_binary(255), "11111111");
        assert_eq!(to_hex(255), "ff");
        assert_eq!(to_binary(-10), "-1010");
        assert_eq!(to_hex(-10), "-a");
    }

    #[test]
    fn test_digits_round_trip_through_their_base() {
        for n in [0, 1, 5, 10, 255, 1023, 4096, -1, -10, -255] {
            assert_eq!(i64::from_str_radix(&to_binary(n), 2).unwrap(), n);
            assert_eq!(i64::from_str_radix(&to_hex(n), 16).unwrap(), n);
        }
    }

    #[test]
    fn test_read_tokens_trims_but_keeps_invalid_tokens() {
        let tokens = read_tokens(Cursor::new("10\n 3.5 \nabc\n")).unwrap();
        assert_eq!(tokens, vec!["10", "3.5", "abc"]);
    }

    #[test]
    fn test_report_rendering() {
        let rows = convert_tokens(&tokens(&["10", "3.5"]));
        let mut out = Vec::new();
        render_report(&rows, Duration::from_millis(2), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Decimal\tBinary\tHexadecimal\n\
             10\t1010\ta\n\
             3.5\t11\t3\n\
             \n\
             Elapsed time: 2ms\n"
        );
    }
}
