//! Line-oriented parsing helpers producing line-numbered errors

use anyhow::{Context, anyhow};
use aoc_solver::ParseError;
use std::str::FromStr;

/// Parse every line of `input` with `parse_line`.
///
/// Trailing blank lines are ignored. A failure is reported as
/// `ParseError::InvalidFormat` prefixed with its 1-based line number.
pub fn parse_lines<T, F>(input: &str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&str) -> anyhow::Result<T>,
{
    input
        .trim_end()
        .lines()
        .enumerate()
        .map(|(line_idx, line)| {
            parse_line(line).map_err(|e| anyhow!("(line {}) {:#}", line_idx + 1, e))
        })
        .collect::<anyhow::Result<Vec<T>>>()
        .map_err(ParseError::from)
}

/// Split `input` around its first blank line, for `\n` or `\r\n` line endings.
pub fn split_at_blank_line(input: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in input.split_inclusive('\n') {
        if line.trim().is_empty() {
            return Some((&input[..offset], &input[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Parse a single number, naming the offending text on failure.
pub fn number<T>(text: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.trim()
        .parse()
        .with_context(|| format!("invalid number {:?}", text.trim()))
}

/// Parse a `separator`-delimited list of numbers.
pub fn numbers<T>(text: &str, separator: char) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.split(separator).map(number).collect()
}
