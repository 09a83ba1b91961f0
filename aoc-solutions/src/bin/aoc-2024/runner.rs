//! Runs one day's solver against its example and actual inputs

use crate::config::Config;
use crate::output::{Cell, DayTable};
use anyhow::{Context, anyhow};
use aoc_solver::{SolveResult, Solver, SolverError, SolverInstance};
use chrono::TimeDelta;
use std::io::ErrorKind;
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::{info, warn};

const EXAMPLE_INPUT: &[&str] = &["example-input.txt"];
const ACTUAL_INPUT: &str = "input.txt";

/// A day's title and where its example inputs live
#[derive(Debug, Clone, Copy)]
pub struct Puzzle {
    pub day: u8,
    pub title: &'static str,
    /// Example file per part; the last one covers any remaining parts
    pub examples: &'static [&'static str],
}

impl Puzzle {
    pub const fn new(day: u8, title: &'static str) -> Self {
        Self {
            day,
            title,
            examples: EXAMPLE_INPUT,
        }
    }

    pub const fn with_examples(day: u8, title: &'static str, examples: &'static [&'static str]) -> Self {
        Self { day, title, examples }
    }

    fn example_for(&self, part: u8) -> &'static str {
        let index = usize::from(part.saturating_sub(1)).min(self.examples.len().saturating_sub(1));
        self.examples.get(index).copied().unwrap_or(EXAMPLE_INPUT[0])
    }
}

pub struct Runner {
    config: Config,
}

impl Runner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Solve every part of `S` on the example and, when present, the actual input.
    ///
    /// Example inputs are required. A missing actual input leaves its column
    /// empty; any other read, parse or solve failure is an error.
    pub fn run<S: Solver>(&self, puzzle: &Puzzle) -> anyhow::Result<DayTable> {
        info!(day = puzzle.day, title = puzzle.title, "solving");
        let day_dir = self.config.day_dir(puzzle.day);

        let mut example_parse = TimeDelta::zero();
        let mut examples = Vec::with_capacity(usize::from(S::PARTS));
        let mut first = 1;
        while first <= S::PARTS {
            let file = puzzle.example_for(first);
            let last = (first..=S::PARTS)
                .take_while(|&part| puzzle.example_for(part) == file)
                .last()
                .unwrap_or(first);

            let path = day_dir.join(file);
            let input = read_input(&path)?
                .ok_or_else(|| anyhow!("example input {} is missing", path.display()))?;
            let (parse_time, results) = solve_parts::<S>(&input, first..=last)
                .with_context(|| format!("day {}, example input {file}", puzzle.day))?;
            example_parse += parse_time;
            examples.extend(results.into_iter().map(Cell::from));
            first = last + 1;
        }

        let actual_path = day_dir.join(ACTUAL_INPUT);
        let (actual_parse, actual) = match read_input(&actual_path)? {
            Some(input) => {
                let (parse_time, results) = solve_parts::<S>(&input, 1..=S::PARTS)
                    .with_context(|| format!("day {}, actual input", puzzle.day))?;
                (Some(parse_time), results.into_iter().map(Cell::from).collect())
            }
            None => {
                warn!(day = puzzle.day, path = %actual_path.display(), "actual input not found, skipping");
                (None, vec![Cell::Skipped; usize::from(S::PARTS)])
            }
        };

        let rows = examples
            .into_iter()
            .zip(actual)
            .map(|(example, actual)| [example, actual])
            .collect();
        Ok(DayTable::new(
            format!("Day {}: {}", puzzle.day, puzzle.title),
            [Some(example_parse), actual_parse],
            rows,
        ))
    }
}

/// `Ok(None)` when the file does not exist.
fn read_input(path: &Path) -> anyhow::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Parse `input` once and solve `parts` from it.
fn solve_parts<S: Solver>(
    input: &str,
    parts: RangeInclusive<u8>,
) -> Result<(TimeDelta, Vec<SolveResult>), SolverError> {
    let mut instance = SolverInstance::<S>::new(input)?;
    let results = parts
        .map(|part| instance.solve(part))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((instance.parse_time(), results))
}
