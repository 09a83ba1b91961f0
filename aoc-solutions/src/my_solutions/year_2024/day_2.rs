//! Day 2: Red-Nosed Reports

use crate::utils::parse::{number, parse_lines};
use anyhow::ensure;
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::ops::RangeInclusive;

/// Allowed magnitude of change between adjacent levels.
const SAFE_STEP: RangeInclusive<i64> = 1..=3;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

pub type Report = Vec<i64>;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Report>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let levels = line
                .split_whitespace()
                .map(number::<i64>)
                .collect::<anyhow::Result<Report>>()?;
            ensure!(!levels.is_empty(), "empty report");
            Ok(levels)
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_safe(shared, 0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_safe(shared, 1).to_string())
    }
}

fn count_safe(reports: &[Report], tolerance: usize) -> usize {
    reports
        .iter()
        .filter(|report| is_safe_with_tolerance(report, tolerance))
        .count()
}

/// Levels move in one direction, set by the first step, by 1 to 3 each step.
pub fn is_safe(levels: &[i64]) -> bool {
    let Some(first) = levels.windows(2).next() else {
        return true;
    };
    let direction = if first[1] > first[0] { 1 } else { -1 };

    levels
        .windows(2)
        .all(|pair| SAFE_STEP.contains(&((pair[1] - pair[0]) * direction)))
}

/// Whether the report is safe after removing at most `tolerance` levels.
///
/// Depth-first over removal choices with an explicit frontier.
pub fn is_safe_with_tolerance(report: &[i64], tolerance: usize) -> bool {
    let mut frontier = vec![(report.to_vec(), tolerance)];

    while let Some((levels, remaining)) = frontier.pop() {
        if is_safe(&levels) {
            return true;
        }
        if remaining == 0 {
            continue;
        }
        for skip in 0..levels.len() {
            let mut shorter = levels.clone();
            shorter.remove(skip);
            frontier.push((shorter, remaining - 1));
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn test_example() {
        let mut reports = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut reports, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut reports, 2).unwrap(), "4");
    }

    #[test]
    fn test_direction_set_by_first_step() {
        assert!(is_safe(&[7, 6, 4, 2, 1]));
        assert!(!is_safe(&[1, 3, 2, 4, 5]));
        assert!(!is_safe(&[8, 6, 4, 4, 1]));
    }

    #[test]
    fn test_short_reports_are_safe() {
        assert!(is_safe(&[]));
        assert!(is_safe(&[42]));
    }

    #[test]
    fn test_tolerance_removes_first_level() {
        assert!(!is_safe(&[9, 1, 2, 3]));
        assert!(is_safe_with_tolerance(&[9, 1, 2, 3], 1));
    }

    #[test]
    fn test_tolerance_needs_two_removals() {
        let report = [1, 9, 9, 2, 3];
        assert!(!is_safe_with_tolerance(&report, 1));
        assert!(is_safe_with_tolerance(&report, 2));
    }

    #[test]
    fn test_empty_line_rejected() {
        let err = Solver::parse("1 2 3\n\n4 5 6").unwrap_err();
        assert_eq!(err, ParseError::InvalidFormat("(line 2) empty report".into()));
    }

    proptest! {
        #[test]
        fn prop_more_tolerance_never_hurts(
            report in prop::collection::vec(0i64..12, 1..7),
            tolerance in 0usize..2,
        ) {
            if is_safe_with_tolerance(&report, tolerance) {
                prop_assert!(is_safe_with_tolerance(&report, tolerance + 1));
            }
        }

        #[test]
        fn prop_reversal_preserves_safety(report in prop::collection::vec(0i64..12, 1..7)) {
            let reversed: Vec<i64> = report.iter().rev().copied().collect();
            prop_assert_eq!(is_safe(&report), is_safe(&reversed));
        }
    }
}
