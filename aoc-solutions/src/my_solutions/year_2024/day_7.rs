//! Day 7: Bridge Repair

use crate::utils::parse::{number, parse_lines};
use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Multiply,
    /// Decimal digits of the right operand appended to the left.
    Concatenate,
}

impl Operator {
    pub const ADD_MULTIPLY: &'static [Operator] = &[Operator::Add, Operator::Multiply];
    pub const WITH_CONCATENATION: &'static [Operator] =
        &[Operator::Add, Operator::Multiply, Operator::Concatenate];

    /// `None` when the result does not fit in a `u64`.
    pub fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Concatenate => format!("{lhs}{rhs}").parse().ok(),
        }
    }
}

/// A test value and the numbers that should combine into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationLine {
    pub target: u64,
    pub operands: Vec<u64>,
}

impl CalibrationLine {
    /// Whether some assignment of `operators`, applied strictly left to
    /// right, turns the operands into the target.
    pub fn is_achievable(&self, operators: &[Operator]) -> bool {
        let Some((&first, rest)) = self.operands.split_first() else {
            return false;
        };
        // Without a zero ahead, no operator can shrink the running value.
        let can_prune = !rest.contains(&0);
        let mut stack = vec![(0, first)];

        while let Some((next, value)) = stack.pop() {
            let Some(&operand) = rest.get(next) else {
                if value == self.target {
                    return true;
                }
                continue;
            };
            if can_prune && value > self.target {
                continue;
            }
            stack.extend(
                operators
                    .iter()
                    .filter_map(|op| op.apply(value, operand))
                    .map(|result| (next + 1, result)),
            );
        }

        false
    }
}

/// Sum of the targets reachable with `operators`.
pub fn total_calibration(lines: &[CalibrationLine], operators: &[Operator]) -> u64 {
    lines
        .iter()
        .filter(|line| line.is_achievable(operators))
        .map(|line| line.target)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<CalibrationLine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let (target, operands) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("expected `target: operands`, got {line:?}"))?;
            let operands = operands
                .split_whitespace()
                .map(number::<u64>)
                .collect::<anyhow::Result<Vec<_>>>()?;
            ensure!(!operands.is_empty(), "equation has no operands");

            Ok(CalibrationLine {
                target: number(target)?,
                operands,
            })
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_calibration(shared, Operator::ADD_MULTIPLY).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_calibration(shared, Operator::WITH_CONCATENATION).to_string())
    }
}
