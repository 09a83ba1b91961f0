//! Day 1: Historian Hysteria

use crate::utils::parse::{number, parse_lines};
use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::collections::HashMap;

const ID_DELIMITER: &str = "   ";

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// The two location-ID lists, column by column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationLists {
    pub left: Vec<u32>,
    pub right: Vec<u32>,
}

impl AocParser for Solver {
    type SharedData<'a> = LocationLists;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pairs = parse_lines(input, |line| {
            let (left, right) = line
                .split_once(ID_DELIMITER)
                .ok_or_else(|| anyhow!("expected two ids separated by {ID_DELIMITER:?}"))?;
            Ok((number::<u32>(left)?, number::<u32>(right)?))
        })?;

        let (left, right): (Vec<u32>, Vec<u32>) = pairs.into_iter().unzip();
        Ok(LocationLists { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_distance(&shared.left, &shared.right).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(similarity_score(&shared.left, &shared.right).to_string())
    }
}

/// Sum of distances between the lists once both are sorted ascending.
pub fn total_distance(left: &[u32], right: &[u32]) -> u64 {
    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort_unstable();
    right.sort_unstable();

    left.iter()
        .zip(&right)
        .map(|(&l, &r)| u64::from(l.abs_diff(r)))
        .sum()
}

/// Each right-hand id weighted by how often it appears on the left.
pub fn similarity_score(left: &[u32], right: &[u32]) -> u64 {
    let mut frequency: HashMap<u32, u64> = HashMap::new();
    for &id in left {
        *frequency.entry(id).or_default() += 1;
    }

    right
        .iter()
        .map(|id| u64::from(*id) * frequency.get(id).copied().unwrap_or(0))
        .sum()
}
