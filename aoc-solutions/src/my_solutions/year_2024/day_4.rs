//! Day 4: Ceres Search

use crate::utils::{Grid, Offset, Position};
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::from_bytes(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let found: usize = shared
            .positions()
            .map(|start| count_words_from(shared, b"XMAS", start))
            .sum();
        Ok(found.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let crosses = shared
            .positions()
            .filter(|&centre| is_mas_cross(shared, centre))
            .count();
        Ok(crosses.to_string())
    }
}

/// Number of the eight compass directions in which `word` reads from `start`.
pub fn count_words_from(grid: &Grid<u8>, word: &[u8], start: Position) -> usize {
    Offset::COMPASS
        .into_iter()
        .filter(|&step| grid.reads(word, start, step))
        .count()
}

/// Two diagonal `MAS` words crossing at their shared `A`, in either orientation.
pub fn is_mas_cross(grid: &Grid<u8>, centre: Position) -> bool {
    let arms = Offset::DIAGONALS
        .into_iter()
        .filter(|&step| grid.reads(b"MAS", centre + -step, step))
        .count();
    arms == 2
}
