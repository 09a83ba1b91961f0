//! Day 3: Mull It Over

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use regex::Regex;
use std::sync::LazyLock;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")
        .expect("instruction pattern is a valid regex")
});

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// An uncorrupted instruction found in the memory dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u32, u32),
    Do,
    Dont,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        scan(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_products(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_enabled_products(shared).to_string())
    }
}

/// Extract every instruction from `memory`, in order, skipping corrupted text.
pub fn scan(memory: &str) -> Result<Vec<Instruction>, ParseError> {
    INSTRUCTION
        .captures_iter(memory)
        .map(|caps| match (caps.get(1), caps.get(2)) {
            (Some(a), Some(b)) => {
                let operand = |m: regex::Match<'_>| {
                    m.as_str()
                        .parse::<u32>()
                        .map_err(|e| ParseError::InvalidFormat(format!("mul operand {:?}: {e}", m.as_str())))
                };
                Ok(Instruction::Mul(operand(a)?, operand(b)?))
            }
            _ if &caps[0] == "do()" => Ok(Instruction::Do),
            _ => Ok(Instruction::Dont),
        })
        .collect()
}

/// Every product, ignoring `do()`/`don't()`.
pub fn sum_products(instructions: &[Instruction]) -> u64 {
    instructions
        .iter()
        .map(|instruction| match *instruction {
            Instruction::Mul(a, b) => u64::from(a) * u64::from(b),
            Instruction::Do | Instruction::Dont => 0,
        })
        .sum()
}

/// Products outside `don't()` regions; execution starts enabled.
pub fn sum_enabled_products(instructions: &[Instruction]) -> u64 {
    instructions
        .iter()
        .fold((true, 0), |(enabled, total), instruction| match *instruction {
            Instruction::Do => (true, total),
            Instruction::Dont => (false, total),
            Instruction::Mul(a, b) if enabled => (enabled, total + u64::from(a) * u64::from(b)),
            Instruction::Mul(..) => (enabled, total),
        })
        .1
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE_PART_1: &str =
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
    const EXAMPLE_PART_2: &str =
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    #[test]
    fn test_example_part_1() {
        let mut instructions = Solver::parse(EXAMPLE_PART_1).unwrap();
        assert_eq!(Solver::solve_part(&mut instructions, 1).unwrap(), "161");
    }

    #[test]
    fn test_example_part_2() {
        let mut instructions = Solver::parse(EXAMPLE_PART_2).unwrap();
        assert_eq!(Solver::solve_part(&mut instructions, 2).unwrap(), "48");
    }

    #[test]
    fn test_toggle_region() {
        let instructions = scan("mul(2,3)don't()mul(4,5)do()mul(1,1)").unwrap();
        assert_eq!(
            instructions,
            vec![
                Instruction::Mul(2, 3),
                Instruction::Dont,
                Instruction::Mul(4, 5),
                Instruction::Do,
                Instruction::Mul(1, 1),
            ]
        );
        assert_eq!(sum_enabled_products(&instructions), 7);
        assert_eq!(sum_products(&instructions), 27);
    }

    #[test]
    fn test_disabled_until_end_of_input() {
        let instructions = scan("mul(1,2)don't()mul(3,4)mul(5,6)").unwrap();
        assert_eq!(sum_enabled_products(&instructions), 2);
    }

    #[test]
    fn test_operands_limited_to_three_digits() {
        assert_eq!(scan("mul(1234,5)mul(123,4)").unwrap(), vec![Instruction::Mul(123, 4)]);
        assert!(scan("mul( 1,2)mul(1,2 )").unwrap().is_empty());
    }
}
