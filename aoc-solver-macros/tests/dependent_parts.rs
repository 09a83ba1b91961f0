use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Clone)]
struct Readings {
    values: Vec<i64>,
    sorted: Option<Vec<i64>>,
}

/// Part 1 sorts and caches the readings; part 2 needs that cache.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Median;

#[derive(Debug, thiserror::Error)]
#[error("part 1 must run before part 2")]
struct MissingSort;

impl AocParser for Median {
    type SharedData<'a> = Readings;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let values = input
            .split_whitespace()
            .map(|v| v.parse().map_err(|_| ParseError::InvalidFormat(format!("bad reading: {v}"))))
            .collect::<Result<Vec<_>, _>>()?;
        if values.is_empty() {
            return Err(ParseError::MissingData("no readings".into()));
        }
        Ok(Readings { values, sorted: None })
    }
}

impl PartSolver<1> for Median {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut sorted = shared.values.clone();
        sorted.sort_unstable();
        let min = sorted[0];
        shared.sorted = Some(sorted);
        Ok(min.to_string())
    }
}

impl PartSolver<2> for Median {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sorted = shared.sorted.as_ref().ok_or_else(|| SolveError::failed(MissingSort))?;
        Ok(sorted[sorted.len() / 2].to_string())
    }
}

#[test]
fn test_part1_caches_for_part2() {
    let mut shared = Median::parse("9 1 5 3 7").unwrap();

    assert_eq!(Median::solve_part(&mut shared, 1).unwrap(), "1");
    assert_eq!(shared.sorted.as_deref(), Some(&[1, 3, 5, 7, 9][..]));
    assert_eq!(Median::solve_part(&mut shared, 2).unwrap(), "5");
}

#[test]
fn test_part2_without_part1_fails() {
    let mut shared = Median::parse("9 1 5").unwrap();

    let err = Median::solve_part(&mut shared, 2).unwrap_err();
    assert!(matches!(err, SolveError::SolveFailed(_)));
    assert_eq!(err.to_string(), "Solve failed: part 1 must run before part 2");
}

#[test]
fn test_empty_input_is_missing_data() {
    assert!(matches!(Median::parse("  \n"), Err(ParseError::MissingData(_))));
}
