use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

/// Lines of comma-separated numbers; part 1 sums rows, part 2 takes the largest row.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct RowTotals;

impl AocParser for RowTotals {
    type SharedData<'a> = Vec<Vec<u32>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.split(',')
                    .map(|n| {
                        n.trim()
                            .parse()
                            .map_err(|_| ParseError::InvalidFormat(format!("Expected integer, got: {n}")))
                    })
                    .collect()
            })
            .collect()
    }
}

impl PartSolver<1> for RowTotals {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().flatten().sum::<u32>().to_string())
    }
}

impl PartSolver<2> for RowTotals {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared.iter().map(|row| row.iter().sum::<u32>()).max();
        Ok(best.unwrap_or_default().to_string())
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<RowTotals as Solver>::PARTS, 2);
}

#[test]
fn test_each_part_dispatches_to_its_part_solver() {
    let mut shared = RowTotals::parse("1,2,3\n10,1\n4").unwrap();

    assert_eq!(RowTotals::solve_part(&mut shared, 1).unwrap(), "21");
    assert_eq!(RowTotals::solve_part(&mut shared, 2).unwrap(), "11");
}

#[test]
fn test_parts_do_not_depend_on_order() {
    let mut shared = RowTotals::parse("5,5\n1").unwrap();

    assert_eq!(RowTotals::solve_part(&mut shared, 2).unwrap(), "10");
    assert_eq!(RowTotals::solve_part(&mut shared, 1).unwrap(), "11");
}

#[test]
fn test_unknown_part_is_not_implemented() {
    let mut shared = RowTotals::parse("1").unwrap();

    assert!(matches!(
        RowTotals::solve_part(&mut shared, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
    assert!(matches!(
        RowTotals::solve_part(&mut shared, 0),
        Err(SolveError::PartNotImplemented(0))
    ));
}

#[test]
fn test_parse_error_surfaces() {
    let err = RowTotals::parse("1,x").unwrap_err();
    assert_eq!(err, ParseError::InvalidFormat("Expected integer, got: x".into()));
}
