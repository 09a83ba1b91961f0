//! Parse once, then solve parts with wall-clock timing

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{TimeDelta, Utc};

/// Answer for one part and the time its solver took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub answer: String,
    pub duration: TimeDelta,
}

/// Run `f`, returning its output with how long it ran.
fn timed<T>(f: impl FnOnce() -> T) -> (T, TimeDelta) {
    let start = Utc::now();
    let output = f();
    (output, Utc::now() - start)
}

/// One input parsed by `S`, ready to solve any of its parts
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverInstance};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Lengths;
///
/// impl AocParser for Lengths {
///     type SharedData<'a> = Vec<usize>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().map(str::len).collect())
///     }
/// }
///
/// impl PartSolver<1> for Lengths {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<usize>().to_string())
///     }
/// }
///
/// impl PartSolver<2> for Lengths {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
///     }
/// }
///
/// let mut lengths = SolverInstance::<Lengths>::new("ab\ncde").unwrap();
/// let answers: Vec<String> = lengths
///     .solve_all()
///     .unwrap()
///     .into_iter()
///     .map(|result| result.answer)
///     .collect();
/// assert_eq!(answers, ["5", "3"]);
/// ```
pub struct SolverInstance<'a, S: Solver> {
    shared: S::SharedData<'a>,
    parse_time: TimeDelta,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_time) = timed(|| S::parse(input));
        Ok(Self {
            shared: shared?,
            parse_time,
        })
    }

    /// Time `S::parse` took on this input
    pub fn parse_time(&self) -> TimeDelta {
        self.parse_time
    }

    /// Solve one part; parts outside `1..=S::PARTS` are
    /// [`SolveError::PartOutOfRange`].
    pub fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, duration) = timed(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            answer: answer?,
            duration,
        })
    }

    /// Solve every part in order, stopping at the first failure.
    pub fn solve_all(&mut self) -> Result<Vec<SolveResult>, SolveError> {
        (1..=S::PARTS).map(|part| self.solve(part)).collect()
    }
}
