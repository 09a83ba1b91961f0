//! Advent of Code Solver Library
//!
//! The contract every daily puzzle solver in this workspace follows: parse the
//! raw input once into a typed model, then solve each part from that model.
//!
//! # Overview
//!
//! - [`AocParser`] turns input text into the day's `SharedData`
//! - [`PartSolver<N>`] solves part `N` from the shared data
//! - [`Solver`] dispatches a runtime part number to the right `PartSolver`,
//!   usually generated with `#[derive(AocSolver)]`
//! - [`SolverInstance`] parses once and times parsing and each part
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverInstance};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 1)]
//! struct Frequencies;
//!
//! impl AocParser for Frequencies {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| line.parse().map_err(|_| ParseError::InvalidFormat(format!("bad change: {line}"))))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Frequencies {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! let mut solver = SolverInstance::<Frequencies>::new("+1\n-2\n+3\n+1").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! assert!(solver.solve(2).is_err());
//! ```
//!
//! # Part Dependencies
//!
//! Parts receive `&mut SharedData`, so an earlier part may cache intermediate
//! results in the shared model for a later one. Independent parts simply read it.

mod error;
mod instance;
mod solver;

pub use error::{ParseError, SolveError, SolverError};
pub use instance::{SolveResult, SolverInstance};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

pub use aoc_solver_macros::AocSolver;
