//! Advent of Code 2024 puzzle solutions
//!
//! Each day lives in `my_solutions::year_2024::day_N` and exposes a unit
//! `Solver` implementing the `aoc_solver` traits, its parsed model, and the
//! pure functions behind each part. Days share nothing but [`utils`].

pub mod my_solutions;
pub mod utils;

pub use my_solutions::year_2024;
