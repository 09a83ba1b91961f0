//! Helpers shared across days

pub mod grid;
pub mod parse;

pub use grid::{Grid, Offset, Position};
