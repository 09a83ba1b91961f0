//! Error types shared by every day's solver

use thiserror::Error;

/// Error raised while turning puzzle input into a day's model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input does not follow the day's format (bad number, missing delimiter, ragged grid)
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Something the day requires is absent from the input
    #[error("Missing data: {0}")]
    MissingData(String),
}

impl From<anyhow::Error> for ParseError {
    fn from(err: anyhow::Error) -> Self {
        ParseError::InvalidFormat(format!("{err:#}"))
    }
}

/// Error raised while solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number has no `PartSolver` impl
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is outside `1..=PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The parsed input violates a precondition of the algorithm
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap a day-specific error as [`SolveError::SolveFailed`]
    pub fn failed<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SolveError::SolveFailed(Box::new(err))
    }
}

/// Error type for running a solver end to end
#[derive(Debug, Error)]
pub enum SolverError {
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}
