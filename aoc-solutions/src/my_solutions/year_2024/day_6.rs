//! Day 6: Guard Gallivant
//!
//! The guard walks forward until something blocks the way, then turns right
//! in place. A walk ends when the guard steps off the map, or loops once a
//! `(position, facing)` state repeats.

use crate::utils::{Grid, Offset, Position};
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

const OBSTACLE_SYMBOL: u8 = b'#';
const EMPTY_TILE_SYMBOL: u8 = b'.';
const GUARD_SYMBOL: u8 = b'^';

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Obstacle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn turn_right(self) -> Direction {
        Self::CLOCKWISE[(self as usize + 1) % Self::CLOCKWISE.len()]
    }

    pub fn offset(self) -> Offset {
        match self {
            Direction::Up => Offset::NORTH,
            Direction::Right => Offset::EAST,
            Direction::Down => Offset::SOUTH,
            Direction::Left => Offset::WEST,
        }
    }
}

/// Where the guard stands and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guard {
    pub position: Position,
    pub facing: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lab {
    pub grid: Grid<Tile>,
    pub start: Position,
}

impl Lab {
    pub fn start_guard(&self) -> Guard {
        Guard {
            position: self.start,
            facing: Direction::Up,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatrolError {
    #[error("guard is boxed in at {0}")]
    BoxedIn(Position),
    #[error("guard never leaves the lab")]
    NeverExits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(Guard),
    Exited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Left the map after standing on `visited`.
    Exited { visited: HashSet<Position> },
    Looped,
}

/// A patrol over the lab, optionally with one extra obstruction placed.
#[derive(Debug, Clone, Copy)]
pub struct Patrol<'a> {
    lab: &'a Lab,
    extra_obstacle: Option<Position>,
}

impl<'a> Patrol<'a> {
    pub fn new(lab: &'a Lab) -> Self {
        Self {
            lab,
            extra_obstacle: None,
        }
    }

    pub fn with_obstacle(lab: &'a Lab, obstacle: Position) -> Self {
        Self {
            lab,
            extra_obstacle: Some(obstacle),
        }
    }

    /// `None` when `position` is off the map.
    fn tile_at(&self, position: Position) -> Option<Tile> {
        let tile = *self.lab.grid.get(position)?;
        if self.extra_obstacle == Some(position) {
            Some(Tile::Obstacle)
        } else {
            Some(tile)
        }
    }

    /// Turn right until the way ahead is clear, then take one step.
    ///
    /// Fails when all four directions are blocked.
    pub fn step(&self, guard: Guard) -> Result<Step, PatrolError> {
        let mut facing = guard.facing;
        for _ in 0..Direction::CLOCKWISE.len() {
            let ahead = guard.position + facing.offset();
            match self.tile_at(ahead) {
                None => return Ok(Step::Exited),
                Some(Tile::Empty) => {
                    return Ok(Step::Moved(Guard {
                        position: ahead,
                        facing,
                    }));
                }
                Some(Tile::Obstacle) => facing = facing.turn_right(),
            }
        }
        Err(PatrolError::BoxedIn(guard.position))
    }

    pub fn walk(&self) -> Result<Outcome, PatrolError> {
        let mut guard = self.lab.start_guard();
        let mut seen = HashSet::from([guard]);

        loop {
            match self.step(guard)? {
                Step::Exited => {
                    let visited = seen.into_iter().map(|g| g.position).collect();
                    return Ok(Outcome::Exited { visited });
                }
                Step::Moved(next) => {
                    if !seen.insert(next) {
                        return Ok(Outcome::Looped);
                    }
                    guard = next;
                }
            }
        }
    }

    pub fn loops(&self) -> Result<bool, PatrolError> {
        Ok(self.walk()? == Outcome::Looped)
    }
}

/// Distinct positions the guard stands on before leaving the map.
pub fn patrol_path(lab: &Lab) -> Result<HashSet<Position>, PatrolError> {
    match Patrol::new(lab).walk()? {
        Outcome::Exited { visited } => Ok(visited),
        Outcome::Looped => Err(PatrolError::NeverExits),
    }
}

/// Number of single obstructions that trap the guard in a loop.
///
/// Only cells on the unobstructed path can change the walk, so those are the
/// only candidates tried. The start cell is never obstructed. An obstruction
/// that leaves the guard no way to turn counts as not looping.
pub fn count_looping_obstructions(lab: &Lab) -> Result<usize, PatrolError> {
    let candidates: Vec<Position> = patrol_path(lab)?
        .into_iter()
        .filter(|&position| position != lab.start)
        .collect();

    let mut looping = 0;
    for &candidate in &candidates {
        match Patrol::with_obstacle(lab, candidate).loops() {
            Ok(true) => looping += 1,
            Ok(false) => {}
            Err(PatrolError::BoxedIn(at)) => {
                debug!(%candidate, %at, "obstruction boxes the guard in");
            }
            Err(err) => return Err(err),
        }
    }

    debug!(candidates = candidates.len(), looping, "obstruction search finished");
    Ok(looping)
}

impl AocParser for Solver {
    type SharedData<'a> = Lab;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut starts = Vec::new();
        let grid = Grid::parse_with(input, |position, symbol| match symbol {
            OBSTACLE_SYMBOL => Ok(Tile::Obstacle),
            EMPTY_TILE_SYMBOL => Ok(Tile::Empty),
            GUARD_SYMBOL => {
                starts.push(position);
                Ok(Tile::Empty)
            }
            other => Err(ParseError::InvalidFormat(format!(
                "unexpected {:?} at {position}",
                char::from(other)
            ))),
        })?;

        match *starts.as_slice() {
            [start] => Ok(Lab { grid, start }),
            [] => Err(ParseError::MissingData(
                "unable to find the guard's starting position `^`".into(),
            )),
            _ => Err(ParseError::InvalidFormat(format!(
                "found {} guard starting positions, expected one",
                starts.len()
            ))),
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let path = patrol_path(shared).map_err(SolveError::failed)?;
        Ok(path.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let looping = count_looping_obstructions(shared).map_err(SolveError::failed)?;
        Ok(looping.to_string())
    }
}
