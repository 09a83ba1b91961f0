//! Row-major 2-D grids addressed by signed positions

use aoc_solver::ParseError;
use std::fmt;
use std::ops::{Add, Mul, Neg};

/// A cell coordinate: `x` is the column, `y` the row, origin top-left.
///
/// Signed so that stepping off any edge yields a position the grid simply
/// does not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: isize,
    pub y: isize,
}

impl Position {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A displacement between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: isize,
    pub dy: isize,
}

impl Offset {
    pub const NORTH: Offset = Offset::new(0, -1);
    pub const NORTH_EAST: Offset = Offset::new(1, -1);
    pub const EAST: Offset = Offset::new(1, 0);
    pub const SOUTH_EAST: Offset = Offset::new(1, 1);
    pub const SOUTH: Offset = Offset::new(0, 1);
    pub const SOUTH_WEST: Offset = Offset::new(-1, 1);
    pub const WEST: Offset = Offset::new(-1, 0);
    pub const NORTH_WEST: Offset = Offset::new(-1, -1);

    /// All eight neighbours, clockwise from north.
    pub const COMPASS: [Offset; 8] = [
        Self::NORTH,
        Self::NORTH_EAST,
        Self::EAST,
        Self::SOUTH_EAST,
        Self::SOUTH,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH_WEST,
    ];

    /// The four diagonal neighbours, clockwise from north-east.
    pub const DIAGONALS: [Offset; 4] = [
        Self::NORTH_EAST,
        Self::SOUTH_EAST,
        Self::SOUTH_WEST,
        Self::NORTH_WEST,
    ];

    pub const fn new(dx: isize, dy: isize) -> Self {
        Self { dx, dy }
    }
}

impl Add<Offset> for Position {
    type Output = Position;

    fn add(self, rhs: Offset) -> Position {
        Position::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Mul<isize> for Offset {
    type Output = Offset;

    fn mul(self, rhs: isize) -> Offset {
        Offset::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::new(-self.dx, -self.dy)
    }
}

/// Rectangular grid of cells, immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// Build a grid from text, one row per line, converting each byte with `cell`.
    ///
    /// Every row must have the same length. Empty input gives an empty grid.
    pub fn parse_with<F>(input: &str, mut cell: F) -> Result<Self, ParseError>
    where
        F: FnMut(Position, u8) -> Result<T, ParseError>,
    {
        let mut cells = Vec::with_capacity(input.len());
        let mut width = None;
        let mut height = 0;

        for (y, row) in input.lines().enumerate() {
            let row = row.as_bytes();
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(ParseError::InvalidFormat(format!(
                        "(line {}) row has {} cells, expected {}",
                        y + 1,
                        row.len(),
                        w
                    )));
                }
                Some(_) => {}
            }
            for (x, &byte) in row.iter().enumerate() {
                cells.push(cell(Position::new(x as isize, y as isize), byte)?);
            }
            height += 1;
        }

        Ok(Self {
            cells,
            width: width.unwrap_or(0),
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    /// Cell at `pos`, or `None` when `pos` is outside the grid.
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Position::new(x as isize, y as isize))
        })
    }

    /// Every cell with its position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.positions().zip(self.cells.iter())
    }
}

impl Grid<u8> {
    /// Grid of raw bytes, one row per line.
    pub fn from_bytes(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, |_, byte| Ok(byte))
    }

    /// Whether `word` reads from `start` stepping by `step`, staying inside the grid.
    pub fn reads(&self, word: &[u8], start: Position, step: Offset) -> bool {
        word.iter()
            .enumerate()
            .all(|(i, &letter)| self.get(start + step * i as isize) == Some(&letter))
    }
}
