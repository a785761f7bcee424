//! Board coordinates and movement directions.
//!
//! A [`Position`] is a plain `(row, column)` value. Row 0 is the top row of
//! the board and column 0 the leftmost column, so moving [`Direction::Up`]
//! decreases the row.
//!
//! Coordinates are signed: stepping off the edge of the board produces a
//! position such as `(-1, 4)`, which the bounds check then rejects.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseDirectionError;

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    #[inline]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Check whether both coordinates lie in `[0, size)`.
    #[inline]
    pub fn is_within_bounds(self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.row as i64)) && (0..size).contains(&(self.column as i64))
    }

    /// The neighboring position one cell away in `direction`.
    ///
    /// The result is not bounds-checked. Coordinates saturate at the `i32`
    /// limits, which are never on a board.
    #[inline]
    pub fn step(self, direction: Direction) -> Position {
        let (dr, dc) = direction.delta();
        Position::new(self.row.saturating_add(dr), self.column.saturating_add(dc))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// One of the four orthogonal directions a token can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order Up, Down, Left, Right.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row and column offset of a single step.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts full names or their first letter, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}
