//! The two players and their tokens.

use std::fmt;
use std::str::FromStr;

use crate::constants::{GLYPH_PLAYERS, PLAYER_COLORS};
use crate::error::ParseSideError;
use crate::movement::resolve_move;
use crate::position::{Direction, Position};

/// Which of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    /// Get the other player
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::First => "red",
            Side::Second => "blue",
        }
    }

    pub fn glyph(self) -> char {
        GLYPH_PLAYERS[self.index()]
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "1" => Ok(Side::First),
            "blue" | "2" => Ok(Side::Second),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// A player token on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    side: Side,
    color: u32,
    position: Position,
}

impl Player {
    /// Create a player using the default color for `side`.
    pub fn new(side: Side, position: Position) -> Self {
        Self::with_color(side, PLAYER_COLORS[side.index()], position)
    }

    pub fn with_color(side: Side, color: u32, position: Position) -> Self {
        Self {
            side,
            color,
            position,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Token color (0xRRGGBB).
    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move one step in `direction`, jumping over `opponent` if it is in the way.
    ///
    /// On success the player's position is replaced and the new position is
    /// returned. A rejected move leaves the player where it was.
    pub fn attempt_move(
        &mut self,
        direction: Direction,
        opponent: Position,
        size: usize,
    ) -> Option<Position> {
        let next = resolve_move(self.position, direction, opponent, size)?;
        self.position = next;
        Some(next)
    }

    /// Put the token back on `position` without any move checks.
    pub(crate) fn place(&mut self, position: Position) {
        self.position = position;
    }
}
