//! The checkerboard the players move on.
//!
//! The board holds no gameplay state beyond its size: each [`Cell`] only
//! records where it is and which of the two board colors it is drawn in.

use std::fmt;

use crate::constants::{BOARD_COLORS, GLYPH_DARK, GLYPH_LIGHT};
use crate::error::BoardError;
use crate::position::Position;

/// Light or dark square of the checkerboard pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    /// Shade of the square at `(row, column)`; `(0, 0)` is light.
    pub fn at(row: usize, column: usize) -> Self {
        if (row + column) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }

    pub fn index(self) -> usize {
        match self {
            Shade::Light => 0,
            Shade::Dark => 1,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Shade::Light => GLYPH_LIGHT,
            Shade::Dark => GLYPH_DARK,
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shade::Light => f.write_str("light"),
            Shade::Dark => f.write_str("dark"),
        }
    }
}

/// A single square of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub position: Position,
    pub shade: Shade,
    /// Fill color (0xRRGGBB) for hosts that draw the board.
    pub color: u32,
}

/// A square grid of `size * size` cells.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board using the default checkerboard colors.
    pub fn new(size: usize) -> Self {
        Self::with_colors(size, BOARD_COLORS)
    }

    /// Build a board whose squares alternate between `colors[0]` and `colors[1]`.
    pub fn with_colors(size: usize, colors: [u32; 2]) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for column in 0..size {
                let shade = Shade::at(row, column);
                cells.push(Cell {
                    position: Position::new(row as i32, column as i32),
                    shade,
                    color: colors[shade.index()],
                });
            }
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Look up the cell at `(row, column)`.
    pub fn cell_at(&self, row: i32, column: i32) -> Result<&Cell, BoardError> {
        let pos = Position::new(row, column);
        if !pos.is_within_bounds(self.size) {
            return Err(BoardError::OutOfRange {
                row,
                column,
                size: self.size,
            });
        }
        Ok(&self.cells[row as usize * self.size + column as usize])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                write!(f, "{} ", cell.shade.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size() {
        let board = Board::new(9);
        assert_eq!(board.size(), 9);
        assert_eq!(board.cells().count(), 81);
    }

    #[test]
    fn test_cell_at_returns_matching_cell() {
        let board = Board::new(9);
        let cell = board.cell_at(3, 5).unwrap();
        assert_eq!(cell.position, Position::new(3, 5));
    }

    #[test]
    fn test_checkerboard_pattern() {
        let board = Board::with_colors(4, [0x111111, 0x222222]);
        assert_eq!(board.cell_at(0, 0).unwrap().shade, Shade::Light);
        assert_eq!(board.cell_at(0, 1).unwrap().shade, Shade::Dark);
        assert_eq!(board.cell_at(1, 0).unwrap().shade, Shade::Dark);
        assert_eq!(board.cell_at(1, 1).unwrap().color, 0x111111);
        assert_eq!(board.cell_at(2, 3).unwrap().color, 0x222222);
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let board = Board::new(9);
        assert_eq!(
            board.cell_at(9, 0),
            Err(BoardError::OutOfRange {
                row: 9,
                column: 0,
                size: 9
            })
        );
        assert!(board.cell_at(0, -1).is_err());
        assert!(board.cell_at(-1, 0).is_err());
    }

    #[test]
    fn test_display() {
        let board = Board::new(3);
        assert_eq!(board.to_string(), ". : . \n: . : \n. : . \n");
    }
}
