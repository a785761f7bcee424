//! Movement resolution.
//!
//! A move is one step in a [`Direction`]. If the opponent stands on the
//! target cell the mover jumps over it, landing one cell further. The cell
//! beyond the opponent is not inspected before the final bounds check, so a
//! jump that would land off the board is rejected like any other
//! out-of-bounds move.

use crate::position::{Direction, Position};

/// Compute where a token at `current` ends up when moved in `direction`.
///
/// Returns `None` if the destination lies outside a `size`x`size` board.
pub fn resolve_move(
    current: Position,
    direction: Direction,
    opponent: Position,
    size: usize,
) -> Option<Position> {
    let mut candidate = current.step(direction);
    if candidate == opponent {
        candidate = candidate.step(direction);
    }
    candidate.is_within_bounds(size).then_some(candidate)
}

/// All destinations reachable from `current` in a single move.
pub fn legal_moves(
    current: Position,
    opponent: Position,
    size: usize,
) -> Vec<(Direction, Position)> {
    Direction::ALL
        .into_iter()
        .filter_map(|dir| resolve_move(current, dir, opponent, size).map(|p| (dir, p)))
        .collect()
}
