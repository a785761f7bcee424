//! A game session: the board and both players.
//!
//! The session is owned by whatever drives input and is passed to it by
//! `&mut`; nothing is stored globally. Move resolution itself is pure (see
//! [`movement`](crate::movement)); the session only commits the result.

use std::fmt;

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ConfigError, SessionError};
use crate::player::{Player, Side};
use crate::position::{Direction, Position};

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    players: [Player; 2],
    /// Side that made the last accepted move
    last_mover: Option<Side>,
    /// Number of accepted moves
    moves: usize,
}

impl GameSession {
    /// Start a session with both players on their start cells.
    ///
    /// Fails if `config` does not pass [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::with_colors(config.board_size, config.board_colors);
        let players = Side::BOTH.map(|side| {
            Player::with_color(
                side,
                config.player_colors[side.index()],
                config.start_position(side),
            )
        });
        Ok(Self {
            config,
            board,
            players,
            last_mover: None,
            moves: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn position(&self, side: Side) -> Position {
        self.player(side).position()
    }

    /// Number of accepted moves since the session started or was reset.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Side expected to move next when turns are enforced.
    pub fn to_move(&self) -> Side {
        self.last_mover.map_or(Side::First, Side::other)
    }

    /// Move `side` one step in `direction`.
    ///
    /// Returns `Ok(Some(pos))` with the new position, `Ok(None)` when the
    /// destination is off the board, and `Err` only when turns are enforced
    /// and `side` is not the one to move.
    pub fn attempt_move(
        &mut self,
        side: Side,
        direction: Direction,
    ) -> Result<Option<Position>, SessionError> {
        if self.config.enforce_turns && side != self.to_move() {
            return Err(SessionError::OutOfTurn {
                expected: self.to_move().name(),
            });
        }
        let opponent = self.position(side.other());
        let size = self.board.size();
        let moved = self.players[side.index()].attempt_move(direction, opponent, size);
        if moved.is_some() {
            self.last_mover = Some(side);
            self.moves += 1;
        }
        Ok(moved)
    }

    /// Put both players back on their start cells.
    pub fn reset(&mut self) {
        for side in Side::BOTH {
            let start = self.config.start_position(side);
            self.players[side.index()].place(start);
        }
        self.last_mover = None;
        self.moves = 0;
    }

    /// Side whose token occupies `pos`, if any.
    pub fn occupant(&self, pos: Position) -> Option<Side> {
        Side::BOTH.into_iter().find(|&s| self.position(s) == pos)
    }
}

impl fmt::Display for GameSession {
    /// Board with player tokens drawn over their cells, top row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.board.cells() {
            let ch = match self.occupant(cell.position) {
                Some(side) => side.glyph(),
                None => cell.shade.glyph(),
            };
            write!(f, "{ch} ")?;
            if cell.position.column as usize + 1 == self.board.size() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
