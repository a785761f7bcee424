//! Gridchase: the movement core of a two-player grid chase game.
//!
//! Two tokens sit on opposite edges of a square checkerboard and move one
//! cell at a time in the four orthogonal directions. A token that would step
//! onto its opponent jumps over it instead, and any move that would leave the
//! board is rejected.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size, colors and other tunables
//! - [`config`] - Runtime configuration loaded from TOML
//! - [`position`] - Coordinates and directions
//! - [`movement`] - Pure move resolution, including the jump rule
//! - [`board`] - The checkerboard of cells
//! - [`player`] - Player tokens and the sole state-changing move
//! - [`game`] - A session owning the board and both players
//! - [`controls`] - Key press to player/direction mapping
//! - [`playout`] - Seeded random walks
//! - [`protocol`] - Line-oriented text command loop
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use gridchase::config::GameConfig;
//! use gridchase::game::GameSession;
//! use gridchase::player::Side;
//! use gridchase::position::{Direction, Position};
//!
//! let mut session = GameSession::new(GameConfig::with_size(9))?;
//! let moved = session.attempt_move(Side::First, Direction::Down).unwrap();
//! assert_eq!(moved, Some(Position::new(1, 4)));
//! println!("{session}");
//! # Ok::<(), gridchase::error::ConfigError>(())
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod controls;
pub mod error;
pub mod game;
pub mod movement;
pub mod player;
pub mod playout;
pub mod position;
pub mod protocol;
