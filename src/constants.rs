//! Board geometry, colors and other compile-time defaults.
//!
//! The runtime [`GameConfig`](crate::config::GameConfig) starts from these
//! values and may override the board size and colors.
//!
//! # Board Size Configuration
//!
//! The default board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! ```sh
//! cargo build                                              # 9x9 (default)
//! cargo build --no-default-features --features board13x13  # 13x13
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Smallest board on which both players fit on distinct rows.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest board accepted by the runtime configuration.
pub const MAX_BOARD_SIZE: usize = 256;

/// Canvas width in pixels that hosts lay the board out on.
pub const CANVAS_WIDTH: u32 = 600;

/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 600;

// =============================================================================
// Colors (0xRRGGBB)
// =============================================================================

/// Light and dark squares of the checkerboard, indexed by `(row + column) % 2`.
pub const BOARD_COLORS: [u32; 2] = [0xeeeed2, 0x769656];

/// Token colors of the first and second player.
pub const PLAYER_COLORS: [u32; 2] = [0xff0000, 0x0000ff];

// =============================================================================
// Text Rendering
// =============================================================================

/// Glyph for a light square.
pub const GLYPH_LIGHT: char = '.';

/// Glyph for a dark square.
pub const GLYPH_DARK: char = ':';

/// Glyphs for the first and second player's tokens.
pub const GLYPH_PLAYERS: [char; 2] = ['R', 'B'];

// =============================================================================
// Random Walk
// =============================================================================

/// Default number of moves played by the demo random walk.
pub const WALK_STEPS: usize = 40;

/// Default seed for the demo random walk.
pub const WALK_SEED: u64 = 1;
