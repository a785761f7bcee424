//! Runtime game configuration, loadable from TOML.
//!
//! ```toml
//! board_size = 7
//! board_colors = [0xeeeed2, 0x769656]
//! player_colors = [0xff0000, 0x0000ff]
//! enforce_turns = true
//! ```

use std::path::Path;

use crate::constants::{
    BOARD_COLORS, CANVAS_HEIGHT, CANVAS_WIDTH, MAX_BOARD_SIZE, MIN_BOARD_SIZE, N, PLAYER_COLORS,
};
use crate::error::ConfigError;
use crate::player::Side;
use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of cells in a row or column.
    pub board_size: usize,
    /// Light and dark checkerboard colors (0xRRGGBB).
    pub board_colors: [u32; 2],
    /// Token colors of the first and second player.
    pub player_colors: [u32; 2],
    /// Reject a move by the player who moved last.
    pub enforce_turns: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: N,
            board_colors: BOARD_COLORS,
            player_colors: PLAYER_COLORS,
            enforce_turns: false,
        }
    }
}

impl GameConfig {
    /// Default configuration with a different board size.
    pub fn with_size(board_size: usize) -> Self {
        GameConfig {
            board_size,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be >= {MIN_BOARD_SIZE} (got {})",
                self.board_size
            )));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be <= {MAX_BOARD_SIZE} (got {})",
                self.board_size
            )));
        }
        if self.player_colors[0] == self.player_colors[1] {
            return Err(ConfigError::Validation(
                "player_colors must differ".into(),
            ));
        }
        Ok(())
    }

    /// Where `side` starts: the first player on the top row, the second on
    /// the bottom row, both in the middle column.
    pub fn start_position(&self, side: Side) -> Position {
        let column = (self.board_size / 2) as i32;
        let row = match side {
            Side::First => 0,
            Side::Second => self.board_size as i32 - 1,
        };
        Position::new(row, column)
    }

    /// Width and height in canvas pixels of one cell.
    pub fn cell_extent(&self) -> (f64, f64) {
        let size = self.board_size.max(1) as f64;
        (CANVAS_WIDTH as f64 / size, CANVAS_HEIGHT as f64 / size)
    }
}
