//! Keyboard mapping.
//!
//! The first player steers with `w a s d`, the second with `i j k l`.
//! Keys are matched case-insensitively; any other key is ignored.

use crate::player::Side;
use crate::position::Direction;

/// Translate a key press into the player and direction it controls.
pub fn key_to_command(key: char) -> Option<(Side, Direction)> {
    let cmd = match key.to_ascii_lowercase() {
        'w' => (Side::First, Direction::Up),
        's' => (Side::First, Direction::Down),
        'a' => (Side::First, Direction::Left),
        'd' => (Side::First, Direction::Right),
        'i' => (Side::Second, Direction::Up),
        'k' => (Side::Second, Direction::Down),
        'j' => (Side::Second, Direction::Left),
        'l' => (Side::Second, Direction::Right),
        _ => return None,
    };
    Some(cmd)
}
