//! Random walks over a game session.
//!
//! Both players take turns making uniformly random moves. A walk is fully
//! determined by the session and the seed of the [`fastrand::Rng`] passed in.

use fastrand::Rng;

use crate::game::GameSession;
use crate::player::Side;
use crate::position::Direction;

/// Tally of a random walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Moves that changed a player's position
    pub accepted: usize,
    /// Moves that would have left the board
    pub rejected: usize,
}

/// Play `steps` random moves, starting with [`GameSession::to_move`].
///
/// Returns how many moves were accepted and rejected. A rejected move still
/// uses up its step. Sides alternate every step unless the session enforces
/// turns, in which case a rejected mover tries again.
pub fn random_walk(session: &mut GameSession, steps: usize, rng: &mut Rng) -> WalkStats {
    let mut stats = WalkStats::default();
    let mut side = session.to_move();
    for _ in 0..steps {
        let direction = Direction::ALL[rng.usize(..Direction::ALL.len())];
        match session.attempt_move(side, direction) {
            Ok(Some(_)) => stats.accepted += 1,
            _ => stats.rejected += 1,
        }
        side = next_side(session, side);
    }
    stats
}

/// With enforced turns the session decides; otherwise strictly alternate.
fn next_side(session: &GameSession, side: Side) -> Side {
    if session.config().enforce_turns {
        session.to_move()
    } else {
        side.other()
    }
}
