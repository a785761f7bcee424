//! Integration tests for gridchase.
//!
//! These drive the public API: pure move resolution, the player/session
//! state changes built on it, and the text protocol end to end.

use fastrand::Rng;

use gridchase::config::GameConfig;
use gridchase::constants::{MAX_BOARD_SIZE, N};
use gridchase::game::GameSession;
use gridchase::movement::resolve_move;
use gridchase::player::{Player, Side};
use gridchase::playout::random_walk;
use gridchase::position::{Direction, Position};
use gridchase::protocol::CommandLoop;

// =============================================================================
// Helper functions
// =============================================================================

/// A position that is never adjacent to the cells under test.
fn far_away(size: usize) -> Position {
    Position::new(size as i32 + 10, size as i32 + 10)
}

/// Whether `pos` touches the board edge that `direction` points at.
fn on_leading_edge(pos: Position, direction: Direction, size: usize) -> bool {
    let last = size as i32 - 1;
    match direction {
        Direction::Up => pos.row == 0,
        Direction::Down => pos.row == last,
        Direction::Left => pos.column == 0,
        Direction::Right => pos.column == last,
    }
}

fn all_cells(size: usize) -> impl Iterator<Item = Position> {
    let s = size as i32;
    (0..s).flat_map(move |r| (0..s).map(move |c| Position::new(r, c)))
}

// =============================================================================
// Move resolution
// =============================================================================

#[test]
fn test_interior_moves_take_one_step() {
    for size in 2..=9 {
        let opponent = far_away(size);
        for pos in all_cells(size) {
            for dir in Direction::ALL {
                if on_leading_edge(pos, dir, size) {
                    continue;
                }
                assert_eq!(
                    resolve_move(pos, dir, opponent, size),
                    Some(pos.step(dir)),
                    "size {size} from {pos} moving {dir}"
                );
            }
        }
    }
}

#[test]
fn test_edge_moves_are_rejected() {
    for size in 2..=9 {
        let opponent = far_away(size);
        for pos in all_cells(size) {
            for dir in Direction::ALL {
                if on_leading_edge(pos, dir, size) {
                    assert_eq!(resolve_move(pos, dir, opponent, size), None);
                }
            }
        }
    }
}

#[test]
fn test_overtake_examples() {
    assert_eq!(
        resolve_move(Position::new(2, 4), Direction::Up, Position::new(1, 4), 9),
        Some(Position::new(0, 4))
    );
    assert_eq!(
        resolve_move(Position::new(1, 4), Direction::Up, Position::new(0, 4), 9),
        None
    );
    assert_eq!(
        resolve_move(Position::new(4, 4), Direction::Right, Position::new(7, 7), 9),
        Some(Position::new(4, 5))
    );
}

#[test]
fn test_overtake_in_every_direction() {
    let center = Position::new(4, 4);
    for dir in Direction::ALL {
        let opponent = center.step(dir);
        assert_eq!(
            resolve_move(center, dir, opponent, 9),
            Some(opponent.step(dir)),
            "jumping {dir}"
        );
    }
}

#[test]
fn test_resolve_move_is_pure() {
    let current = Position::new(3, 3);
    let opponent = Position::new(3, 4);
    let first = resolve_move(current, Direction::Right, opponent, 9);
    let second = resolve_move(current, Direction::Right, opponent, 9);
    assert_eq!(first, second);
    assert_eq!(current, Position::new(3, 3));
    assert_eq!(opponent, Position::new(3, 4));
}

// =============================================================================
// Players and sessions
// =============================================================================

#[test]
fn test_player_round_trip() {
    let opponent = Position::new(8, 8);
    let start = Position::new(4, 4);
    let mut player = Player::new(Side::First, start);
    assert!(player.attempt_move(Direction::Up, opponent, 9).is_some());
    assert!(player.attempt_move(Direction::Down, opponent, 9).is_some());
    assert_eq!(player.position(), start);
}

#[test]
fn test_default_session_uses_compiled_size() {
    let session = GameSession::new(GameConfig::default()).unwrap();
    assert_eq!(session.board().size(), N);
    assert_eq!(
        session.position(Side::First),
        Position::new(0, (N / 2) as i32)
    );
    assert_eq!(
        session.position(Side::Second),
        Position::new(N as i32 - 1, (N / 2) as i32)
    );
}

#[test]
fn test_head_on_approach_then_jump() {
    let mut session = GameSession::new(GameConfig::with_size(5)).unwrap();
    // red (0,2) and blue (4,2) close in on each other.
    session.attempt_move(Side::First, Direction::Down).unwrap();
    session.attempt_move(Side::Second, Direction::Up).unwrap();
    assert_eq!(session.position(Side::First), Position::new(1, 2));
    assert_eq!(session.position(Side::Second), Position::new(3, 2));
    session.attempt_move(Side::First, Direction::Down).unwrap();
    // blue now faces red at (2,2) and jumps to (1,2).
    let got = session.attempt_move(Side::Second, Direction::Up).unwrap();
    assert_eq!(got, Some(Position::new(1, 2)));
}

#[test]
fn test_players_never_share_a_cell() {
    for seed in 0..20 {
        let mut session = GameSession::new(GameConfig::with_size(3)).unwrap();
        let mut rng = Rng::with_seed(seed);
        for _ in 0..50 {
            random_walk(&mut session, 1, &mut rng);
            assert_ne!(
                session.position(Side::First),
                session.position(Side::Second),
                "seed {seed}"
            );
        }
    }
}

#[test]
fn test_config_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("gridchase-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("game.toml");
    std::fs::write(&path, "board_size = 7\nenforce_turns = true\n").unwrap();

    let config = GameConfig::load(&path).unwrap();
    assert_eq!(config.board_size, 7);
    let mut session = GameSession::new(config).unwrap();
    assert!(session.attempt_move(Side::Second, Direction::Up).is_err());
    assert!(session.attempt_move(Side::First, Direction::Down).is_ok());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_session_refuses_degenerate_boards() {
    // A 1x1 board would put both players on the same cell.
    assert!(GameSession::new(GameConfig::with_size(1)).is_err());
    assert!(GameSession::new(GameConfig::with_size(0)).is_err());
}

#[test]
fn test_session_refuses_oversized_boards() {
    assert!(GameSession::new(GameConfig::with_size(MAX_BOARD_SIZE + 1)).is_err());
    assert!(GameSession::new(GameConfig::with_size(i32::MAX as usize)).is_err());
    let session = GameSession::new(GameConfig::with_size(MAX_BOARD_SIZE)).unwrap();
    assert_eq!(session.board().cells().count(), MAX_BOARD_SIZE * MAX_BOARD_SIZE);
}

// =============================================================================
// Text protocol
// =============================================================================

#[test]
fn test_protocol_session() {
    let mut driver = CommandLoop::new(GameSession::new(GameConfig::with_size(5)).unwrap());
    let input = "\
10 keys ssss
11 keys i
12 where
13 move red left
14 cell 4 4
15 cell 5 0
";
    let mut out = Vec::new();
    driver.run(input.as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
    // red walks down to (3,2); blue at (4,2) cannot be jumped from there
    // because the cell beyond is off the board.
    assert_eq!(lines[0], "=10 red 3 2 blue 4 2 rejected 1");
    // blue at (4,2) moving up jumps red at (3,2) and lands on (2,2).
    assert_eq!(lines[1], "=11 red 3 2 blue 2 2 rejected 0");
    assert_eq!(lines[2], "=12 red 3 2 blue 2 2");
    assert_eq!(lines[3], "=13 3 1");
    assert_eq!(lines[4], "=14 light #eeeed2");
    assert!(lines[5].starts_with("?15 "));
    assert_eq!(driver.session().move_count(), 5);
}
