//! Line-oriented text protocol for driving a game session.
//!
//! The format follows the Go Text Protocol: each line is an optional numeric
//! id followed by a command and its arguments. Responses start with `=` on
//! success or `?` on failure, followed by the id (if any) and a message, and
//! end with a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `move <player> <direction>` - Move a player (`red`/`blue`, `up`/`down`/`left`/`right`)
//! - `keys <chars>` - Feed key presses (`wasd` and `ijkl`) one at a time
//! - `where` - Report both players' positions
//! - `moves <player>` - List the directions a player can move in and where each lands
//! - `showboard` - Draw the board with both tokens
//! - `cell <row> <column>` - Report the shade of a cell
//! - `reset` - Put both players back on their start cells
//!
//! ## Example
//!
//! ```ignore
//! use gridchase::protocol::CommandLoop;
//! let mut driver = CommandLoop::new(GameSession::new(GameConfig::default())?);
//! driver.run_stdio()?;
//! ```

use std::io::{self, BufRead, Write};

use crate::controls::key_to_command;
use crate::game::GameSession;
use crate::movement::legal_moves;
use crate::player::Side;
use crate::position::{Direction, Position};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "cell",
    "keys",
    "known_command",
    "list_commands",
    "move",
    "moves",
    "name",
    "quit",
    "reset",
    "showboard",
    "version",
    "where",
];

/// Drives a [`GameSession`] from text commands.
pub struct CommandLoop {
    session: GameSession,
    /// Echo every command and its outcome to stderr
    verbose: bool,
}

impl CommandLoop {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Run the command loop on stdin and stdout.
    pub fn run_stdio(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            if self.verbose {
                eprintln!("{command_line} -> {}{message}", if success { "ok " } else { "failed: " });
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "move" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let side = match args[0].parse::<Side>() {
                    Ok(s) => s,
                    Err(e) => return (false, e.to_string()),
                };
                let direction = match args[1].parse::<Direction>() {
                    Ok(d) => d,
                    Err(e) => return (false, e.to_string()),
                };
                self.apply(side, direction)
            }

            "keys" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let mut rejected = 0;
                for key in args.concat().chars() {
                    if let Some((side, direction)) = key_to_command(key) {
                        if !self.apply(side, direction).0 {
                            rejected += 1;
                        }
                    }
                }
                (true, format!("{} rejected {rejected}", self.positions()))
            }

            "moves" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let side = match args[0].parse::<Side>() {
                    Ok(s) => s,
                    Err(e) => return (false, e.to_string()),
                };
                let moves = legal_moves(
                    self.session.position(side),
                    self.session.position(side.other()),
                    self.session.board().size(),
                );
                let listed: Vec<String> = moves
                    .into_iter()
                    .map(|(dir, pos)| format!("{dir} {}", format_position(pos)))
                    .collect();
                (true, listed.join(", "))
            }

            "where" => (true, self.positions()),

            "showboard" => (true, format!("\n{}", self.session)),

            "cell" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let (Ok(row), Ok(column)) = (args[0].parse::<i32>(), args[1].parse::<i32>()) else {
                    return (false, "invalid coordinate".to_string());
                };
                match self.session.board().cell_at(row, column) {
                    Ok(cell) => (true, format!("{} #{:06x}", cell.shade, cell.color)),
                    Err(e) => (false, e.to_string()),
                }
            }

            "reset" => {
                self.session.reset();
                (true, String::new())
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn apply(&mut self, side: Side, direction: Direction) -> (bool, String) {
        match self.session.attempt_move(side, direction) {
            Ok(Some(pos)) => (true, format_position(pos)),
            Ok(None) => (false, format!("{side} cannot move {direction}")),
            Err(e) => (false, e.to_string()),
        }
    }

    fn positions(&self) -> String {
        Side::BOTH
            .iter()
            .map(|&s| format!("{s} {}", format_position(self.session.position(s))))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn format_position(pos: Position) -> String {
    format!("{} {}", pos.row, pos.column)
}
