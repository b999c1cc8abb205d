//! Interactive line-based game session.
//!
//! A [`Session`] owns one [`GameHistory`] and turns text commands into calls
//! on it. Game errors are reported back as text and never end the session.

use crate::config::CliConfig;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictactoe_history::{GameError, GameHistory, GameStatus, Position};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  move <cell>   place the next mark (cell: 0-8 or a label such as center, top-left)
  <cell>        same as move
  jump <m>      make history position m active
  moves         list history positions
  status        show whose turn it is or who won
  board         show the active board
  new           start a new game
  help          show this text
  quit          leave";

/// One parsed session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Place the next mark at a cell index.
    Move(usize),
    /// Make a history position active.
    Jump(usize),
    /// List history positions.
    Moves,
    /// Print the status line.
    Status,
    /// Print the active board.
    Board,
    /// Replace the game with a fresh one.
    New,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// A line that is not a session command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}", message)]
pub struct CommandParseError {
    /// What was wrong with the line.
    pub message: String,
}

impl CommandParseError {
    fn new(message: String) -> Self {
        Self { message }
    }
}

/// Parses a cell as a raw index or a position label.
///
/// Any non-negative number is accepted as-is so that out-of-bounds indices
/// reach the game and are reported as illegal moves.
pub fn parse_cell(s: &str) -> Result<usize, CommandParseError> {
    let s = s.trim();
    if let Ok(index) = s.parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .ok_or_else(|| CommandParseError::new(format!("Unknown cell: {}", s)))
}

impl FromStr for SessionCommand {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match (word.to_ascii_lowercase().as_str(), rest) {
            ("move" | "m", cell) if !cell.is_empty() => SessionCommand::Move(parse_cell(cell)?),
            ("jump" | "j", target) if !target.is_empty() => {
                let target = target.parse::<usize>().map_err(|_| {
                    CommandParseError::new(format!("Not a history position: {}", target))
                })?;
                SessionCommand::Jump(target)
            }
            ("move" | "m", _) => {
                return Err(CommandParseError::new("Usage: move <cell>".to_string()));
            }
            ("jump" | "j", _) => return Err(CommandParseError::new("Usage: jump <m>".to_string())),
            ("moves" | "history", "") => SessionCommand::Moves,
            ("status", "") => SessionCommand::Status,
            ("board", "") => SessionCommand::Board,
            ("new", "") => SessionCommand::New,
            ("help" | "?", "") => SessionCommand::Help,
            ("quit" | "exit" | "q", "") => SessionCommand::Quit,
            ("", "") => return Err(CommandParseError::new("Empty command".to_string())),
            _ => SessionCommand::Move(parse_cell(line).map_err(|_| {
                CommandParseError::new(format!("Unknown command: {} (try help)", line))
            })?),
        };
        Ok(command)
    }
}

/// What the session loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the text and read the next command.
    Continue(String),
    /// Stop reading commands.
    Quit,
}

/// One interactive game session.
#[derive(Debug, Clone)]
pub struct Session {
    game: GameHistory,
    config: CliConfig,
}

impl Session {
    /// Creates a session with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: CliConfig) -> Self {
        info!("Starting session");
        Self {
            game: GameHistory::new(),
            config,
        }
    }

    /// The game this session drives.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Parses and executes one input line.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        match line.parse::<SessionCommand>() {
            Ok(command) => self.execute(command),
            Err(e) => Flow::Continue(e.to_string()),
        }
    }

    /// Executes one command against the game.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: SessionCommand) -> Flow {
        let text = match command {
            SessionCommand::Move(cell) => match self.game.apply_move(cell) {
                Ok(()) => self.position_report(),
                Err(e) => report_error(e.into()),
            },
            SessionCommand::Jump(target) => match self.game.jump_to(target) {
                Ok(()) => self.position_report(),
                Err(e) => report_error(e.into()),
            },
            SessionCommand::Moves => self.moves_report(),
            SessionCommand::Status => self.status_line(),
            SessionCommand::Board => self.config.render_board(self.game.current_board()),
            SessionCommand::New => {
                info!("New game");
                self.game = GameHistory::new();
                format!("New game\n{}", self.position_report())
            }
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => return Flow::Quit,
        };
        Flow::Continue(text)
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        writeln!(output, "{}", self.position_report())?;
        write!(output, "{}", self.config.prompt())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(output, "{}", self.config.prompt())?;
                output.flush()?;
                continue;
            }
            match self.handle_line(&line) {
                Flow::Continue(text) => writeln!(output, "{}", text)?,
                Flow::Quit => {
                    debug!("Session ended by command");
                    return Ok(());
                }
            }
            write!(output, "{}", self.config.prompt())?;
            output.flush()?;
        }

        debug!("Session ended at end of input");
        writeln!(output)
    }

    fn status_line(&self) -> String {
        match self.game.outcome() {
            GameStatus::Draw => format!("{} (draw)", self.game.status()),
            _ => self.game.status(),
        }
    }

    fn position_report(&self) -> String {
        format!(
            "{}\n{}",
            self.config.render_board(self.game.current_board()),
            self.status_line()
        )
    }

    fn moves_report(&self) -> String {
        let played = self.game.played_positions();
        self.game
            .list_moves()
            .iter()
            .map(|entry| {
                let index = *entry.move_index();
                let marker = if index == self.game.current_move() { '*' } else { ' ' };
                match index.checked_sub(1).and_then(|m| played.get(m)) {
                    Some(pos) => format!("{} {} ({})", marker, entry.label(), pos),
                    None => format!("{} {}", marker, entry.label()),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn report_error(error: GameError) -> String {
    format!("Error: {}", error)
}
