//! Line-oriented text front-end.
//!
//! Drives a [`ChessGame`] on a [`HeadlessHost`] from stdin, one command per
//! line, and answers on stdout. Errors are reported as `error: ...` and never
//! end the session.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{Player, Square, SquareError, StateError};
use crate::game::{ChessGame, GamePhase};
use crate::host::{HeadlessHost, Host};
use crate::options::{parse_setoption, GameOptions};

pub mod command;

use command::{parse_console_command, ConsoleCommand};

/// Error type for console commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Command needs an argument that was not given
    MissingArgument { command: &'static str },
    InvalidSquare(SquareError),
    InvalidState(StateError),
    /// No piece stands on the square
    EmptySquare { square: Square },
    /// The piece does not belong to the player to move
    NotYourPiece { square: Square },
    /// The rule set refused the move
    MoveRejected { from: Square, to: Square },
    /// Source and destination are the same square
    NullMove { square: Square },
    /// Moves are only accepted while a game is running
    NotPlaying { phase: GamePhase },
    Unknown(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingArgument { command } => {
                write!(f, "'{command}' is missing an argument")
            }
            CommandError::InvalidSquare(e) => write!(f, "{e}"),
            CommandError::InvalidState(e) => write!(f, "{e}"),
            CommandError::EmptySquare { square } => write!(f, "no piece on {square}"),
            CommandError::NotYourPiece { square } => {
                write!(f, "piece on {square} belongs to the other player")
            }
            CommandError::MoveRejected { from, to } => write!(f, "move {from}{to} not allowed"),
            CommandError::NullMove { square } => write!(f, "piece on {square} has to leave its square"),
            CommandError::NotPlaying { phase } => write!(f, "game is {phase}"),
            CommandError::Unknown(line) => write!(f, "unknown command '{line}'"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<SquareError> for CommandError {
    fn from(e: SquareError) -> Self {
        CommandError::InvalidSquare(e)
    }
}

impl From<StateError> for CommandError {
    fn from(e: StateError) -> Self {
        CommandError::InvalidState(e)
    }
}

/// Result of processing a console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command processed successfully, with optional output
    Ok(Option<String>),
    /// Session should end
    Quit,
}

fn owner_label(owner: Option<Player>) -> &'static str {
    match owner {
        Some(Player::White) => "white",
        Some(Player::Black) => "black",
        None => "none",
    }
}

fn parse_square(arg: &str, command: &'static str) -> Result<Square, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument { command });
    }
    Ok(arg.parse::<Square>()?)
}

/// A console session over a headless host.
#[derive(Debug)]
pub struct Console {
    game: ChessGame<HeadlessHost>,
}

impl Console {
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Console {
            game: ChessGame::with_options(HeadlessHost::new(), options),
        }
    }

    #[must_use]
    pub fn game(&self) -> &ChessGame<HeadlessHost> {
        &self.game
    }

    /// Process one input line.
    pub fn handle_line(&mut self, line: &str) -> Result<CommandResult, CommandError> {
        match parse_console_command(line) {
            Some(cmd) => self.execute(cmd),
            None => Ok(CommandResult::Ok(None)),
        }
    }

    pub fn execute(&mut self, cmd: ConsoleCommand) -> Result<CommandResult, CommandError> {
        let output = match cmd {
            ConsoleCommand::Setup => {
                self.game.setup();
                "ok".to_string()
            }
            ConsoleCommand::Teardown => {
                self.game.teardown();
                "ok".to_string()
            }
            ConsoleCommand::Fen(fen) => {
                if fen.is_empty() {
                    return Err(CommandError::MissingArgument { command: "fen" });
                }
                self.game.load_placement(&fen);
                "ok".to_string()
            }
            ConsoleCommand::State => self.game.state_string(),
            ConsoleCommand::Load(state) => {
                if state.is_empty() {
                    return Err(CommandError::MissingArgument { command: "load" });
                }
                self.game.set_state_string(&state)?;
                "ok".to_string()
            }
            ConsoleCommand::Owner(arg) => {
                let sq = parse_square(&arg, "owner")?;
                owner_label(self.game.owner_at(sq.col() as i32, sq.row() as i32)).to_string()
            }
            ConsoleCommand::Select(arg) => {
                let sq = parse_square(&arg, "select")?;
                let allowed = match self.game.board().piece_at(sq) {
                    Some(piece) => self.game.can_select(piece, sq),
                    None => self.game.on_empty_interaction(sq),
                };
                let answer = if allowed { "yes" } else { "no" };
                answer.to_string()
            }
            ConsoleCommand::Move(from, to) => {
                let from = parse_square(&from, "move")?;
                let to = parse_square(&to, "move")?;
                self.try_move(from, to)?;
                "ok".to_string()
            }
            ConsoleCommand::EndTurn => {
                self.game.host_mut().end_turn();
                "ok".to_string()
            }
            ConsoleCommand::Show => {
                format!("{}\nplacement {}", self.game.board(), self.game.board().to_placement())
            }
            ConsoleCommand::Status => {
                let turn = self.game.host().current_player();
                format!(
                    "phase {} turn {} winner {} draw {}",
                    self.game.phase(),
                    owner_label(Some(turn)),
                    owner_label(self.game.winner()),
                    self.game.is_draw()
                )
            }
            ConsoleCommand::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let (name, value) =
                    parse_setoption(&parts).ok_or(CommandError::MissingArgument { command: "setoption" })?;
                self.game.options_mut().apply_option(&name, value.as_deref());
                return Ok(CommandResult::Ok(None));
            }
            ConsoleCommand::Quit => return Ok(CommandResult::Quit),
            ConsoleCommand::Unknown(line) => return Err(CommandError::Unknown(line)),
        };
        Ok(CommandResult::Ok(Some(output)))
    }

    /// Run the legality gate for a drag from `from` to `to` and, when it
    /// passes, move the piece and hand the turn over.
    fn try_move(&mut self, from: Square, to: Square) -> Result<(), CommandError> {
        if self.game.phase() != GamePhase::Playable {
            return Err(CommandError::NotPlaying {
                phase: self.game.phase(),
            });
        }
        let Some(piece) = self.game.board().piece_at(from) else {
            return Err(CommandError::EmptySquare { square: from });
        };
        if from == to {
            return Err(CommandError::NullMove { square: from });
        }
        if !self.game.can_select(piece, from) {
            return Err(CommandError::NotYourPiece { square: from });
        }
        if !self.game.can_move(piece, from, to) {
            return Err(CommandError::MoveRejected { from, to });
        }
        if let Some(released) = self.game.relocate(from, to) {
            log::debug!("{} released from {to}", released.piece());
        }
        self.game.host_mut().end_turn();
        Ok(())
    }
}

/// Read commands from stdin until `quit` or end of input.
pub fn run_console_loop() {
    let mut console = Console::new(GameOptions::default());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("stdin read failed: {e}");
                break;
            }
        };
        match console.handle_line(&line) {
            Ok(CommandResult::Quit) => break,
            Ok(CommandResult::Ok(Some(output))) => {
                let _ = writeln!(stdout, "{output}");
            }
            Ok(CommandResult::Ok(None)) => {}
            Err(e) => {
                let _ = writeln!(stdout, "error: {e}");
            }
        }
        let _ = stdout.flush();
    }
}
