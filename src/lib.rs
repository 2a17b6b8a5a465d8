//! Rules and state layer for a two-player chess game hosted by a generic
//! board-game framework.
//!
//! - [`board`] - board representation, FEN placement and compact snapshots
//! - [`rules`] - legality gate consulted by the host
//! - [`game`] - session lifecycle on top of a [`host::Host`]

pub mod board;
pub mod catalog;
pub mod console;
pub mod game;
pub mod host;
pub mod options;
pub mod rules;

pub use board::{Board, Piece, PieceKind, Player, Square, StateCodec};
pub use game::{ChessGame, GamePhase};
pub use host::{HeadlessHost, Host};
pub use options::GameOptions;
pub use rules::{MinimalRules, RuleSet, TurnContext};
