//! Chess session driven by the host framework.
//!
//! [`ChessGame`] owns the board, talks to the host for textures and turn
//! order, and delegates every legality decision to a [`RuleSet`].
//!
//! # Example
//! ```
//! use chess_rules::game::ChessGame;
//! use chess_rules::host::HeadlessHost;
//! use chess_rules::board::Player;
//!
//! let mut game = ChessGame::new(HeadlessHost::new());
//! game.setup();
//! assert_eq!(game.owner_at(0, 0), Some(Player::White));
//! game.teardown();
//! assert_eq!(game.owner_at(0, 0), None);
//! ```

use std::fmt;

use crate::board::{Board, Occupant, Piece, Player, Square, StateError, TextureId, BOARD_SIZE};
use crate::catalog;
use crate::host::Host;
use crate::options::GameOptions;
use crate::rules::{MinimalRules, RuleSet, TurnContext};

/// Number of players in a chess session.
pub const PLAYER_COUNT: usize = 2;

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Uninitialized,
    Playable,
    Stopped,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::Uninitialized => write!(f, "uninitialized"),
            GamePhase::Playable => write!(f, "playable"),
            GamePhase::Stopped => write!(f, "stopped"),
        }
    }
}

/// Pixel center of a square, with row 0 drawn at the bottom.
///
/// Coordinates saturate at `i32::MAX` for sizes too large for the grid.
#[must_use]
pub fn square_position(sq: Square, piece_size: u32) -> (i32, i32) {
    let size = i32::try_from(piece_size).unwrap_or(i32::MAX);
    let center = |index: usize| {
        // index < 8, always fits
        (index as i32).saturating_mul(size).saturating_add(size / 2)
    };
    (center(sq.col()), center(BOARD_SIZE - 1 - sq.row()))
}

/// A two-player chess session on top of a host framework.
#[derive(Debug)]
pub struct ChessGame<H: Host, R: RuleSet = MinimalRules> {
    host: H,
    rules: R,
    options: GameOptions,
    board: Board,
    phase: GamePhase,
    square_texture: Option<TextureId>,
}

impl<H: Host> ChessGame<H, MinimalRules> {
    /// Session with default options and the minimal rule set.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_rules(host, MinimalRules, GameOptions::default())
    }

    #[must_use]
    pub fn with_options(host: H, options: GameOptions) -> Self {
        Self::with_rules(host, MinimalRules, options)
    }
}

impl<H: Host, R: RuleSet> ChessGame<H, R> {
    #[must_use]
    pub fn with_rules(host: H, rules: R, options: GameOptions) -> Self {
        ChessGame {
            host,
            rules,
            options,
            board: Board::empty(),
            phase: GamePhase::Uninitialized,
            square_texture: None,
        }
    }

    /// Configure the host for a 2-player 8x8 game, place the starting
    /// position and start play.
    ///
    /// Calling this on a running game starts over from a fresh board.
    pub fn setup(&mut self) {
        if self.phase == GamePhase::Playable {
            log::debug!("setup called on a running game, starting over");
            self.board.clear();
        }
        self.host.set_number_of_players(PLAYER_COUNT);
        self.host.configure_grid(BOARD_SIZE, BOARD_SIZE);
        self.square_texture = Some(self.host.load_texture(&self.options.square_texture));

        let start = self.options.start_position.clone();
        self.import_placement(&start);

        self.set_phase(GamePhase::Playable);
        self.host.start_game();
    }

    /// Release every occupant. Safe to call on an empty board.
    pub fn teardown(&mut self) {
        let released = self.board.clear();
        log::debug!("teardown released {released} pieces");
        if self.phase == GamePhase::Playable {
            self.set_phase(GamePhase::Stopped);
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        log::debug!("game phase {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    /// Build a fully dressed occupant for `piece` standing on `sq`.
    fn dress(host: &mut H, piece_size: u32, sq: Square, piece: Piece) -> Occupant {
        catalog::piece_for_player(host, piece.owner, piece.kind, piece_size)
            .with_position(square_position(sq, piece_size))
    }

    /// Import a FEN piece placement onto the current board.
    ///
    /// Nothing is cleared first; see [`Board::import_placement`].
    pub fn import_placement(&mut self, fen: &str) {
        let Self { host, board, options, .. } = self;
        let size = options.piece_size;
        board.import_placement_with(fen, |sq, piece| Self::dress(&mut *host, size, sq, piece));
    }

    /// Clear the board and import a placement in its place.
    pub fn load_placement(&mut self, fen: &str) {
        self.board.clear();
        self.import_placement(fen);
    }

    /// Compact state string of the current board.
    #[must_use]
    pub fn state_string(&self) -> String {
        self.board.state_string()
    }

    /// Snapshot the host stores right after setup.
    #[must_use]
    pub fn initial_state_string(&self) -> String {
        self.state_string()
    }

    /// Restore the board from a compact state string using the configured
    /// decoder. The board is unchanged on error.
    pub fn set_state_string(&mut self, s: &str) -> Result<(), StateError> {
        let Self { host, board, options, .. } = self;
        let size = options.piece_size;
        board.set_state_string_with(s, options.state_codec, |sq, piece| {
            Self::dress(&mut *host, size, sq, piece)
        })
    }

    fn turn(&self) -> TurnContext {
        TurnContext::new(self.host.current_player())
    }

    /// May `piece` on `source` be picked up by the player to move?
    #[must_use]
    pub fn can_select(&self, piece: Piece, source: Square) -> bool {
        self.rules.can_select(&self.board, piece, source, self.turn())
    }

    /// [`ChessGame::can_select`] for whatever stands on `source`; `false`
    /// when the square is empty.
    #[must_use]
    pub fn can_select_at(&self, source: Square) -> bool {
        self.board
            .piece_at(source)
            .is_some_and(|piece| self.can_select(piece, source))
    }

    #[must_use]
    pub fn can_move(&self, piece: Piece, source: Square, dest: Square) -> bool {
        self.rules
            .can_move(&self.board, piece, source, dest, self.turn())
    }

    /// Interaction with an empty square; currently always declined.
    #[must_use]
    pub fn on_empty_interaction(&self, holder: Square) -> bool {
        self.rules.on_empty_interaction(&self.board, holder)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.rules.winner(&self.board)
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.rules.is_draw(&self.board)
    }

    /// Owner of the piece at `(col, row)`, `None` off the board or on an
    /// empty square.
    #[must_use]
    pub fn owner_at(&self, col: i32, row: i32) -> Option<Player> {
        self.board.owner_at(col, row)
    }

    /// Move whatever stands on `from` to `to`, as the host does once a drop
    /// was permitted. Returns the occupant released from `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Occupant> {
        let released = self.board.move_occupant(from, to);
        if let Some(occupant) = self.board.occupant_at_mut(to) {
            occupant.set_position(square_position(to, self.options.piece_size));
        }
        released
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut GameOptions {
        &mut self.options
    }

    /// Texture loaded for board squares during setup.
    #[must_use]
    pub fn square_texture(&self) -> Option<TextureId> {
        self.square_texture
    }
}
