//! Legality gate and terminal-state queries.
//!
//! The host asks these predicates before letting a piece be picked up or
//! dropped. Every query gets an immutable board snapshot and an explicit
//! [`TurnContext`]; implementations must not depend on hidden state.
//!
//! [`MinimalRules`] only enforces turn ownership. A full rules engine would
//! implement [`RuleSet`] with per-piece movement patterns, path blocking,
//! check safety and draw conditions, keeping the same signatures.

use crate::board::{Board, Piece, Player, Square};

/// Turn information the host supplies with every query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnContext {
    pub current: Player,
}

impl TurnContext {
    #[must_use]
    pub const fn new(current: Player) -> Self {
        TurnContext { current }
    }
}

/// Rules consulted by the host during play.
pub trait RuleSet {
    /// May `piece`, standing on `source`, be picked up?
    fn can_select(&self, board: &Board, piece: Piece, source: Square, ctx: TurnContext) -> bool;

    /// May `piece` move from `source` to `dest`?
    ///
    /// Hosts only ask this after [`RuleSet::can_select`] allowed the piece.
    fn can_move(
        &self,
        board: &Board,
        piece: Piece,
        source: Square,
        dest: Square,
        ctx: TurnContext,
    ) -> bool;

    /// Interaction with an empty square. Returns whether anything happened.
    fn on_empty_interaction(&self, _board: &Board, _holder: Square) -> bool {
        false
    }

    /// Winner of the game so far, if any.
    fn winner(&self, board: &Board) -> Option<Player>;

    fn is_draw(&self, board: &Board) -> bool;
}

/// Turn-ownership check only; every move is allowed and games never end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinimalRules;

impl RuleSet for MinimalRules {
    fn can_select(&self, _board: &Board, piece: Piece, _source: Square, ctx: TurnContext) -> bool {
        Piece::owner_of_tag(piece.tag()) == ctx.current
    }

    fn can_move(
        &self,
        _board: &Board,
        _piece: Piece,
        _source: Square,
        _dest: Square,
        _ctx: TurnContext,
    ) -> bool {
        true
    }

    fn winner(&self, _board: &Board) -> Option<Player> {
        None
    }

    fn is_draw(&self, _board: &Board) -> bool {
        false
    }
}
