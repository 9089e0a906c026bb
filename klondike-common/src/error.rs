use thiserror::Error;

use crate::card::Card;
use crate::pile::PileKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot take a card from an empty {kind} pile")]
pub struct EmptyPileError {
    pub kind: PileKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The move request itself is malformed.
    #[error("invalid move: {0}")]
    InvalidMoveSpec(String),
    /// The request is well-formed but the rules forbid it. No pile was changed.
    #[error("illegal move: {0}")]
    IllegalMove(IllegalMove),
    /// Internal guard; a validated move should never reach an empty pile.
    #[error(transparent)]
    EmptyPile(#[from] EmptyPileError),
}

impl MoveError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        MoveError::InvalidMoveSpec(reason.into())
    }
}

impl From<IllegalMove> for MoveError {
    fn from(reason: IllegalMove) -> Self {
        MoveError::IllegalMove(reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("asked for {requested} cards but the pile holds {available}")]
    NotEnoughCards { requested: usize, available: usize },
    #[error("cannot move a face-down card")]
    FaceDown(Card),
    #[error("{destination} pile does not accept {card}")]
    Rejected { card: Card, destination: PileKind },
    #[error("stock and waste are both empty")]
    NothingToDraw,
}
