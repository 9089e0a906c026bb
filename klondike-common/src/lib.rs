//! Klondike Solitaire rules engine: cards, piles, deal-out and move execution.
//!
//! A [`GameState`] owns every card. Callers drive it one [`MoveSpec`] at a
//! time through [`GameState::attempt_move`] and read piles back through its
//! accessors; nothing outside the engine can mutate a pile it owns.
pub mod action;
pub mod card;
pub mod deck;
mod engine;
pub mod error;
pub mod game;
pub mod pile;

pub use crate::action::{Destination, MoveOutcome, MoveSpec, Source};
pub use crate::card::{Card, Color, Rank, Suit};
pub use crate::deck::Deck;
pub use crate::error::{EmptyPileError, IllegalMove, MoveError};
pub use crate::game::GameState;
pub use crate::pile::{Pile, PileKind};
