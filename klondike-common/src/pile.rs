use smallvec::SmallVec;
use std::fmt;

use crate::card::{Card, Rank, Suit};
use crate::error::EmptyPileError;

/// Inline capacity; covers the stock and waste (24) and the longest tableau (19).
pub const PILE_SIZE: usize = 24;

/// Which role a pile plays; selects its placement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileKind {
    Stock,
    Waste,
    Foundation(Suit),
    Tableau,
}

impl fmt::Display for PileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileKind::Stock => write!(f, "stock"),
            PileKind::Waste => write!(f, "waste"),
            PileKind::Foundation(suit) => write!(f, "{} foundation", suit.symbol()),
            PileKind::Tableau => write!(f, "tableau"),
        }
    }
}

/// An ordered run of cards; the last element is the top.
#[derive(Debug, Clone)]
pub struct Pile {
    kind: PileKind,
    cards: SmallVec<[Card; PILE_SIZE]>,
}

impl Pile {
    pub fn new(kind: PileKind) -> Self {
        Self {
            kind,
            cards: SmallVec::new(),
        }
    }

    pub fn from_cards(kind: PileKind, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            kind,
            cards: cards.into_iter().collect(),
        }
    }

    pub fn kind(&self) -> PileKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Bottom to top.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn peek_top(&self) -> Result<&Card, EmptyPileError> {
        self.cards.last().ok_or(EmptyPileError { kind: self.kind })
    }

    /// Number of face-up cards counted down from the top.
    pub fn face_up_count(&self) -> usize {
        self.cards
            .iter()
            .rev()
            .take_while(|card| card.is_face_up())
            .count()
    }

    /// The face-up run at the top of the pile, bottom to top.
    pub fn face_up_cards(&self) -> &[Card] {
        &self.cards[self.len() - self.face_up_count()..]
    }

    /// Appends without checking `can_accept`; callers own that decision.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Result<Card, EmptyPileError> {
        self.cards.pop().ok_or(EmptyPileError { kind: self.kind })
    }

    /// Turns a face-down top card face up, returning it.
    pub(crate) fn reveal_top(&mut self) -> Option<Card> {
        match self.cards.last_mut() {
            Some(card) if !card.is_face_up() => Some(*card.flip()),
            _ => None,
        }
    }

    pub fn can_accept(&self, card: &Card) -> bool {
        match self.kind {
            PileKind::Stock | PileKind::Waste => true,
            PileKind::Foundation(suit) => {
                if card.suit() != suit {
                    return false;
                }
                match self.top() {
                    None => card.rank() == Rank::Ace,
                    Some(top) => top.rank().next() == Some(card.rank()),
                }
            }
            PileKind::Tableau => match self.top() {
                None => card.rank() == Rank::King,
                Some(top) => {
                    top.color() != card.color() && top.rank().prev() == Some(card.rank())
                }
            },
        }
    }
}
