use rand::{SeedableRng, rngs::StdRng};

use crate::card::{MAX_CARD, MAX_RANK, Suit};
use crate::deck::Deck;
use crate::pile::{Pile, PileKind};

pub const TOTAL_FOUNDATIONS: usize = 4;
pub const TOTAL_TABLEAUS: usize = 7;

/// Identifies a pile that can take part in a transfer. Tableau indices are 0-based here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PileId {
    Waste,
    Foundation(Suit),
    Tableau(usize),
}

/// One game of Klondike: the stock, the waste, a foundation per suit and
/// seven tableaus. All cards are owned by exactly one pile at any time.
///
/// Mutation goes through [`GameState::attempt_move`], which takes `&mut self`,
/// so there is never more than one move in flight per game.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) stock: Pile,
    pub(crate) waste: Pile,
    pub(crate) foundations: [Pile; TOTAL_FOUNDATIONS],
    pub(crate) tableaus: [Pile; TOTAL_TABLEAUS],
    seed: Option<u64>,
}

impl GameState {
    /// Shuffles with `seed`, or a random one, and deals.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = Self::with_deck(Deck::new_shuffled(&mut rng));
        state.seed = Some(seed);
        tracing::info!(seed, "dealt new game");
        state
    }

    /// Deals `deck` as-is; the last card of the deck is dealt first.
    pub fn with_deck(deck: Deck) -> Self {
        let mut state = Self {
            stock: Pile::from_cards(PileKind::Stock, deck.into_cards()),
            waste: Pile::new(PileKind::Waste),
            foundations: Suit::ALL.map(|suit| Pile::new(PileKind::Foundation(suit))),
            tableaus: std::array::from_fn(|_| Pile::new(PileKind::Tableau)),
            seed: None,
        };
        state.deal();
        state
    }

    /// Tableau `i` gets `i + 1` cards with only the last one face up; the rest
    /// stays in the stock face down.
    fn deal(&mut self) {
        for (i, tableau) in self.tableaus.iter_mut().enumerate() {
            for _ in 0..=i {
                match self.stock.pop() {
                    Ok(card) => tableau.push(card),
                    Err(_) => return,
                }
            }
            tableau.reveal_top();
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn foundation(&self, suit: Suit) -> &Pile {
        &self.foundations[suit.index()]
    }

    /// Indexed by [`Suit::index`].
    pub fn foundations(&self) -> &[Pile; TOTAL_FOUNDATIONS] {
        &self.foundations
    }

    /// 0-based, unlike the positions in a `MoveSpec`.
    pub fn tableau(&self, index: usize) -> Option<&Pile> {
        self.tableaus.get(index)
    }

    pub fn tableaus(&self) -> &[Pile; TOTAL_TABLEAUS] {
        &self.tableaus
    }

    pub(crate) fn pile(&self, id: PileId) -> &Pile {
        match id {
            PileId::Waste => &self.waste,
            PileId::Foundation(suit) => &self.foundations[suit.index()],
            PileId::Tableau(idx) => &self.tableaus[idx],
        }
    }

    pub(crate) fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id {
            PileId::Waste => &mut self.waste,
            PileId::Foundation(suit) => &mut self.foundations[suit.index()],
            PileId::Tableau(idx) => &mut self.tableaus[idx],
        }
    }

    fn piles(&self) -> impl Iterator<Item = &Pile> {
        [&self.stock, &self.waste]
            .into_iter()
            .chain(self.foundations.iter())
            .chain(self.tableaus.iter())
    }

    pub fn total_cards(&self) -> usize {
        self.piles().map(Pile::len).sum()
    }

    /// Number of cards already on the foundations.
    pub fn foundation_score(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }

    pub fn is_won(&self) -> bool {
        self.foundations
            .iter()
            .all(|pile| pile.len() == MAX_RANK as usize)
    }

    /// Every card of the deck is present exactly once.
    pub fn is_valid(&self) -> bool {
        let mut seen = [false; MAX_CARD as usize];
        for card in self.piles().flat_map(|pile| pile.cards()) {
            let id = card.id() as usize;
            if seen[id] {
                return false;
            }
            seen[id] = true;
        }
        seen.iter().all(|&s| s)
    }

    pub fn pretty_print(&self) -> String {
        let mut output = String::new();

        if !self.stock.is_empty() {
            output.push_str("Stock: ");
            push_cards(&mut output, &self.stock);
            output.push('\n');
        }

        if !self.waste.is_empty() {
            output.push_str("Waste: ");
            push_cards(&mut output, &self.waste);
            output.push('\n');
        }

        for (i, pile) in self.foundations.iter().enumerate() {
            if let Some(card) = pile.top() {
                output.push_str(&format!("Foundation{}: {}\n", i + 1, card.to_pretty_string()));
            }
        }

        for (i, tableau) in self.tableaus.iter().enumerate() {
            if tableau.is_empty() {
                continue;
            }
            output.push_str(&format!("Tableau{}: ", i + 1));
            push_cards(&mut output, tableau);
            output.push('\n');
        }

        output.truncate(output.trim_end().len());
        output
    }
}

/// Writes face-down cards, a `|`, then face-up cards.
fn push_cards(output: &mut String, pile: &Pile) {
    let sep = pile.len() - pile.face_up_count();
    for (i, card) in pile.cards().iter().enumerate() {
        if i == sep {
            output.push('|');
        }
        output.push_str(&card.to_pretty_string());
    }
}
