use std::fmt;
use std::hash::{Hash, Hasher};

pub const MAX_RANK: u8 = 13;
pub const MAX_SUIT: u8 = 4;
pub const MAX_CARD: u8 = MAX_SUIT * MAX_RANK;

const RANKS: [char; 13] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; MAX_RANK as usize] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Face value, Ace = 1 through King = 13.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=MAX_RANK => Some(Self::ALL[value as usize - 1]),
            _ => None,
        }
    }

    /// The rank directly above, `None` for a King.
    pub fn next(self) -> Option<Self> {
        Self::from_value(self.value() + 1)
    }

    /// The rank directly below, `None` for an Ace.
    pub fn prev(self) -> Option<Self> {
        Self::from_value(self.value() - 1)
    }

    pub fn symbol(self) -> char {
        RANKS[self.value() as usize - 1]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; MAX_SUIT as usize] =
        [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Spades | Suit::Clubs => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
}

/// A playing card. Identity is the (rank, suit) pair; orientation is the only
/// mutable state and is ignored by equality.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Creates a face-down card.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn flip(&mut self) -> &mut Self {
        self.face_up = !self.face_up;
        self
    }

    /// Dense index in `0..MAX_CARD`, suit-major.
    pub fn id(&self) -> u8 {
        self.suit as u8 * MAX_RANK + (self.rank.value() - 1)
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    pub fn to_pretty_string(&self) -> String {
        format!("{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_derived_from_suit() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).color(), Color::Black);
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).color(), Color::Black);
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).color(), Color::Red);
        assert_eq!(Card::new(Rank::Ace, Suit::Diamonds).color(), Color::Red);
    }

    #[test]
    fn test_flip_toggles_and_chains() {
        let mut card = Card::new(Rank::Queen, Suit::Hearts);
        assert!(!card.is_face_up());
        assert!(card.flip().is_face_up());
        assert!(!card.flip().flip().flip().is_face_up());
    }

    #[test]
    fn test_equality_ignores_orientation() {
        let mut a = Card::new(Rank::Ten, Suit::Clubs);
        let b = Card::new(Rank::Ten, Suit::Clubs);
        a.flip();
        assert_eq!(a, b);
        assert_ne!(a, Card::new(Rank::Ten, Suit::Spades));
    }

    #[test]
    fn test_rank_neighbours() {
        assert_eq!(Rank::Ace.prev(), None);
        assert_eq!(Rank::Ace.next(), Some(Rank::Two));
        assert_eq!(Rank::King.next(), None);
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
        for rank in Rank::ALL {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }
    }

    #[test]
    fn test_ids_are_dense_and_unique() {
        let mut seen = [false; MAX_CARD as usize];
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let id = Card::new(rank, suit).id() as usize;
                assert!(!seen[id]);
                seen[id] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_pretty_string() {
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_pretty_string(), "T♦");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
    }
}
