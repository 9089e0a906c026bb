use std::fmt;
use std::str::FromStr;

use crate::card::Card;
use crate::error::MoveError;
use crate::game::TOTAL_TABLEAUS;

/// Where a transfer lifts its cards from. Tableau positions are 1-indexed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Source {
    Waste,
    Tableau(usize),
}

/// Where a transfer lands. `Foundation` means the one matching the lead card's suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Destination {
    Tableau(usize),
    Foundation,
}

/// A single player request.
///
/// Notation: `D` draws, `DS` / `D<t>` play the waste card to its foundation or
/// onto tableau `t`, `<t>S` plays a tableau card to its foundation and
/// `<t><u>[count]` moves `count` cards between tableaus.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveSpec {
    /// Draw one card, or redeal the waste once the stock is exhausted.
    Draw,
    Transfer {
        source: Source,
        destination: Destination,
        count: usize,
    },
}

impl MoveSpec {
    pub fn transfer(source: Source, destination: Destination) -> Self {
        MoveSpec::Transfer {
            source,
            destination,
            count: 1,
        }
    }

    pub fn with_count(self, count: usize) -> Self {
        match self {
            MoveSpec::Draw => MoveSpec::Draw,
            MoveSpec::Transfer {
                source,
                destination,
                ..
            } => MoveSpec::Transfer {
                source,
                destination,
                count,
            },
        }
    }
}

impl FromStr for MoveSpec {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_uppercase();
        let invalid = || MoveError::invalid(format!("unrecognized move `{s}`"));
        let mut chars = s.chars();

        let source = match chars.next() {
            Some('D') => Source::Waste,
            Some(c) => Source::Tableau(parse_position(c).ok_or_else(invalid)?),
            None => return Err(MoveError::invalid("empty move")),
        };

        let destination = match (source, chars.next()) {
            (Source::Waste, None) => return Ok(MoveSpec::Draw),
            (Source::Tableau(_), None) => return Err(invalid()),
            (_, Some('S')) => Destination::Foundation,
            (_, Some(c)) => Destination::Tableau(parse_position(c).ok_or_else(invalid)?),
        };

        let rest = chars.as_str();
        let count = match destination {
            Destination::Tableau(_) if !rest.is_empty() => rest
                .parse::<usize>()
                .map_err(|_| MoveError::invalid(format!("invalid count `{rest}`")))?,
            _ if !rest.is_empty() => return Err(invalid()),
            _ => 1,
        };

        Ok(MoveSpec::Transfer {
            source,
            destination,
            count,
        })
    }
}

fn parse_position(c: char) -> Option<usize> {
    c.to_digit(10)
        .map(|d| d as usize)
        .filter(|d| (1..=TOTAL_TABLEAUS).contains(d))
}

impl fmt::Display for MoveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveSpec::Draw => write!(f, "D"),
            MoveSpec::Transfer {
                source,
                destination,
                count,
            } => {
                match source {
                    Source::Waste => write!(f, "D")?,
                    Source::Tableau(idx) => write!(f, "{idx}")?,
                }
                match destination {
                    Destination::Foundation => write!(f, "S")?,
                    Destination::Tableau(idx) => write!(f, "{idx}")?,
                }
                if *count != 1 {
                    write!(f, "{count}")?;
                }
                Ok(())
            }
        }
    }
}

/// What a successful `attempt_move` did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A card went from the stock to the waste, face up.
    Drew(Card),
    /// The waste was turned back into the stock.
    Redealt(usize),
    /// Cards were transferred; `revealed` is the source card turned face up, if any.
    Moved {
        count: usize,
        revealed: Option<Card>,
    },
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Drew(card) => write!(f, "Drew {card}"),
            MoveOutcome::Redealt(count) => write!(f, "Redealt {count} cards"),
            MoveOutcome::Moved { count, revealed } => {
                if *count == 1 {
                    write!(f, "Moved 1 card")?;
                } else {
                    write!(f, "Moved {count} cards")?;
                }
                if let Some(card) = revealed {
                    write!(f, ", revealed {card}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> MoveSpec {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse("D"), MoveSpec::Draw);
        assert_eq!(parse(" d \n"), MoveSpec::Draw);
        assert_eq!(
            parse("DS"),
            MoveSpec::transfer(Source::Waste, Destination::Foundation)
        );
        assert_eq!(
            parse("d4"),
            MoveSpec::transfer(Source::Waste, Destination::Tableau(4))
        );
        assert_eq!(
            parse("3s"),
            MoveSpec::transfer(Source::Tableau(3), Destination::Foundation)
        );
        assert_eq!(
            parse("72"),
            MoveSpec::transfer(Source::Tableau(7), Destination::Tableau(2))
        );
        assert_eq!(
            parse("7212"),
            MoveSpec::transfer(Source::Tableau(7), Destination::Tableau(2)).with_count(12)
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for s in ["", "  ", "X", "8", "1", "18", "09", "1S2", "DSS", "12x", "1-", "S"] {
            assert!(
                matches!(s.parse::<MoveSpec>(), Err(MoveError::InvalidMoveSpec(_))),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_matches_notation() {
        for s in ["D", "DS", "D5", "1S", "62", "3712"] {
            assert_eq!(parse(s).to_string(), s);
        }
        assert_eq!(parse("451").to_string(), "45");
    }

    #[test]
    fn test_outcome_display() {
        use crate::card::{Rank, Suit};
        let card = Card::new(Rank::Jack, Suit::Hearts);
        assert_eq!(MoveOutcome::Drew(card).to_string(), "Drew J♥");
        assert_eq!(MoveOutcome::Redealt(24).to_string(), "Redealt 24 cards");
        assert_eq!(
            MoveOutcome::Moved {
                count: 3,
                revealed: Some(card)
            }
            .to_string(),
            "Moved 3 cards, revealed J♥"
        );
    }
}
