use smallvec::SmallVec;

use crate::action::{Destination, MoveOutcome, MoveSpec, Source};
use crate::card::Card;
use crate::error::{EmptyPileError, IllegalMove, MoveError};
use crate::game::{GameState, PileId, TOTAL_TABLEAUS};
use crate::pile::PILE_SIZE;

type Lifted = SmallVec<[Card; PILE_SIZE]>;

impl GameState {
    /// Applies one move. On any error every pile is left exactly as it was.
    pub fn attempt_move(&mut self, spec: &MoveSpec) -> Result<MoveOutcome, MoveError> {
        let result = match *spec {
            MoveSpec::Draw => self.draw(),
            MoveSpec::Transfer {
                source,
                destination,
                count,
            } => self.transfer(source, destination, count),
        };
        match &result {
            Ok(outcome) => tracing::debug!(%spec, ?outcome, "move applied"),
            Err(MoveError::EmptyPile(err)) => tracing::error!(%spec, %err, "pile ran out mid-move"),
            Err(err) => tracing::debug!(%spec, %err, "move rejected"),
        }
        result
    }

    fn draw(&mut self) -> Result<MoveOutcome, MoveError> {
        if let Ok(mut card) = self.stock.pop() {
            if !card.is_face_up() {
                card.flip();
            }
            self.waste.push(card);
            return Ok(MoveOutcome::Drew(card));
        }

        if self.waste.is_empty() {
            return Err(IllegalMove::NothingToDraw.into());
        }

        // Unwinding top-first leaves the first discarded card on top of the stock.
        let mut count = 0;
        while let Ok(mut card) = self.waste.pop() {
            if card.is_face_up() {
                card.flip();
            }
            self.stock.push(card);
            count += 1;
        }
        Ok(MoveOutcome::Redealt(count))
    }

    fn transfer(
        &mut self,
        source: Source,
        destination: Destination,
        count: usize,
    ) -> Result<MoveOutcome, MoveError> {
        let from = match source {
            Source::Waste => PileId::Waste,
            Source::Tableau(pos) => PileId::Tableau(tableau_index(pos)?),
        };
        let to_tableau = match destination {
            Destination::Tableau(pos) => Some(PileId::Tableau(tableau_index(pos)?)),
            Destination::Foundation => None,
        };

        if count == 0 {
            return Err(MoveError::invalid("count must be at least 1"));
        }
        if count > 1 && source == Source::Waste {
            return Err(MoveError::invalid("only one waste card can move at a time"));
        }
        if count > 1 && destination == Destination::Foundation {
            return Err(MoveError::invalid("foundations take one card at a time"));
        }
        if to_tableau == Some(from) {
            return Err(MoveError::invalid("source and destination are the same pile"));
        }

        let available = self.pile(from).len();
        if count > available {
            return Err(IllegalMove::NotEnoughCards {
                requested: count,
                available,
            }
            .into());
        }

        let lifted = self.lift(from, count)?;
        // The deepest lifted card lands first and decides the move.
        let lead = match lifted.last() {
            Some(&card) => card,
            None => {
                return Err(EmptyPileError {
                    kind: self.pile(from).kind(),
                }
                .into());
            }
        };
        let to = to_tableau.unwrap_or(PileId::Foundation(lead.suit()));

        let verdict = if !lead.is_face_up() {
            Err(IllegalMove::FaceDown(lead))
        } else if !self.pile(to).can_accept(&lead) {
            Err(IllegalMove::Rejected {
                card: lead,
                destination: self.pile(to).kind(),
            })
        } else {
            Ok(())
        };

        match verdict {
            Ok(()) => {
                self.place(to, lifted);
                let revealed = self.pile_mut(from).reveal_top();
                Ok(MoveOutcome::Moved { count, revealed })
            }
            Err(reason) => {
                self.place(from, lifted);
                Err(reason.into())
            }
        }
    }

    /// Pops `count` cards, top first. Restores the pile if it runs out.
    fn lift(&mut self, from: PileId, count: usize) -> Result<Lifted, MoveError> {
        let pile = self.pile_mut(from);
        let mut lifted = Lifted::new();
        for _ in 0..count {
            match pile.pop() {
                Ok(card) => lifted.push(card),
                Err(err) => {
                    while let Some(card) = lifted.pop() {
                        pile.push(card);
                    }
                    return Err(err.into());
                }
            }
        }
        Ok(lifted)
    }

    /// Pushes lifted cards back in their original bottom-to-top order.
    fn place(&mut self, to: PileId, mut lifted: Lifted) {
        let pile = self.pile_mut(to);
        while let Some(card) = lifted.pop() {
            pile.push(card);
        }
    }
}

fn tableau_index(pos: usize) -> Result<usize, MoveError> {
    if (1..=TOTAL_TABLEAUS).contains(&pos) {
        Ok(pos - 1)
    } else {
        Err(MoveError::invalid(format!(
            "tableau {pos} is out of range 1-{TOTAL_TABLEAUS}"
        )))
    }
}
