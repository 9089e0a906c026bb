use klondike_common::{Card, Color, GameState, Pile};

const ANSI_BLACK: &str = "\x1b[1;30;47m";
const ANSI_RED: &str = "\x1b[1;31;47m";
const ANSI_NORMAL: &str = "\x1b[0m";
const ANSI_CLEAR: &str = "\x1b[2J\x1b[H";
const CARD_BACK: &str = "▒▒";
const EMPTY_PILE: &str = "[]";

/// Draws a game as text, with ANSI colors when `ansi` is set.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    ansi: bool,
}

impl Renderer {
    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    pub fn card(&self, card: &Card) -> String {
        if !card.is_face_up() {
            return CARD_BACK.to_string();
        }
        if !self.ansi {
            return card.to_pretty_string();
        }
        let color = match card.color() {
            Color::Red => ANSI_RED,
            Color::Black => ANSI_BLACK,
        };
        format!("{color}{}{ANSI_NORMAL}", card.to_pretty_string())
    }

    fn top(&self, pile: &Pile) -> String {
        match pile.top() {
            Some(card) => self.card(card),
            None => EMPTY_PILE.to_string(),
        }
    }

    fn cards(&self, pile: &Pile) -> String {
        pile.cards()
            .iter()
            .map(|card| self.card(card))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn render(&self, state: &GameState) -> String {
        let mut output = String::new();
        if self.ansi {
            output.push_str(ANSI_CLEAR);
        }

        output.push_str("Klondike Solitaire");
        if let Some(seed) = state.seed() {
            output.push_str(&format!(" (seed {seed})"));
        }
        output.push_str("\n\n");

        output.push_str(&format!(
            "D: {:2} {} {}\n\n",
            state.stock().len(),
            self.top(state.stock()),
            self.cards(state.waste())
        ));

        let foundations: Vec<_> = state.foundations().iter().map(|p| self.top(p)).collect();
        output.push_str(&format!("S: {}\n\n", foundations.join(" ")));

        for (i, tableau) in state.tableaus().iter().enumerate() {
            output.push_str(&format!("{}: {}\n", i + 1, self.cards(tableau)));
        }
        output.push('\n');

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klondike_common::{Deck, MoveSpec, Rank, Suit};

    #[test]
    fn test_card_faces() {
        let renderer = Renderer::new(true);
        let mut card = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(renderer.card(&card), CARD_BACK);
        card.flip();
        assert_eq!(renderer.card(&card), "\x1b[1;31;47mT♥\x1b[0m");
        assert_eq!(Renderer::new(false).card(&card), "T♥");

        let mut card = Card::new(Rank::King, Suit::Spades);
        card.flip();
        assert_eq!(renderer.card(&card), "\x1b[1;30;47mK♠\x1b[0m");
    }

    #[test]
    fn test_render_plain() {
        let mut state = GameState::with_deck(Deck::new());
        state.attempt_move(&MoveSpec::Draw).unwrap();
        let expected = "Klondike Solitaire

D: 23 ▒▒ J♥

S: [] [] [] []

1: K♦
2: ▒▒ J♦
3: ▒▒ ▒▒ 8♦
4: ▒▒ ▒▒ ▒▒ 4♦
5: ▒▒ ▒▒ ▒▒ ▒▒ Q♣
6: ▒▒ ▒▒ ▒▒ ▒▒ ▒▒ 6♣
7: ▒▒ ▒▒ ▒▒ ▒▒ ▒▒ ▒▒ Q♥

";
        assert_eq!(Renderer::new(false).render(&state), expected);
    }

    #[test]
    fn test_render_shows_seed_and_clears() {
        let state = GameState::new(Some(5));
        let output = Renderer::new(true).render(&state);
        assert!(output.starts_with(ANSI_CLEAR));
        assert!(output.contains("Klondike Solitaire (seed 5)"));
    }
}
