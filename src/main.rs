mod render;

use crate::render::Renderer;

use anyhow::{Context, Result};
use clap::Parser;
use klondike_common::{GameState, MoveSpec};
use std::io::{BufRead, IsTerminal, Write, stdin, stdout};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Seed for the shuffle; replays the same deal (random if omitted)
    #[arg(short, long, value_name = "SEED")]
    seed: Option<u64>,
    /// Disable ANSI colors and screen clearing
    #[arg(long)]
    no_color: bool,
    /// Log filter written to stderr, overrides RUST_LOG (e.g. `debug`)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let Cli {
        seed,
        no_color,
        log_level,
    } = Cli::parse();

    init_logging(log_level.as_deref());

    let ansi = !no_color && stdout().is_terminal();
    let mut game = GameState::new(seed);
    let won = play(
        &mut game,
        stdin().lock(),
        stdout().lock(),
        Renderer::new(ansi),
    )?;
    tracing::info!(seed = game.seed(), won, "game over");

    Ok(())
}

fn init_logging(filter: Option<&str>) {
    let env = match filter {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs the prompt loop until the game is won, the player quits or input ends.
/// Returns whether the game was won.
fn play<R: BufRead, W: Write>(
    game: &mut GameState,
    input: R,
    mut output: W,
    renderer: Renderer,
) -> Result<bool> {
    let mut lines = input.lines();
    let mut message: Option<String> = None;

    while !game.is_won() {
        write!(output, "{}", renderer.render(game))?;
        if let Some(message) = message.take() {
            writeln!(output, "{message}")?;
        }
        write!(output, "Move: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(false);
        };
        let line = line.context("Failed to read move")?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(false);
        }
        if line.is_empty() {
            continue;
        }

        let result = line
            .parse::<MoveSpec>()
            .and_then(|spec| game.attempt_move(&spec));
        message = Some(match result {
            Ok(outcome) => outcome.to_string(),
            Err(err) => err.to_string(),
        });
    }

    write!(output, "{}", renderer.render(game))?;
    writeln!(output, "You won!")?;
    output.flush()?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use klondike_common::Deck;
    use std::io::Cursor;

    fn run(game: &mut GameState, input: &str) -> (bool, String) {
        let mut output = Vec::new();
        let won = play(game, Cursor::new(input), &mut output, Renderer::new(false)).unwrap();
        (won, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_draw_then_quit() {
        let mut game = GameState::with_deck(Deck::new());
        let (won, output) = run(&mut game, "d\nQ\n");
        assert!(!won);
        assert!(output.contains("Drew J♥"));
        assert_eq!(output.matches("Move: ").count(), 2);
        assert_eq!(game.waste().len(), 1);
    }

    #[test]
    fn test_errors_are_reported_and_loop_continues() {
        let mut game = GameState::with_deck(Deck::new());
        let (won, output) = run(&mut game, "zz\n71\n\n51\n");
        assert!(!won);
        assert!(output.contains("invalid move: unrecognized move `ZZ`"));
        assert!(output.contains("illegal move: tableau pile does not accept Q♥"));
        assert!(output.contains("Moved 1 card, revealed K♣"));
        assert_eq!(game.tableau(0).map(|t| t.len()), Some(2));
    }

    #[test]
    fn test_end_of_input_stops() {
        let mut game = GameState::new(Some(1));
        let (won, output) = run(&mut game, "");
        assert!(!won);
        assert!(output.ends_with("Move: \n"));
    }
}
