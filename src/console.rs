//! Interactive console game.

use crate::games::hangman::{Game, GameStatus};
use crate::registry::GameRegistry;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Reads one line, without its line ending. `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn print_board(output: &mut impl Write, game: &Game) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", game.current())?;
    writeln!(output, "Lives: {}", game.lives())?;
    writeln!(output, "Guessed letters: {}", game.letter_guesses_string())?;
    writeln!(output, "Guessed phrases: [{}]", game.phrase_guesses().join(", "))?;
    Ok(())
}

/// Plays one game on the given input and output until it is won or lost.
///
/// # Errors
///
/// Fails on I/O errors, or if input ends before the game is finished.
#[instrument(skip_all)]
pub fn play(
    registry: &GameRegistry,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<GameStatus> {
    let mut game = loop {
        write!(output, "Input your phrase: ")?;
        output.flush()?;

        let Some(answer) = read_line(&mut input)? else {
            bail!("Input ended before a phrase was given");
        };
        match registry.create(&answer) {
            Ok(game) => break game,
            Err(e) => writeln!(output, "{}", e)?,
        }
    };
    info!(game_id = %game.id(), "Console game started");

    loop {
        print_board(&mut output, &game)?;
        write!(output, "Make a guess: ")?;
        output.flush()?;

        let Some(guess) = read_line(&mut input)? else {
            bail!("Input ended before game {} finished", game.id());
        };
        if guess.is_empty() {
            writeln!(output, "No guess given.")?;
            continue;
        }

        match registry.submit_guess(game.id(), &guess) {
            Ok(updated) => game = updated,
            Err(e) => {
                debug!(error = %e, "Guess rejected");
                writeln!(output, "{}", e)?;
            }
        }

        let status = registry.status(game.id())?;
        let message = match status {
            GameStatus::Unfinished => continue,
            GameStatus::Win => "You win! The correct phrase was:",
            GameStatus::Loss => "You lost. The correct phrase was:",
        };

        writeln!(output)?;
        writeln!(output, "{}", message)?;
        writeln!(output, "{}", game.answer())?;
        output.flush()?;

        info!(game_id = %game.id(), %status, "Console game finished");
        return Ok(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut input = Cursor::new("first\r\nsecond\nthird");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("first"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("second"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("third"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }
}
