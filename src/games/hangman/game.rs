//! The hangman game entity.

use super::error::HangmanError;
use super::mask::derive_mask;
use super::types::{GameId, GameStatus, STARTING_LIVES};
use derive_getters::Getters;
use tracing::{info, instrument, warn};

/// A single hangman game.
///
/// Fields are only mutated through guess application (see `rules`), which
/// keeps `current` the same length as `answer` and the guess histories
/// free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Game {
    /// Unique game ID.
    pub(crate) id: GameId,
    /// The secret phrase, case preserved.
    pub(crate) answer: String,
    /// Case-folded copy of the answer, used for comparison.
    pub(crate) lowercase_answer: String,
    /// Remaining lives. Zero or below means the game is lost.
    pub(crate) lives: i32,
    /// Letters guessed so far, case-folded, in guess order.
    pub(crate) letter_guesses: Vec<char>,
    /// Phrases guessed so far, case-folded, in guess order.
    pub(crate) phrase_guesses: Vec<String>,
    /// Display string with unguessed letters shown as `_`.
    pub(crate) current: String,
}

impl Game {
    /// Creates a new game with a fully masked answer.
    ///
    /// # Errors
    ///
    /// Returns [`HangmanError::InvalidAnswer`] if `answer` is empty.
    #[instrument(skip(answer), fields(answer_len = answer.len()))]
    pub fn new(id: GameId, answer: &str) -> Result<Self, HangmanError> {
        if answer.is_empty() {
            warn!(game_id = %id, "Rejected empty answer");
            return Err(HangmanError::InvalidAnswer);
        }

        info!(game_id = %id, "Creating new game");
        Ok(Self {
            id,
            answer: answer.to_string(),
            lowercase_answer: answer.to_lowercase(),
            lives: STARTING_LIVES,
            letter_guesses: Vec::new(),
            phrase_guesses: Vec::new(),
            current: derive_mask(answer),
        })
    }

    /// Evaluates the game status.
    ///
    /// Running out of lives takes precedence over a revealed answer.
    pub fn status(&self) -> GameStatus {
        if self.lives <= 0 {
            GameStatus::Loss
        } else if self.current == self.answer {
            GameStatus::Win
        } else {
            GameStatus::Unfinished
        }
    }

    /// Guessed letters as a string, in guess order.
    pub fn letter_guesses_string(&self) -> String {
        self.letter_guesses.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_masked() {
        let game = Game::new("1".to_string(), "Go Lang").unwrap();
        assert_eq!(game.current(), "__ ____");
        assert_eq!(game.lowercase_answer(), "go lang");
        assert_eq!(*game.lives(), STARTING_LIVES);
        assert!(game.letter_guesses().is_empty());
        assert!(game.phrase_guesses().is_empty());
        assert_eq!(game.status(), GameStatus::Unfinished);
    }

    #[test]
    fn test_empty_answer_rejected() {
        let result = Game::new("1".to_string(), "");
        assert_eq!(result, Err(HangmanError::InvalidAnswer));
    }

    #[test]
    fn test_answer_without_letters_is_already_won() {
        let game = Game::new("1".to_string(), "42!").unwrap();
        assert_eq!(game.current(), "42!");
        assert_eq!(game.status(), GameStatus::Win);
    }

    #[test]
    fn test_loss_takes_precedence() {
        let mut game = Game::new("1".to_string(), "cat").unwrap();
        game.current = game.answer.clone();
        game.lives = 0;
        assert_eq!(game.status(), GameStatus::Loss);
    }
}
