//! Guess application rules.

use super::error::HangmanError;
use super::game::Game;
use super::mask::derive_reveal;
use super::types::Guess;
use tracing::{info, instrument, warn};

impl Game {
    /// Applies a guess, dispatching on its kind.
    ///
    /// This is the entry point used by the registry. Unlike the
    /// letter and phrase rules it refuses to touch a finished game.
    ///
    /// # Errors
    ///
    /// - [`HangmanError::GameOver`] if the game is already won or lost.
    /// - [`HangmanError::DuplicateGuess`] if the guess was made before.
    #[instrument(skip(self, guess), fields(game_id = %self.id))]
    pub fn apply_guess(&mut self, guess: Guess) -> Result<&Self, HangmanError> {
        let status = self.status();
        if status.is_finished() {
            warn!(%status, %guess, "Guess submitted to finished game");
            return Err(HangmanError::GameOver(self.id.clone()));
        }

        match guess {
            Guess::Letter(letter) => self.apply_letter_guess(letter),
            Guess::Phrase(phrase) => self.apply_phrase_guess(phrase),
        }
    }

    /// Applies a single case-folded letter.
    ///
    /// A hit reveals every matching position; a miss costs one life.
    ///
    /// # Errors
    ///
    /// Returns [`HangmanError::DuplicateGuess`] without mutating anything if
    /// the letter was already guessed.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn apply_letter_guess(&mut self, letter: char) -> Result<&Self, HangmanError> {
        if self.letter_guesses.contains(&letter) {
            warn!("Duplicate letter guess");
            return Err(HangmanError::DuplicateGuess(letter.to_string()));
        }

        self.letter_guesses.push(letter);

        if self.lowercase_answer.contains(letter) {
            self.current = derive_reveal(&self.answer, &self.letter_guesses);
            info!(status = %self.status(), "Letter hit");
        } else {
            self.lives -= 1;
            info!(lives = self.lives, status = %self.status(), "Letter missed");
        }

        Ok(self)
    }

    /// Applies a case-folded whole-phrase guess.
    ///
    /// A correct phrase reveals the whole answer; anything else costs one life.
    ///
    /// # Errors
    ///
    /// Returns [`HangmanError::DuplicateGuess`] without mutating anything if
    /// the phrase was already guessed.
    #[instrument(skip(self, phrase), fields(game_id = %self.id))]
    pub fn apply_phrase_guess(&mut self, phrase: String) -> Result<&Self, HangmanError> {
        if self.phrase_guesses.contains(&phrase) {
            warn!("Duplicate phrase guess");
            return Err(HangmanError::DuplicateGuess(phrase));
        }

        if phrase == self.lowercase_answer {
            self.current = self.answer.clone();
            info!("Phrase solved");
        } else {
            self.lives -= 1;
            info!(lives = self.lives, status = %self.status(), "Phrase missed");
        }

        self.phrase_guesses.push(phrase);
        Ok(self)
    }
}
