//! Errors reported by the hangman engine.

use super::types::GameId;

/// Error that can occur when creating, locating or playing a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HangmanError {
    /// The secret phrase was empty.
    #[display("No answer given.")]
    InvalidAnswer,

    /// No game with this ID exists.
    #[display("Game with ID of {} not found.", _0)]
    NotFound(GameId),

    /// The letter or phrase was already guessed.
    #[display("Already guessed {}", _0)]
    DuplicateGuess(String),

    /// The game has already been won or lost.
    #[display("Game {} is already over", _0)]
    GameOver(GameId),
}

impl std::error::Error for HangmanError {}
