//! Core domain types for hangman.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::instrument;

/// Unique identifier for a game.
pub type GameId = String;

/// Lives every new game starts with.
pub const STARTING_LIVES: i32 = 5;

/// Current status of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Game is ongoing.
    Unfinished,
    /// The phrase was fully revealed.
    Win,
    /// The player ran out of lives.
    Loss,
}

impl GameStatus {
    /// Returns true once the game has reached a terminal status.
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::Unfinished)
    }
}

/// A case-folded guess, classified by length.
///
/// A guess of exactly one character is always a letter guess, so a
/// one-character phrase can never be submitted as a whole-phrase guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Guess {
    /// A single character, matched by containment.
    Letter(char),
    /// Anything else, matched by equality with the whole answer.
    Phrase(String),
}

impl Guess {
    /// Case-folds raw input and classifies it.
    #[instrument(skip(raw), fields(raw_len = raw.len()))]
    pub fn parse(raw: &str) -> Self {
        let folded = raw.to_lowercase();
        let mut chars = folded.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Guess::Letter(letter),
            _ => Guess::Phrase(folded),
        }
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guess::Letter(letter) => write!(f, "{}", letter),
            Guess::Phrase(phrase) => write!(f, "{}", phrase),
        }
    }
}
