mod error;
mod game;
mod mask;
mod rules;
mod types;

pub use error::HangmanError;
pub use game::Game;
pub use mask::{derive_mask, derive_reveal, is_maskable};
pub use types::{GameId, GameStatus, Guess, STARTING_LIVES};
