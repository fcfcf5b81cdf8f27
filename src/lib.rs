//! Strictly Hangman library - rules engine for a phrase guessing game
//!
//! # Architecture
//!
//! - **Games**: the hangman engine (masking, guess rules, status)
//! - **Registry**: the shared, lock-guarded collection of games
//! - **Server**: JSON over HTTP on top of the registry
//! - **Console**: a single game played on stdin/stdout
//!
//! # Example
//!
//! ```
//! use strictly_hangman::{GameRegistry, GameStatus};
//!
//! # fn example() -> Result<(), strictly_hangman::HangmanError> {
//! let registry = GameRegistry::new();
//! let game = registry.create("cat")?;
//!
//! registry.submit_guess(game.id(), "CAT")?;
//! assert_eq!(registry.status(game.id())?, GameStatus::Win);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;

// Public modules
pub mod config;
pub mod console;
pub mod registry;
pub mod server;

// Crate-level exports - Game types
pub use games::hangman::{
    Game, GameId, GameStatus, Guess, HangmanError, STARTING_LIVES, derive_mask, derive_reveal,
    is_maskable,
};

// Crate-level exports - Registry
pub use registry::GameRegistry;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Server types
pub use server::{ApiError, FinishedGame, GameList, GameView, InProgressGame, PlayRequest};
