//! Game registry shared by the HTTP server and the console loop.

use crate::games::hangman::{Game, GameId, GameStatus, Guess, HangmanError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Games in creation order plus the next ID to hand out.
#[derive(Debug)]
struct Games {
    entries: Vec<Game>,
    next_id: u64,
}

impl Games {
    fn position(&self, id: &str) -> Result<usize, HangmanError> {
        self.entries
            .iter()
            .position(|game| game.id() == id)
            .ok_or_else(|| {
                debug!(game_id = id, "Game not found");
                HangmanError::NotFound(id.to_string())
            })
    }
}

/// Manages all games.
///
/// Cloning yields another handle to the same games. A single lock guards
/// ID assignment and every read-modify-write on a game, so concurrent
/// callers never observe a half-applied guess.
#[derive(Debug, Clone)]
pub struct GameRegistry {
    games: Arc<Mutex<Games>>,
}

impl GameRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game registry");
        Self {
            games: Arc::new(Mutex::new(Games {
                entries: Vec::new(),
                next_id: 1,
            })),
        }
    }

    // Every mutation validates before it writes, so a poisoned lock still
    // guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Games> {
        self.games.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates a new game and returns a snapshot of it.
    ///
    /// IDs come from a counter that never goes backwards, so an ID is
    /// never reused even after its game is removed.
    #[instrument(skip(self, answer))]
    pub fn create(&self, answer: &str) -> Result<Game, HangmanError> {
        let mut games = self.lock();

        let id = games.next_id.to_string();
        let game = Game::new(id, answer)?;
        games.next_id += 1;
        games.entries.push(game.clone());

        info!(game_id = %game.id(), total = games.entries.len(), "Created new game");
        Ok(game)
    }

    /// Gets a snapshot of a game by ID.
    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: &str) -> Result<Game, HangmanError> {
        let games = self.lock();
        let index = games.position(id)?;
        Ok(games.entries[index].clone())
    }

    /// Runs `f` against the stored game while holding the registry lock.
    #[instrument(skip(self, f))]
    pub fn update<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Game) -> Result<T, HangmanError>,
    ) -> Result<T, HangmanError> {
        let mut games = self.lock();
        let index = games.position(id)?;
        f(&mut games.entries[index])
    }

    /// Case-folds and applies a guess, returning the updated game.
    #[instrument(skip(self, raw_guess))]
    pub fn submit_guess(&self, id: &str, raw_guess: &str) -> Result<Game, HangmanError> {
        let guess = Guess::parse(raw_guess);
        let game = self.update(id, |game| game.apply_guess(guess).cloned())?;

        debug!(lives = game.lives(), status = %game.status(), "Guess applied");
        Ok(game)
    }

    /// Evaluates the status of a game.
    #[instrument(skip(self))]
    pub fn status(&self, id: &str) -> Result<GameStatus, HangmanError> {
        let games = self.lock();
        let index = games.position(id)?;
        Ok(games.entries[index].status())
    }

    /// Removes a game, keeping the remaining games in order.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Result<(), HangmanError> {
        let mut games = self.lock();
        let index = games.position(id).inspect_err(|_| {
            warn!(game_id = id, "Attempted to remove unknown game");
        })?;
        games.entries.remove(index);

        info!(game_id = id, remaining = games.entries.len(), "Removed game");
        Ok(())
    }

    /// Lists all game IDs in creation order.
    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<GameId> {
        let games = self.lock();
        let ids: Vec<_> = games.entries.iter().map(|game| game.id().clone()).collect();
        debug!(count = ids.len(), "Listed games");
        ids
    }

    /// Number of games currently held.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns true if no games are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_from_one() {
        let registry = GameRegistry::new();
        assert_eq!(registry.create("one").unwrap().id(), "1");
        assert_eq!(registry.create("two").unwrap().id(), "2");
        assert_eq!(registry.list(), vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_failed_create_does_not_consume_id() {
        let registry = GameRegistry::new();
        assert_eq!(registry.create(""), Err(HangmanError::InvalidAnswer));
        assert!(registry.is_empty());
        assert_eq!(registry.create("cat").unwrap().id(), "1");
    }

    #[test]
    fn test_update_mutates_stored_game() {
        let registry = GameRegistry::new();
        let id = registry.create("cat").unwrap().id().clone();

        registry
            .update(&id, |game| game.apply_letter_guess('c').map(|_| ()))
            .unwrap();

        assert_eq!(registry.find_by_id(&id).unwrap().current(), "c__");
    }

    #[test]
    fn test_update_unknown_id() {
        let registry = GameRegistry::new();
        let result = registry.update("7", |_| Ok(()));
        assert_eq!(result, Err(HangmanError::NotFound("7".to_string())));
    }
}
