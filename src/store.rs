//! In-memory game storage keyed by game id.

use crate::game::{Game, GameId};
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Errors from store lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StoreError {
    /// No game is stored under the requested id.
    #[display("Game not found")]
    NotFound,
}

/// Holds the authoritative set of live games.
///
/// Cloning shares the underlying map. All state is process-local and lost
/// on restart. Operations on the same game are serialized by the map lock:
/// a read-modify-write through [`GameStore::update`] cannot lose a
/// concurrent update.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    games: Arc<Mutex<HashMap<GameId, Game>>>,
}

impl GameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game store");
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Generates a fresh game id: a 128-bit random value, hex-encoded.
    pub fn generate_id(&self) -> GameId {
        Uuid::new_v4().simple().to_string()
    }

    /// Stores a game under its id, overwriting any previous state.
    #[instrument(skip(self, game), fields(game_id = %game.id()))]
    pub fn insert(&self, game: Game) {
        let mut games = self.games.lock().unwrap();
        games.insert(game.id().to_string(), game);
        debug!("Game stored");
    }

    /// Returns a copy of the stored game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no game exists under `id`.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Result<Game, StoreError> {
        let games = self.games.lock().unwrap();
        games.get(id).cloned().ok_or_else(|| {
            debug!(game_id = id, "Game not found");
            StoreError::NotFound
        })
    }

    /// Runs a read-modify-write on one game while holding the map lock.
    ///
    /// Two simultaneous moves on the same game cannot both observe the
    /// pre-move state; the second sees the first's result.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no game exists under `id`.
    #[instrument(skip(self, f))]
    pub fn update<T>(&self, id: &str, f: impl FnOnce(&mut Game) -> T) -> Result<T, StoreError> {
        let mut games = self.games.lock().unwrap();
        let game = games.get_mut(id).ok_or_else(|| {
            debug!(game_id = id, "Game not found");
            StoreError::NotFound
        })?;
        Ok(f(game))
    }

    /// Number of live games.
    pub fn len(&self) -> usize {
        self.games.lock().unwrap().len()
    }

    /// True when no games are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
