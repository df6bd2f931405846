use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::domain::FreeCellGame;

/// One live game session. The mutex is the single mutual-exclusion boundary
/// for the engine: callers lock it for the full duration of a move.
pub type GameHandle = Arc<Mutex<FreeCellGame>>;

/// Application state containing shared resources.
///
/// Replaces the reference system's global singleton game: every session owns
/// exactly one engine instance, addressed by id, and no engine is ever shared
/// across concurrent callers without its lock.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    games: Arc<DashMap<Uuid, GameHandle>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly dealt game and return its session id.
    pub fn insert_game(&self, game: FreeCellGame) -> Uuid {
        let id = Uuid::new_v4();
        self.games.insert(id, Arc::new(Mutex::new(game)));
        id
    }

    pub fn game(&self, id: Uuid) -> Option<GameHandle> {
        self.games.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove_game(&self, id: Uuid) -> bool {
        self.games.remove(&id).is_some()
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }
}
