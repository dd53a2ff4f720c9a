//! In-memory game storage.
//!
//! The store owns one lock per game name, so a `load -> click -> save` cycle
//! runs under that game's lock and concurrent clicks against the same name
//! cannot lose updates. The outer map lock only guards membership.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, RwLock};

use thiserror::Error;

use buscaminas_core::Game;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Name already used")]
    DuplicateName,
    #[error("Game not found")]
    NotFound,
}

/// Storage contract for games, keyed by name.
pub trait GameStore: Send + Sync + 'static {
    /// Stores a new game; fails with [`StoreError::DuplicateName`] if the
    /// name is taken.
    fn insert(&self, game: Game) -> Result<(), StoreError>;

    /// Replaces an existing game; fails with [`StoreError::NotFound`] if no
    /// game with that name was ever inserted.
    fn update(&self, game: Game) -> Result<(), StoreError>;

    /// Returns a copy of the stored game.
    fn get(&self, name: &str) -> Result<Game, StoreError>;

    /// Runs `apply` against the stored game under its per-name lock. The
    /// mutation persists in place, so the whole read-modify-write cycle is
    /// atomic with respect to other callers of the same name.
    fn update_with<F, T>(&self, name: &str, apply: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Game) -> T;
}

#[derive(Default)]
pub struct MemoryStore {
    games: RwLock<HashMap<String, Arc<Mutex<Game>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, name: &str) -> Result<Arc<Mutex<Game>>, StoreError> {
        let games = self.games.read().expect("store lock poisoned");
        games.get(name).cloned().ok_or(StoreError::NotFound)
    }
}

impl GameStore for MemoryStore {
    fn insert(&self, game: Game) -> Result<(), StoreError> {
        let mut games = self.games.write().expect("store lock poisoned");
        match games.entry(game.name().to_owned()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateName),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(Mutex::new(game)));
                Ok(())
            }
        }
    }

    fn update(&self, game: Game) -> Result<(), StoreError> {
        let slot = self.slot(game.name())?;
        *slot.lock().expect("game lock poisoned") = game;
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Game, StoreError> {
        let slot = self.slot(name)?;
        let game = slot.lock().expect("game lock poisoned").clone();
        Ok(game)
    }

    fn update_with<F, T>(&self, name: &str, apply: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Game) -> T,
    {
        let slot = self.slot(name)?;
        let mut game = slot.lock().expect("game lock poisoned");
        Ok(apply(&mut game))
    }
}
