//! In-memory [`Persistence`] implementation for tests and local runs.

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use lokarta_core::PlayerState;

use crate::repository::{Persistence, PersistenceError, Result};

/// Holds at most one saved player. Saves can be made to fail on demand.
#[derive(Default)]
pub struct InMemoryPersistence {
    player: RwLock<Option<PlayerState>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `player` already saved.
    pub fn with_player(player: PlayerState) -> Self {
        Self {
            player: RwLock::new(Some(player)),
            ..Self::default()
        }
    }

    /// Makes every following `save` fail until switched off again.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Option<PlayerState> {
        self.player.read().ok().and_then(|p| p.clone())
    }
}

impl Persistence for InMemoryPersistence {
    fn save(&self, player: &PlayerState) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(PersistenceError::Rejected("saves disabled".into()));
        }
        let mut slot = self
            .player
            .write()
            .map_err(|_| PersistenceError::LockPoisoned)?;
        *slot = Some(player.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn load(&self) -> Result<Option<PlayerState>> {
        let slot = self
            .player
            .read()
            .map_err(|_| PersistenceError::LockPoisoned)?;
        Ok(slot.clone())
    }

    fn exists(&self) -> bool {
        self.player
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut slot = self
            .player
            .write()
            .map_err(|_| PersistenceError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }
}
