//! Persistence contract for the saved player.

use lokarta_core::PlayerState;
use serde::{Deserialize, Serialize};

use super::Result;

/// Injected save capability.
///
/// Calls are synchronous. The router saves after save-worthy actions
/// (scene transitions, purchases, services, item use, level-up, combat
/// resolution) and keeps playing when a call fails.
pub trait Persistence: Send + Sync {
    fn save(&self, player: &PlayerState) -> Result<()>;

    /// `Ok(None)` when nothing is saved.
    fn load(&self) -> Result<Option<PlayerState>>;

    fn exists(&self) -> bool;

    /// Removes the save; succeeds when there is none.
    fn delete(&self) -> Result<()>;
}

/// On-disk save document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub player: PlayerState,
}

impl SaveFile {
    pub const VERSION: u32 = 1;

    pub fn new(player: PlayerState) -> Self {
        Self {
            version: Self::VERSION,
            player,
        }
    }
}
