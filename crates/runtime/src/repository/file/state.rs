//! JSON save file implementation of [`Persistence`].

use std::fs;
use std::path::{Path, PathBuf};

use lokarta_core::PlayerState;

use crate::repository::{Persistence, PersistenceError, Result, SaveFile};

/// Stores the player as a single pretty-printed JSON document.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write never leaves a truncated save.
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistence for JsonFilePersistence {
    fn save(&self, player: &PlayerState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp_path = self.path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(&SaveFile::new(player.clone()))?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), level = player.level, "saved player");
        Ok(())
    }

    fn load(&self) -> Result<Option<PlayerState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)?;
        let save: SaveFile = serde_json::from_str(&json)?;
        if save.version != SaveFile::VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: save.version,
                expected: SaveFile::VERSION,
            });
        }

        tracing::debug!(path = %self.path.display(), "loaded player");
        Ok(Some(save.player))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!(path = %self.path.display(), "deleted save");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_load_delete() {
        let dir = TempDir::new().unwrap();
        let store = JsonFilePersistence::new(dir.path().join("saves/player.json"));
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), None);

        let mut player = PlayerState::default();
        player.gold = 42;
        player.inventory.add("potion", 2);
        store.save(&player).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), Some(player));

        store.delete().unwrap();
        assert!(!store.exists());
        store.delete().unwrap();
    }

    #[test]
    fn future_versions_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("player.json");
        let mut doc = serde_json::to_value(SaveFile::new(PlayerState::default())).unwrap();
        doc["version"] = serde_json::json!(7);
        fs::write(&path, doc.to_string()).unwrap();

        let err = JsonFilePersistence::new(&path).load().unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::UnsupportedVersion { found: 7, expected: 1 }
        ));
    }

    #[test]
    fn corrupt_file_is_a_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("player.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            JsonFilePersistence::new(&path).load(),
            Err(PersistenceError::Json(_))
        ));
    }
}
