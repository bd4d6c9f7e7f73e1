//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use lokarta_core::ActionDefinition;
use lokarta_core::GameConfig;
use lokarta_core::env::{
    ItemDefinition, MenuDefinition, OpponentTemplate, SceneDefinition, SpellDefinition,
    VenueDefinition,
};

use crate::bundle::{ContentBundle, ContentRecords};
use crate::loaders::{
    ActionLoader, ConfigLoader, ItemLoader, LoadResult, MenuLoader, OpponentLoader, SceneLoader,
    SpellLoader, VenueLoader, assemble,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── actions.ron
/// ├── scenes.ron
/// ├── venues.ron
/// ├── menus.ron
/// ├── spells.ron
/// ├── items.ron
/// └── opponents.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the global action layer from `actions.ron`.
    pub fn load_actions(&self) -> LoadResult<Vec<ActionDefinition>> {
        ActionLoader::load(&self.data_dir.join("actions.ron"))
    }

    pub fn load_scenes(&self) -> LoadResult<Vec<SceneDefinition>> {
        SceneLoader::load(&self.data_dir.join("scenes.ron"))
    }

    pub fn load_venues(&self) -> LoadResult<Vec<VenueDefinition>> {
        VenueLoader::load(&self.data_dir.join("venues.ron"))
    }

    pub fn load_menus(&self) -> LoadResult<Vec<MenuDefinition>> {
        MenuLoader::load(&self.data_dir.join("menus.ron"))
    }

    pub fn load_spells(&self) -> LoadResult<Vec<SpellDefinition>> {
        SpellLoader::load(&self.data_dir.join("spells.ron"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    pub fn load_opponents(&self) -> LoadResult<Vec<OpponentTemplate>> {
        OpponentLoader::load(&self.data_dir.join("opponents.ron"))
    }

    /// Loads every record file into one bundle.
    ///
    /// Cross-record references (targets, predicates, service ids) are checked
    /// later by `validate_content`, once the bundle is wired into a `GameEnv`.
    pub fn load_bundle(&self) -> LoadResult<ContentBundle> {
        assemble(ContentRecords {
            global: self.load_actions()?,
            scenes: self.load_scenes()?,
            menus: self.load_menus()?,
            venues: self.load_venues()?,
            spells: self.load_spells()?,
            items: self.load_items()?,
            opponents: self.load_opponents()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
