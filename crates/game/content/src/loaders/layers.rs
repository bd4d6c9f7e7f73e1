//! Action layer loaders: the global layer, scenes and menus.

use std::path::Path;

use lokarta_core::ActionDefinition;
use lokarta_core::env::{MenuDefinition, SceneDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Global action layer structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionCatalog {
    pub actions: Vec<ActionDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneCatalog {
    pub scenes: Vec<SceneDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCatalog {
    pub menus: Vec<MenuDefinition>,
}

/// Loader for the global action layer.
///
/// An unknown `command` id fails the whole file: a record that names a
/// command the router cannot dispatch is a configuration error.
pub struct ActionLoader;

impl ActionLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ActionDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ActionDefinition>> {
        let catalog: ActionCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse action layer RON: {}", e))?;

        Ok(catalog.actions)
    }
}

/// Loader for scene records.
pub struct SceneLoader;

impl SceneLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<SceneDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<SceneDefinition>> {
        let catalog: SceneCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scene catalog RON: {}", e))?;

        Ok(catalog.scenes)
    }
}

/// Loader for menu records.
pub struct MenuLoader;

impl MenuLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<MenuDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<MenuDefinition>> {
        let catalog: MenuCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse menu catalog RON: {}", e))?;

        Ok(catalog.menus)
    }
}
