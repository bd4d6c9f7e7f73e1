//! Spell catalog loader.

use std::path::Path;

use lokarta_core::env::SpellDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellCatalog {
    pub spells: Vec<SpellDefinition>,
}

/// Loader for spells from RON files. File order is spellbook order.
pub struct SpellLoader;

impl SpellLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<SpellDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<SpellDefinition>> {
        let catalog: SpellCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell catalog RON: {}", e))?;

        Ok(catalog.spells)
    }
}
