//! Opponent template loader.

use std::path::Path;

use lokarta_core::env::OpponentTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpponentCatalog {
    pub opponents: Vec<OpponentTemplate>,
}

/// Loader for opponent templates from RON files.
pub struct OpponentLoader;

impl OpponentLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<OpponentTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<OpponentTemplate>> {
        let catalog: OpponentCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse opponent catalog RON: {}", e))?;

        Ok(catalog.opponents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_chance_defaults_to_always() {
        let templates = OpponentLoader::parse(
            r#"(opponents: [(id: "slime", name: "Slime", level: 1, hp: 6, attack: 4, defense: 1)])"#,
        )
        .unwrap();
        assert_eq!(templates[0].action_chance, 100);
        assert_eq!(templates[0].arrival, None);
    }
}
