//! Content loaders for reading game data from files.
//!
//! Each loader reads one RON/TOML file into `lokarta-core` record types.
//! `load` reads from disk; `parse` takes the file text, which is how the
//! embedded default data set is read.

pub mod config;
pub mod embedded;
pub mod factory;
pub mod item;
pub mod layers;
pub mod opponent;
pub mod spell;
pub mod venue;

pub use config::ConfigLoader;
pub use embedded::embedded_config;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use layers::{ActionLoader, MenuLoader, SceneLoader};
pub use opponent::OpponentLoader;
pub use spell::SpellLoader;
pub use venue::VenueLoader;

use std::collections::BTreeSet;
use std::path::Path;

use crate::bundle::{ContentBundle, ContentRecords};

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

fn ensure_unique<'a>(kind: &str, ids: impl IntoIterator<Item = &'a str>) -> LoadResult<()> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("Duplicate {} id: {}", kind, id);
        }
    }
    Ok(())
}

/// Rejects duplicate ids, then indexes the records.
pub(crate) fn assemble(records: ContentRecords) -> LoadResult<ContentBundle> {
    ensure_unique("scene", records.scenes.iter().map(|s| s.id.as_str()))?;
    ensure_unique("menu", records.menus.iter().map(|m| m.id.as_str()))?;
    ensure_unique("venue", records.venues.iter().map(|v| v.id.as_str()))?;
    ensure_unique("spell", records.spells.iter().map(|s| s.id.as_str()))?;
    ensure_unique("item", records.items.iter().map(|i| i.id.as_str()))?;
    ensure_unique("opponent", records.opponents.iter().map(|o| o.id.as_str()))?;
    Ok(ContentBundle::from(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lokarta_core::env::ItemDefinition;

    #[test]
    fn duplicate_ids_are_rejected() {
        let potion = ItemDefinition {
            id: "potion".into(),
            name: "Potion".into(),
            price: 5,
            hp: 10,
            mp: 0,
        };
        let records = ContentRecords {
            items: vec![potion.clone(), potion],
            ..Default::default()
        };
        let err = assemble(records).unwrap_err();
        assert!(err.to_string().contains("Duplicate item id: potion"));
    }
}
