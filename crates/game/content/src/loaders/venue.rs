//! Venue loader.

use std::path::Path;

use lokarta_core::env::VenueDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueCatalog {
    pub venues: Vec<VenueDefinition>,
}

/// Loader for venues (layers, services) from RON files.
pub struct VenueLoader;

impl VenueLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<VenueDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<VenueDefinition>> {
        let catalog: VenueCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse venue catalog RON: {}", e))?;

        Ok(catalog.venues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lokarta_core::env::ServiceKind;

    #[test]
    fn services_are_keyed_by_id() {
        let venues = VenueLoader::parse(
            r#"(venues: [(
                id: "inn",
                name: "Inn",
                actions: [(key: "1", label: "Rest", command: USE_SERVICE, service_id: Some("rest"))],
                services: { "rest": (kind: rest, name: "Rest", cost: 10) },
            )])"#,
        )
        .unwrap();
        let rest = venues[0].service("rest").unwrap();
        assert_eq!(rest.kind, ServiceKind::Rest);
        assert_eq!(rest.cost, 10);
        assert_eq!(rest.message, None);
        assert!(venues[0].notices.is_empty());
    }

    #[test]
    fn notices_are_keyed_by_id() {
        let venues = VenueLoader::parse(
            r#"(venues: [(
                id: "hall",
                name: "Hall",
                actions: [(key: "1", label: "Board", command: READ_NOTICE, target: Some("board"))],
                notices: { "board": "Wolves near the bridge." },
            )])"#,
        )
        .unwrap();
        assert_eq!(venues[0].notice("board"), Some("Wolves near the bridge."));
        assert_eq!(venues[0].notice("missing"), None);
    }
}
