//! Traits describing read-only game data.
//!
//! Oracles expose the declarative records (action layers, scenes, venues,
//! menus, spells, items, opponent templates) plus the RNG. [`GameEnv`] bundles
//! them with the balance configuration so the catalog, combat engine and
//! router can reach everything without coupling to a concrete loader.
mod actions;
mod error;
mod items;
mod opponents;
mod rng;
mod spells;
mod venues;

pub use actions::{ActionOracle, MenuDefinition, MenuSource, SceneDefinition};
pub use error::OracleError;
pub use items::{ItemDefinition, ItemOracle};
pub use opponents::{OpponentOracle, OpponentTemplate};
pub use rng::{PcgRng, RngOracle, compute_seed, roll};
pub use spells::{SpellDefinition, SpellEffect, SpellOracle, SpellVariant, StunSpec};
pub use venues::{ServiceDefinition, ServiceKind, VenueDefinition, VenueOracle};

use crate::config::GameConfig;

/// Every record oracle implemented by one content source.
pub trait OracleBundle: ActionOracle + VenueOracle + SpellOracle + ItemOracle + OpponentOracle {}

impl<T> OracleBundle for T where
    T: ActionOracle + VenueOracle + SpellOracle + ItemOracle + OpponentOracle
{
}

/// Aggregates read-only oracles and balance parameters.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    actions: &'a dyn ActionOracle,
    venues: &'a dyn VenueOracle,
    spells: &'a dyn SpellOracle,
    items: &'a dyn ItemOracle,
    opponents: &'a dyn OpponentOracle,
    rng: &'a dyn RngOracle,
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        actions: &'a dyn ActionOracle,
        venues: &'a dyn VenueOracle,
        spells: &'a dyn SpellOracle,
        items: &'a dyn ItemOracle,
        opponents: &'a dyn OpponentOracle,
        rng: &'a dyn RngOracle,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            actions,
            venues,
            spells,
            items,
            opponents,
            rng,
            config,
        }
    }

    /// Uses one content source for every record oracle.
    pub fn with_bundle<B: OracleBundle>(
        bundle: &'a B,
        rng: &'a dyn RngOracle,
        config: &'a GameConfig,
    ) -> Self {
        Self::new(bundle, bundle, bundle, bundle, bundle, rng, config)
    }

    pub fn actions(&self) -> &'a dyn ActionOracle {
        self.actions
    }

    pub fn venues(&self) -> &'a dyn VenueOracle {
        self.venues
    }

    pub fn spells(&self) -> &'a dyn SpellOracle {
        self.spells
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }

    pub fn opponents(&self) -> &'a dyn OpponentOracle {
        self.opponents
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn scene(&self, id: &str) -> Result<&'a SceneDefinition, OracleError> {
        self.actions
            .scene(id)
            .ok_or_else(|| OracleError::SceneNotFound(id.to_owned()))
    }

    pub fn venue(&self, id: &str) -> Result<&'a VenueDefinition, OracleError> {
        self.venues
            .venue(id)
            .ok_or_else(|| OracleError::VenueNotFound(id.to_owned()))
    }

    pub fn menu(&self, id: &str) -> Result<&'a MenuDefinition, OracleError> {
        self.actions
            .menu(id)
            .ok_or_else(|| OracleError::MenuNotFound(id.to_owned()))
    }

    pub fn spell(&self, id: &str) -> Result<&'a SpellDefinition, OracleError> {
        self.spells
            .spell(id)
            .ok_or_else(|| OracleError::SpellNotFound(id.to_owned()))
    }

    pub fn item(&self, id: &str) -> Result<&'a ItemDefinition, OracleError> {
        self.items
            .item(id)
            .ok_or_else(|| OracleError::ItemNotFound(id.to_owned()))
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
