//! Data-driven content definitions and loaders.
//!
//! This crate provides the declarative records the rules run on and loaders
//! for the RON/TOML data files they are written in:
//! - Global action layer (`actions.ron`)
//! - Scenes and their action layers (`scenes.ron`)
//! - Venues, shop stock and services (`venues.ron`)
//! - Menus (`menus.ron`)
//! - Spells (`spells.ron`), items (`items.ron`), opponents (`opponents.ron`)
//! - Balance configuration (`config.toml`)
//!
//! [`ContentBundle`] implements every `lokarta-core` record oracle, so a
//! loaded bundle plugs straight into a `GameEnv`.

pub mod bundle;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bundle::{ContentBundle, ContentRecords};

#[cfg(feature = "loaders")]
pub use loaders::{
    ActionLoader, ConfigLoader, ContentFactory, ItemLoader, LoadResult, MenuLoader,
    OpponentLoader, SceneLoader, SpellLoader, VenueLoader, embedded_config,
};
