//! Default data set compiled into the binary.

use lokarta_core::GameConfig;

use crate::bundle::{ContentBundle, ContentRecords};
use crate::loaders::{
    ActionLoader, ConfigLoader, ItemLoader, LoadResult, MenuLoader, OpponentLoader, SceneLoader,
    SpellLoader, VenueLoader, assemble,
};

const ACTIONS: &str = include_str!("../../data/actions.ron");
const SCENES: &str = include_str!("../../data/scenes.ron");
const MENUS: &str = include_str!("../../data/menus.ron");
const VENUES: &str = include_str!("../../data/venues.ron");
const SPELLS: &str = include_str!("../../data/spells.ron");
const ITEMS: &str = include_str!("../../data/items.ron");
const OPPONENTS: &str = include_str!("../../data/opponents.ron");
const CONFIG: &str = include_str!("../../data/config.toml");

impl ContentBundle {
    /// Parses the data files shipped with the crate.
    pub fn embedded() -> LoadResult<Self> {
        assemble(ContentRecords {
            global: ActionLoader::parse(ACTIONS)?,
            scenes: SceneLoader::parse(SCENES)?,
            menus: MenuLoader::parse(MENUS)?,
            venues: VenueLoader::parse(VENUES)?,
            spells: SpellLoader::parse(SPELLS)?,
            items: ItemLoader::parse(ITEMS)?,
            opponents: OpponentLoader::parse(OPPONENTS)?,
        })
    }
}

/// Balance configuration shipped with the crate.
pub fn embedded_config() -> LoadResult<GameConfig> {
    ConfigLoader::parse(CONFIG)
}
