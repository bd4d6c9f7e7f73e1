//! In-memory record store implementing the core oracles.

use lokarta_core::ActionDefinition;
use lokarta_core::env::{
    ActionOracle, ItemDefinition, ItemOracle, MenuDefinition, OpponentOracle, OpponentTemplate,
    SceneDefinition, SpellDefinition, SpellOracle, VenueDefinition, VenueOracle,
};

/// Raw records as read from the data files.
#[derive(Clone, Debug, Default)]
pub struct ContentRecords {
    pub global: Vec<ActionDefinition>,
    pub scenes: Vec<SceneDefinition>,
    pub menus: Vec<MenuDefinition>,
    pub venues: Vec<VenueDefinition>,
    /// Spellbook order.
    pub spells: Vec<SpellDefinition>,
    pub items: Vec<ItemDefinition>,
    pub opponents: Vec<OpponentTemplate>,
}

/// Every record the rules consult, indexed by id.
///
/// Scenes, menus, venues and items are kept sorted by id; spells and opponent
/// templates keep file order, which is spellbook and encounter-pick order.
#[derive(Clone, Debug, Default)]
pub struct ContentBundle {
    global: Vec<ActionDefinition>,
    scenes: Vec<SceneDefinition>,
    menus: Vec<MenuDefinition>,
    venues: Vec<VenueDefinition>,
    spells: Vec<SpellDefinition>,
    items: Vec<ItemDefinition>,
    opponents: Vec<OpponentTemplate>,
}

impl From<ContentRecords> for ContentBundle {
    fn from(records: ContentRecords) -> Self {
        let ContentRecords {
            global,
            mut scenes,
            mut menus,
            mut venues,
            spells,
            mut items,
            opponents,
        } = records;
        scenes.sort_by(|a, b| a.id.cmp(&b.id));
        menus.sort_by(|a, b| a.id.cmp(&b.id));
        venues.sort_by(|a, b| a.id.cmp(&b.id));
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            global,
            scenes,
            menus,
            venues,
            spells,
            items,
            opponents,
        }
    }
}

fn find_sorted<'a, T>(records: &'a [T], id: &str, key: impl Fn(&T) -> &str) -> Option<&'a T> {
    records
        .binary_search_by(|record| key(record).cmp(id))
        .ok()
        .map(|index| &records[index])
}

impl ActionOracle for ContentBundle {
    fn global_actions(&self) -> &[ActionDefinition] {
        &self.global
    }

    fn scene(&self, id: &str) -> Option<&SceneDefinition> {
        find_sorted(&self.scenes, id, |s| &s.id)
    }

    fn scenes(&self) -> Vec<&SceneDefinition> {
        self.scenes.iter().collect()
    }

    fn menu(&self, id: &str) -> Option<&MenuDefinition> {
        find_sorted(&self.menus, id, |m| &m.id)
    }

    fn menus(&self) -> Vec<&MenuDefinition> {
        self.menus.iter().collect()
    }
}

impl VenueOracle for ContentBundle {
    fn venue(&self, id: &str) -> Option<&VenueDefinition> {
        find_sorted(&self.venues, id, |v| &v.id)
    }

    fn venues(&self) -> Vec<&VenueDefinition> {
        self.venues.iter().collect()
    }
}

impl SpellOracle for ContentBundle {
    fn spell(&self, id: &str) -> Option<&SpellDefinition> {
        self.spells.iter().find(|s| s.id == id)
    }

    fn spells(&self) -> Vec<&SpellDefinition> {
        self.spells.iter().collect()
    }
}

impl ItemOracle for ContentBundle {
    fn item(&self, id: &str) -> Option<&ItemDefinition> {
        find_sorted(&self.items, id, |i| &i.id)
    }

    fn items(&self) -> Vec<&ItemDefinition> {
        self.items.iter().collect()
    }
}

impl OpponentOracle for ContentBundle {
    fn templates(&self) -> &[OpponentTemplate] {
        &self.opponents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> ItemDefinition {
        ItemDefinition {
            id: id.into(),
            name: id.to_uppercase(),
            price: 1,
            hp: 1,
            mp: 0,
        }
    }

    #[test]
    fn lookups_work_regardless_of_file_order() {
        let bundle = ContentBundle::from(ContentRecords {
            items: vec![item("potion"), item("ether"), item("herb")],
            ..Default::default()
        });
        let ids: Vec<&str> = bundle.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["ether", "herb", "potion"]);
        assert_eq!(bundle.item("herb").map(|i| i.name.as_str()), Some("HERB"));
        assert!(bundle.item("elixir").is_none());
    }
}
