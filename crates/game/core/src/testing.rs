//! In-memory content and scripted RNG for unit tests.

use crate::catalog::{ActionDefinition, BoostPrompt, CommandId};
use crate::env::{
    ActionOracle, ItemDefinition, ItemOracle, MenuDefinition, MenuSource, OpponentOracle,
    OpponentTemplate, RngOracle, SceneDefinition, SpellDefinition, SpellEffect, SpellOracle,
    SpellVariant, StunSpec, VenueDefinition, VenueOracle,
};

/// Returns the same value for every seed.
pub struct ConstRng(pub u32);

impl RngOracle for ConstRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

pub struct TestContent {
    pub global: Vec<ActionDefinition>,
    pub scenes: Vec<SceneDefinition>,
    pub menus: Vec<MenuDefinition>,
    pub venues: Vec<VenueDefinition>,
    pub spells: Vec<SpellDefinition>,
    pub items: Vec<ItemDefinition>,
    pub templates: Vec<OpponentTemplate>,
}

fn scene(id: &str, actions: Vec<ActionDefinition>) -> SceneDefinition {
    SceneDefinition {
        id: id.into(),
        name: id.into(),
        enter_message: None,
        already_message: None,
        actions,
    }
}

fn template(id: &str, level: u32, hp: u32, attack: u32, action_chance: u32) -> OpponentTemplate {
    OpponentTemplate {
        id: id.into(),
        name: id.into(),
        level,
        hp,
        attack,
        defense: 2,
        action_chance,
        arrival: None,
    }
}

impl TestContent {
    pub fn new() -> Self {
        let global = vec![
            ActionDefinition::new("q", "Quit", CommandId::Quit),
            ActionDefinition::new("i", "Items", CommandId::OpenMenu).with_target("inventory"),
        ];
        let scenes = vec![
            scene(
                "forest",
                vec![
                    ActionDefinition::new("a", "Attack", CommandId::Attack)
                        .requiring_target()
                        .with_when("has_opponents"),
                    ActionDefinition::new("t", "Town", CommandId::EnterScene)
                        .with_target("town")
                        .with_when("no_opponents"),
                ],
            ),
            scene("level_up", Vec::new()),
            scene("title", vec![ActionDefinition::new("n", "New", CommandId::TitleNew)]),
            scene(
                "town",
                vec![
                    ActionDefinition::new("f", "Forest", CommandId::EnterScene).with_target("forest"),
                    ActionDefinition::new("s", "Shop", CommandId::EnterVenue).with_target("shop"),
                ],
            ),
        ];
        let menus = vec![MenuDefinition {
            id: "inventory".into(),
            title: "Items".into(),
            source: MenuSource::Inventory,
            open_message: None,
            close_message: None,
            empty_message: None,
            actions: vec![ActionDefinition::new("b", "Back", CommandId::CloseMenu)],
        }];
        let venues = vec![VenueDefinition {
            id: "shop".into(),
            name: "Shop".into(),
            welcome_message: None,
            leave_message: None,
            actions: vec![
                ActionDefinition::new("i", "Buy potion", CommandId::BuyItem).with_target("potion"),
                ActionDefinition::new("l", "Leave", CommandId::ExitVenue),
            ],
            services: Default::default(),
            notices: Default::default(),
        }];
        let spells = vec![
            SpellDefinition {
                id: "healing".into(),
                name: "Healing".into(),
                menu_key: "h".into(),
                requires_target: false,
                anim: None,
                base: SpellVariant {
                    mp_cost: 2,
                    effect: SpellEffect::Heal { amount: 10 },
                    stun: None,
                },
                boosted: None,
                boost_prompt: None,
            },
            SpellDefinition {
                id: "spark".into(),
                name: "Spark".into(),
                menu_key: "s".into(),
                requires_target: true,
                anim: None,
                base: SpellVariant {
                    mp_cost: 2,
                    effect: SpellEffect::Damage {
                        attack_bonus: 2,
                        multiplier: 1,
                    },
                    stun: Some(StunSpec {
                        chance: 100,
                        turns: None,
                    }),
                },
                boosted: Some(SpellVariant {
                    mp_cost: 4,
                    effect: SpellEffect::Damage {
                        attack_bonus: 2,
                        multiplier: 2,
                    },
                    stun: None,
                }),
                boost_prompt: Some(BoostPrompt::default()),
            },
        ];
        let items = vec![ItemDefinition {
            id: "potion".into(),
            name: "Potion".into(),
            price: 5,
            hp: 10,
            mp: 0,
        }];
        let templates = vec![
            template("slime", 1, 6, 3, 100),
            template("bat", 1, 4, 2, 50),
            template("golem", 3, 100, 5, 100),
        ];
        Self {
            global,
            scenes,
            menus,
            venues,
            spells,
            items,
            templates,
        }
    }

    pub fn template(&self, id: &str) -> &OpponentTemplate {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .expect("unknown test template")
    }

    pub fn spell(&self, id: &str) -> &SpellDefinition {
        SpellOracle::spell(self, id).expect("unknown test spell")
    }
}

impl ActionOracle for TestContent {
    fn global_actions(&self) -> &[ActionDefinition] {
        &self.global
    }

    fn scene(&self, id: &str) -> Option<&SceneDefinition> {
        self.scenes.iter().find(|s| s.id == id)
    }

    fn scenes(&self) -> Vec<&SceneDefinition> {
        self.scenes.iter().collect()
    }

    fn menu(&self, id: &str) -> Option<&MenuDefinition> {
        self.menus.iter().find(|m| m.id == id)
    }

    fn menus(&self) -> Vec<&MenuDefinition> {
        self.menus.iter().collect()
    }
}

impl VenueOracle for TestContent {
    fn venue(&self, id: &str) -> Option<&VenueDefinition> {
        self.venues.iter().find(|v| v.id == id)
    }

    fn venues(&self) -> Vec<&VenueDefinition> {
        self.venues.iter().collect()
    }
}

impl SpellOracle for TestContent {
    fn spell(&self, id: &str) -> Option<&SpellDefinition> {
        self.spells.iter().find(|s| s.id == id)
    }

    fn spells(&self) -> Vec<&SpellDefinition> {
        self.spells.iter().collect()
    }
}

impl ItemOracle for TestContent {
    fn item(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|i| i.id == id)
    }

    fn items(&self) -> Vec<&ItemDefinition> {
        self.items.iter().collect()
    }
}

impl OpponentOracle for TestContent {
    fn templates(&self) -> &[OpponentTemplate] {
        &self.templates
    }
}
