//! Shared fixtures: embedded content, a scriptable RNG and key helpers.
#![allow(dead_code)]

use std::collections::HashMap;

use lokarta_content::{ContentBundle, embedded_config};
use lokarta_core::{
    BaseMode, BuiltinPredicates, GameConfig, GameEnv, InputKey, MessageKey, RngOracle, Scene,
    env::{OpponentOracle, OpponentTemplate, compute_seed},
};
use lokarta_runtime::{CommandRouter, InMemoryPersistence, StepReport};

pub const SEED: u64 = 0x5eed;

/// Raw value that makes `roll_d100` land on 1 (always miss, always act).
pub const LOW: u32 = 0;
/// Raw value that makes `roll_d100` land on 100 (never miss or crit).
pub const HIGH: u32 = 99;

/// Returns `fallback` for every seed except the ones forced for a specific
/// (nonce, actor, context) under [`SEED`].
pub struct ScriptedRng {
    fallback: u32,
    forced: HashMap<u64, u32>,
}

impl ScriptedRng {
    pub fn constant(fallback: u32) -> Self {
        Self {
            fallback,
            forced: HashMap::new(),
        }
    }

    pub fn force(mut self, nonce: u64, actor: u32, context: u32, value: u32) -> Self {
        self.forced
            .insert(compute_seed(SEED, nonce, actor, context), value);
        self
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, seed: u64) -> u32 {
        self.forced.get(&seed).copied().unwrap_or(self.fallback)
    }
}

pub struct Fixture {
    pub bundle: ContentBundle,
    pub config: GameConfig,
    pub rng: ScriptedRng,
}

impl Fixture {
    pub fn new(rng: ScriptedRng) -> Self {
        Self {
            bundle: ContentBundle::embedded().expect("embedded content parses"),
            config: embedded_config().expect("embedded config parses"),
            rng,
        }
    }

    pub fn env(&self) -> GameEnv<'_> {
        GameEnv::with_bundle(&self.bundle, &self.rng, &self.config)
    }

    pub fn router(&self, persistence: InMemoryPersistence) -> CommandRouter<'_, InMemoryPersistence> {
        CommandRouter::new(self.env(), &BuiltinPredicates, persistence, SEED)
            .expect("embedded content validates")
    }

    pub fn template(&self, id: &str) -> &OpponentTemplate {
        self.bundle
            .templates()
            .iter()
            .find(|t| t.id == id)
            .expect("unknown template")
    }
}

pub fn press(router: &mut CommandRouter<'_, InMemoryPersistence>, key: char) -> StepReport {
    router
        .handle_input(InputKey::Char(key))
        .expect("dispatch succeeds")
}

pub fn keys(report: &StepReport) -> Vec<MessageKey> {
    report.narrations().map(|n| n.key).collect()
}

pub fn texts(report: &StepReport) -> Vec<String> {
    report.narrations().map(|n| n.to_string()).collect()
}

/// Puts the player in town, bypassing the title screen.
pub fn in_town(router: &mut CommandRouter<'_, InMemoryPersistence>) {
    router
        .state_mut()
        .set_mode(BaseMode::Explore(Scene::Town));
}

/// Starts a fight in the forest against `opponents`, in order.
pub fn fight(
    fixture: &Fixture,
    router: &mut CommandRouter<'_, InMemoryPersistence>,
    opponents: &[&str],
) {
    let state = router.state_mut();
    state.set_mode(BaseMode::Explore(Scene::Forest));
    for id in opponents {
        state
            .spawn_opponent(fixture.template(id))
            .expect("room on the field");
    }
    state.enter_combat().expect("opponents spawned");
}
