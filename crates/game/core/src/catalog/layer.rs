//! Layered action sources and their merge.

use std::collections::BTreeMap;

use crate::config::GameConfig;
use crate::env::{GameEnv, MenuDefinition, MenuSource, OracleError};
use crate::state::{BaseMode, GameState, SessionMode};

use super::{ActionDefinition, CommandId};

/// Source of a layer, lowest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LayerKind {
    Global,
    Scene,
    Venue,
    Menu,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub kind: LayerKind,
    pub id: String,
    pub actions: Vec<ActionDefinition>,
}

impl Layer {
    pub fn new(kind: LayerKind, id: impl Into<String>, actions: Vec<ActionDefinition>) -> Self {
        Self {
            kind,
            id: id.into(),
            actions,
        }
    }
}

/// Ordered layers active at one moment. Recomputed from the mode, never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionContext {
    layers: Vec<Layer>,
}

impl ActionContext {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// Layers for the current mode. A pending prompt intercepts input, so it
    /// has no layers at all.
    pub fn for_mode(state: &GameState, env: &GameEnv<'_>) -> Result<Self, OracleError> {
        let mut layers = Vec::new();
        if let SessionMode::Active(base) = state.mode() {
            push_layers(&mut layers, base, state, env)?;
        }
        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn merged(&self) -> Vec<ActionDefinition> {
        let slices: Vec<&[ActionDefinition]> =
            self.layers.iter().map(|l| l.actions.as_slice()).collect();
        merge_layers(&slices)
    }
}

fn push_layers(
    layers: &mut Vec<Layer>,
    mode: &BaseMode,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<(), OracleError> {
    let global = || {
        Layer::new(
            LayerKind::Global,
            "global",
            env.actions().global_actions().to_vec(),
        )
    };
    let scene = |id: &str| -> Result<Layer, OracleError> {
        let record = env.scene(id)?;
        Ok(Layer::new(LayerKind::Scene, id, record.actions.clone()))
    };

    match mode {
        // modal screens own every key
        BaseMode::Title | BaseMode::LevelUp => layers.push(scene(mode.scene_record())?),
        BaseMode::Explore(_) | BaseMode::Combat => {
            layers.push(global());
            layers.push(scene(mode.scene_record())?);
        }
        BaseMode::Venue { venue, .. } => {
            layers.push(global());
            layers.push(scene(mode.scene_record())?);
            let record = env.venue(venue)?;
            layers.push(Layer::new(LayerKind::Venue, venue, record.actions.clone()));
        }
        BaseMode::Menu {
            menu,
            suppress_outer,
            under,
        } => {
            if !suppress_outer {
                push_layers(layers, under, state, env)?;
            }
            let record = env.menu(menu)?;
            let mut actions = generated_entries(record, state, env)?;
            actions.extend(record.actions.iter().cloned());
            layers.push(Layer::new(LayerKind::Menu, menu, actions));
        }
    }
    Ok(())
}

/// Entries a menu builds from live state, before its static actions.
///
/// Inventory menus list held items as `1`..`9` in item-id order; spellbooks
/// list every known spell under its menu key. Targeted spells are only legal
/// while opponents are on the field.
pub fn generated_entries(
    menu: &MenuDefinition,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<Vec<ActionDefinition>, OracleError> {
    let mut entries = Vec::new();
    match menu.source {
        MenuSource::Static => {}
        MenuSource::Inventory => {
            let held = state
                .player
                .inventory
                .iter()
                .take(GameConfig::MAX_MENU_ENTRIES);
            for (slot, (id, count)) in held.enumerate() {
                let item = env.item(id)?;
                let label = format!("{} x{count}", item.name);
                entries.push(
                    ActionDefinition::new((slot + 1).to_string(), label, CommandId::UseItem)
                        .with_target(id),
                );
            }
        }
        MenuSource::Spellbook => {
            for spell in env.spells().spells() {
                let mut entry =
                    ActionDefinition::new(&spell.menu_key, &spell.name, CommandId::CastSpell)
                        .with_target(&spell.id);
                if spell.requires_target {
                    entry = entry.requiring_target().with_when("has_opponents");
                }
                entry.anim = spell.anim.clone();
                entry.boost = spell.boost_prompt.clone();
                entries.push(entry);
            }
        }
    }
    Ok(entries)
}

/// Merges layers given lowest priority first.
///
/// Definitions are keyed by display key with last-writer-wins: a later layer
/// replaces an earlier definition for the same key in place, so the key keeps
/// the position where it first appeared. Entries with an empty key are dropped.
pub fn merge_layers(layers: &[&[ActionDefinition]]) -> Vec<ActionDefinition> {
    let mut merged: Vec<ActionDefinition> = Vec::new();
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();

    for action in layers.iter().flat_map(|layer| layer.iter()) {
        if action.key.is_empty() {
            continue;
        }
        match index.get(action.key.as_str()) {
            Some(&slot) => merged[slot] = action.clone(),
            None => {
                index.insert(action.key.as_str(), merged.len());
                merged.push(action.clone());
            }
        }
    }
    merged
}
