//! Spell oracle and spell records.

use crate::catalog::BoostPrompt;

pub trait SpellOracle: Send + Sync {
    fn spell(&self, id: &str) -> Option<&SpellDefinition>;

    /// Known spells in spellbook order.
    fn spells(&self) -> Vec<&SpellDefinition>;
}

/// Spell record.
///
/// A spell has a base variant and optionally a boosted one. When the casting
/// action carries boost metadata and the player can afford the boosted cost,
/// a confirmation decides which variant resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellDefinition {
    pub id: String,
    pub name: String,
    /// Key of the generated spellbook entry.
    pub menu_key: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requires_target: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub anim: Option<String>,
    pub base: SpellVariant,
    #[cfg_attr(feature = "serde", serde(default))]
    pub boosted: Option<SpellVariant>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub boost_prompt: Option<BoostPrompt>,
}

impl SpellDefinition {
    pub fn variant(&self, boosted: bool) -> &SpellVariant {
        match (&self.boosted, boosted) {
            (Some(variant), true) => variant,
            _ => &self.base,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellVariant {
    pub mp_cost: u32,
    pub effect: SpellEffect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stun: Option<StunSpec>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SpellEffect {
    /// Restores HP to the caster.
    Heal { amount: u32 },
    /// Damage roll with `attack + attack_bonus` as power, scaled by `multiplier`.
    Damage { attack_bonus: u32, multiplier: u32 },
}

/// Stun applied on a landed hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StunSpec {
    /// Percent chance.
    pub chance: u32,
    /// Opponent turns skipped; falls back to the combat default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub turns: Option<u32>,
}
