//! Action layer oracle.
//!
//! Provides the global action layer and the scene and menu records that
//! contribute their own layers.

use crate::catalog::ActionDefinition;

/// Oracle providing layered action records.
pub trait ActionOracle: Send + Sync {
    /// Lowest-priority layer, active in every mode except title, level-up and
    /// suppressing menus.
    fn global_actions(&self) -> &[ActionDefinition];

    fn scene(&self, id: &str) -> Option<&SceneDefinition>;

    /// All scene records, sorted by id.
    fn scenes(&self) -> Vec<&SceneDefinition>;

    fn menu(&self, id: &str) -> Option<&MenuDefinition>;

    /// All menu records, sorted by id.
    fn menus(&self) -> Vec<&MenuDefinition>;
}

/// Scene record: display name, narration overrides and its action layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enter_message: Option<String>,
    /// Narrated when entering the scene the player is already in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub already_message: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actions: Vec<ActionDefinition>,
}

/// Where a menu's entries come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MenuSource {
    /// Only the record's own actions.
    #[default]
    Static,
    /// One `USE_ITEM` entry per held item, keys `1`..`9`.
    Inventory,
    /// One `CAST_SPELL` entry per known spell, keyed by the spell's menu key.
    Spellbook,
}

/// Menu record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuDefinition {
    pub id: String,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: MenuSource,
    #[cfg_attr(feature = "serde", serde(default))]
    pub open_message: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub close_message: Option<String>,
    /// Narrated instead of opening when a generated menu has no entries.
    #[cfg_attr(feature = "serde", serde(default))]
    pub empty_message: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actions: Vec<ActionDefinition>,
}
