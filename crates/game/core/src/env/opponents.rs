//! Opponent templates for encounter generation.

pub trait OpponentOracle: Send + Sync {
    /// Templates eligible for random encounters, in a stable order.
    fn templates(&self) -> &[OpponentTemplate];
}

/// Template from which opponents are spawned.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentTemplate {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    /// Percent chance of acting each turn.
    #[cfg_attr(feature = "serde", serde(default = "default_action_chance"))]
    pub action_chance: u32,
    /// Arrival narration override.
    #[cfg_attr(feature = "serde", serde(default))]
    pub arrival: Option<String>,
}

#[cfg(feature = "serde")]
fn default_action_chance() -> u32 {
    100
}

impl OpponentTemplate {
    /// Encounter budget consumed by one spawn of this template.
    pub fn cost(&self) -> u32 {
        self.level.max(1)
    }
}
