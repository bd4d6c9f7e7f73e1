/// Game configuration constants and tunable balance parameters.
///
/// Every field has a default matching the shipped data, so a partial
/// `config.toml` only needs to list the values it overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    pub combat: CombatParams,
    pub encounter: EncounterParams,
    pub progression: ProgressionParams,
    pub defeat: DefeatParams,
    pub prompt: PromptParams,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of opponents on the field at once.
    pub const MAX_OPPONENTS: usize = 3;
    /// Number of inventory entries addressable from the inventory menu (keys 1-9).
    pub const MAX_MENU_ENTRIES: usize = 9;

    pub fn new() -> Self {
        Self::default()
    }
}

/// Damage roll parameters.
///
/// Probabilities are whole percentages compared against a d100 roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CombatParams {
    /// Floor applied to `power - defense` and to the varied result of a hit.
    pub min_damage: u32,
    /// Half-width of the symmetric variance band, in percent of the base damage.
    pub variance_percent: u32,
    pub crit_chance: u32,
    pub crit_multiplier: u32,
    pub miss_chance: u32,
    /// Stun length used when a spell does not specify one.
    pub default_stun_turns: u32,
}

impl Default for CombatParams {
    fn default() -> Self {
        Self {
            min_damage: 1,
            variance_percent: 25,
            crit_chance: 15,
            crit_multiplier: 2,
            miss_chance: 10,
            default_stun_turns: 2,
        }
    }
}

/// Encounter budget parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EncounterParams {
    /// Roster cap, never above [`GameConfig::MAX_OPPONENTS`].
    pub max_opponents: usize,
    /// Budget granted per player level.
    pub budget_per_level: u32,
    /// Number of template draws before the roster is closed.
    pub max_attempts: u32,
}

impl EncounterParams {
    /// Upper bound of the total opponent cost for a player of `level`.
    pub fn budget_for(&self, level: u32) -> u32 {
        level.max(1).saturating_mul(self.budget_per_level.max(1))
    }

    /// Effective roster cap.
    pub fn roster_cap(&self) -> usize {
        self.max_opponents.clamp(1, GameConfig::MAX_OPPONENTS)
    }
}

impl Default for EncounterParams {
    fn default() -> Self {
        Self {
            max_opponents: GameConfig::MAX_OPPONENTS,
            budget_per_level: 1,
            max_attempts: 10,
        }
    }
}

/// Experience and stat point progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ProgressionParams {
    /// A level is gained while `xp >= level * xp_per_level`.
    pub xp_per_level: u32,
    pub stat_points_per_level: u32,
}

impl Default for ProgressionParams {
    fn default() -> Self {
        Self {
            xp_per_level: 50,
            stat_points_per_level: 10,
        }
    }
}

/// Penalty applied when the player falls in combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DefeatParams {
    pub gold_loss_percent: u32,
}

impl Default for DefeatParams {
    fn default() -> Self {
        Self {
            gold_loss_percent: 50,
        }
    }
}

/// Timed prompt parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PromptParams {
    /// Resolution of the session clock.
    pub ticks_per_second: u64,
    /// Boost confirmation timeout when the action record does not carry one.
    pub boost_timeout_secs: u64,
}

impl PromptParams {
    pub fn ticks_for_secs(&self, secs: u64) -> u64 {
        secs.saturating_mul(self.ticks_per_second.max(1))
    }
}

impl Default for PromptParams {
    fn default() -> Self {
        Self {
            ticks_per_second: 10,
            boost_timeout_secs: 3,
        }
    }
}
