//! Structured results handed back to the router.

use crate::state::OpponentId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combatant {
    Player,
    Opponent(OpponentId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusEffect {
    /// Opponent skips this many of its turns.
    Stun { turns: u32 },
}

/// Result of one resolved attack. Transient: consumed by the router right away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatOutcome {
    pub attacker: Combatant,
    pub defender: Combatant,
    /// Display name of the opponent involved.
    pub opponent_name: String,
    pub damage: u32,
    pub was_crit: bool,
    pub was_miss: bool,
    pub status_applied: Option<StatusEffect>,
    pub defender_defeated: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpellOutcome {
    Healed { amount: u32 },
    Struck(CombatOutcome),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpellCast {
    pub spell: String,
    pub boosted: bool,
    pub mp_spent: u32,
    pub outcome: SpellOutcome,
}

/// What one opponent did on its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpponentTurn {
    Stunned {
        opponent: OpponentId,
        name: String,
        /// Turns still to skip after this one.
        remaining: u32,
    },
    Hesitated {
        opponent: OpponentId,
        name: String,
    },
    Attacked(CombatOutcome),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatResolution {
    Victory {
        xp: u32,
        gold: u32,
        levels_gained: u32,
    },
    Defeat {
        gold_lost: u32,
    },
}
