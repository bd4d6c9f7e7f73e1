//! Combat resolution.
//!
//! # Core Functions
//!
//! - [`roll_damage`]: pure damage formula (miss, variance, crit, multiplier)
//! - [`CombatEngine`]: player attacks and spells, opponent turns, victory/defeat
//! - [`plan_encounter`]: level-budgeted roster selection
//!
//! Every random decision draws from the session RNG oracle with a distinct
//! roll context, so a scripted oracle can force any outcome.

mod damage;
mod encounter;
mod engine;
mod error;
mod outcome;

pub use damage::{CombatRolls, DamageRoll, roll_damage};
pub use encounter::plan_encounter;
pub use engine::CombatEngine;
pub use error::{CombatError, EncounterError};
pub use outcome::{
    CombatOutcome, CombatResolution, Combatant, OpponentTurn, SpellCast, SpellOutcome,
    StatusEffect,
};
