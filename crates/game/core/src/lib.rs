//! Deterministic rules of a data-driven, turn-based RPG.
//!
//! `lokarta-core` defines the canonical rules (layered action catalog, prompt
//! state machine, combat engine, session state) as pure APIs. It performs no
//! I/O: records arrive through the oracle traits in [`env`], and the runtime
//! crate owns dispatch, persistence and the tick loop.
pub mod catalog;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod prompt;
pub mod state;

#[cfg(test)]
mod testing;

pub use catalog::{
    ActionContext, ActionDefinition, ActionSet, ActionType, BoostPrompt, BuiltinPredicates,
    CatalogError, CommandId, InputKey, Layer, LayerKind, PredicateEvaluator, available_actions,
    filter, merge_layers, validate_content,
};
pub use combat::{
    CombatEngine, CombatError, CombatOutcome, CombatResolution, Combatant, EncounterError,
    OpponentTurn, SpellCast, SpellOutcome, StatusEffect, plan_encounter, roll_damage,
};
pub use config::GameConfig;
pub use env::{GameEnv, OracleBundle, OracleError, PcgRng, RngOracle};
pub use error::{ErrorSeverity, GameError};
pub use prompt::{Answer, PendingPrompt, PromptAction, PromptInput, PromptStep};
pub use state::{
    BaseMode, GameState, MessageKey, ModeKind, Narration, Opponent, OpponentId, PlayerState,
    ResourceMeter, Scene, SessionMode, Stat, StateError, StateView, Tick,
};
