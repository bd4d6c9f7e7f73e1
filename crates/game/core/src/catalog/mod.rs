//! Action catalog and resolver.
//!
//! Action records arrive in layers (global, scene, venue, menu). The catalog
//! merges them by display key with the higher layer winning, filters the
//! result through `when` predicates against live state, and resolves an input
//! key to at most one action.
mod action;
mod error;
mod input;
mod layer;
mod predicate;
mod resolve;
mod validate;

pub use action::{ActionDefinition, ActionType, BoostPrompt, CommandId};
pub use error::CatalogError;
pub use input::InputKey;
pub use layer::{ActionContext, Layer, LayerKind, generated_entries, merge_layers};
pub use predicate::{BuiltinPredicates, PredicateEvaluator};
pub use resolve::{ActionSet, available_actions, filter};
pub use validate::{REQUIRED_SCENES, validate_action, validate_content};
