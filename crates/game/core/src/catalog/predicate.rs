//! Named predicates over live state.

use crate::state::StateView;

use super::CatalogError;

/// Pure evaluator of `when` predicates.
///
/// Evaluation is total over the names the evaluator [`knows`]; any other name
/// is a configuration error rather than a silent pass.
///
/// [`knows`]: PredicateEvaluator::knows
pub trait PredicateEvaluator {
    fn knows(&self, name: &str) -> bool;

    fn evaluate(&self, name: &str, view: &StateView<'_>) -> Result<bool, CatalogError>;
}

/// The predicates the router's own dispatch relies on.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinPredicates;

impl BuiltinPredicates {
    pub const NAMES: [&'static str; 6] = [
        "has_opponents",
        "no_opponents",
        "needs_rest",
        "has_save",
        "has_items",
        "has_stat_points",
    ];
}

impl PredicateEvaluator for BuiltinPredicates {
    fn knows(&self, name: &str) -> bool {
        Self::NAMES.contains(&name)
    }

    fn evaluate(&self, name: &str, view: &StateView<'_>) -> Result<bool, CatalogError> {
        Ok(match name {
            "has_opponents" => view.has_opponents(),
            "no_opponents" => !view.has_opponents(),
            "needs_rest" => view.needs_rest(),
            "has_save" => view.has_save(),
            "has_items" => view.has_items(),
            "has_stat_points" => view.has_stat_points(),
            other => return Err(CatalogError::UnknownPredicate(other.to_owned())),
        })
    }
}
