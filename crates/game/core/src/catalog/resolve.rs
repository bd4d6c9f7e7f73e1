//! Predicate filtering and key resolution.

use crate::env::GameEnv;
use crate::state::{GameState, StateView};

use super::{ActionContext, ActionDefinition, CatalogError, InputKey, PredicateEvaluator};

/// Drops actions whose `when` predicate is false.
///
/// Actions without a predicate always pass, so filtering a set that carries no
/// predicates returns it unchanged.
pub fn filter(
    actions: Vec<ActionDefinition>,
    predicates: &dyn PredicateEvaluator,
    view: &StateView<'_>,
) -> Result<Vec<ActionDefinition>, CatalogError> {
    let mut legal = Vec::with_capacity(actions.len());
    for action in actions {
        let keep = match action.when.as_deref() {
            None => true,
            Some(name) => predicates.evaluate(name, view)?,
        };
        if keep {
            legal.push(action);
        }
    }
    Ok(legal)
}

/// Legal actions for the current moment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionSet {
    actions: Vec<ActionDefinition>,
}

impl ActionSet {
    pub fn new(actions: Vec<ActionDefinition>) -> Self {
        Self { actions }
    }

    /// Exact, case-sensitive match on the display key.
    pub fn resolve(&self, key: &InputKey) -> Option<&ActionDefinition> {
        let label = key.to_string();
        self.actions.iter().find(|a| a.key == label)
    }

    /// Whether `action` is still offered, unchanged, under its key.
    pub fn contains(&self, action: &ActionDefinition) -> bool {
        self.actions.iter().any(|a| a == action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionDefinition> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn into_vec(self) -> Vec<ActionDefinition> {
        self.actions
    }
}

/// Layers for the mode, merged, then filtered.
pub fn available_actions(
    state: &GameState,
    env: &GameEnv<'_>,
    predicates: &dyn PredicateEvaluator,
) -> Result<ActionSet, CatalogError> {
    let context = ActionContext::for_mode(state, env)?;
    let legal = filter(context.merged(), predicates, &state.view())?;
    Ok(ActionSet::new(legal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuiltinPredicates, CommandId};
    use proptest::prelude::*;

    fn fixture() -> Vec<ActionDefinition> {
        vec![
            ActionDefinition::new("a", "Attack", CommandId::Attack)
                .requiring_target()
                .with_when("has_opponents"),
            ActionDefinition::new("t", "Town", CommandId::EnterScene)
                .with_target("town")
                .with_when("no_opponents"),
            ActionDefinition::new("q", "Quit", CommandId::Quit),
        ]
    }

    #[test]
    fn false_predicates_drop_actions() {
        let state = GameState::new(1);
        let legal = filter(fixture(), &BuiltinPredicates, &state.view()).unwrap();
        let keys: Vec<&str> = legal.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, ["t", "q"]);
    }

    #[test]
    fn unknown_predicate_is_a_configuration_error() {
        let state = GameState::new(1);
        let actions = vec![ActionDefinition::new("x", "X", CommandId::Quit).with_when("moon_full")];
        assert!(matches!(
            filter(actions, &BuiltinPredicates, &state.view()),
            Err(CatalogError::UnknownPredicate(name)) if name == "moon_full"
        ));
    }

    #[test]
    fn resolution_is_exact_and_case_sensitive() {
        let set = ActionSet::new(fixture());
        assert_eq!(
            set.resolve(&InputKey::Char('a')).map(|a| a.command),
            Some(CommandId::Attack)
        );
        assert!(set.resolve(&InputKey::Char('A')).is_none());
        assert!(set.resolve(&InputKey::Char('z')).is_none());
        assert!(set.resolve(&InputKey::Confirm).is_none());
    }

    mod layered {
        use super::*;
        use crate::config::GameConfig;
        use crate::state::{BaseMode, Scene};
        use crate::testing::{ConstRng, TestContent};

        fn keys(set: &ActionSet) -> Vec<&str> {
            set.iter().map(|a| a.key.as_str()).collect()
        }

        #[test]
        fn venue_layer_overrides_global_binding() {
            let content = TestContent::new();
            let config = GameConfig::default();
            let env = GameEnv::with_bundle(&content, &ConstRng(0), &config);
            let mut state = GameState::new(1);
            state.set_mode(BaseMode::Venue {
                scene: Scene::Town,
                venue: "shop".into(),
            });

            let set = available_actions(&state, &env, &BuiltinPredicates).unwrap();
            assert_eq!(keys(&set), ["q", "i", "f", "s", "l"]);
            let buy = set.resolve(&InputKey::Char('i')).unwrap();
            assert_eq!(buy.command, CommandId::BuyItem);
        }

        #[test]
        fn suppressing_menu_hides_outer_layers() {
            let content = TestContent::new();
            let config = GameConfig::default();
            let env = GameEnv::with_bundle(&content, &ConstRng(0), &config);
            let mut state = GameState::new(1);
            state.player.inventory.add("potion", 2);
            let under = Box::new(BaseMode::Explore(Scene::Town));

            state.set_mode(BaseMode::Menu {
                menu: "inventory".into(),
                suppress_outer: true,
                under: under.clone(),
            });
            let set = available_actions(&state, &env, &BuiltinPredicates).unwrap();
            assert_eq!(keys(&set), ["1", "b"]);
            assert_eq!(set.iter().next().unwrap().label, "Potion x2");

            state.set_mode(BaseMode::Menu {
                menu: "inventory".into(),
                suppress_outer: false,
                under,
            });
            let set = available_actions(&state, &env, &BuiltinPredicates).unwrap();
            assert_eq!(keys(&set), ["q", "i", "f", "s", "1", "b"]);
        }

        #[test]
        fn prompts_expose_no_actions() {
            let content = TestContent::new();
            let config = GameConfig::default();
            let env = GameEnv::with_bundle(&content, &ConstRng(0), &config);
            let mut state = GameState::new(1);
            state
                .open_prompt(crate::prompt::PendingPrompt::select_target(
                    Vec::new(),
                    ActionDefinition::new("a", "Attack", CommandId::Attack),
                ))
                .unwrap();
            assert!(available_actions(&state, &env, &BuiltinPredicates)
                .unwrap()
                .is_empty());
        }

        #[test]
        fn shipped_fixture_validates() {
            let content = TestContent::new();
            let config = GameConfig::default();
            let env = GameEnv::with_bundle(&content, &ConstRng(0), &config);
            crate::catalog::validate_content(&env, &BuiltinPredicates).unwrap();
        }

        #[test]
        fn declared_type_must_match_command() {
            let content = TestContent::new();
            let config = GameConfig::default();
            let env = GameEnv::with_bundle(&content, &ConstRng(0), &config);
            let mut action = ActionDefinition::new("x", "X", CommandId::Quit);
            action.kind = Some(crate::catalog::ActionType::Combat);
            assert!(matches!(
                crate::catalog::validate_action(&action, None, &env, &BuiltinPredicates),
                Err(CatalogError::TypeMismatch { .. })
            ));

            let dangling = ActionDefinition::new("v", "V", CommandId::EnterVenue).with_target("moon");
            assert!(matches!(
                crate::catalog::validate_action(&dangling, None, &env, &BuiltinPredicates),
                Err(CatalogError::UnknownTarget { .. })
            ));
        }

        #[test]
        fn notices_resolve_only_within_their_venue() {
            let content = TestContent::new();
            let config = GameConfig::default();
            let env = GameEnv::with_bundle(&content, &ConstRng(0), &config);
            let mut venue = env.venue("shop").unwrap().clone();
            venue.notices.insert("prices".into(), "Prices are fixed.".into());
            let read = ActionDefinition::new("1", "Prices", CommandId::ReadNotice).with_target("prices");

            assert!(
                crate::catalog::validate_action(&read, Some(&venue), &env, &BuiltinPredicates)
                    .is_ok()
            );
            assert!(matches!(
                crate::catalog::validate_action(&read, None, &env, &BuiltinPredicates),
                Err(CatalogError::UnknownTarget { .. })
            ));
        }
    }

    proptest! {
        #[test]
        fn filter_never_keeps_false_predicates(
            picks in prop::collection::vec(0usize..3, 0..12),
            stat_points in 0u32..3,
        ) {
            let mut state = GameState::new(3);
            state.player.stat_points = stat_points;
            let predicates = [None, Some("has_stat_points"), Some("has_save")];

            let actions: Vec<ActionDefinition> = picks
                .iter()
                .enumerate()
                .map(|(i, &p)| {
                    let mut action = ActionDefinition::new(i.to_string(), "x", CommandId::Quit);
                    action.when = predicates[p].map(str::to_owned);
                    action
                })
                .collect();

            let view = state.view();
            let legal = filter(actions.clone(), &BuiltinPredicates, &view).unwrap();
            for action in &legal {
                if let Some(name) = action.when.as_deref() {
                    prop_assert!(BuiltinPredicates.evaluate(name, &view).unwrap());
                }
            }

            let unconditioned: Vec<ActionDefinition> = actions
                .into_iter()
                .map(|mut a| { a.when = None; a })
                .collect();
            prop_assert_eq!(
                filter(unconditioned.clone(), &BuiltinPredicates, &view).unwrap(),
                unconditioned
            );
        }
    }
}
