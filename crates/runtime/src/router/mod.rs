//! Command router: the single owner of [`GameState`].
//!
//! Every key press, menu selection and clock tick enters through
//! [`CommandRouter`]. Open prompts take the input first; otherwise the key is
//! resolved against the layered action set and dispatched by action type.
//! Each pass returns a [`StepReport`] with the narration and structured
//! events it produced.
//!
//! Dispatch is split by concern:
//!
//! - `title`: new game, continue, quit
//! - `travel`: scenes, venues, menus
//! - `combat`: encounters, attacks, spells, opponent turns, resolution
//! - `town`: services, purchases, item use
//! - `level_up`: stat allocation
//! - `prompt`: target selection and confirmation answers

mod combat;
mod level_up;
mod prompt;
mod title;
mod town;
mod travel;

use lokarta_core::{
    ActionDefinition, ActionSet, ActionType, BaseMode, CatalogError, GameEnv, GameError,
    GameState, InputKey, MessageKey, ModeKind, Narration, PredicateEvaluator, SessionMode, Tick,
    available_actions, validate_content,
};
use tracing::{debug, info, warn};

use crate::api::{Event, Outcome, Result, RouterError, SessionSignal, StepReport};
use crate::repository::Persistence;

/// Dispatches input against the session state.
///
/// Generic over the persistence capability so tests can inject an
/// [`InMemoryPersistence`](crate::repository::InMemoryPersistence) that
/// fails on demand.
pub struct CommandRouter<'e, P> {
    state: GameState,
    env: GameEnv<'e>,
    predicates: &'e dyn PredicateEvaluator,
    persistence: P,
}

/// Side effects collected while one input resolves.
#[derive(Debug, Default)]
struct Step {
    outcome: Outcome,
    events: Vec<Event>,
    signal: Option<SessionSignal>,
    anim: Option<String>,
    /// Resolved state changed; the nonce advances.
    mutated: bool,
    save: bool,
}

impl Step {
    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            ..Self::default()
        }
    }

    fn resolved() -> Self {
        Self::with_outcome(Outcome::Resolved)
    }
}

impl<'e, P: Persistence> CommandRouter<'e, P> {
    /// Validates the loaded content and opens a session on the title screen.
    pub fn new(
        env: GameEnv<'e>,
        predicates: &'e dyn PredicateEvaluator,
        persistence: P,
        game_seed: u64,
    ) -> Result<Self> {
        validate_content(&env, predicates)?;
        let mut state = GameState::new(game_seed);
        state.has_save = persistence.exists();
        info!(
            target: "runtime::router",
            seed = game_seed,
            has_save = state.has_save,
            "router ready"
        );
        Ok(Self {
            state,
            env,
            predicates,
            persistence,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for bootstrapping a session outside of play
    /// (fixtures, replays). Never call it between an input and its report.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn env(&self) -> GameEnv<'e> {
        self.env
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Legal actions for the current moment. Empty while a prompt is open.
    pub fn available_actions(&self) -> Result<ActionSet> {
        Ok(available_actions(&self.state, &self.env, self.predicates)?)
    }

    /// Routes a key press.
    ///
    /// An open prompt consumes the key. Otherwise the key is resolved against
    /// the legal action set; unbound keys are reported, not treated as errors.
    pub fn handle_input(&mut self, key: InputKey) -> Result<StepReport> {
        if self.state.prompt().is_some() {
            return self.handle_prompt_input(key);
        }
        let actions = self.available_actions()?;
        let Some(action) = actions.resolve(&key).cloned() else {
            debug!(key = %key, mode = %self.state.mode().kind(), "unbound key");
            let before = self.state.mode().kind();
            return Ok(self.report(Step::with_outcome(Outcome::Unbound), before));
        };
        self.execute(&action)
    }

    /// Runs an action picked from a list the caller rendered earlier.
    ///
    /// The selection is re-validated first: if it is no longer legal (mode
    /// changed, prompt opened, predicate flipped) it is dropped with
    /// [`Outcome::Ignored`].
    pub fn handle_selection(&mut self, action: &ActionDefinition) -> Result<StepReport> {
        match self.revalidate(action) {
            Ok(()) => self.execute(action),
            Err(err @ RouterError::StaleInput { .. }) => {
                debug!(error = %err, code = err.error_code(), "dropping stale selection");
                let before = self.state.mode().kind();
                Ok(self.report(Step::with_outcome(Outcome::Ignored), before))
            }
            Err(err) => Err(err),
        }
    }

    /// Advances the session clock and fires an expired prompt deadline.
    pub fn tick(&mut self, now: Tick) -> Result<StepReport> {
        self.state.clock = self.state.clock.max(now);
        let before = self.state.mode().kind();
        let expired = self
            .state
            .prompt()
            .and_then(|prompt| prompt.expire(self.state.clock));
        let Some(step) = expired else {
            return Ok(self.report(Step::default(), before));
        };
        info!(clock = %self.state.clock, "prompt deadline reached");
        self.apply_prompt_step(step, before)
    }

    fn revalidate(&self, action: &ActionDefinition) -> Result<()> {
        if self.state.prompt().is_none() && self.available_actions()?.contains(action) {
            return Ok(());
        }
        Err(RouterError::StaleInput {
            key: action.key.clone(),
            command: action.command.to_string(),
        })
    }

    fn execute(&mut self, action: &ActionDefinition) -> Result<StepReport> {
        let before = self.state.mode().kind();
        debug!(
            target: "runtime::router",
            key = %action.key,
            command = %action.command,
            kind = %action.action_type(),
            mode = %before,
            "dispatching action"
        );

        let mut step = Step::resolved();
        match action.action_type() {
            ActionType::System => self.system(action, &mut step)?,
            ActionType::Scene => self.enter_scene(action, &mut step)?,
            ActionType::Venue => self.venue(action, &mut step)?,
            ActionType::MenuOpen => self.open_menu(action, &mut step)?,
            ActionType::MenuClose => self.close_menu(&mut step)?,
            ActionType::Combat => self.attack_action(action, &mut step)?,
            ActionType::Spell => self.spell_action(action, &mut step)?,
            ActionType::Service => self.service_action(action, &mut step)?,
            ActionType::Purchase => self.purchase(action, &mut step)?,
            ActionType::Item => self.use_item(action, &mut step)?,
            ActionType::LevelUp => self.level_up(action, &mut step)?,
        }
        if step.mutated && step.anim.is_none() {
            step.anim = action.anim.clone();
        }
        Ok(self.finish(step, before))
    }

    fn narrate(&mut self, step: &mut Step, narration: Narration) {
        self.state.narrate(narration.clone());
        step.events.push(Event::Narration(narration));
    }

    /// Persists if requested, advances the nonce, and builds the report.
    fn finish(&mut self, mut step: Step, before: ModeKind) -> StepReport {
        if step.save {
            self.save(&mut step);
        }
        if step.mutated {
            self.state.nonce += 1;
        }
        self.report(step, before)
    }

    fn report(&self, mut step: Step, before: ModeKind) -> StepReport {
        let after = self.state.mode().kind();
        if after != before {
            step.events.push(Event::ModeChanged {
                from: before,
                to: after,
            });
        }
        StepReport {
            outcome: step.outcome,
            events: step.events,
            signal: step.signal,
            suppress_actions: self.suppresses_outer(),
            anim: step.anim,
        }
    }

    fn suppresses_outer(&self) -> bool {
        matches!(
            self.state.mode(),
            SessionMode::Active(BaseMode::Menu {
                suppress_outer: true,
                ..
            })
        )
    }

    /// A failed save never aborts the step: the player keeps playing on the
    /// in-memory state and is told the progress was not written.
    fn save(&mut self, step: &mut Step) {
        match self.persistence.save(&self.state.player) {
            Ok(()) => self.state.has_save = true,
            Err(err) => {
                warn!(
                    error = %err,
                    code = err.error_code(),
                    "save failed, continuing with in-memory state"
                );
                self.narrate(step, Narration::new(MessageKey::SaveFailed).with("error", &err));
            }
        }
    }
}

/// Record id an action points at. Validation guarantees one for every
/// command that needs it.
fn target_of(action: &ActionDefinition) -> Result<&str> {
    action.target().ok_or_else(|| {
        CatalogError::MissingTarget {
            key: action.key.clone(),
            command: action.command,
        }
        .into()
    })
}
