//! What one resolution pass hands to the presentation layer.

use lokarta_core::{
    CombatOutcome, CombatResolution, ModeKind, Narration, OpponentTurn, SpellCast,
};

/// Session-level request that the router does not act on itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionSignal {
    Quit,
}

/// How an input or tick was handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to do (tick without an expiring prompt).
    #[default]
    Idle,
    /// The key is not bound in the current mode.
    Unbound,
    /// A stale selection was dropped.
    Ignored,
    /// An action or prompt answer ran to completion.
    Resolved,
    /// A prompt is open and waiting for more input.
    Pending,
    /// A prompt was cancelled and the interrupted mode resumed.
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Narration(Narration),
    /// Player attack result.
    Strike(CombatOutcome),
    Spell(SpellCast),
    OpponentTurn(OpponentTurn),
    Resolution(CombatResolution),
    ModeChanged { from: ModeKind, to: ModeKind },
}

/// Result of one pass through the router.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub outcome: Outcome,
    pub events: Vec<Event>,
    pub signal: Option<SessionSignal>,
    /// The outer action panel is hidden by a suppressing menu.
    pub suppress_actions: bool,
    /// Animation hint of the resolved action.
    pub anim: Option<String>,
}

impl StepReport {
    pub fn narrations(&self) -> impl Iterator<Item = &Narration> {
        self.events.iter().filter_map(|event| match event {
            Event::Narration(narration) => Some(narration),
            _ => None,
        })
    }

    /// Folds a later pass of the same frame into this one.
    pub fn merge(&mut self, later: StepReport) {
        if later.outcome != Outcome::Idle {
            self.outcome = later.outcome;
        }
        self.events.extend(later.events);
        self.signal = self.signal.or(later.signal);
        self.suppress_actions = later.suppress_actions;
        if later.anim.is_some() {
            self.anim = later.anim;
        }
    }
}
