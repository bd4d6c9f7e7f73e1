//! Prompt state machine.
//!
//! A prompt intercepts every input until it produces an answer. Two kinds
//! exist: target selection over the live opponents, and a yes/no confirmation
//! with an optional deadline. The deadline is polled: the owning loop calls
//! [`PendingPrompt::expire`] once per frame and the default answer applies on
//! the first check at or past the deadline.
//!
//! Handling an input never clears the prompt itself. A terminal [`PromptStep`]
//! tells the router to take the prompt out of the state and act on the answer
//! in the same transition.

use crate::catalog::{ActionDefinition, InputKey};
use crate::state::{Narration, OpponentId, Tick};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Answer {
    Yes,
    #[default]
    No,
}

/// What the router does once a confirmation is answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptAction {
    CastSpell {
        spell: String,
        target: Option<OpponentId>,
        boosted: bool,
    },
    /// Pay for and apply a venue service.
    UseService { service: String },
    /// Discard the save and begin a fresh game.
    StartNewGame,
    /// Resume the interrupted mode with no effect.
    Stay,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingPrompt {
    TargetSelect {
        candidates: Vec<OpponentId>,
        cursor: usize,
        /// Action that resolves against the chosen target.
        action: ActionDefinition,
    },
    Confirm {
        question: Narration,
        default: Answer,
        /// `None` waits indefinitely.
        deadline: Option<Tick>,
        on_yes: PromptAction,
        on_no: PromptAction,
    },
}

/// Logical prompt input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptInput {
    Previous,
    Next,
    Confirm,
    Cancel,
    Yes,
    No,
}

impl PromptInput {
    pub fn from_key(key: InputKey) -> Option<Self> {
        match key {
            InputKey::Left | InputKey::Up => Some(Self::Previous),
            InputKey::Right | InputKey::Down => Some(Self::Next),
            InputKey::Confirm => Some(Self::Confirm),
            InputKey::Cancel | InputKey::Char('b') => Some(Self::Cancel),
            InputKey::Char('y' | 'Y') => Some(Self::Yes),
            InputKey::Char('n' | 'N') => Some(Self::No),
            InputKey::Char(_) => None,
        }
    }
}

/// Result of feeding one input (or a deadline check) to a prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptStep {
    /// Still waiting; the cursor may have moved.
    Pending,
    Target {
        action: ActionDefinition,
        target: OpponentId,
    },
    Answered {
        action: PromptAction,
        answer: Answer,
        timed_out: bool,
    },
    /// Unwind to the interrupted mode without side effects.
    Cancelled,
}

impl PromptStep {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PromptStep::Pending)
    }
}

impl PendingPrompt {
    /// Target selection starting on the first candidate.
    pub fn select_target(candidates: Vec<OpponentId>, action: ActionDefinition) -> Self {
        Self::TargetSelect {
            candidates,
            cursor: 0,
            action,
        }
    }

    pub fn handle(&mut self, input: PromptInput) -> PromptStep {
        match self {
            PendingPrompt::TargetSelect {
                candidates,
                cursor,
                action,
            } => {
                let count = candidates.len();
                if count == 0 {
                    return PromptStep::Cancelled;
                }
                match input {
                    PromptInput::Previous => {
                        *cursor = (*cursor + count - 1) % count;
                        PromptStep::Pending
                    }
                    PromptInput::Next => {
                        *cursor = (*cursor + 1) % count;
                        PromptStep::Pending
                    }
                    PromptInput::Confirm => PromptStep::Target {
                        action: action.clone(),
                        target: candidates[(*cursor).min(count - 1)],
                    },
                    PromptInput::Cancel => PromptStep::Cancelled,
                    PromptInput::Yes | PromptInput::No => PromptStep::Pending,
                }
            }
            PendingPrompt::Confirm { default, .. } => {
                let default = *default;
                match input {
                    PromptInput::Yes => self.answer(Answer::Yes, false),
                    PromptInput::No => self.answer(Answer::No, false),
                    PromptInput::Confirm => self.answer(default, false),
                    PromptInput::Cancel => PromptStep::Cancelled,
                    PromptInput::Previous | PromptInput::Next => PromptStep::Pending,
                }
            }
        }
    }

    /// Default answer once `now` reaches the deadline.
    pub fn expire(&self, now: Tick) -> Option<PromptStep> {
        match self {
            PendingPrompt::Confirm {
                default,
                deadline: Some(deadline),
                ..
            } if now >= *deadline => Some(self.answer(*default, true)),
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<Tick> {
        match self {
            PendingPrompt::Confirm { deadline, .. } => *deadline,
            PendingPrompt::TargetSelect { .. } => None,
        }
    }

    /// Candidate under the cursor.
    pub fn highlighted(&self) -> Option<OpponentId> {
        match self {
            PendingPrompt::TargetSelect {
                candidates, cursor, ..
            } => candidates.get(*cursor).copied(),
            PendingPrompt::Confirm { .. } => None,
        }
    }

    fn answer(&self, answer: Answer, timed_out: bool) -> PromptStep {
        let PendingPrompt::Confirm { on_yes, on_no, .. } = self else {
            return PromptStep::Pending;
        };
        let action = match answer {
            Answer::Yes => on_yes.clone(),
            Answer::No => on_no.clone(),
        };
        PromptStep::Answered {
            action,
            answer,
            timed_out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CommandId;
    use crate::state::MessageKey;

    fn targeting() -> PendingPrompt {
        PendingPrompt::select_target(
            vec![OpponentId(1), OpponentId(2), OpponentId(3)],
            ActionDefinition::new("a", "Attack", CommandId::Attack).requiring_target(),
        )
    }

    fn boost(deadline: Option<Tick>) -> PendingPrompt {
        let cast = |boosted| PromptAction::CastSpell {
            spell: "spark".into(),
            target: Some(OpponentId(1)),
            boosted,
        };
        PendingPrompt::Confirm {
            question: Narration::new(MessageKey::BoostQuestion),
            default: Answer::No,
            deadline,
            on_yes: cast(true),
            on_no: cast(false),
        }
    }

    #[test]
    fn cursor_cycles_modulo_candidates() {
        let mut prompt = targeting();
        assert_eq!(prompt.handle(PromptInput::Previous), PromptStep::Pending);
        assert_eq!(prompt.highlighted(), Some(OpponentId(3)));
        prompt.handle(PromptInput::Next);
        prompt.handle(PromptInput::Next);
        assert_eq!(prompt.highlighted(), Some(OpponentId(2)));

        match prompt.handle(PromptInput::Confirm) {
            PromptStep::Target { target, action } => {
                assert_eq!(target, OpponentId(2));
                assert_eq!(action.command, CommandId::Attack);
            }
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn cancel_is_terminal_without_answer() {
        let mut prompt = targeting();
        let step = prompt.handle(PromptInput::Cancel);
        assert_eq!(step, PromptStep::Cancelled);
        assert!(step.is_terminal());

        let mut confirm = boost(None);
        assert_eq!(confirm.handle(PromptInput::Cancel), PromptStep::Cancelled);
    }

    #[test]
    fn explicit_answers_resolve_immediately() {
        let mut prompt = boost(Some(Tick(30)));
        match prompt.handle(PromptInput::Yes) {
            PromptStep::Answered {
                action: PromptAction::CastSpell { boosted, .. },
                answer,
                timed_out,
            } => {
                assert!(boosted);
                assert_eq!(answer, Answer::Yes);
                assert!(!timed_out);
            }
            other => panic!("unexpected step {other:?}"),
        }
        assert_eq!(prompt.handle(PromptInput::Next), PromptStep::Pending);
    }

    #[test]
    fn enter_takes_the_default() {
        let mut prompt = boost(None);
        assert!(matches!(
            prompt.handle(PromptInput::Confirm),
            PromptStep::Answered { answer: Answer::No, timed_out: false, .. }
        ));
    }

    #[test]
    fn deadline_applies_default_only_when_reached() {
        let prompt = boost(Some(Tick(30)));
        assert_eq!(prompt.expire(Tick(29)), None);
        assert!(matches!(
            prompt.expire(Tick(30)),
            Some(PromptStep::Answered {
                action: PromptAction::CastSpell { boosted: false, .. },
                answer: Answer::No,
                timed_out: true,
            })
        ));
        assert_eq!(boost(None).expire(Tick(u64::MAX)), None);
        assert_eq!(targeting().expire(Tick(u64::MAX)), None);
    }

    #[test]
    fn keys_map_to_prompt_inputs() {
        assert_eq!(PromptInput::from_key(InputKey::Left), Some(PromptInput::Previous));
        assert_eq!(PromptInput::from_key(InputKey::Char('Y')), Some(PromptInput::Yes));
        assert_eq!(PromptInput::from_key(InputKey::Char('b')), Some(PromptInput::Cancel));
        assert_eq!(PromptInput::from_key(InputKey::Char('x')), None);
    }
}
