//! Prompt input, target selection and confirmation answers.

use lokarta_core::{
    ActionDefinition, Answer, InputKey, MessageKey, ModeKind, Narration, OpponentId,
    PendingPrompt, PromptAction, PromptInput, PromptStep,
};
use tracing::{debug, info};

use super::{CommandRouter, Step};
use crate::api::{Outcome, Result, StepReport};
use crate::repository::Persistence;

/// How a targeted action proceeds.
pub(super) enum TargetChoice {
    /// Exactly one candidate; resolve against it now.
    Now(OpponentId),
    /// A selection prompt is open.
    Prompted,
    /// Nothing to target; already narrated.
    Nobody,
}

impl<P: Persistence> CommandRouter<'_, P> {
    pub(super) fn handle_prompt_input(&mut self, key: InputKey) -> Result<StepReport> {
        let before = self.state.mode().kind();
        let Some(input) = PromptInput::from_key(key) else {
            debug!(key = %key, "key has no meaning inside a prompt");
            return Ok(self.report(Step::with_outcome(Outcome::Unbound), before));
        };
        let Some(prompt) = self.state.prompt_mut() else {
            return Ok(self.report(Step::with_outcome(Outcome::Unbound), before));
        };
        let step = prompt.handle(input);
        self.apply_prompt_step(step, before)
    }

    /// Applies the result of a prompt transition. Terminal steps clear the
    /// prompt and resume the interrupted mode before anything else runs.
    pub(super) fn apply_prompt_step(
        &mut self,
        prompt_step: PromptStep,
        before: ModeKind,
    ) -> Result<StepReport> {
        let mut step = Step::resolved();
        match prompt_step {
            PromptStep::Pending => {
                return Ok(self.report(Step::with_outcome(Outcome::Pending), before));
            }
            PromptStep::Cancelled => {
                self.state.take_prompt();
                debug!("prompt cancelled");
                return Ok(self.report(Step::with_outcome(Outcome::Cancelled), before));
            }
            PromptStep::Target { action, target } => {
                self.state.take_prompt();
                debug!(target = target.0, command = %action.command, "target chosen");
                self.resolve_targeted(&action, Some(target), &mut step)?;
                if step.mutated && step.anim.is_none() {
                    step.anim = action.anim.clone();
                }
            }
            PromptStep::Answered {
                action,
                answer,
                timed_out,
            } => {
                self.state.take_prompt();
                info!(answer = %answer, timed_out, "confirmation answered");
                self.apply_prompt_action(action, &mut step)?;
            }
        }
        Ok(self.finish(step, before))
    }

    fn apply_prompt_action(&mut self, action: PromptAction, step: &mut Step) -> Result<()> {
        match action {
            PromptAction::CastSpell {
                spell,
                target,
                boosted,
            } => self.cast(&spell, boosted, target, step),
            PromptAction::UseService { service } => self.perform_service(&service, step),
            PromptAction::StartNewGame => self.start_new_game(step),
            PromptAction::Stay => {
                self.narrate(step, Narration::new(MessageKey::Declined));
                Ok(())
            }
        }
    }

    /// Picks the target for `action` among living opponents.
    ///
    /// One candidate is chosen without asking; several open a selection
    /// prompt that resumes the current mode when it closes.
    pub(super) fn choose_target(
        &mut self,
        action: &ActionDefinition,
        step: &mut Step,
    ) -> Result<TargetChoice> {
        let candidates: Vec<OpponentId> = self
            .state
            .opponents
            .iter()
            .filter(|o| o.is_alive())
            .map(|o| o.id)
            .collect();
        match candidates.as_slice() {
            [] => {
                self.narrate(step, Narration::new(MessageKey::NoTarget));
                Ok(TargetChoice::Nobody)
            }
            [only] => Ok(TargetChoice::Now(*only)),
            _ => {
                debug!(count = candidates.len(), command = %action.command, "opening target prompt");
                self.state
                    .open_prompt(PendingPrompt::select_target(candidates, action.clone()))?;
                step.outcome = Outcome::Pending;
                Ok(TargetChoice::Prompted)
            }
        }
    }

    /// Opens a yes/no prompt and narrates its question.
    ///
    /// `timeout_secs` of `None` waits indefinitely; otherwise the default
    /// answer fires once the clock passes the deadline.
    pub(super) fn open_confirm(
        &mut self,
        question: Narration,
        default: Answer,
        timeout_secs: Option<u64>,
        on_yes: PromptAction,
        on_no: PromptAction,
        step: &mut Step,
    ) -> Result<()> {
        let deadline = timeout_secs
            .map(|secs| self.state.clock + self.env.config().prompt.ticks_for_secs(secs));
        self.state.open_prompt(PendingPrompt::Confirm {
            question: question.clone(),
            default,
            deadline,
            on_yes,
            on_no,
        })?;
        debug!(?deadline, default = %default, "confirmation opened");
        self.narrate(step, question);
        step.outcome = Outcome::Pending;
        Ok(())
    }
}
