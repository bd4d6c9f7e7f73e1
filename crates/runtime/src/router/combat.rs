//! Encounters, attacks, spells and the opponent phase.

use lokarta_core::{
    ActionDefinition, BaseMode, CombatEngine, CombatError, CombatOutcome, CombatResolution,
    CommandId, GameError, MessageKey, Narration, OpponentId, OpponentTurn, PromptAction, Scene,
    SpellOutcome, StatusEffect, plan_encounter,
};
use tracing::{debug, info};

use super::prompt::TargetChoice;
use super::{CommandRouter, Step, target_of};
use crate::api::{Event, Result};
use crate::repository::Persistence;

impl<P: Persistence> CommandRouter<'_, P> {
    /// Rolls a roster for the player's level and enters combat.
    pub(super) fn start_encounter(&mut self, step: &mut Step) -> Result<()> {
        self.state.clear_encounter();
        let roster = plan_encounter(
            self.state.player.level,
            self.env.opponents().templates(),
            &self.env.config().encounter,
            self.env.rng(),
            self.state.game_seed,
            self.state.nonce,
        );
        let roster = match roster {
            Ok(roster) => roster,
            Err(err) => {
                debug!(error = %err, code = err.error_code(), "no encounter rolled");
                self.narrate(step, Narration::new(MessageKey::AllQuiet));
                return Ok(());
            }
        };

        for template in roster {
            self.state.spawn_opponent(template)?;
            let fallback = Narration::new(MessageKey::OpponentAppears).with("name", &template.name);
            self.narrate(
                step,
                Narration::text_or(template.arrival.as_deref(), fallback),
            );
        }
        self.state.enter_combat()?;
        info!(
            target: "runtime::combat",
            opponents = self.state.opponents.len(),
            level = self.state.player.level,
            "encounter started"
        );
        Ok(())
    }

    pub(super) fn attack_action(&mut self, action: &ActionDefinition, step: &mut Step) -> Result<()> {
        if !action.requires_target {
            return self.resolve_targeted(action, None, step);
        }
        match self.choose_target(action, step)? {
            TargetChoice::Now(target) => self.resolve_targeted(action, Some(target), step),
            TargetChoice::Prompted | TargetChoice::Nobody => Ok(()),
        }
    }

    /// Second half of a targeted action, run directly or after the target
    /// prompt closes.
    pub(super) fn resolve_targeted(
        &mut self,
        action: &ActionDefinition,
        target: Option<OpponentId>,
        step: &mut Step,
    ) -> Result<()> {
        match action.command {
            CommandId::Attack => self.attack(target, step),
            CommandId::CastSpell => self.begin_cast(action, target_of(action)?, target, step),
            _ => Ok(()),
        }
    }

    fn attack(&mut self, target: Option<OpponentId>, step: &mut Step) -> Result<()> {
        let result = CombatEngine::new(&mut self.state, self.env).player_attack(target);
        match result {
            Ok(outcome) => {
                step.mutated = true;
                self.narrate_strike(&outcome, None, step);
                step.events.push(Event::Strike(outcome));
                self.opponent_phase(step)
            }
            Err(err) => {
                self.refuse(&err, None, step);
                Ok(())
            }
        }
    }

    /// Closes the spellbook, then picks a target if the spell needs one.
    pub(super) fn spell_action(&mut self, action: &ActionDefinition, step: &mut Step) -> Result<()> {
        let spell = self.env.spell(target_of(action)?)?;
        self.leave_menu();
        if !spell.requires_target {
            return self.begin_cast(action, &spell.id, None, step);
        }
        match self.choose_target(action, step)? {
            TargetChoice::Now(target) => self.begin_cast(action, &spell.id, Some(target), step),
            TargetChoice::Prompted | TargetChoice::Nobody => Ok(()),
        }
    }

    /// Asks whether to boost when the action offers it and the player can
    /// pay for the boosted variant; otherwise casts the base variant.
    fn begin_cast(
        &mut self,
        action: &ActionDefinition,
        spell_id: &str,
        target: Option<OpponentId>,
        step: &mut Step,
    ) -> Result<()> {
        let spell = self.env.spell(spell_id)?;
        if let (Some(boost), Some(boosted)) = (&action.boost, &spell.boosted) {
            if self.state.player.mp.current() >= boosted.mp_cost {
                let fallback = Narration::new(MessageKey::BoostQuestion)
                    .with("spell", &spell.name)
                    .with("mp", boosted.mp_cost);
                let question = Narration::text_or(boost.prompt.as_deref(), fallback);
                let timeout = boost
                    .timeout_secs
                    .unwrap_or(self.env.config().prompt.boost_timeout_secs);
                let cast = |boosted| PromptAction::CastSpell {
                    spell: spell.id.clone(),
                    target,
                    boosted,
                };
                return self.open_confirm(
                    question,
                    boost.default,
                    Some(timeout),
                    cast(true),
                    cast(false),
                    step,
                );
            }
        }
        self.cast(spell_id, false, target, step)
    }

    pub(super) fn cast(
        &mut self,
        spell_id: &str,
        boosted: bool,
        target: Option<OpponentId>,
        step: &mut Step,
    ) -> Result<()> {
        let spell = self.env.spell(spell_id)?;
        let result = CombatEngine::new(&mut self.state, self.env).cast_spell(spell, boosted, target);
        let cast = match result {
            Ok(cast) => cast,
            Err(err) => {
                self.refuse(&err, Some(spell.name.as_str()), step);
                return Ok(());
            }
        };

        debug!(spell = %spell.id, boosted = cast.boosted, mp = cast.mp_spent, "spell cast");
        step.mutated = true;
        step.anim = spell.anim.clone();
        match &cast.outcome {
            SpellOutcome::Healed { amount } => {
                let narration = Narration::new(MessageKey::SpellHeal)
                    .with("spell", &spell.name)
                    .with("amount", amount);
                self.narrate(step, narration);
            }
            SpellOutcome::Struck(outcome) => {
                self.narrate_strike(outcome, Some(spell.name.as_str()), step)
            }
        }
        step.events.push(Event::Spell(cast));
        self.opponent_phase(step)
    }

    fn narrate_strike(&mut self, outcome: &CombatOutcome, spell: Option<&str>, step: &mut Step) {
        let name = outcome.opponent_name.as_str();
        let narration = match (spell, outcome.was_miss) {
            (Some(spell), true) => Narration::new(MessageKey::SpellMiss)
                .with("spell", spell)
                .with("name", name),
            (Some(spell), false) => Narration::new(MessageKey::SpellStrike)
                .with("spell", spell)
                .with("name", name)
                .with("damage", outcome.damage)
                .with("crit", outcome.was_crit),
            (None, true) => Narration::new(MessageKey::PlayerMiss).with("name", name),
            (None, false) => {
                let key = if outcome.was_crit {
                    MessageKey::PlayerCrit
                } else {
                    MessageKey::PlayerHit
                };
                Narration::new(key)
                    .with("name", name)
                    .with("damage", outcome.damage)
            }
        };
        self.narrate(step, narration);

        if let Some(StatusEffect::Stun { turns }) = outcome.status_applied {
            let narration = Narration::new(MessageKey::OpponentStunned)
                .with("name", name)
                .with("turns", turns);
            self.narrate(step, narration);
        }
        if outcome.defender_defeated {
            self.narrate(
                step,
                Narration::new(MessageKey::OpponentDefeated).with("name", name),
            );
        }
    }

    /// Narrates a refused combat action. The state is untouched.
    fn refuse(&mut self, err: &CombatError, spell: Option<&str>, step: &mut Step) {
        debug!(error = %err, code = err.error_code(), "combat action refused");
        let spell = spell.unwrap_or_default();
        let narration = match err {
            CombatError::NoTarget | CombatError::TargetOutOfBounds(_) => {
                Narration::new(MessageKey::NoTarget)
            }
            CombatError::InsufficientMp {
                required,
                available,
            } => Narration::new(MessageKey::NotEnoughMp)
                .with("spell", spell)
                .with("required", required)
                .with("available", available),
            CombatError::AlreadyFull => {
                Narration::new(MessageKey::SpellAlreadyFull).with("spell", spell)
            }
        };
        self.narrate(step, narration);
    }

    /// Opponents answer a player action taken in combat, then the fight is
    /// checked for an end.
    fn opponent_phase(&mut self, step: &mut Step) -> Result<()> {
        if self.state.base_mode() != &BaseMode::Combat {
            return Ok(());
        }
        let turns = CombatEngine::new(&mut self.state, self.env).opponent_turns();
        for turn in turns {
            self.narrate(step, turn_narration(&turn));
            step.events.push(Event::OpponentTurn(turn));
        }
        self.resolve_combat(step);
        Ok(())
    }

    fn resolve_combat(&mut self, step: &mut Step) {
        let Some(resolution) = CombatEngine::new(&mut self.state, self.env).conclude() else {
            return;
        };
        step.events.push(Event::Resolution(resolution));
        step.save = true;

        match resolution {
            CombatResolution::Victory {
                xp,
                gold,
                levels_gained,
            } => {
                info!(target: "runtime::combat", xp, gold, levels_gained, "victory");
                self.narrate(
                    step,
                    Narration::new(MessageKey::Victory)
                        .with("xp", xp)
                        .with("gold", gold),
                );
                if self.state.player.stat_points > 0 {
                    let narration = Narration::new(MessageKey::LevelUp)
                        .with("level", self.state.player.level)
                        .with("points", self.state.player.stat_points);
                    self.narrate(step, narration);
                    self.state.set_mode(BaseMode::LevelUp);
                } else {
                    self.state.set_mode(BaseMode::Explore(Scene::Forest));
                }
            }
            CombatResolution::Defeat { gold_lost } => {
                info!(target: "runtime::combat", gold_lost, "defeat");
                self.narrate(
                    step,
                    Narration::new(MessageKey::Defeat).with("gold_lost", gold_lost),
                );
                self.state.set_mode(BaseMode::Explore(Scene::Town));
            }
        }
    }
}

fn turn_narration(turn: &OpponentTurn) -> Narration {
    match turn {
        OpponentTurn::Stunned {
            name, remaining, ..
        } => Narration::new(MessageKey::OpponentStillStunned)
            .with("name", name)
            .with("remaining", remaining),
        OpponentTurn::Hesitated { name, .. } => {
            Narration::new(MessageKey::OpponentHesitates).with("name", name)
        }
        OpponentTurn::Attacked(outcome) if outcome.was_miss => {
            Narration::new(MessageKey::OpponentMisses).with("name", &outcome.opponent_name)
        }
        OpponentTurn::Attacked(outcome) => {
            let key = if outcome.was_crit {
                MessageKey::OpponentCrits
            } else {
                MessageKey::OpponentHits
            };
            Narration::new(key)
                .with("name", &outcome.opponent_name)
                .with("damage", outcome.damage)
        }
    }
}
