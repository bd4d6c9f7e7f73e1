//! Turn resolution against a borrowed [`GameState`].

use crate::env::{GameEnv, SpellDefinition, SpellEffect, StunSpec, compute_seed, roll};
use crate::state::{GameState, OpponentId};

use super::{
    CombatError, CombatOutcome, CombatResolution, CombatRolls, Combatant, OpponentTurn,
    SpellCast, SpellOutcome, StatusEffect, roll_damage,
};

/// Resolves combat actions.
///
/// Holds the state only for the duration of one resolution step; the router
/// builds a fresh engine per action.
pub struct CombatEngine<'a> {
    state: &'a mut GameState,
    env: GameEnv<'a>,
}

impl<'a> CombatEngine<'a> {
    pub fn new(state: &'a mut GameState, env: GameEnv<'a>) -> Self {
        Self { state, env }
    }

    fn seed(&self, actor: u32, context: u32) -> u64 {
        compute_seed(self.state.game_seed, self.state.nonce, actor, context)
    }

    /// Explicit target if still alive on the field, else the first opponent.
    fn pick_target(&self, target: Option<OpponentId>) -> Result<OpponentId, CombatError> {
        match target {
            Some(id) => match self.state.opponents.get(id) {
                Some(opponent) if opponent.is_alive() => Ok(id),
                _ => Err(CombatError::TargetOutOfBounds(id)),
            },
            None => self
                .state
                .opponents
                .iter()
                .find(|o| o.is_alive())
                .map(|o| o.id)
                .ok_or(CombatError::NoTarget),
        }
    }

    /// Basic attack with the player's attack stat.
    pub fn player_attack(
        &mut self,
        target: Option<OpponentId>,
    ) -> Result<CombatOutcome, CombatError> {
        let target = self.pick_target(target)?;
        let power = self.state.player.attack;
        Ok(self.strike(target, power, 1, None))
    }

    /// Casts `spell`, paying the MP of the chosen variant.
    ///
    /// Refusals (no target, not enough MP, healing at full HP) leave the
    /// state untouched.
    pub fn cast_spell(
        &mut self,
        spell: &SpellDefinition,
        boosted: bool,
        target: Option<OpponentId>,
    ) -> Result<SpellCast, CombatError> {
        let boosted = boosted && spell.boosted.is_some();
        let variant = spell.variant(boosted);
        let cost = variant.mp_cost;
        let available = self.state.player.mp.current();
        if available < cost {
            return Err(CombatError::InsufficientMp {
                required: cost,
                available,
            });
        }

        let outcome = match variant.effect {
            SpellEffect::Heal { amount } => {
                if self.state.player.hp.is_full() {
                    return Err(CombatError::AlreadyFull);
                }
                self.state.player.mp.spend(cost);
                SpellOutcome::Healed {
                    amount: self.state.player.hp.restore(amount),
                }
            }
            SpellEffect::Damage {
                attack_bonus,
                multiplier,
            } => {
                let target = self.pick_target(target)?;
                self.state.player.mp.spend(cost);
                let power = self.state.player.attack.saturating_add(attack_bonus);
                SpellOutcome::Struck(self.strike(target, power, multiplier, variant.stun))
            }
        };

        Ok(SpellCast {
            spell: spell.name.clone(),
            boosted,
            mp_spent: cost,
            outcome,
        })
    }

    /// Lands one player hit on `target`, banking loot and removing it on a kill.
    fn strike(
        &mut self,
        target: OpponentId,
        power: u32,
        multiplier: u32,
        stun: Option<StunSpec>,
    ) -> CombatOutcome {
        let params = self.env.config().combat;
        let rolls = CombatRolls::draw(
            self.env.rng(),
            self.state.game_seed,
            self.state.nonce,
            OpponentId::PLAYER_ACTOR,
            &params,
        );
        let status_seed = self.seed(OpponentId::PLAYER_ACTOR, roll::STATUS);
        let loot_seeds = (
            self.seed(target.actor_id(), roll::LOOT_XP),
            self.seed(target.actor_id(), roll::LOOT_GOLD),
        );
        let rng = self.env.rng();

        let Some(opponent) = self.state.opponents.get_mut(target) else {
            return CombatOutcome {
                attacker: Combatant::Player,
                defender: Combatant::Opponent(target),
                opponent_name: String::new(),
                damage: 0,
                was_crit: false,
                was_miss: true,
                status_applied: None,
                defender_defeated: false,
            };
        };

        let hit = roll_damage(power, opponent.defense, multiplier, rolls, &params);
        let damage = opponent.hp.drain(hit.amount);
        let defeated = !opponent.is_alive();

        let mut status_applied = None;
        if let Some(stun) = stun.filter(|_| !hit.miss && !defeated) {
            if rng.chance(status_seed, stun.chance) {
                let turns = stun.turns.unwrap_or(params.default_stun_turns);
                opponent.stunned_turns = opponent.stunned_turns.max(turns);
                status_applied = Some(StatusEffect::Stun { turns });
            }
        }

        let name = opponent.name.clone();
        if defeated {
            let max_hp = opponent.hp.maximum();
            let xp = rng.range(loot_seeds.0, max_hp / 2, max_hp);
            let gold = rng.range(loot_seeds.1, max_hp / 2, max_hp);
            self.state.loot.xp = self.state.loot.xp.saturating_add(xp);
            self.state.loot.gold = self.state.loot.gold.saturating_add(gold);
            self.state.opponents.remove_defeated();
        }

        CombatOutcome {
            attacker: Combatant::Player,
            defender: Combatant::Opponent(target),
            opponent_name: name,
            damage,
            was_crit: hit.crit,
            was_miss: hit.miss,
            status_applied,
            defender_defeated: defeated,
        }
    }

    /// Every surviving opponent acts in spawn order.
    ///
    /// A stunned opponent loses its turn and its counter drops by one; an
    /// opponent that fails its action roll hesitates. Stops as soon as the
    /// player falls.
    pub fn opponent_turns(&mut self) -> Vec<OpponentTurn> {
        let params = self.env.config().combat;
        let rng = self.env.rng();
        let mut turns = Vec::new();

        for id in self.state.opponents.ids() {
            if !self.state.player.is_alive() {
                break;
            }
            let action_seed = self.seed(id.actor_id(), roll::ACTION);
            let rolls = CombatRolls::draw(
                rng,
                self.state.game_seed,
                self.state.nonce,
                id.actor_id(),
                &params,
            );
            let defense = self.state.player.defense;
            let Some(opponent) = self.state.opponents.get_mut(id) else {
                continue;
            };
            if !opponent.is_alive() {
                continue;
            }

            if opponent.is_stunned() {
                opponent.stunned_turns -= 1;
                turns.push(OpponentTurn::Stunned {
                    opponent: id,
                    name: opponent.name.clone(),
                    remaining: opponent.stunned_turns,
                });
                continue;
            }
            if !rng.chance(action_seed, opponent.action_chance) {
                turns.push(OpponentTurn::Hesitated {
                    opponent: id,
                    name: opponent.name.clone(),
                });
                continue;
            }

            let hit = roll_damage(opponent.attack, defense, 1, rolls, &params);
            let name = opponent.name.clone();
            let damage = self.state.player.hp.drain(hit.amount);
            turns.push(OpponentTurn::Attacked(CombatOutcome {
                attacker: Combatant::Opponent(id),
                defender: Combatant::Player,
                opponent_name: name,
                damage,
                was_crit: hit.crit,
                was_miss: hit.miss,
                status_applied: None,
                defender_defeated: !self.state.player.is_alive(),
            }));
        }
        turns
    }

    /// Ends the fight if either side is out.
    ///
    /// Victory pays out the banked loot and applies level-ups. Defeat costs a
    /// share of the gold and fully restores the player. Both clear the field;
    /// the caller picks the next mode.
    pub fn conclude(&mut self) -> Option<CombatResolution> {
        let config = self.env.config();
        let player = &mut self.state.player;

        if !player.is_alive() {
            let gold_lost =
                player.gold.saturating_mul(config.defeat.gold_loss_percent.min(100)) / 100;
            player.gold -= gold_lost;
            player.hp.refill();
            player.mp.refill();
            self.state.clear_encounter();
            return Some(CombatResolution::Defeat { gold_lost });
        }

        if !self.state.opponents.is_empty() {
            return None;
        }
        let loot = self.state.loot;
        player.gold = player.gold.saturating_add(loot.gold);
        let levels_gained = player.gain_xp(loot.xp, &config.progression);
        self.state.clear_encounter();
        Some(CombatResolution::Victory {
            xp: loot.xp,
            gold: loot.gold,
            levels_gained,
        })
    }
}
