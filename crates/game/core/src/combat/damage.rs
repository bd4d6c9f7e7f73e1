//! Damage rolls.

use crate::config::CombatParams;
use crate::env::{RngOracle, compute_seed, roll};

/// The three independent rolls behind one damage resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatRolls {
    /// d100; at or below the miss chance zeroes the hit.
    pub miss: u32,
    /// d100; at or below the crit chance multiplies the hit.
    pub crit: u32,
    /// Offset in `[0, 2 * variance_percent]`; `variance_percent` is neutral.
    pub variance: u32,
}

impl CombatRolls {
    /// Draws all three rolls for `actor` at the current action nonce.
    pub fn draw(
        rng: &dyn RngOracle,
        game_seed: u64,
        nonce: u64,
        actor: u32,
        params: &CombatParams,
    ) -> Self {
        let seed = |context| compute_seed(game_seed, nonce, actor, context);
        let band = params.variance_percent.min(100);
        Self {
            miss: rng.roll_d100(seed(roll::MISS)),
            crit: rng.roll_d100(seed(roll::CRIT)),
            variance: rng.range(seed(roll::VARIANCE), 0, band * 2),
        }
    }

    /// Rolls that always hit, never crit, and sit in the middle of the band.
    pub fn neutral(params: &CombatParams) -> Self {
        Self {
            miss: 100,
            crit: 100,
            variance: params.variance_percent.min(100),
        }
    }
}

/// Outcome of one damage roll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageRoll {
    pub amount: u32,
    pub crit: bool,
    pub miss: bool,
}

/// Resolves damage from `power` against `defense`.
///
/// # Formula
///
/// ```text
/// miss   => 0 (crit ignored, no status effects)
/// base   = max(min_damage, power - defense)
/// varied = max(min_damage, base * (100 - v + offset) / 100)   offset in [0, 2v]
/// amount = varied * multiplier * (crit ? crit_multiplier : 1)
/// ```
pub fn roll_damage(
    power: u32,
    defense: u32,
    multiplier: u32,
    rolls: CombatRolls,
    params: &CombatParams,
) -> DamageRoll {
    if rolls.miss <= params.miss_chance {
        return DamageRoll {
            amount: 0,
            crit: false,
            miss: true,
        };
    }

    let base = power.saturating_sub(defense).max(params.min_damage);
    let band = params.variance_percent.min(100);
    let factor = 100 - band + rolls.variance.min(band * 2);
    let varied = (base.saturating_mul(factor) / 100).max(params.min_damage);

    let crit = rolls.crit <= params.crit_chance;
    let mut amount = varied.saturating_mul(multiplier.max(1));
    if crit {
        amount = amount.saturating_mul(params.crit_multiplier.max(1));
    }
    DamageRoll {
        amount,
        crit,
        miss: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn neutral_roll_deals_the_base() {
        let params = CombatParams::default();
        let hit = roll_damage(14, 4, 1, CombatRolls::neutral(&params), &params);
        assert_eq!(hit, DamageRoll { amount: 10, crit: false, miss: false });
    }

    #[test]
    fn defense_above_power_still_deals_the_minimum() {
        let params = CombatParams::default();
        let hit = roll_damage(3, 50, 1, CombatRolls::neutral(&params), &params);
        assert_eq!(hit.amount, params.min_damage);
    }

    #[test]
    fn variance_band_is_symmetric() {
        let params = CombatParams::default();
        let low = CombatRolls { variance: 0, ..CombatRolls::neutral(&params) };
        let high = CombatRolls { variance: 50, ..CombatRolls::neutral(&params) };
        assert_eq!(roll_damage(20, 0, 1, low, &params).amount, 15);
        assert_eq!(roll_damage(20, 0, 1, high, &params).amount, 25);
    }

    #[test]
    fn crit_and_multiplier_stack() {
        let params = CombatParams::default();
        let rolls = CombatRolls { crit: 1, ..CombatRolls::neutral(&params) };
        let hit = roll_damage(12, 2, 2, rolls, &params);
        assert!(hit.crit);
        assert_eq!(hit.amount, 40);
    }

    proptest! {
        #[test]
        fn forced_miss_zeroes_damage_regardless_of_crit(
            power in 0u32..500,
            defense in 0u32..500,
            crit in 1u32..=100,
            variance in 0u32..=50,
            miss in 1u32..=10,
        ) {
            let params = CombatParams::default();
            let hit = roll_damage(power, defense, 3, CombatRolls { miss, crit, variance }, &params);
            prop_assert_eq!(hit, DamageRoll { amount: 0, crit: false, miss: true });
        }

        #[test]
        fn landed_hits_deal_at_least_the_minimum(
            power in 0u32..500,
            defense in 0u32..500,
            crit in 1u32..=100,
            variance in 0u32..=200,
            miss in 11u32..=100,
        ) {
            let params = CombatParams::default();
            let hit = roll_damage(power, defense, 1, CombatRolls { miss, crit, variance }, &params);
            prop_assert!(!hit.miss);
            prop_assert!(hit.amount >= params.min_damage);
        }
    }
}
