//! RNG oracle for deterministic random number generation.
//!
//! Every random decision in a session (miss, crit, variance, stun, hesitation,
//! loot, encounter picks, random stat allocation) is drawn from a seed derived
//! with [`compute_seed`]. Given the same game seed and action nonce, a session
//! replays identically, and tests can force any roll by swapping the oracle.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must produce the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Percent chances succeed when the roll is at or below the chance.
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32(seed) % span)
    }

    /// Percent check: true when a d100 roll lands at or below `chance`.
    fn chance(&self, seed: u64, chance: u32) -> bool {
        self.roll_d100(seed) <= chance
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Stateless: the seed is the state, so each roll is a pure function of the
/// seed produced by [`compute_seed`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Roll contexts, one per independent random decision within an action.
pub mod roll {
    pub const MISS: u32 = 0;
    pub const CRIT: u32 = 1;
    pub const VARIANCE: u32 = 2;
    pub const STATUS: u32 = 3;
    pub const ACTION: u32 = 4;
    pub const LOOT_XP: u32 = 5;
    pub const LOOT_GOLD: u32 = 6;
    pub const STAT_PICK: u32 = 7;
    /// Encounter draws use `ENCOUNTER + attempt`.
    pub const ENCOUNTER: u32 = 10;
}

/// Compute deterministic seed from game state components.
///
/// # Arguments
///
/// * `game_seed` - Base seed set when the session starts
/// * `nonce` - Resolved action counter
/// * `actor_id` - Actor performing the roll (0 for the player)
/// * `context` - One of the [`roll`] contexts, so rolls within one action stay independent
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
