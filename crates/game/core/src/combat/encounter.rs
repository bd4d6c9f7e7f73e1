//! Level-budgeted encounter generation.

use crate::config::EncounterParams;
use crate::env::{OpponentTemplate, RngOracle, compute_seed, roll};
use crate::state::OpponentId;

use super::EncounterError;

/// Picks a roster of 1 to `roster_cap` templates whose total cost stays within
/// the budget for `level`.
///
/// Each draw chooses uniformly among the templates that still fit the
/// remaining budget; drawing stops when the roster is full, the budget is
/// spent, nothing fits, or `max_attempts` draws were made.
pub fn plan_encounter<'t>(
    level: u32,
    templates: &'t [OpponentTemplate],
    params: &EncounterParams,
    rng: &dyn RngOracle,
    game_seed: u64,
    nonce: u64,
) -> Result<Vec<&'t OpponentTemplate>, EncounterError> {
    let budget = params.budget_for(level);
    let mut remaining = budget;
    let mut roster = Vec::new();

    for attempt in 0..params.max_attempts {
        if roster.len() >= params.roster_cap() || remaining == 0 {
            break;
        }
        let eligible: Vec<&OpponentTemplate> =
            templates.iter().filter(|t| t.cost() <= remaining).collect();
        if eligible.is_empty() {
            break;
        }
        let seed = compute_seed(
            game_seed,
            nonce,
            OpponentId::PLAYER_ACTOR,
            roll::ENCOUNTER + attempt,
        );
        let pick = rng.range(seed, 0, eligible.len() as u32 - 1) as usize;
        let template = eligible[pick];
        remaining -= template.cost();
        roster.push(template);
    }

    if roster.is_empty() {
        return Err(EncounterError::NoEligibleTemplate { level, budget });
    }
    Ok(roster)
}
