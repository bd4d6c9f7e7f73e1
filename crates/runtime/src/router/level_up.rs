//! Stat point allocation after a level-up.

use lokarta_core::{
    ActionDefinition, BaseMode, CatalogError, CommandId, MessageKey, Narration, Scene, Stat,
    env::{compute_seed, roll},
};
use tracing::{debug, info};

use super::{CommandRouter, Step, target_of};
use crate::api::Result;
use crate::repository::Persistence;

impl<P: Persistence> CommandRouter<'_, P> {
    pub(super) fn level_up(&mut self, action: &ActionDefinition, step: &mut Step) -> Result<()> {
        let allocated = match action.command {
            CommandId::AllocateStat => {
                let target = target_of(action)?;
                let stat: Stat = target.parse().map_err(|_| CatalogError::UnknownTarget {
                    key: action.key.clone(),
                    command: action.command,
                    target: target.to_owned(),
                })?;
                self.state
                    .player
                    .allocate(stat)
                    .map(|()| Narration::new(MessageKey::StatAllocated).with("stat", stat))
            }
            CommandId::AllocateBalanced => self
                .state
                .player
                .allocate_balanced()
                .map(|()| Narration::new(MessageKey::BalancedAllocation)),
            CommandId::AllocateRandom => self
                .allocate_random()
                .map(|()| Narration::new(MessageKey::RandomAllocation)),
            _ => return Ok(()),
        };

        let Ok(narration) = allocated else {
            self.narrate(step, Narration::new(MessageKey::NoStatPoints));
            return Ok(());
        };
        step.mutated = true;
        let remaining = self.state.player.stat_points;
        debug!(command = %action.command, remaining, "stat points allocated");
        self.narrate(step, narration.with("remaining", remaining));

        if remaining == 0 {
            let player = &mut self.state.player;
            player.finish_level_up();
            info!(
                level = player.level,
                attack = player.attack,
                defense = player.defense,
                "level-up complete"
            );
            let narration =
                Narration::new(MessageKey::AllocationComplete).with("level", player.level);
            self.state.set_mode(BaseMode::Explore(Scene::Forest));
            step.save = true;
            self.narrate(step, narration);
        }
        Ok(())
    }

    /// Each point lands on a stat drawn from its own roll, so the spread is
    /// reproducible for a given seed and nonce.
    fn allocate_random(&mut self) -> std::result::Result<(), lokarta_core::StateError> {
        let (game_seed, nonce, rng) = (self.state.game_seed, self.state.nonce, self.env.rng());
        let mut draw = 0u32;
        self.state.player.allocate_random(|| {
            let seed = compute_seed(game_seed, nonce, draw, roll::STAT_PICK);
            draw += 1;
            Stat::ALL[rng.range(seed, 0, Stat::ALL.len() as u32 - 1) as usize]
        })
    }
}
