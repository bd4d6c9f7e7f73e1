//! Title screen and session-level commands.

use lokarta_core::{
    ActionDefinition, Answer, BaseMode, CommandId, GameError, MessageKey, Narration,
    PlayerState, PromptAction, Scene,
};
use tracing::{info, warn};

use super::{CommandRouter, Step};
use crate::api::{Result, SessionSignal};
use crate::repository::Persistence;

impl<P: Persistence> CommandRouter<'_, P> {
    pub(super) fn system(&mut self, action: &ActionDefinition, step: &mut Step) -> Result<()> {
        match action.command {
            CommandId::Quit => {
                info!("quit requested");
                self.narrate(step, Narration::new(MessageKey::Farewell));
                step.signal = Some(SessionSignal::Quit);
                Ok(())
            }
            CommandId::TitleNew if self.state.has_save => self.open_confirm(
                Narration::new(MessageKey::OverwriteQuestion),
                Answer::No,
                None,
                PromptAction::StartNewGame,
                PromptAction::Stay,
                step,
            ),
            CommandId::TitleNew => self.start_new_game(step),
            CommandId::TitleContinue => {
                self.continue_game(step);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Replaces any save with a fresh character standing in town.
    pub(super) fn start_new_game(&mut self, step: &mut Step) -> Result<()> {
        if self.state.has_save {
            if let Err(err) = self.persistence.delete() {
                warn!(error = %err, code = err.error_code(), "failed to delete previous save");
            }
        }
        self.state.has_save = false;
        self.state.player = PlayerState::default();
        self.state.clear_encounter();
        self.state.set_mode(BaseMode::Explore(Scene::Town));
        step.mutated = true;
        step.save = true;
        info!(name = %self.state.player.name, "new game started");
        let name = self.state.player.name.clone();
        self.narrate(step, Narration::new(MessageKey::NewGame).with("name", name));
        Ok(())
    }

    fn continue_game(&mut self, step: &mut Step) {
        match self.persistence.load() {
            Ok(Some(player)) => {
                info!(name = %player.name, level = player.level, "save loaded");
                let narration = Narration::new(MessageKey::Continued)
                    .with("name", &player.name)
                    .with("level", player.level);
                let pending_points = player.stat_points > 0;
                self.state.player = player;
                self.state.clear_encounter();
                self.state.set_mode(if pending_points {
                    BaseMode::LevelUp
                } else {
                    BaseMode::Explore(Scene::Town)
                });
                step.mutated = true;
                self.narrate(step, narration);
            }
            Ok(None) => {
                self.state.has_save = false;
                self.narrate(step, Narration::new(MessageKey::NoSave));
            }
            Err(err) => {
                warn!(error = %err, code = err.error_code(), "failed to load save");
                self.narrate(step, Narration::new(MessageKey::NoSave).with("error", &err));
            }
        }
    }
}
