//! Scene, venue and menu transitions.

use lokarta_core::{
    ActionDefinition, BaseMode, CatalogError, CommandId, MessageKey, Narration, OracleError, Scene,
    catalog::generated_entries, env::MenuSource,
};
use tracing::debug;

use super::{CommandRouter, Step, target_of};
use crate::api::Result;
use crate::repository::Persistence;

impl<P: Persistence> CommandRouter<'_, P> {
    /// Moves to another scene. Entering the forest rolls an encounter;
    /// entering town dismisses whatever was on the field.
    pub(super) fn enter_scene(&mut self, action: &ActionDefinition, step: &mut Step) -> Result<()> {
        let target = target_of(action)?;
        let scene: Scene = target
            .parse()
            .map_err(|_| OracleError::SceneNotFound(target.to_owned()))?;
        let record = self.env.scene(target)?;

        if scene != Scene::Forest && self.state.base_mode().outermost() == &BaseMode::Explore(scene)
        {
            let fallback = Narration::new(MessageKey::AlreadyThere).with("scene", &record.name);
            self.narrate(
                step,
                Narration::text_or(record.already_message.as_deref(), fallback),
            );
            return Ok(());
        }

        self.state.set_mode(BaseMode::Explore(scene));
        step.mutated = true;
        step.save = true;
        let fallback = Narration::new(MessageKey::EnterScene).with("scene", &record.name);
        self.narrate(
            step,
            Narration::text_or(record.enter_message.as_deref(), fallback),
        );

        match scene {
            Scene::Town => {
                self.state.clear_encounter();
                Ok(())
            }
            Scene::Forest => self.start_encounter(step),
        }
    }

    pub(super) fn venue(&mut self, action: &ActionDefinition, step: &mut Step) -> Result<()> {
        match action.command {
            CommandId::EnterVenue => {
                let id = target_of(action)?;
                let venue = self.env.venue(id)?;
                let scene = self.state.base_mode().scene().unwrap_or(Scene::Town);
                self.state.set_mode(BaseMode::Venue {
                    scene,
                    venue: id.to_owned(),
                });
                step.mutated = true;
                let fallback = Narration::new(MessageKey::EnterVenue).with("venue", &venue.name);
                self.narrate(
                    step,
                    Narration::text_or(venue.welcome_message.as_deref(), fallback),
                );
            }
            CommandId::ExitVenue => {
                let BaseMode::Venue { scene, venue } = self.state.base_mode().outermost().clone()
                else {
                    debug!("exit requested outside of a venue");
                    return Ok(());
                };
                let record = self.env.venue(&venue)?;
                self.state.set_mode(BaseMode::Explore(scene));
                step.mutated = true;
                let fallback = Narration::new(MessageKey::LeaveVenue).with("venue", &record.name);
                self.narrate(
                    step,
                    Narration::text_or(record.leave_message.as_deref(), fallback),
                );
            }
            CommandId::ReadNotice => {
                let id = target_of(action)?;
                let BaseMode::Venue { venue, .. } = self.state.base_mode().outermost() else {
                    debug!(notice = id, "notice requested outside of a venue");
                    return Ok(());
                };
                let record = self.env.venue(venue)?;
                let text = record
                    .notice(id)
                    .ok_or_else(|| CatalogError::UnknownTarget {
                        key: action.key.clone(),
                        command: action.command,
                        target: id.to_owned(),
                    })?;
                debug!(venue = %venue, notice = id, "notice read");
                self.narrate(step, Narration::text(text));
            }
            _ => {}
        }
        Ok(())
    }

    /// Opens a menu over the current mode. Generated menus with nothing to
    /// list stay closed and say so.
    pub(super) fn open_menu(&mut self, action: &ActionDefinition, step: &mut Step) -> Result<()> {
        let id = target_of(action)?;
        let menu = self.env.menu(id)?;

        if menu.source != MenuSource::Static
            && generated_entries(menu, &self.state, &self.env)?.is_empty()
        {
            let fallback = Narration::new(MessageKey::MenuEmpty).with("menu", &menu.title);
            self.narrate(
                step,
                Narration::text_or(menu.empty_message.as_deref(), fallback),
            );
            return Ok(());
        }

        // Menus replace each other rather than stacking.
        let under = match self.state.base_mode() {
            BaseMode::Menu { under, .. } => (**under).clone(),
            other => other.clone(),
        };
        self.state.set_mode(BaseMode::Menu {
            menu: id.to_owned(),
            suppress_outer: action.suppress_actions,
            under: Box::new(under),
        });
        let fallback = Narration::new(MessageKey::MenuOpened).with("menu", &menu.title);
        self.narrate(
            step,
            Narration::text_or(menu.open_message.as_deref(), fallback),
        );
        Ok(())
    }

    pub(super) fn close_menu(&mut self, step: &mut Step) -> Result<()> {
        let BaseMode::Menu { menu, under, .. } = self.state.base_mode().clone() else {
            return Ok(());
        };
        let record = self.env.menu(&menu)?;
        self.state.set_mode(*under);
        let fallback = Narration::new(MessageKey::MenuClosed).with("menu", &record.title);
        self.narrate(
            step,
            Narration::text_or(record.close_message.as_deref(), fallback),
        );
        Ok(())
    }

    /// Drops back to the mode under the open menu without narration.
    pub(super) fn leave_menu(&mut self) {
        if let BaseMode::Menu { under, .. } = self.state.base_mode() {
            let under = (**under).clone();
            self.state.set_mode(under);
        }
    }
}
