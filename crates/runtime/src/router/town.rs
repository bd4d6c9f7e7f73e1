//! Venue services, purchases and item use.

use lokarta_core::{
    ActionDefinition, BaseMode, CatalogError, MessageKey, Narration, OracleError, PromptAction,
    Scene,
    env::{MenuSource, ServiceDefinition, ServiceKind},
};
use tracing::{debug, info};

use super::{CommandRouter, Step, target_of};
use crate::api::Result;
use crate::repository::Persistence;

impl<'e, P: Persistence> CommandRouter<'e, P> {
    /// Uses a venue service, asking first when the action carries
    /// confirmation metadata.
    pub(super) fn service_action(&mut self, action: &ActionDefinition, step: &mut Step) -> Result<()> {
        let service_id = action
            .service_id
            .as_deref()
            .ok_or_else(|| CatalogError::MissingTarget {
                key: action.key.clone(),
                command: action.command,
            })?;

        let Some(confirm) = &action.boost else {
            return self.perform_service(service_id, step);
        };
        let service = self.find_service(service_id)?;
        let fallback = Narration::new(MessageKey::ServiceQuestion)
            .with("service", &service.name)
            .with("cost", service.cost);
        let question = Narration::text_or(confirm.prompt.as_deref(), fallback);
        self.open_confirm(
            question,
            confirm.default,
            confirm.timeout_secs,
            PromptAction::UseService {
                service: service_id.to_owned(),
            },
            PromptAction::Stay,
            step,
        )
    }

    /// Pays for and applies a service. Refused when the player is already
    /// rested, away from town, or short of gold.
    pub(super) fn perform_service(&mut self, service_id: &str, step: &mut Step) -> Result<()> {
        let service = self.find_service(service_id)?;

        if self.state.player.is_fully_rested() {
            let fallback = Narration::new(MessageKey::ServiceFull).with("service", &service.name);
            self.narrate(
                step,
                Narration::text_or(service.full_message.as_deref(), fallback),
            );
            return Ok(());
        }
        if self.state.base_mode().scene() != Some(Scene::Town) {
            let fallback =
                Narration::new(MessageKey::ServiceUnavailable).with("service", &service.name);
            self.narrate(
                step,
                Narration::text_or(service.unavailable_message.as_deref(), fallback),
            );
            return Ok(());
        }
        if self.state.player.spend_gold(service.cost).is_err() {
            let fallback = Narration::new(MessageKey::NotEnoughGold)
                .with("item", &service.name)
                .with("cost", service.cost)
                .with("gold", self.state.player.gold);
            self.narrate(
                step,
                Narration::text_or(service.poor_message.as_deref(), fallback),
            );
            return Ok(());
        }

        let player = &mut self.state.player;
        match service.kind {
            ServiceKind::Rest => {
                player.hp.refill();
                player.mp.refill();
            }
            ServiceKind::Meal => {
                player.hp.restore(service.hp);
                player.mp.restore(service.mp);
            }
        }
        info!(service = service_id, cost = service.cost, gold = player.gold, "service used");
        step.mutated = true;
        step.save = true;
        let fallback = Narration::new(MessageKey::ServiceUsed)
            .with("service", &service.name)
            .with("cost", service.cost);
        self.narrate(
            step,
            Narration::text_or(service.message.as_deref(), fallback),
        );
        Ok(())
    }

    /// The current venue's service, or the first venue offering it.
    fn find_service(&self, service_id: &str) -> Result<&'e ServiceDefinition> {
        let current = match self.state.base_mode().outermost() {
            BaseMode::Venue { venue, .. } => Some(venue.as_str()),
            _ => None,
        };
        if let Some(venue) = current {
            if let Some(service) = self.env.venue(venue)?.service(service_id) {
                return Ok(service);
            }
        }
        self.env
            .venues()
            .venues()
            .into_iter()
            .find_map(|venue| venue.service(service_id))
            .ok_or_else(|| {
                OracleError::ServiceNotFound {
                    venue: current.unwrap_or("*").to_owned(),
                    service: service_id.to_owned(),
                }
                .into()
            })
    }

    pub(super) fn purchase(&mut self, action: &ActionDefinition, step: &mut Step) -> Result<()> {
        let id = target_of(action)?;
        let item = self.env.item(id)?;
        if self.state.player.spend_gold(item.price).is_err() {
            let narration = Narration::new(MessageKey::NotEnoughGold)
                .with("item", &item.name)
                .with("cost", item.price)
                .with("gold", self.state.player.gold);
            self.narrate(step, narration);
            return Ok(());
        }

        self.state.player.inventory.add(id, 1);
        debug!(item = id, price = item.price, gold = self.state.player.gold, "item bought");
        step.mutated = true;
        step.save = true;
        let narration = Narration::new(MessageKey::Purchased)
            .with("item", &item.name)
            .with("price", item.price)
            .with("gold", self.state.player.gold);
        self.narrate(step, narration);
        Ok(())
    }

    /// Consumes one held item. Refused when none is held or it would restore
    /// nothing. Using the last item closes the inventory.
    pub(super) fn use_item(&mut self, action: &ActionDefinition, step: &mut Step) -> Result<()> {
        let id = target_of(action)?;
        let item = self.env.item(id)?;
        let player = &self.state.player;

        if player.inventory.count(id) == 0 {
            self.narrate(
                step,
                Narration::new(MessageKey::ItemNotHeld).with("item", &item.name),
            );
            return Ok(());
        }
        let hp_useless = item.hp == 0 || player.hp.is_full();
        let mp_useless = item.mp == 0 || player.mp.is_full();
        if hp_useless && mp_useless {
            self.narrate(
                step,
                Narration::new(MessageKey::AlreadyFull).with("item", &item.name),
            );
            return Ok(());
        }

        let player = &mut self.state.player;
        player.inventory.take(id)?;
        let hp = player.hp.restore(item.hp);
        let mp = player.mp.restore(item.mp);
        debug!(item = id, hp, mp, "item used");
        step.mutated = true;
        step.save = true;
        let narration = Narration::new(MessageKey::ItemUsed)
            .with("item", &item.name)
            .with("hp", hp)
            .with("mp", mp);
        self.narrate(step, narration);

        if self.state.player.inventory.is_empty() && self.in_inventory_menu()? {
            self.leave_menu();
        }
        Ok(())
    }

    fn in_inventory_menu(&self) -> Result<bool> {
        let BaseMode::Menu { menu, .. } = self.state.base_mode() else {
            return Ok(false);
        };
        Ok(self.env.menu(menu)?.source == MenuSource::Inventory)
    }
}
