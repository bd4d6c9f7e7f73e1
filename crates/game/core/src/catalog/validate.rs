//! Load-time validation of every action record.
//!
//! Configuration errors are fatal: the router refuses to start on content that
//! references unknown predicates or records, so a bad reference is never found
//! mid-session.

use crate::env::{GameEnv, OracleError, VenueDefinition};
use crate::state::{Scene, Stat};

use super::{ActionDefinition, CatalogError, CommandId, InputKey, PredicateEvaluator};

/// Scene records every session needs.
pub const REQUIRED_SCENES: [&str; 4] = ["title", "town", "forest", "level_up"];

/// Checks every layer the content can produce.
pub fn validate_content(
    env: &GameEnv<'_>,
    predicates: &dyn PredicateEvaluator,
) -> Result<(), CatalogError> {
    for id in REQUIRED_SCENES {
        env.scene(id)?;
    }
    if env.opponents().templates().is_empty() {
        return Err(OracleError::NoOpponentTemplates.into());
    }

    for action in env.actions().global_actions() {
        validate_action(action, None, env, predicates)?;
    }
    for scene in env.actions().scenes() {
        for action in &scene.actions {
            validate_action(action, None, env, predicates)?;
        }
    }
    for venue in env.venues().venues() {
        for action in &venue.actions {
            validate_action(action, Some(venue), env, predicates)?;
        }
    }
    for menu in env.actions().menus() {
        for action in &menu.actions {
            validate_action(action, None, env, predicates)?;
        }
    }
    for spell in env.spells().spells() {
        if InputKey::parse(&spell.menu_key).is_none() {
            return Err(CatalogError::InvalidKey {
                key: spell.menu_key.clone(),
                command: CommandId::CastSpell,
            });
        }
    }
    Ok(())
}

/// Validates one action; `venue` is the venue whose layer holds it, if any.
pub fn validate_action(
    action: &ActionDefinition,
    venue: Option<&VenueDefinition>,
    env: &GameEnv<'_>,
    predicates: &dyn PredicateEvaluator,
) -> Result<(), CatalogError> {
    let key = action.key.clone();
    let command = action.command;

    if InputKey::parse(&action.key).is_none() {
        return Err(CatalogError::InvalidKey { key, command });
    }
    if let Some(declared) = action.kind {
        let expected = command.default_type();
        if declared != expected {
            return Err(CatalogError::TypeMismatch {
                key,
                command,
                declared,
                expected,
            });
        }
    }
    if let Some(name) = action.when.as_deref() {
        if !predicates.knows(name) {
            return Err(CatalogError::UnknownPredicate(name.to_owned()));
        }
    }

    if command == CommandId::UseService {
        let Some(service) = action.service_id.as_deref() else {
            return Err(CatalogError::MissingTarget { key, command });
        };
        let offered = match venue {
            Some(venue) => venue.service(service).is_some(),
            None => env
                .venues()
                .venues()
                .iter()
                .any(|v| v.service(service).is_some()),
        };
        if !offered {
            return Err(CatalogError::UnknownTarget {
                key,
                command,
                target: service.to_owned(),
            });
        }
        return Ok(());
    }

    if !command.needs_target() {
        return Ok(());
    }
    let Some(target) = action.target() else {
        return Err(CatalogError::MissingTarget { key, command });
    };
    let known = match command {
        CommandId::EnterScene => {
            target.parse::<Scene>().is_ok() && env.actions().scene(target).is_some()
        }
        CommandId::EnterVenue => env.venues().venue(target).is_some(),
        CommandId::ReadNotice => venue.is_some_and(|v| v.notice(target).is_some()),
        CommandId::OpenMenu => env.actions().menu(target).is_some(),
        CommandId::CastSpell => env.spells().spell(target).is_some(),
        CommandId::BuyItem | CommandId::UseItem => env.items().item(target).is_some(),
        CommandId::AllocateStat => target.parse::<Stat>().is_ok(),
        _ => true,
    };
    if !known {
        return Err(CatalogError::UnknownTarget {
            key,
            command,
            target: target.to_owned(),
        });
    }
    Ok(())
}
