//! Opponents on the field.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::OpponentTemplate;

use super::{ResourceMeter, StateError};

/// Unique identifier of an opponent within a session.
///
/// Actor id `0` is reserved for the player when seeding rolls; opponent ids
/// start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentId(pub u32);

impl OpponentId {
    pub const PLAYER_ACTOR: u32 = 0;

    pub fn actor_id(self) -> u32 {
        self.0
    }
}

/// A live opponent spawned from an [`OpponentTemplate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Opponent {
    pub id: OpponentId,
    pub template: String,
    pub name: String,
    pub level: u32,
    pub hp: ResourceMeter,
    pub attack: u32,
    pub defense: u32,
    /// Percent chance of acting on its turn; a failed roll is a hesitation.
    pub action_chance: u32,
    /// Remaining turns to skip.
    pub stunned_turns: u32,
}

impl Opponent {
    pub fn from_template(id: OpponentId, template: &OpponentTemplate) -> Self {
        Self {
            id,
            template: template.id.clone(),
            name: template.name.clone(),
            level: template.level,
            hp: ResourceMeter::full(template.hp),
            attack: template.attack,
            defense: template.defense,
            action_chance: template.action_chance,
            stunned_turns: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.hp.is_empty()
    }

    pub fn is_stunned(&self) -> bool {
        self.stunned_turns > 0
    }

    /// Encounter budget consumed by this opponent.
    pub fn cost(&self) -> u32 {
        self.level.max(1)
    }
}

/// Ordered roster of active opponents, in spawn order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Opponents(ArrayVec<Opponent, { GameConfig::MAX_OPPONENTS }>);

impl Opponents {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, opponent: Opponent) -> Result<(), StateError> {
        self.0
            .try_push(opponent)
            .map_err(|_| StateError::RosterFull {
                max: GameConfig::MAX_OPPONENTS,
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Opponent> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Opponent> {
        self.0.iter_mut()
    }

    pub fn ids(&self) -> Vec<OpponentId> {
        self.0.iter().map(|o| o.id).collect()
    }

    pub fn get(&self, id: OpponentId) -> Option<&Opponent> {
        self.0.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: OpponentId) -> Option<&mut Opponent> {
        self.0.iter_mut().find(|o| o.id == id)
    }

    pub fn first(&self) -> Option<&Opponent> {
        self.0.first()
    }

    /// Removes opponents at 0 HP, keeping the survivors in spawn order.
    pub fn remove_defeated(&mut self) -> Vec<Opponent> {
        let mut defeated = Vec::new();
        let mut survivors = ArrayVec::new();
        for opponent in self.0.drain(..) {
            if opponent.is_alive() {
                survivors.push(opponent);
            } else {
                defeated.push(opponent);
            }
        }
        self.0 = survivors;
        defeated
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn total_cost(&self) -> u32 {
        self.0.iter().map(Opponent::cost).sum()
    }
}
