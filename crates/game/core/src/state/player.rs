//! Player aggregate: resources, attributes, progression and inventory.

use std::collections::BTreeMap;

use crate::config::ProgressionParams;

use super::StateError;

/// A clamped resource pool (HP or MP).
///
/// `current` never exceeds `maximum`; every mutator saturates instead of
/// wrapping, so the pool stays within `[0, maximum]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "MeterRecord")
)]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MeterRecord {
    current: u32,
    maximum: u32,
}

#[cfg(feature = "serde")]
impl From<MeterRecord> for ResourceMeter {
    fn from(record: MeterRecord) -> Self {
        Self::new(record.current, record.maximum)
    }
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.maximum
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Adds up to `amount`, returning what was actually restored.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.maximum);
        self.current - before
    }

    /// Removes up to `amount`, returning what was actually lost.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_sub(amount);
        before - self.current
    }

    /// Pays `cost` if the pool holds enough; otherwise leaves it untouched.
    pub fn spend(&mut self, cost: u32) -> bool {
        if self.current < cost {
            return false;
        }
        self.current -= cost;
        true
    }

    pub fn refill(&mut self) {
        self.current = self.maximum;
    }

    /// Raises both the maximum and the current value.
    pub fn raise_max(&mut self, amount: u32) {
        self.maximum = self.maximum.saturating_add(amount);
        self.current = self.current.saturating_add(amount).min(self.maximum);
    }
}

/// Attribute that can receive a stat point.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumString, strum::IntoStaticStr, strum::Display,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Stat {
    Hp,
    Mp,
    Attack,
    Defense,
}

impl Stat {
    /// Allocation order; also the order the balanced remainder is handed out.
    pub const ALL: [Stat; 4] = [Stat::Hp, Stat::Mp, Stat::Attack, Stat::Defense];
}

/// Item id to held count. Entries with a zero count are never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Inventory(BTreeMap<String, u32>);

impl Inventory {
    pub fn count(&self, item: &str) -> u32 {
        self.0.get(item).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn add(&mut self, item: &str, count: u32) {
        if count == 0 {
            return;
        }
        *self.0.entry(item.to_owned()).or_insert(0) += count;
    }

    /// Removes one unit of `item`, dropping the entry when it reaches zero.
    pub fn take(&mut self, item: &str) -> Result<(), StateError> {
        let Some(count) = self.0.get_mut(item) else {
            return Err(StateError::ItemNotHeld(item.to_owned()));
        };
        *count -= 1;
        if *count == 0 {
            self.0.remove(item);
        }
        Ok(())
    }

    /// Held items sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(id, count)| (id.as_str(), *count))
    }
}

/// Persistent player record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PlayerState {
    pub name: String,
    pub level: u32,
    pub xp: u32,
    pub stat_points: u32,
    pub gold: u32,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    pub attack: u32,
    pub defense: u32,
    pub inventory: Inventory,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            name: "WARRIOR".to_owned(),
            level: 1,
            xp: 0,
            stat_points: 0,
            gold: 10,
            hp: ResourceMeter::full(10),
            mp: ResourceMeter::full(10),
            attack: 10,
            defense: 10,
            inventory: Inventory::default(),
        }
    }
}

impl PlayerState {
    pub fn is_alive(&self) -> bool {
        !self.hp.is_empty()
    }

    pub fn is_fully_rested(&self) -> bool {
        self.hp.is_full() && self.mp.is_full()
    }

    pub fn spend_gold(&mut self, cost: u32) -> Result<(), StateError> {
        if self.gold < cost {
            return Err(StateError::InsufficientGold {
                required: cost,
                available: self.gold,
            });
        }
        self.gold -= cost;
        Ok(())
    }

    /// Adds experience and returns the number of levels gained.
    ///
    /// A level is gained while `xp >= level * xp_per_level`; each grants
    /// `stat_points_per_level` unspent points.
    pub fn gain_xp(&mut self, amount: u32, params: &ProgressionParams) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        let step = params.xp_per_level.max(1);
        let mut gained = 0;
        while self.xp >= self.level.saturating_mul(step) {
            self.level += 1;
            self.stat_points += params.stat_points_per_level;
            gained += 1;
        }
        gained
    }

    fn apply_points(&mut self, stat: Stat, points: u32) {
        match stat {
            Stat::Hp => self.hp.raise_max(points),
            Stat::Mp => self.mp.raise_max(points),
            Stat::Attack => self.attack += points,
            Stat::Defense => self.defense += points,
        }
    }

    /// Spends one stat point on `stat`.
    pub fn allocate(&mut self, stat: Stat) -> Result<(), StateError> {
        if self.stat_points == 0 {
            return Err(StateError::NoStatPoints);
        }
        self.stat_points -= 1;
        self.apply_points(stat, 1);
        Ok(())
    }

    /// Splits all points evenly; the remainder goes HP, MP, attack, defense.
    pub fn allocate_balanced(&mut self) -> Result<(), StateError> {
        let points = self.stat_points;
        if points == 0 {
            return Err(StateError::NoStatPoints);
        }
        let share = points / 4;
        let remainder = (points % 4) as usize;
        for (i, stat) in Stat::ALL.into_iter().enumerate() {
            let extra = u32::from(i < remainder);
            self.apply_points(stat, share + extra);
        }
        self.stat_points = 0;
        Ok(())
    }

    /// Spends every point on a stat chosen by `pick`.
    pub fn allocate_random(&mut self, mut pick: impl FnMut() -> Stat) -> Result<(), StateError> {
        if self.stat_points == 0 {
            return Err(StateError::NoStatPoints);
        }
        while self.stat_points > 0 {
            self.stat_points -= 1;
            self.apply_points(pick(), 1);
        }
        Ok(())
    }

    /// Refills HP and MP once every point is spent.
    pub fn finish_level_up(&mut self) {
        self.hp.refill();
        self.mp.refill();
    }
}
