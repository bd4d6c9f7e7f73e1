//! Authoritative game state representation.
//!
//! [`GameState`] is the single mutable aggregate of a session. The router owns
//! it; the catalog reads it through [`StateView`] and the combat engine borrows
//! it mutably for the duration of one resolution step.
mod error;
mod mode;
mod narration;
mod opponent;
mod player;

use core::fmt;

pub use error::StateError;
pub use mode::{BaseMode, ModeKind, Scene, SessionMode};
pub use narration::{MessageKey, Narration};
pub use opponent::{Opponent, OpponentId, Opponents};
pub use player::{Inventory, PlayerState, ResourceMeter, Stat};

use crate::env::OpponentTemplate;
use crate::prompt::PendingPrompt;

/// Monotonic session clock, advanced by the owning loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);
}

impl core::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0.saturating_add(rhs))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Experience and gold collected from defeated opponents, paid out on victory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LootBank {
    pub xp: u32,
    pub gold: u32,
}

/// Canonical state of one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Combined with `nonce` to derive a unique seed for each random event.
    pub game_seed: u64,
    /// Resolved action counter.
    pub nonce: u64,
    /// Last tick observed by the owning loop.
    pub clock: Tick,
    mode: SessionMode,
    pub player: PlayerState,
    pub opponents: Opponents,
    pub loot: LootBank,
    /// Whether the persistence capability holds a saved player.
    pub has_save: bool,
    pub last_message: Option<Narration>,
    /// Never reused within a session; 0 is reserved for the player.
    next_opponent_id: u32,
}

impl GameState {
    /// Fresh session on the title screen.
    pub fn new(game_seed: u64) -> Self {
        Self {
            game_seed,
            nonce: 0,
            clock: Tick::ZERO,
            mode: SessionMode::Active(BaseMode::Title),
            player: PlayerState::default(),
            opponents: Opponents::default(),
            loot: LootBank::default(),
            has_save: false,
            last_message: None,
            next_opponent_id: 1,
        }
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    /// Active mode, or the mode a pending prompt resumes into.
    pub fn base_mode(&self) -> &BaseMode {
        self.mode.base()
    }

    pub fn prompt(&self) -> Option<&PendingPrompt> {
        self.mode.prompt()
    }

    pub fn prompt_mut(&mut self) -> Option<&mut PendingPrompt> {
        match &mut self.mode {
            SessionMode::Prompt { prompt, .. } => Some(prompt),
            SessionMode::Active(_) => None,
        }
    }

    /// Switches to `mode`, dropping any pending prompt.
    pub fn set_mode(&mut self, mode: BaseMode) {
        self.mode = SessionMode::Active(mode);
    }

    /// Interrupts the active mode with a prompt.
    pub fn open_prompt(&mut self, prompt: PendingPrompt) -> Result<(), StateError> {
        let SessionMode::Active(resume) = &self.mode else {
            return Err(StateError::PromptAlreadyOpen);
        };
        self.mode = SessionMode::Prompt {
            prompt,
            resume: resume.clone(),
        };
        Ok(())
    }

    /// Clears the pending prompt and resumes the interrupted mode in the same step.
    pub fn take_prompt(&mut self) -> Option<PendingPrompt> {
        let SessionMode::Prompt { prompt, resume } = &self.mode else {
            return None;
        };
        let (prompt, resume) = (prompt.clone(), resume.clone());
        self.mode = SessionMode::Active(resume);
        Some(prompt)
    }

    /// Enters combat; requires at least one opponent on the field.
    pub fn enter_combat(&mut self) -> Result<(), StateError> {
        if self.opponents.is_empty() {
            return Err(StateError::NoOpponents);
        }
        self.set_mode(BaseMode::Combat);
        Ok(())
    }

    /// Spawns an opponent from `template` at the end of the roster.
    pub fn spawn_opponent(&mut self, template: &OpponentTemplate) -> Result<OpponentId, StateError> {
        let id = OpponentId(self.next_opponent_id);
        self.opponents.push(Opponent::from_template(id, template))?;
        self.next_opponent_id += 1;
        Ok(id)
    }

    /// Drops every opponent and any banked loot.
    pub fn clear_encounter(&mut self) {
        self.opponents.clear();
        self.loot = LootBank::default();
    }

    pub fn narrate(&mut self, narration: Narration) {
        self.last_message = Some(narration);
    }

    pub fn view(&self) -> StateView<'_> {
        StateView { state: self }
    }
}

/// Read-only view handed to predicate evaluators.
#[derive(Clone, Copy, Debug)]
pub struct StateView<'a> {
    state: &'a GameState,
}

impl<'a> StateView<'a> {
    pub fn mode(&self) -> ModeKind {
        self.state.mode.kind()
    }

    pub fn player(&self) -> &'a PlayerState {
        &self.state.player
    }

    pub fn opponents(&self) -> &'a Opponents {
        &self.state.opponents
    }

    pub fn has_opponents(&self) -> bool {
        !self.state.opponents.is_empty()
    }

    pub fn needs_rest(&self) -> bool {
        !self.state.player.is_fully_rested()
    }

    pub fn has_save(&self) -> bool {
        self.state.has_save
    }

    pub fn has_items(&self) -> bool {
        !self.state.player.inventory.is_empty()
    }

    pub fn has_stat_points(&self) -> bool {
        self.state.player.stat_points > 0
    }
}
