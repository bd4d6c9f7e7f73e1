//! Action records.

use crate::prompt::Answer;

/// Identity of a player-selectable operation.
///
/// Record files spell these in SCREAMING_SNAKE_CASE (`ENTER_SCENE`); an
/// unknown id is rejected when the record is loaded.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum CommandId {
    Quit,
    TitleNew,
    TitleContinue,
    EnterScene,
    EnterVenue,
    ExitVenue,
    ReadNotice,
    OpenMenu,
    CloseMenu,
    Attack,
    CastSpell,
    UseService,
    BuyItem,
    UseItem,
    AllocateStat,
    AllocateBalanced,
    AllocateRandom,
}

impl CommandId {
    /// The dispatch type every action with this command carries.
    pub const fn default_type(self) -> ActionType {
        use CommandId::*;
        match self {
            Quit | TitleNew | TitleContinue => ActionType::System,
            EnterScene => ActionType::Scene,
            EnterVenue | ExitVenue | ReadNotice => ActionType::Venue,
            OpenMenu => ActionType::MenuOpen,
            CloseMenu => ActionType::MenuClose,
            Attack => ActionType::Combat,
            CastSpell => ActionType::Spell,
            UseService => ActionType::Service,
            BuyItem => ActionType::Purchase,
            UseItem => ActionType::Item,
            AllocateStat | AllocateBalanced | AllocateRandom => ActionType::LevelUp,
        }
    }

    /// Commands whose `target` must name a record.
    pub const fn needs_target(self) -> bool {
        use CommandId::*;
        matches!(
            self,
            EnterScene
                | EnterVenue
                | ReadNotice
                | OpenMenu
                | CastSpell
                | BuyItem
                | UseItem
                | AllocateStat
        )
    }
}

/// Dispatch category of an action.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumString, strum::IntoStaticStr, strum::Display,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ActionType {
    System,
    Scene,
    Venue,
    MenuOpen,
    MenuClose,
    Combat,
    Spell,
    Service,
    Purchase,
    Item,
    LevelUp,
}

/// Boost confirmation metadata carried by spell and service actions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoostPrompt {
    /// Seconds before the default answer applies. Spell boosts fall back to
    /// the prompt config; service confirmations wait when unset.
    #[cfg_attr(feature = "serde", serde(default))]
    pub timeout_secs: Option<u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub default: Answer,
    /// Question text override.
    #[cfg_attr(feature = "serde", serde(default))]
    pub prompt: Option<String>,
}

/// One entry of an action layer.
///
/// Missing optional fields default (`requires_target = false`,
/// `suppress_actions = false`, type derived from `command`); unknown fields
/// are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionDefinition {
    /// Display key, matched exactly against the input key.
    pub key: String,
    pub label: String,
    pub command: CommandId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub service_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, alias = "type"))]
    pub kind: Option<ActionType>,
    /// Animation hint forwarded to the presentation layer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub anim: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requires_target: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub suppress_actions: bool,
    /// Predicate name; the action is legal only while it holds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub when: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub boost: Option<BoostPrompt>,
}

impl ActionDefinition {
    pub fn new(key: impl Into<String>, label: impl Into<String>, command: CommandId) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            command,
            target: None,
            service_id: None,
            kind: None,
            anim: None,
            requires_target: false,
            suppress_actions: false,
            when: None,
            boost: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_when(mut self, predicate: impl Into<String>) -> Self {
        self.when = Some(predicate.into());
        self
    }

    pub fn requiring_target(mut self) -> Self {
        self.requires_target = true;
        self
    }

    /// Declared type, or the command's default.
    pub fn action_type(&self) -> ActionType {
        self.kind.unwrap_or(self.command.default_type())
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}
