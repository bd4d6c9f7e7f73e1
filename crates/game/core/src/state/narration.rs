//! Narration events emitted by the rules.
//!
//! The core never formats player-facing text. It emits a [`MessageKey`] plus
//! named substitution values and leaves wording to the presentation layer.
//! Text that comes straight from data records travels as [`MessageKey::Text`].

use core::fmt;

/// Identifier of a narration template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MessageKey {
    /// Verbatim text supplied by a data record (`text`).
    Text,

    // title
    NewGame,
    Continued,
    NoSave,
    OverwriteQuestion,
    Farewell,

    // scenes and venues
    EnterScene,
    AlreadyThere,
    EnterVenue,
    LeaveVenue,
    MenuOpened,
    MenuClosed,
    MenuEmpty,

    // encounters
    OpponentAppears,
    AllQuiet,

    // player actions
    NoTarget,
    PlayerHit,
    PlayerCrit,
    PlayerMiss,
    OpponentDefeated,
    OpponentStunned,
    SpellHeal,
    SpellStrike,
    SpellMiss,
    SpellAlreadyFull,
    NotEnoughMp,
    BoostQuestion,

    // opponent turns
    OpponentStillStunned,
    OpponentHesitates,
    OpponentMisses,
    OpponentHits,
    OpponentCrits,

    // resolution
    Victory,
    LevelUp,
    Defeat,

    // town
    ServiceQuestion,
    ServiceUsed,
    ServiceFull,
    ServiceUnavailable,
    NotEnoughGold,
    Purchased,
    ItemUsed,
    ItemNotHeld,
    AlreadyFull,

    // level up
    StatAllocated,
    BalancedAllocation,
    RandomAllocation,
    AllocationComplete,
    NoStatPoints,

    /// A confirmation was answered no, or its deadline passed.
    Declined,
    SaveFailed,
}

/// A message key with its substitution values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Narration {
    pub key: MessageKey,
    pub args: Vec<(&'static str, String)>,
}

impl Narration {
    pub fn new(key: MessageKey) -> Self {
        Self {
            key,
            args: Vec::new(),
        }
    }

    /// Narration carrying record-provided text as-is.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            key: MessageKey::Text,
            args: vec![("text", text.into())],
        }
    }

    /// Adds a named substitution value.
    pub fn with(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.args.push((name, value.to_string()));
        self
    }

    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Uses the record-provided text when present, otherwise `fallback`.
    pub fn text_or(text: Option<&str>, fallback: Narration) -> Self {
        match text {
            Some(text) if !text.is_empty() => Self::text(text),
            _ => fallback,
        }
    }
}

impl fmt::Display for Narration {
    /// Debug-friendly rendering: `key(name=value, ...)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key == MessageKey::Text {
            return f.write_str(self.arg("text").unwrap_or_default());
        }
        write!(f, "{}", self.key)?;
        if !self.args.is_empty() {
            f.write_str("(")?;
            for (i, (name, value)) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{name}={value}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_render_in_snake_case() {
        let key: &'static str = MessageKey::OpponentStillStunned.into();
        assert_eq!(key, "opponent_still_stunned");
    }

    #[test]
    fn display_lists_arguments_in_insertion_order() {
        let n = Narration::new(MessageKey::PlayerHit)
            .with("target", "Slime")
            .with("damage", 4);
        assert_eq!(n.to_string(), "player_hit(target=Slime, damage=4)");
        assert_eq!(n.arg("damage"), Some("4"));
    }

    #[test]
    fn record_text_wins_over_fallback_unless_empty() {
        let fallback = Narration::new(MessageKey::EnterScene);
        assert_eq!(
            Narration::text_or(Some("The trees close in."), fallback.clone()).to_string(),
            "The trees close in."
        );
        assert_eq!(Narration::text_or(Some(""), fallback.clone()), fallback);
    }
}
