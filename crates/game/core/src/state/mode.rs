//! Session mode as a single tagged variant.
//!
//! A pending prompt is carried inside [`SessionMode::Prompt`] together with
//! the mode it interrupted, so "prompt pending" and "mode is prompt" can never
//! disagree, and a prompt cannot exist on top of another prompt.

use crate::prompt::PendingPrompt;

/// Explorable scenes. Each maps to the scene record of the same id.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumString, strum::IntoStaticStr, strum::Display,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Scene {
    Town,
    Forest,
}

impl Scene {
    pub fn id(self) -> &'static str {
        self.into()
    }
}

/// Any mode that is not a prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BaseMode {
    Title,
    Explore(Scene),
    Venue {
        scene: Scene,
        venue: String,
    },
    Menu {
        menu: String,
        /// Outer action layers are hidden while the menu is open.
        suppress_outer: bool,
        under: Box<BaseMode>,
    },
    Combat,
    LevelUp,
}

impl BaseMode {
    /// Scene record supplying the base layer for this mode.
    pub fn scene_record(&self) -> &'static str {
        match self {
            BaseMode::Title => "title",
            BaseMode::LevelUp => "level_up",
            BaseMode::Combat => Scene::Forest.id(),
            BaseMode::Explore(scene) | BaseMode::Venue { scene, .. } => scene.id(),
            BaseMode::Menu { under, .. } => under.scene_record(),
        }
    }

    /// Scene the player physically stands in, if any.
    pub fn scene(&self) -> Option<Scene> {
        match self {
            BaseMode::Explore(scene) | BaseMode::Venue { scene, .. } => Some(*scene),
            BaseMode::Combat | BaseMode::LevelUp => Some(Scene::Forest),
            BaseMode::Menu { under, .. } => under.scene(),
            BaseMode::Title => None,
        }
    }

    /// The mode beneath any open menu.
    pub fn outermost(&self) -> &BaseMode {
        match self {
            BaseMode::Menu { under, .. } => under.outermost(),
            other => other,
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            BaseMode::Title => ModeKind::Title,
            BaseMode::Explore(_) => ModeKind::Explore,
            BaseMode::Venue { .. } => ModeKind::Venue,
            BaseMode::Menu { .. } => ModeKind::Menu,
            BaseMode::Combat => ModeKind::Combat,
            BaseMode::LevelUp => ModeKind::LevelUp,
        }
    }
}

/// Coarse mode classification used by predicates, logging and views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ModeKind {
    Title,
    Explore,
    Venue,
    Menu,
    Combat,
    LevelUp,
    Prompt,
}

/// Current session mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionMode {
    Active(BaseMode),
    Prompt {
        prompt: PendingPrompt,
        resume: BaseMode,
    },
}

impl SessionMode {
    pub fn kind(&self) -> ModeKind {
        match self {
            SessionMode::Active(base) => base.kind(),
            SessionMode::Prompt { .. } => ModeKind::Prompt,
        }
    }

    /// The active mode, or the one a pending prompt will return to.
    pub fn base(&self) -> &BaseMode {
        match self {
            SessionMode::Active(base) => base,
            SessionMode::Prompt { resume, .. } => resume,
        }
    }

    pub fn prompt(&self) -> Option<&PendingPrompt> {
        match self {
            SessionMode::Prompt { prompt, .. } => Some(prompt),
            SessionMode::Active(_) => None,
        }
    }
}
