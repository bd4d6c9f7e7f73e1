//! Venue oracle: shops, inns and halls inside a scene.

use std::collections::BTreeMap;

use crate::catalog::ActionDefinition;

pub trait VenueOracle: Send + Sync {
    fn venue(&self, id: &str) -> Option<&VenueDefinition>;

    /// All venue records, sorted by id.
    fn venues(&self) -> Vec<&VenueDefinition>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VenueDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub welcome_message: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub leave_message: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actions: Vec<ActionDefinition>,
    /// Services keyed by the `service_id` actions refer to.
    #[cfg_attr(feature = "serde", serde(default))]
    pub services: BTreeMap<String, ServiceDefinition>,
    /// Notice texts keyed by the `target` of `READ_NOTICE` actions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub notices: BTreeMap<String, String>,
}

impl VenueDefinition {
    pub fn service(&self, id: &str) -> Option<&ServiceDefinition> {
        self.services.get(id)
    }

    pub fn notice(&self, id: &str) -> Option<&str> {
        self.notices.get(id).map(String::as_str)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ServiceKind {
    /// Full HP and MP restore.
    Rest,
    /// Fixed HP and MP gain.
    Meal,
}

/// A paid service. Messages override the default narration keys.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceDefinition {
    pub kind: ServiceKind,
    pub name: String,
    pub cost: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub message: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub full_message: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unavailable_message: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub poor_message: Option<String>,
}
