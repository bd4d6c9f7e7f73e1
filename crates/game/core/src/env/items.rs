pub trait ItemOracle: Send + Sync {
    fn item(&self, id: &str) -> Option<&ItemDefinition>;

    /// All item records, sorted by id.
    fn items(&self) -> Vec<&ItemDefinition>;
}

/// Consumable item record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    pub price: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mp: u32,
}
