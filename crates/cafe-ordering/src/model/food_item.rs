/// Represents one purchasable entry in the food catalog.
///
/// Items are owned by the catalog fetch result and cloned into cart entries;
/// the catalog itself is never mutated after a load.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for catalog items, assigned by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
}

impl FoodItem {
    /// Creates a new FoodItem instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier as issued by the catalog service
    /// * `name` - Display name
    /// * `price` - Non-negative price
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: ItemId(id.into()),
            name: name.into(),
            price,
        }
    }
}
