/// Represents one ingredient held in stock.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for InventoryItem`](#impl-ActorEntity-for-InventoryItem) for details on:
/// - Creation parameters ([`InventoryItemCreate`])
/// - Update parameters ([`InventoryItemUpdate`])
/// - Custom actions ([`InventoryAction`](crate::inventory_actor::InventoryAction))
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for ingredients (e.g. `"milk"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub String);

impl From<&str> for IngredientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "ingredient_id")]
    pub id: IngredientId,
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

impl InventoryItem {
    /// Creates a new InventoryItem.
    ///
    /// # Arguments
    /// * `id` - Ingredient identifier, referenced by menu recipes
    /// * `name` - Display name
    /// * `quantity` - Units currently available
    /// * `unit` - Unit of measure (free text, e.g. "ml")
    pub fn new(
        id: impl Into<IngredientId>,
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// Payload for adding an ingredient to the inventory.
#[derive(Debug, Clone)]
pub struct InventoryItemCreate {
    pub id: IngredientId,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl From<InventoryItem> for InventoryItemCreate {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            unit: item.unit,
        }
    }
}

// DTOs for InventoryItem updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryItemUpdate {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}
