/// Represents a product on the café menu together with its recipe.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for MenuItem`](#impl-ActorEntity-for-MenuItem) for details on:
/// - Creation parameters ([`MenuItemCreate`])
/// - Update parameters ([`MenuItemUpdate`])
use crate::model::IngredientId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu products (e.g. `"latte"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One recipe line: how much of an ingredient a single unit of the product consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    pub ingredient_id: IngredientId,
    pub quantity: f64,
}

impl RecipeLine {
    pub fn new(ingredient_id: impl Into<IngredientId>, quantity: f64) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "product_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub ingredients: Vec<RecipeLine>,
}

impl MenuItem {
    /// Creates a new MenuItem with an empty description and recipe.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            ingredients: Vec::new(),
        }
    }

    /// Adds a recipe line, builder style.
    pub fn with_ingredient(mut self, ingredient_id: impl Into<IngredientId>, quantity: f64) -> Self {
        self.ingredients.push(RecipeLine::new(ingredient_id, quantity));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Payload for adding a product to the menu. The id is chosen by the caller.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub ingredients: Vec<RecipeLine>,
}

impl From<MenuItem> for MenuItemCreate {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            ingredients: item.ingredients,
        }
    }
}

/// Payload for updating a menu product. `None` leaves the field as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub ingredients: Option<Vec<RecipeLine>>,
}
