//! Error types for the Inventory actor.

use crate::model::IngredientId;
use thiserror::Error;

/// Errors that can occur during inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The requested ingredient is not tracked.
    #[error("Ingredient not found: {0}")]
    NotFound(String),

    /// An ingredient with the same id is already tracked.
    #[error("Ingredient already exists: {0}")]
    DuplicateId(String),

    /// A deduction asked for more than is on hand.
    #[error("Insufficient stock of {ingredient}: requested {requested}, available {available}")]
    InsufficientStock {
        ingredient: IngredientId,
        requested: f64,
        available: f64,
    },

    /// The ingredient data provided is invalid (negative or non-finite quantity, blank id).
    #[error("Inventory validation error: {0}")]
    ValidationError(String),

    /// The inventory file could not be read or written.
    #[error("Inventory storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for InventoryError {
    fn from(msg: String) -> Self {
        InventoryError::ActorCommunicationError(msg)
    }
}
