//! Error types for the Order actor.

use crate::inventory_actor::InventoryError;
use crate::menu_actor::MenuError;
use crate::model::{IngredientId, ProductId};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A line item names a product that is not on the menu.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A recipe names an ingredient the inventory does not track.
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(IngredientId),

    /// There is not enough of an ingredient to fulfil the order.
    #[error("Insufficient stock: {0}")]
    InsufficientStock(IngredientId),

    /// The order is closed and can no longer be edited.
    #[error("Order is closed: {0}")]
    OrderClosed(String),

    /// The order was already closed.
    #[error("Order already closed: {0}")]
    AlreadyClosed(String),

    /// An order with the same id already exists.
    #[error("Order already exists: {0}")]
    DuplicateId(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// An order, menu or inventory file could not be written.
    #[error("Order storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl From<MenuError> for OrderError {
    fn from(e: MenuError) -> Self {
        match e {
            MenuError::NotFound(id) => OrderError::ProductNotFound(ProductId(id)),
            MenuError::Storage(msg) => OrderError::Storage(msg),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<InventoryError> for OrderError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::NotFound(id) => OrderError::IngredientNotFound(IngredientId(id)),
            InventoryError::InsufficientStock { ingredient, .. } => {
                OrderError::InsufficientStock(ingredient)
            }
            InventoryError::Storage(msg) => OrderError::Storage(msg),
            InventoryError::ValidationError(msg) => OrderError::ValidationError(msg),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
