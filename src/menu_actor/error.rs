//! Error types for the Menu actor.

use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested product is not on the menu.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A product with the same id is already on the menu.
    #[error("Product already exists: {0}")]
    DuplicateId(String),

    /// The product data provided is invalid (negative price or recipe quantity, blank id).
    #[error("Menu validation error: {0}")]
    ValidationError(String),

    /// The menu file could not be read or written.
    #[error("Menu storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunicationError(msg)
    }
}
