//! # Framework Errors
//!
//! Common error types shared by every actor and client. Entity-specific failures
//! travel through the framework boxed inside [`FrameworkError::EntityError`] and are
//! recovered by the typed clients with [`FrameworkError::downcast`].

use std::path::PathBuf;

/// Errors raised by a [`Repository`](crate::framework::Repository) while reading or
/// writing a collection.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not encode records: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers a concrete entity error that was boxed by the actor.
    ///
    /// Returns the original `FrameworkError` unchanged when it does not wrap an `E`.
    pub fn downcast<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}
