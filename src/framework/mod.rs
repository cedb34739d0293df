//! Generic actor framework for resource management.
//!
//! This module provides the core building blocks for creating type-safe actor systems
//! that manage persisted collections of entities with CRUD operations, custom actions
//! and all-or-nothing batches.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns one collection
//! - [`ResourceClient`] - Type-safe async handle to a `ResourceActor`
//! - [`Repository`] - Where a collection is loaded from and written to
//! - [`FrameworkError`], [`StorageError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod repository;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::{ActorEntity, Change};
pub use error::{FrameworkError, StorageError};
pub use message::{ResourceRequest, Response};
pub use repository::{InMemoryRepository, JsonFileRepository, Repository};
