//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract every resource (menu item, inventory item,
//! order) implements to be managed by the generic [`ResourceActor`](crate::framework::ResourceActor).
//! It specifies associated types for IDs, DTOs, actions, context and errors, and provides
//! lifecycle hooks (`on_create`, `on_update`, `on_delete`, `handle_action`,
//! `on_commit_failed`).
//!
//! # Staged Mutation
//! Hooks never run against the live record. The actor hands them a *copy*; the copy is
//! validated, written through the repository and only then swapped into the store. A hook
//! that fails therefore leaves no trace in the collection.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`], [`ActorEntity::on_delete`], [`ActorEntity::validate`],
//! [`ActorEntity::sequence_of`] and [`ActorEntity::on_commit_failed`] default to no-ops.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Describes the change whose write-through failed, passed to
/// [`ActorEntity::on_commit_failed`].
#[derive(Debug)]
pub enum Change<'a, T> {
    /// The entity was about to be inserted.
    Created,
    /// The entity was about to replace `before` (updates and actions).
    Updated(&'a T),
    /// The entity was about to be removed.
    Deleted,
}

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g. calling
/// other actors). The `Context` type is injected into every hook, which allows late binding
/// of dependencies (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + PartialEq + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `Adjust`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity. One enum per actor, not per message.
    type Error: std::error::Error + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;

    /// Construct the entity from its payload.
    ///
    /// `seq` is the next free sequence number of the collection. Entities with
    /// server-generated ids derive their id from it; entities whose id arrives in the
    /// payload ignore it.
    fn from_create_params(seq: u32, params: Self::Create) -> Result<Self, Self::Error>;

    /// Sequence number embedded in an id, used to seed id generation from persisted records.
    fn sequence_of(_id: &Self::Id) -> Option<u32> {
        None
    }

    /// Checks the entity's invariants. Runs after every hook and on bulk replacement.
    fn validate(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called on the freshly built entity before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called with a copy of the stored entity when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Called when a hook succeeded but the collection could not be written.
    ///
    /// `self` is the state that failed to persist. Entities whose hooks have side effects
    /// on other actors undo them here.
    async fn on_commit_failed(
        &self,
        _change: Change<'_, Self>,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
