//! Inventory-specific resource logic: the stock ledger.
//!
//! Stock levels only ever move through [`InventoryAction::Adjust`] or an explicit
//! update, and never below zero.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::InventoryClient;
use crate::framework::{FrameworkError, Repository, ResourceActor};
use crate::model::InventoryItem;

/// Creates a new Inventory actor and its client.
pub fn new(
    repository: impl Repository<InventoryItem>,
) -> Result<(ResourceActor<InventoryItem>, InventoryClient), FrameworkError> {
    let (actor, generic_client) = ResourceActor::new(32, repository)?;
    Ok((actor, InventoryClient::new(generic_client)))
}
