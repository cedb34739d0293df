//! Order-specific resource logic: the order lifecycle and inventory reservation.
//!
//! The Order actor is the engine. Its hooks consult the Menu actor to resolve recipes
//! and drive the Inventory actor's ledger, and because the actor awaits those hooks
//! inside its own loop, order operations never interleave with each other.

mod actions;
pub mod entity;
pub mod error;
pub mod reservation;

pub use actions::*;
pub use error::*;

use crate::clients::{InventoryClient, MenuClient, OrderClient};
use crate::framework::{FrameworkError, Repository, ResourceActor};
use crate::model::Order;

/// Dependencies injected into the Order actor's hooks via `run()`.
#[derive(Clone)]
pub struct OrderContext {
    pub menu: MenuClient,
    pub inventory: InventoryClient,
}

impl OrderContext {
    pub fn new(menu: MenuClient, inventory: InventoryClient) -> Self {
        Self { menu, inventory }
    }
}

/// Creates a new Order actor and its client.
pub fn new(
    repository: impl Repository<Order>,
) -> Result<(ResourceActor<Order>, OrderClient), FrameworkError> {
    let (actor, generic_client) = ResourceActor::new(32, repository)?;
    Ok((actor, OrderClient::new(generic_client)))
}
