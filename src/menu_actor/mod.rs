//! # Menu Actor
//!
//! The Menu actor owns the catalog: every product, its price and its recipe. It is
//! read-mostly. The Order actor looks products up here to turn line items into
//! ingredient requirements.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use cafe_orders::framework::InMemoryRepository;
//! use cafe_orders::menu_actor;
//! use cafe_orders::model::MenuItem;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = menu_actor::new(InMemoryRepository::new())?;
//!     tokio::spawn(actor.run(()));
//!
//!     let latte = MenuItem::new("latte", "Latte", 3.5).with_ingredient("milk", 2.0);
//!     client.add_item(latte.into()).await?;
//!     let found = client.lookup(&"latte".into()).await?;
//!     assert_eq!(found.ingredients[0].quantity, 2.0);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::MenuClient;
use crate::framework::{FrameworkError, Repository, ResourceActor};
use crate::model::MenuItem;

/// Creates a new Menu actor and its client.
pub fn new(
    repository: impl Repository<MenuItem>,
) -> Result<(ResourceActor<MenuItem>, MenuClient), FrameworkError> {
    let (actor, generic_client) = ResourceActor::new(32, repository)?;
    Ok((actor, MenuClient::new(generic_client)))
}
