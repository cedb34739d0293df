//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod inventory;
pub mod menu;
pub mod order;

pub use inventory::*;
pub use menu::*;
pub use order::*;
