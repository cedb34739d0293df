//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the café's actors: starting them,
//! wiring them together and shutting them down.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them in `run(context)`:
//!
//! ```rust,ignore
//! // No dependencies
//! impl ActorEntity for MenuItem {
//!     type Context = ();
//! }
//!
//! // Resolves recipes and moves stock
//! impl ActorEntity for Order {
//!     type Context = OrderContext; // { menu: MenuClient, inventory: InventoryClient }
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for all actor tasks to finish
//!
//! The dependency graph is acyclic (Order depends on Menu and Inventory), so channel
//! closure is enough to stop everything.
//!
//! ## Observability
//!
//! See the [`tracing`](self::tracing) module for [`setup_tracing`].

pub mod cafe_system;
pub mod tracing;

pub use cafe_system::*;
pub use self::tracing::setup_tracing;
