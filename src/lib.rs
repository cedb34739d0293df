//! # Café Orders
//!
//! > **An order engine for a café, built from resource-oriented actors.**
//!
//! The café has a **menu** (products made of ingredients), an **inventory** (how much of
//! each ingredient is on hand) and **orders**. Placing, editing, closing or deleting an
//! order checks and moves stock so that the inventory always equals physical stock minus
//! what live orders have reserved.
//!
//! ## 🏗️ Design
//!
//! Each collection is owned by one [`ResourceActor`](framework::ResourceActor): a Tokio
//! task that processes its mailbox one request at a time and writes the collection
//! through a [`Repository`](framework::Repository) before changing its in-memory state.
//!
//! - **No partial reservations**: an order's ingredient requirements are summed per
//!   ingredient and deducted in one all-or-nothing batch on the Inventory actor.
//! - **No check-then-act race**: order operations are serialized by the Order actor, and
//!   each ledger check and its deduction are a single Inventory request.
//! - **Typed errors**: each actor has its own error enum. Errors raised inside an actor
//!   travel boxed through the framework and are restored by the typed clients, so callers
//!   can match on `OrderError::InsufficientStock(ingredient)`.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>`, its client, repositories and the test mocks.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor),
//!   [`JsonFileRepository`](framework::JsonFileRepository).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! Starts the three actors, wires Menu and Inventory into Order, and shuts them down.
//! - **Key items**: [`CafeSystem`](lifecycle::CafeSystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 3. The Interface ([`clients`])
//! - **Key items**: [`MenuClient`](clients::MenuClient), [`InventoryClient`](clients::InventoryClient),
//!   [`OrderClient`](clients::OrderClient).
//!
//! ### 4. The Implementation ([`menu_actor`], [`inventory_actor`], [`order_actor`])
//! `ActorEntity` implementations. The reservation protocol lives in
//! [`order_actor::reservation`].
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run -- --dir data inventory add --id milk --name Milk --quantity 10 --unit ml
//! cargo run -- --dir data menu add --id latte --name Latte --price 3.5 --ingredient milk=2
//! RUST_LOG=info cargo run -- --dir data orders create --customer Ada --item latte=3
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod inventory_actor;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
