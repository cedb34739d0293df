//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`); every actor
//! log line carries an `entity_type` field instead. Levels come from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup and shutdown, with collection size
//! - **Entity Operations**: Create, Get, List, Update, Delete, Actions and Batches
//! - **Reservations**: ingredients reserved or released per order
//! - **Errors**: rejected requests at `warn`, failed compensation at `error`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Committed changes only
//! RUST_LOG=info cargo run -- orders list
//!
//! # Full payloads of every request
//! RUST_LOG=debug cargo run -- orders create --customer Ada --item latte=2
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**, placing an order for two lattes:
//!
//! ```text
//! INFO create_order: Sending create_order to actor
//! INFO Batch ok entity_type="InventoryItem" count=2
//! INFO Reserved order_id=order1 ingredients=2
//! INFO Created entity_type="Order" id=order1 size=1
//! ```
//!
//! The ledger batch is committed before the order is written. If the order write then
//! fails, the reversing batch shows up as a second `Batch ok` preceded by a `warn`.

/// Installs the global `tracing` subscriber. Call once, at start-up.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
