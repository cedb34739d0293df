//! Custom actions for the Inventory actor.
//!
//! These are the ledger operations the Order actor drives: reading a stock level and
//! applying a signed adjustment. Several adjustments sent as one
//! [`perform_batch`](crate::framework::ResourceClient::perform_batch) are applied
//! all-or-nothing.

/// Custom actions for InventoryItem entities.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Adds a signed amount to the stock level.
    ///
    /// # Errors
    /// Fails with [`InventoryError::InsufficientStock`](crate::inventory_actor::InventoryError::InsufficientStock)
    /// if the result would drop below zero.
    Adjust(f64),
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    /// Current stock level.
    CheckStock(f64),
    /// Stock level after the adjustment.
    Adjust(f64),
}
