//! Custom actions for the Order actor.

/// Custom actions for Order entities.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Moves an open order to `Closed`. The reservation stays consumed.
    ///
    /// # Errors
    /// Fails with [`OrderError::AlreadyClosed`](crate::order_actor::OrderError::AlreadyClosed)
    /// if the order is not open.
    Close,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    Close(()),
}
