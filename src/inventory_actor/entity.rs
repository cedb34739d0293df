//! ActorEntity trait implementation for the InventoryItem domain type.
//!
//! Includes the ledger actions used for reservations: stock checks and signed
//! adjustments.
//!
//! See the trait implementation on [`InventoryItem`] for method documentation.

use super::actions::{InventoryAction, InventoryActionResult};
use crate::framework::ActorEntity;
use crate::inventory_actor::InventoryError;
use crate::model::{IngredientId, InventoryItem, InventoryItemCreate, InventoryItemUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for InventoryItem {
    type Id = IngredientId;
    type Create = InventoryItemCreate;
    type Update = InventoryItemUpdate;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Context = ();
    type Error = InventoryError;

    fn id(&self) -> &IngredientId {
        &self.id
    }

    /// Creates a new InventoryItem; the id comes from the payload.
    fn from_create_params(_seq: u32, params: InventoryItemCreate) -> Result<Self, InventoryError> {
        Ok(Self::new(params.id, params.name, params.quantity, params.unit))
    }

    fn validate(&self) -> Result<(), InventoryError> {
        if self.id.0.trim().is_empty() {
            return Err(InventoryError::ValidationError(
                "ingredient id must not be blank".into(),
            ));
        }
        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Err(InventoryError::ValidationError(format!(
                "stock of {} must be a non-negative number, got {}",
                self.id, self.quantity
            )));
        }
        Ok(())
    }

    /// Handles updates to the InventoryItem entity.
    ///
    /// # Fields Updated
    /// - `name`, `unit`
    /// - `quantity`: overwrites the stock level (restocking, stocktake)
    async fn on_update(
        &mut self,
        update: InventoryItemUpdate,
        _ctx: &(),
    ) -> Result<(), InventoryError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = update.unit {
            self.unit = unit;
        }
        Ok(())
    }

    /// Handles custom actions for the InventoryItem entity.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current level
    /// - `Adjust`: Adds the signed amount, refusing to go below zero
    async fn handle_action(
        &mut self,
        action: InventoryAction,
        _ctx: &(),
    ) -> Result<InventoryActionResult, InventoryError> {
        match action {
            InventoryAction::CheckStock => Ok(InventoryActionResult::CheckStock(self.quantity)),
            InventoryAction::Adjust(delta) => {
                if !delta.is_finite() {
                    return Err(InventoryError::ValidationError(format!(
                        "adjustment of {} must be a finite number, got {delta}",
                        self.id
                    )));
                }
                let level = self.quantity + delta;
                if level < 0.0 {
                    return Err(InventoryError::InsufficientStock {
                        ingredient: self.id.clone(),
                        requested: -delta,
                        available: self.quantity,
                    });
                }
                self.quantity = level;
                Ok(InventoryActionResult::Adjust(level))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk(quantity: f64) -> InventoryItem {
        InventoryItem::new("milk", "Whole milk", quantity, "ml")
    }

    #[tokio::test]
    async fn adjust_moves_the_level_both_ways() {
        let mut item = milk(10.0);
        let result = item.handle_action(InventoryAction::Adjust(-4.0), &()).await;
        assert_eq!(result, Ok(InventoryActionResult::Adjust(6.0)));
        let result = item.handle_action(InventoryAction::Adjust(1.5), &()).await;
        assert_eq!(result, Ok(InventoryActionResult::Adjust(7.5)));
    }

    #[tokio::test]
    async fn adjust_may_drain_to_exactly_zero() {
        let mut item = milk(6.0);
        let result = item.handle_action(InventoryAction::Adjust(-6.0), &()).await;
        assert_eq!(result, Ok(InventoryActionResult::Adjust(0.0)));
    }

    #[tokio::test]
    async fn overdraw_is_refused_and_leaves_level_alone() {
        let mut item = milk(5.0);
        let err = item
            .handle_action(InventoryAction::Adjust(-6.0), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                ingredient: "milk".into(),
                requested: 6.0,
                available: 5.0,
            }
        );
        assert_eq!(item.quantity, 5.0);
    }

    #[test]
    fn negative_stock_fails_validation() {
        assert!(matches!(
            milk(-1.0).validate(),
            Err(InventoryError::ValidationError(_))
        ));
        assert!(milk(0.0).validate().is_ok());
    }
}
