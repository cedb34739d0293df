//! # Inventory Reservation
//!
//! Turns line items into per-ingredient requirements and moves them through the
//! inventory ledger.
//!
//! Requirements are accumulated across the whole order before anything is checked, so
//! two products sharing an ingredient are checked against their combined demand. Every
//! ledger movement is sent as a single batch, which the Inventory actor applies
//! all-or-nothing: either every ingredient is adjusted or none is.

use crate::clients::{InventoryClient, MenuClient};
use crate::model::{IngredientId, LineItem};
use crate::order_actor::OrderError;
use std::collections::BTreeMap;
use tracing::debug;

/// Total amount of each ingredient an order consumes.
pub type Requirements = BTreeMap<IngredientId, f64>;

/// Resolves every line item on the menu and sums `per_unit * quantity` per ingredient.
///
/// # Errors
/// [`OrderError::ProductNotFound`] if a line item names a product that is not on the menu.
pub async fn requirements(items: &[LineItem], menu: &MenuClient) -> Result<Requirements, OrderError> {
    let mut totals = Requirements::new();
    for line in items {
        let product = menu.lookup(&line.product_id).await?;
        for recipe in &product.ingredients {
            *totals.entry(recipe.ingredient_id.clone()).or_insert(0.0) +=
                recipe.quantity * f64::from(line.quantity);
        }
    }
    Ok(totals)
}

/// Adjustments that take `required` out of stock.
pub fn deductions(required: &Requirements) -> Vec<(IngredientId, f64)> {
    required.iter().map(|(id, amount)| (id.clone(), -amount)).collect()
}

/// Adjustments that put `reserved` back into stock.
pub fn returns(reserved: &Requirements) -> Vec<(IngredientId, f64)> {
    reserved.iter().map(|(id, amount)| (id.clone(), *amount)).collect()
}

/// Adjustments that move a reservation from `old` to `new` in one step.
///
/// Each ingredient moves by `old - new`. This succeeds exactly when returning `old` and
/// then reserving `new` would, without the intermediate state ever being visible.
/// Ingredients only present in `new` are always included so that unknown ones are still
/// reported.
pub fn net_change(old: &Requirements, new: &Requirements) -> Vec<(IngredientId, f64)> {
    let mut deltas: BTreeMap<IngredientId, f64> = BTreeMap::new();
    for (id, amount) in old {
        *deltas.entry(id.clone()).or_insert(0.0) += amount;
    }
    for (id, amount) in new {
        *deltas.entry(id.clone()).or_insert(0.0) -= amount;
    }
    deltas
        .into_iter()
        .filter(|(id, delta)| *delta != 0.0 || !old.contains_key(id))
        .collect()
}

/// Sends `adjustments` to the ledger as one all-or-nothing batch.
pub async fn apply(
    adjustments: Vec<(IngredientId, f64)>,
    inventory: &InventoryClient,
) -> Result<(), OrderError> {
    if adjustments.is_empty() {
        return Ok(());
    }
    debug!(count = adjustments.len(), "Applying ledger adjustments");
    inventory.apply_batch(adjustments).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reqs(pairs: &[(&str, f64)]) -> Requirements {
        pairs.iter().map(|(id, n)| (IngredientId::from(*id), *n)).collect()
    }

    fn moves(pairs: &[(&str, f64)]) -> Vec<(IngredientId, f64)> {
        pairs.iter().map(|(id, n)| (IngredientId::from(*id), *n)).collect()
    }

    #[test]
    fn net_change_only_moves_the_difference() {
        let old = reqs(&[("milk", 6.0), ("beans", 2.0)]);
        let new = reqs(&[("milk", 4.0), ("beans", 2.0), ("sugar", 1.0)]);
        assert_eq!(
            net_change(&old, &new),
            moves(&[("milk", 2.0), ("sugar", -1.0)])
        );
    }

    #[test]
    fn net_change_returns_dropped_ingredients() {
        let old = reqs(&[("milk", 6.0)]);
        let new = reqs(&[("beans", 1.0)]);
        assert_eq!(
            net_change(&old, &new),
            moves(&[("beans", -1.0), ("milk", 6.0)])
        );
    }

    #[test]
    fn zero_requirements_are_still_checked_for_existence() {
        let new = reqs(&[("cinnamon", 0.0)]);
        assert_eq!(net_change(&Requirements::new(), &new), moves(&[("cinnamon", 0.0)]));
        assert_eq!(deductions(&new), moves(&[("cinnamon", 0.0)]));
    }
}
