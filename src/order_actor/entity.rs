//! ActorEntity trait implementation for the Order domain type.
//!
//! This is where the order lifecycle meets the inventory ledger: every hook that
//! changes what an order consumes moves the difference through
//! [`reservation`](super::reservation) before the order itself is written.
//!
//! See the trait implementation on [`Order`] for method documentation.

use super::actions::{OrderAction, OrderActionResult};
use super::reservation::{self, Requirements};
use super::OrderContext;
use crate::framework::{ActorEntity, Change};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

impl Order {
    async fn requirements(&self, ctx: &OrderContext) -> Result<Requirements, OrderError> {
        reservation::requirements(&self.items, &ctx.menu).await
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Creates a new open Order; the id is `order{seq}`.
    fn from_create_params(seq: u32, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self::new(OrderId(seq), params.customer_name, params.items))
    }

    fn sequence_of(id: &OrderId) -> Option<u32> {
        Some(id.0)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.customer_name.trim().is_empty() {
            return Err(OrderError::ValidationError(
                "customer name must not be empty".into(),
            ));
        }
        if self.items.is_empty() {
            return Err(OrderError::ValidationError(
                "an order needs at least one line item".into(),
            ));
        }
        Ok(())
    }

    /// Reserves the order's ingredients.
    ///
    /// Requirements are accumulated per ingredient, then deducted from the ledger in
    /// one batch. Nothing is deducted unless every ingredient is available.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let required = self.requirements(ctx).await?;
        reservation::apply(reservation::deductions(&required), &ctx.inventory).await?;
        info!(order_id = %self.id, ingredients = required.len(), "Reserved");
        Ok(())
    }

    /// Handles updates to the Order entity.
    ///
    /// # Fields Updated
    /// - `customer_name`: if non-empty
    /// - `items`: if non-empty; the ledger moves by the net difference between the old
    ///   and new requirements in one batch
    ///
    /// `created_at` is refreshed on every successful update.
    async fn on_update(&mut self, update: OrderUpdate, ctx: &OrderContext) -> Result<(), OrderError> {
        if self.status == OrderStatus::Closed {
            return Err(OrderError::OrderClosed(self.id.to_string()));
        }

        if let Some(items) = update.items.filter(|items| !items.is_empty()) {
            let old = self.requirements(ctx).await?;
            let new = reservation::requirements(&items, &ctx.menu).await?;
            reservation::apply(reservation::net_change(&old, &new), &ctx.inventory).await?;
            self.items = items;
        }
        if let Some(name) = update.customer_name.filter(|name| !name.trim().is_empty()) {
            self.customer_name = name;
        }
        self.created_at = Utc::now();
        Ok(())
    }

    /// Returns the order's ingredients to the ledger, whatever its status.
    async fn on_delete(&self, ctx: &OrderContext) -> Result<(), OrderError> {
        let reserved = self.requirements(ctx).await?;
        reservation::apply(reservation::returns(&reserved), &ctx.inventory).await?;
        info!(order_id = %self.id, ingredients = reserved.len(), "Released");
        Ok(())
    }

    /// Handles custom actions for the Order entity.
    ///
    /// # Actions
    /// - `Close`: `Open -> Closed`, no ledger effect
    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &OrderContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Close => {
                if self.status == OrderStatus::Closed {
                    return Err(OrderError::AlreadyClosed(self.id.to_string()));
                }
                self.status = OrderStatus::Closed;
                Ok(OrderActionResult::Close(()))
            }
        }
    }

    /// Undoes the ledger movement of a hook whose order write failed.
    async fn on_commit_failed(
        &self,
        change: Change<'_, Self>,
        ctx: &OrderContext,
    ) -> Result<(), OrderError> {
        let adjustments = match change {
            Change::Created => reservation::returns(&self.requirements(ctx).await?),
            Change::Deleted => reservation::deductions(&self.requirements(ctx).await?),
            Change::Updated(before) if before.items != self.items => {
                let current = self.requirements(ctx).await?;
                let previous = before.requirements(ctx).await?;
                reservation::net_change(&current, &previous)
            }
            Change::Updated(_) => return Ok(()),
        };
        warn!(order_id = %self.id, count = adjustments.len(), "Order write failed, reversing ledger");
        reservation::apply(adjustments, &ctx.inventory).await
    }
}
