//! # Inventory Client
//!
//! Provides a high-level API for the stock ledger. It wraps a
//! `ResourceClient<InventoryItem>` and exposes domain-specific methods.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::inventory_actor::{InventoryAction, InventoryActionResult, InventoryError};
use crate::model::{IngredientId, InventoryItem, InventoryItemCreate, InventoryItemUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<InventoryItem>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<InventoryItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<InventoryItem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => InventoryError::NotFound(id),
            FrameworkError::DuplicateId(id) => InventoryError::DuplicateId(id),
            FrameworkError::Storage(e) => InventoryError::Storage(e.to_string()),
            other => other
                .downcast::<InventoryError>()
                .unwrap_or_else(|e| InventoryError::ActorCommunicationError(e.to_string())),
        }
    }
}

fn level(result: InventoryActionResult) -> f64 {
    match result {
        InventoryActionResult::CheckStock(quantity) | InventoryActionResult::Adjust(quantity) => quantity,
    }
}

impl InventoryClient {
    /// Starts tracking an ingredient.
    #[instrument(skip(self))]
    pub async fn add_item(&self, params: InventoryItemCreate) -> Result<InventoryItem, InventoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetches an ingredient, failing with [`InventoryError::NotFound`] if it is not tracked.
    pub async fn get_item(&self, id: IngredientId) -> Result<InventoryItem, InventoryError> {
        let missing = id.to_string();
        self.get(id)
            .await?
            .ok_or(InventoryError::NotFound(missing))
    }

    pub async fn list_all(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: IngredientId,
        update: InventoryItemUpdate,
    ) -> Result<InventoryItem, InventoryError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    pub async fn delete_item(&self, id: IngredientId) -> Result<(), InventoryError> {
        self.delete(id).await
    }

    /// Check the current stock level for an ingredient.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: IngredientId) -> Result<f64, InventoryError> {
        debug!("Checking stock for ingredient {}", id);
        self.inner
            .perform_action(id, InventoryAction::CheckStock)
            .await
            .map(level)
            .map_err(Self::map_error)
    }

    /// Adds a signed amount to one ingredient.
    ///
    /// Returns the new level, or [`InventoryError::InsufficientStock`] if it would
    /// drop below zero.
    #[instrument(skip(self))]
    pub async fn adjust(&self, id: IngredientId, delta: f64) -> Result<f64, InventoryError> {
        debug!("Adjusting ingredient {} by {}", id, delta);
        self.inner
            .perform_action(id, InventoryAction::Adjust(delta))
            .await
            .map(level)
            .map_err(Self::map_error)
    }

    /// Applies several signed adjustments all-or-nothing.
    ///
    /// Returns the new level of each adjusted ingredient, in request order. If any
    /// adjustment fails, no ingredient changes.
    #[instrument(skip(self))]
    pub async fn apply_batch(
        &self,
        adjustments: Vec<(IngredientId, f64)>,
    ) -> Result<Vec<f64>, InventoryError> {
        debug!("Sending request");
        let actions = adjustments
            .into_iter()
            .map(|(id, delta)| (id, InventoryAction::Adjust(delta)))
            .collect();
        let results = self
            .inner
            .perform_batch(actions)
            .await
            .map_err(Self::map_error)?;
        Ok(results.into_iter().map(level).collect())
    }

    /// Replaces the whole inventory.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn replace_all(&self, items: Vec<InventoryItem>) -> Result<(), InventoryError> {
        debug!("Sending request");
        self.inner.replace_all(items).await.map_err(Self::map_error)
    }
}
