//! # Order Client
//!
//! The engine surface. Inventory checks and reservation happen inside the Order actor's
//! hooks; this client only forwards requests and restores the typed [`OrderError`].
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order, reserving its ingredients.
    ///
    /// On any error the inventory is left exactly as it was.
    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<Order, OrderError> {
        debug!(?order, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(order).await.map_err(Self::map_error)
    }

    /// Edits an open order. Empty fields in `update` keep their current value.
    #[instrument(skip(self, update))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!(?update, "update_order called");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Closes an open order. Its reservation stays consumed.
    #[instrument(skip(self))]
    pub async fn close_order(&self, id: OrderId) -> Result<(), OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::Close)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Deletes an order of any status, returning its ingredients.
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }

    /// Fetches an order, failing with [`OrderError::NotFound`] if it does not exist.
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::DuplicateId(id) => OrderError::DuplicateId(id),
            FrameworkError::Storage(e) => OrderError::Storage(e.to_string()),
            other => other
                .downcast::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}
