//! # Menu Client
//!
//! Provides a high-level API for the catalog. It wraps a `ResourceClient<MenuItem>`
//! and exposes domain-specific methods.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemUpdate, ProductId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            FrameworkError::DuplicateId(id) => MenuError::DuplicateId(id),
            FrameworkError::Storage(e) => MenuError::Storage(e.to_string()),
            other => other
                .downcast::<MenuError>()
                .unwrap_or_else(|e| MenuError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl MenuClient {
    /// Adds a product to the menu.
    #[instrument(skip(self))]
    pub async fn add_item(&self, params: MenuItemCreate) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Looks a product up, failing with [`MenuError::NotFound`] if it is not on the menu.
    #[instrument(skip(self))]
    pub async fn lookup(&self, id: &ProductId) -> Result<MenuItem, MenuError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| MenuError::NotFound(id.to_string()))
    }

    pub async fn list_all(&self) -> Result<Vec<MenuItem>, MenuError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: ProductId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    pub async fn delete_item(&self, id: ProductId) -> Result<(), MenuError> {
        self.delete(id).await
    }

    /// Replaces the whole menu.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn replace_all(&self, items: Vec<MenuItem>) -> Result<(), MenuError> {
        debug!("Sending request");
        self.inner.replace_all(items).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_get, MockClient};

    #[tokio::test]
    async fn lookup_of_a_missing_product_is_not_found() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu = MenuClient::new(client);

        let lookup = tokio::spawn(async move { menu.lookup(&"mocha".into()).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, ProductId::from("mocha"));
        responder.send(Ok(None)).unwrap();

        assert_eq!(
            lookup.await.unwrap(),
            Err(MenuError::NotFound("mocha".to_string()))
        );
    }

    #[tokio::test]
    async fn entity_errors_are_recovered_from_the_framework() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_create().return_err(FrameworkError::EntityError(Box::new(
            MenuError::ValidationError("price".into()),
        )));
        mock.expect_create()
            .return_err(FrameworkError::DuplicateId("latte".into()));

        let menu = MenuClient::new(mock.client());
        let latte = MenuItem::new("latte", "Latte", 3.5);
        assert_eq!(
            menu.add_item(latte.clone().into()).await,
            Err(MenuError::ValidationError("price".into()))
        );
        assert_eq!(
            menu.add_item(latte.into()).await,
            Err(MenuError::DuplicateId("latte".into()))
        );
        mock.verify();
    }
}
