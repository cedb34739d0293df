use crate::clients::{InventoryClient, MenuClient, OrderClient};
use crate::config::{CafeConfig, ConfigError};
use crate::framework::{FrameworkError, JsonFileRepository, Repository};
use crate::model::{InventoryItem, MenuItem, Order};
use crate::order_actor::OrderContext;
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while starting or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Could not start actor: {0}")]
    Startup(#[from] FrameworkError),
    #[error("Actor task failed: {0}")]
    ActorFailed(String),
}

/// The runtime orchestrator for the café.
///
/// `CafeSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Handing the Menu and Inventory clients to the Order actor
///
/// # Architecture
///
/// The system consists of three actors:
/// - **Menu Actor**: The catalog of products and their recipes
/// - **Inventory Actor**: The stock ledger
/// - **Order Actor**: Orders, reserving and returning stock through the other two
///
/// # Example
///
/// ```ignore
/// let system = CafeSystem::open(&CafeConfig::new("data"))?;
///
/// system.menu_client.add_item(latte.into()).await?;
/// let order = system.order_client.create_order(order).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CafeSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Client for interacting with the Menu actor
    pub menu_client: MenuClient,

    /// Client for interacting with the Inventory actor
    pub inventory_client: InventoryClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CafeSystem {
    /// Starts all actors over the given repositories.
    ///
    /// This method:
    /// 1. Loads each collection and creates its actor
    /// 2. Spawns Menu and Inventory (no dependencies)
    /// 3. Spawns Order with their clients injected as [`OrderContext`]
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(
        menu: impl Repository<MenuItem>,
        inventory: impl Repository<InventoryItem>,
        orders: impl Repository<Order>,
    ) -> Result<Self, SystemError> {
        // 1. Create actors (no dependencies)
        let (menu_actor, menu_client) = crate::menu_actor::new(menu)?;
        let (inventory_actor, inventory_client) = crate::inventory_actor::new(inventory)?;
        let (order_actor, order_client) = crate::order_actor::new(orders)?;

        // 2. Start actors with injected context
        let menu_handle = tokio::spawn(menu_actor.run(()));
        let inventory_handle = tokio::spawn(inventory_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext::new(
            menu_client.clone(),
            inventory_client.clone(),
        )));

        Ok(Self {
            order_client,
            menu_client,
            inventory_client,
            handles: vec![order_handle, menu_handle, inventory_handle],
        })
    }

    /// Prepares the configured data directory and starts the system over its JSON files.
    pub fn open(config: &CafeConfig) -> Result<Self, SystemError> {
        config.prepare()?;
        info!(dir = %config.data_dir.display(), "Opening data directory");
        Self::new(
            JsonFileRepository::new(config.menu_path()),
            JsonFileRepository::new(config.inventory_path()),
            JsonFileRepository::new(config.orders_path()),
        )
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the actors' channels. The Order actor stops first
    /// and releases its Menu and Inventory clients, which lets those two stop as well.
    /// Clones of the clients held elsewhere keep their actors alive, so drop them before
    /// calling this.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.menu_client);
        drop(self.inventory_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
