use tokio::task::JoinHandle;
use tracing::{error, info};
use uuid::Uuid;

use crate::actors::OrderService;
use crate::app_system::SystemConfig;
use crate::clients::OrderClient;
use crate::error::OrderError;
use crate::handlers::OrderHandlers;
use crate::store::OrderStore;

/// The main application system: starts the order service, hands out its
/// client, and handles shutdown.
pub struct OrderSystem {
    pub order_client: OrderClient,
    handle: JoinHandle<()>,
}

impl OrderSystem {
    /// Starts with an empty store and random ids. Must be called from inside
    /// a tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        Self::with_store(config, OrderStore::new(), random_order_id)
    }

    pub fn with_store(
        config: &SystemConfig,
        store: OrderStore,
        next_id: impl FnMut() -> String + Send + 'static,
    ) -> Self {
        info!(
            orders = store.len(),
            channel_capacity = config.channel_capacity,
            "Starting order system"
        );
        let handlers = OrderHandlers::new(store, next_id);
        let (order_service, order_client) = OrderService::new(config.channel_capacity, handlers);
        let handle = tokio::spawn(order_service.run());

        Self {
            order_client,
            handle,
        }
    }

    pub async fn shutdown(self) -> Result<(), OrderError> {
        info!("Shutting down system...");
        // Already stopped is fine; the join below still reports a panic.
        let _ = self.order_client.shutdown().await;
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(OrderError::ActorCommunicationError(format!(
                "Actor task failed: {e}"
            )));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

/// 32 hex characters, fresh on every call.
pub fn random_order_id() -> String {
    Uuid::new_v4().simple().to_string()
}
