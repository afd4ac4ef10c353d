use tracing::{error, info};

use crate::clients::DeliveryClient;
use crate::config::SystemConfig;
use crate::delivery::DeliveryService;

/// The runtime orchestrator for the delivery service.
///
/// `DeliverySystem` spawns the [`DeliveryActor`](crate::delivery_actor::DeliveryActor)
/// on the current Tokio runtime and hands out its client. Every operation sent
/// through [`DeliverySystem::client`] (or any clone of it) is applied in mailbox
/// order, one at a time.
///
/// # Example
///
/// ```ignore
/// let system = DeliverySystem::new(SystemConfig::from_env());
///
/// system.client.add_category("Italian").await?;
/// system.client.add_restaurant("Luigi's", "Italian").await?;
///
/// let service = system.shutdown().await?;
/// ```
pub struct DeliverySystem {
    /// Client for interacting with the delivery actor
    pub client: DeliveryClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<DeliveryService>,
}

impl DeliverySystem {
    /// Creates the actor and spawns its event loop.
    pub fn new(config: SystemConfig) -> Self {
        let (actor, client) = crate::delivery_actor::new(&config);
        info!(mailbox_size = config.mailbox_size, "Starting delivery system");
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Gracefully shuts down the system and returns the final service state.
    ///
    /// Dropping our client closes the mailbox once every other clone is gone
    /// too; the actor then drains pending requests and exits its loop.
    pub async fn shutdown(self) -> Result<DeliveryService, String> {
        info!("Shutting down system...");
        drop(self.client);

        match self.handle.await {
            Ok(service) => {
                info!("System shutdown complete.");
                Ok(service)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(format!("Actor task failed: {:?}", e))
            }
        }
    }
}
