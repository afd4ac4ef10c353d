//! Actor wrapper that serializes access to the [`DeliveryService`](crate::delivery::DeliveryService).

mod actor;
pub mod error;
pub mod request;

pub use actor::*;
pub use error::*;
pub use request::*;

use crate::clients::DeliveryClient;
use crate::config::SystemConfig;

/// Creates a new delivery actor and its client from the system configuration.
pub fn new(config: &SystemConfig) -> (DeliveryActor, DeliveryClient) {
    DeliveryActor::new(config.mailbox_size)
}
