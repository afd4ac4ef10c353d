//! Runtime configuration for the delivery system.
//!
//! Logging is configured separately through `RUST_LOG`, see
//! [`setup_tracing`](crate::lifecycle::tracing::setup_tracing).

use serde::Deserialize;
use tracing::warn;

/// Environment variable overriding [`SystemConfig::mailbox_size`].
pub const MAILBOX_SIZE_ENV: &str = "DELIVERY_MAILBOX_SIZE";

const DEFAULT_MAILBOX_SIZE: usize = 32;

fn default_mailbox_size() -> usize {
    DEFAULT_MAILBOX_SIZE
}

/// Can be read from the environment with [`SystemConfig::from_env`] or
/// deserialized as a section of a caller's own configuration file; missing
/// fields take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemConfig {
    /// Capacity of the delivery actor's mailbox. Senders wait when it is full.
    #[serde(default = "default_mailbox_size")]
    pub mailbox_size: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mailbox_size: DEFAULT_MAILBOX_SIZE,
        }
    }
}

impl SystemConfig {
    /// Reads the configuration from the environment, keeping defaults for
    /// anything missing or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(MAILBOX_SIZE_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.mailbox_size = size,
                _ => warn!(value = %raw, fallback = config.mailbox_size, "Invalid DELIVERY_MAILBOX_SIZE, using default"),
            }
        }
        config
    }
}
