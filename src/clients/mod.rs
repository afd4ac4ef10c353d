//! Type-safe wrappers around the delivery actor's mailbox.

pub mod delivery_client;

pub use delivery_client::*;
