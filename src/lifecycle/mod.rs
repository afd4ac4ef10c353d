//! Startup, wiring and shutdown of the delivery actor, plus tracing setup.

pub mod delivery_system;
pub mod tracing;

pub use delivery_system::*;
