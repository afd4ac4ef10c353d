//! # Food Delivery
//!
//! An in-memory catalog and order service for a food-delivery platform:
//! categories, restaurants, dishes, orders and restaurant ratings, plus the
//! queries built on them (price ranges, rankings, orders per category).
//!
//! ## Architecture Notes
//!
//! ### 1. A plain facade
//! [`DeliveryService`](delivery::DeliveryService) owns every collection and is
//! driven through ordinary `&mut self` calls. Restaurants live in a sorted map
//! keyed by name; dishes and orders refer to their restaurant by that name.
//!
//! ### 2. Two error policies
//! Registration that would break uniqueness or point at something missing
//! fails with a [`DeliveryError`](delivery::DeliveryError). Queries about
//! unknown entities return empty results, and out-of-range ratings are dropped.
//!
//! ### 3. Concurrency Model
//! When several tasks share the service, it runs inside a
//! [`DeliveryActor`](delivery_actor::DeliveryActor). Requests are processed
//! sequentially from one mailbox, so the order id counter and the collections
//! never need a lock. Callers hold a cloneable
//! [`DeliveryClient`](clients::DeliveryClient).
//!
//! ### 4. Observability
//! Everything logs through `tracing`. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: restaurants, dishes and orders
//! - [`delivery`]: the facade and its operations
//! - [`delivery_actor`]: the actor, its request messages and transport errors
//! - [`clients`]: the async client
//! - [`lifecycle`]: [`DeliverySystem`](lifecycle::DeliverySystem) startup and shutdown, tracing setup
//! - [`config`]: [`SystemConfig`](config::SystemConfig)
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod delivery;
pub mod delivery_actor;
pub mod lifecycle;
pub mod model;
