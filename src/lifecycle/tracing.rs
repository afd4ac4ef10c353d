//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter whose
//! level comes from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup and shutdown, with final restaurant and order counts
//! - **State changes** (`info`): categories, restaurants, dishes, orders, ratings, scheduled deliveries
//! - **Rejections** (`warn`): duplicate or unknown entities, discarded ratings
//! - **Queries and payloads** (`debug`)
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=food_delivery::delivery=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` an order flowing through the actor looks like:
//!
//! ```text
//! INFO Actor started
//! INFO Order created order_id=order_1 size=1
//! INFO Deliveries scheduled delivery_time=8 max_distance=5 assigned=1
//! ```

/// Installs the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
