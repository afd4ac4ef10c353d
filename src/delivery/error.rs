//! Error types for the delivery service.

use thiserror::Error;

use crate::delivery_actor::ActorError;

/// Errors that can occur during catalog and order operations.
///
/// Queries on unknown entities and out-of-range ratings never produce an
/// error; they return empty results or are discarded.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeliveryError {
    /// The category is already registered.
    #[error("Category already present: {0}")]
    DuplicateCategory(String),

    /// The referenced category was never registered.
    #[error("Category not present: {0}")]
    UnknownCategory(String),

    /// The referenced restaurant does not exist.
    #[error("Restaurant not found: {0}")]
    UnknownRestaurant(String),

    /// The restaurant already sells a dish with this name.
    #[error("Dish {dish} already present in {restaurant}")]
    DuplicateDish { restaurant: String, dish: String },

    /// A ranking was requested but no restaurant is registered.
    #[error("No restaurants registered")]
    NoRestaurants,

    /// An error occurred while communicating with the delivery actor.
    #[error("Actor communication error: {0}")]
    ActorCommunication(#[from] ActorError),
}
