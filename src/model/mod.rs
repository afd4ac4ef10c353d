//! Pure data structures for the delivery catalog: restaurants, their dishes and the orders placed with them.

pub mod dish;
pub mod order;
pub mod restaurant;

pub use dish::*;
pub use order::*;
pub use restaurant::*;
