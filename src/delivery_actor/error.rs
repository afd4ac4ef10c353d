//! Transport errors between [`DeliveryClient`](crate::clients::DeliveryClient) and the actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActorError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
