//! Server services

pub mod cart_events;

pub use cart_events::{CartBadge, CartEvents};
