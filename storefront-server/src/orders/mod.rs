//! Order placement

pub mod service;

pub use service::{place_order, validate_order};
