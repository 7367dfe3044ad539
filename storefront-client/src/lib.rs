//! Storefront client
//!
//! HTTP client for the storefront API plus the checkout flow that owns the
//! cart while an order is submitted.

pub mod checkout;
pub mod config;
pub mod error;
pub mod http;

pub use checkout::submit_order;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::cart::{Cart, CheckoutForm};
pub use shared::models::{FoodItemQuery, LoginResponse, Order};
