//! Shared types for the storefront
//!
//! Models, error codes, the client-side cart, text resources and money
//! formatting used by both the server and the client.

pub mod cart;
pub mod error;
pub mod i18n;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use cart::{Cart, CartAction, CartLine, CheckoutForm};
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use i18n::{Lang, Localized};
