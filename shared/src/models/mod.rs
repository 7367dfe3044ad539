//! Data models
//!
//! Shared between the server, the client and any frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` snowflakes; all timestamps are UTC milliseconds.
//! Money amounts are whole so'm (`i64`).

pub mod amount;
pub mod auth;
pub mod category;
pub mod food_item;
pub mod order;

// Re-exports
pub use auth::*;
pub use category::*;
pub use food_item::*;
pub use order::*;
