//! Storefront server
//!
//! Menu catalog, order placement and order notifications over a JSON HTTP
//! API backed by SQLite.
//!
//! - [`core`] - config, state, server
//! - [`api`] - axum routes and handlers
//! - [`db`] - pool, migrations, repositories
//! - [`orders`] - order submission pipeline
//! - [`notify`] - order notification relay
//! - [`auth`] - admin credentials and tokens
//! - [`utils`] - logging, validation

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod notify;
pub mod orders;
pub mod utils;

pub use crate::core::{Config, Server, ServerError, ServerState};
