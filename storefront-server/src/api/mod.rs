//! HTTP API
//!
//! | prefix | module |
//! |--------|--------|
//! | `/health` | [`health`] |
//! | `/api/auth` | [`auth`] |
//! | `/api/categories` | [`categories`] |
//! | `/api/food-items` | [`food_items`] |
//! | `/api/orders` | [`orders`] |

pub mod auth;
pub mod categories;
pub mod extract;
pub mod food_items;
pub mod health;
pub mod orders;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// All routes, admin routes already wrapped in [`crate::auth::require_admin`]
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(categories::router(state))
        .merge(food_items::router(state))
        .merge(orders::router(state))
}

/// Fully configured application, used by the server and by in-process tests
pub fn build_app(state: ServerState) -> Router {
    build_router(&state)
        // CORS - storefront and admin pages are served from other origins
        .layer(CorsLayer::permissive())
        // Trace - request spans at INFO
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
