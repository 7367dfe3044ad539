//! Order API

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/orders", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    // Placing an order is public; reading the order book is admin only
    let place_routes = Router::new().route("/", axum::routing::post(handler::create));

    let admin_routes = Router::new()
        .route("/", get(handler::list))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    place_routes.merge(admin_routes)
}
