// Start of file: /src/api/mod.rs

/*
    * HTTP surface of the service: routes, handlers and request middleware.
*/

pub mod items;
pub mod middleware;
pub mod response;

use axum::Router;

use crate::config::state::AppState;
use items::routes::item_routes;

/// Path prefix every API route is grouped under
pub const API_PREFIX: &str = "/api";

/// Builds the `/api` group. Each route group authenticates its own endpoints
/// so unregistered methods and paths still fall through to a plain 404.
pub fn api_routes(state: AppState) -> Router<AppState> {
    let group: Router<AppState> = Router::new()
        // Add new route groups here
        .merge(item_routes(state));

    Router::new().nest(API_PREFIX, group)
}

// End of file: /src/api/mod.rs
