// Item route definitions

use axum::{
    middleware::from_fn_with_state,
    routing::get,
    Router,
};

use crate::api::middleware::auth::auth_middleware;
use crate::config::state::AppState;
use crate::utils::error_handler::not_found_handler;
use super::handler;

/// Creates router with the item endpoints, relative to the `/api` prefix
pub fn item_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(handler::list_items_handler)
                .post(handler::create_item_handler)
                // Only the endpoints registered above are authenticated
                .route_layer(from_fn_with_state(state, auth_middleware))
                // HEAD would otherwise be served by the GET endpoint
                .head(not_found_handler)
                // Other methods on a known path answer like an unknown path
                .fallback(not_found_handler),
        )
}
