//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the provider handle held in the session store.

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build the gateway routes without state applied.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        // Auth
        .route("/auth/login", post(handlers::auth::login))
        // Organizations
        .route("/organizations", get(handlers::organizations::list))
        // Projects
        .route(
            "/organizations/{org_id}/projects",
            get(handlers::projects::list).post(handlers::projects::create),
        )
        // Chats
        .route(
            "/organizations/{org_id}/chats",
            get(handlers::chats::list)
                .post(handlers::chats::create)
                .delete(handlers::chats::delete),
        )
        .route(
            "/organizations/{org_id}/chats/{chat_id}",
            get(handlers::chats::get),
        )
        .route(
            "/organizations/{org_id}/chats/{chat_id}/messages",
            post(handlers::messages::send),
        )
}

/// Create the main router with all gateway routes.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    api_routes()
        .with_state(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}
