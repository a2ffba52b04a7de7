pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ads::handlers;
use crate::state::AppState;
use crate::wall::handlers as wall;

/// Sponsor artwork can be a few megabytes; axum's default cap is 2 MiB.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Public wall
        .route("/api/v1/wall", get(wall::handle_current_wall))
        .route("/api/v1/wall/:year", get(wall::handle_year_wall))
        .route("/api/v1/years", get(wall::handle_years))
        // Ad administration (admin token required)
        .route(
            "/api/v1/ads",
            get(handlers::handle_list_ads).post(handlers::handle_create_ad),
        )
        .route(
            "/api/v1/ads/:id",
            get(handlers::handle_get_ad)
                .put(handlers::handle_update_ad)
                .delete(handlers::handle_delete_ad),
        )
        .route("/api/v1/ads/:id/clone", post(handlers::handle_clone_ad))
        .route(
            "/api/v1/uploads",
            post(handlers::handle_upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .with_state(state)
}
