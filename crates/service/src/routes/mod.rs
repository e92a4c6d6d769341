//! Route definitions.

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod wishlist;

/// Build the service router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/wishlists", get(wishlist::fetch_all))
        .route("/api/wishlist", post(wishlist::save))
        .route(
            "/api/wishlist/{key}",
            get(wishlist::fetch_by_owner).delete(wishlist::remove),
        )
}

/// Liveness probe.
async fn health() -> &'static str {
    "ok"
}
