//! Wishlist service - HTTP surface over the Masterdata repository.
//!
//! Exposes the four repository operations as JSON routes. The tenant account
//! and the platform credential are taken from each inbound request and
//! threaded into a per-request Masterdata client; this binary holds no
//! credentials of its own.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod middleware;
mod routes;
mod state;

use config::ServiceConfig;
use state::AppState;

#[tokio::main]
async fn main() {
    let config = ServiceConfig::from_env().expect("Failed to load configuration");

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wishlist_service=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.socket_addr();
    let state = AppState::new(config);

    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!("Wishlist service listening on {addr}");

    axum::serve(listener, app)
        .await
        .expect("Server exited with an error");
}
