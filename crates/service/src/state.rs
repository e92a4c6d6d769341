//! Application state shared across handlers.

use std::sync::Arc;

use wishlist_masterdata::{Credential, MasterdataClient, WishlistRepository};

use crate::config::ServiceConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The `reqwest::Client` is the
/// only long-lived resource; repositories are built per request because the
/// credential and tenant routing come from the inbound headers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServiceConfig,
    http: reqwest::Client,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                http: reqwest::Client::new(),
            }),
        }
    }

    /// Build a repository routed to `account` (or the configured default)
    /// carrying the caller's credential.
    #[must_use]
    pub fn repository(
        &self,
        account: Option<&str>,
        credential: Credential,
    ) -> WishlistRepository<MasterdataClient> {
        let account = account.unwrap_or(&self.inner.config.masterdata.account);
        let client = MasterdataClient::new(
            self.inner.http.clone(),
            &self.inner.config.masterdata,
            account,
            credential,
        );
        WishlistRepository::new(client)
    }
}
