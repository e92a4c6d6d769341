//! Credential and tenant extraction from inbound requests.
//!
//! The platform fronts this service and attaches the shopper's credential
//! and the target account to every request it forwards. This service never
//! mints credentials; it only propagates what arrived.

use axum::{extract::FromRequestParts, http::request::Parts};

use wishlist_masterdata::Credential;

use crate::error::ApiError;

/// Inbound header carrying the opaque platform credential.
const HEADER_VTEX_ID_COOKIE: &str = "VtexIdclientAutCookie";
/// Inbound header naming the tenant account the request targets.
const HEADER_VTEX_ACCOUNT: &str = "X-Vtex-Account";

/// Extractor for the store routing context of a request.
///
/// Rejects with 401 when the credential header is missing; the account
/// header is optional and falls back to the configured default tenant.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(ctx: StoreContext) -> impl IntoResponse {
///     // ctx.credential is attached to every outbound Masterdata call
/// }
/// ```
pub struct StoreContext {
    /// Tenant account from the inbound request, if present.
    pub account: Option<String>,
    /// Opaque credential propagated to the document store.
    pub credential: Credential,
}

impl<S> FromRequestParts<S> for StoreContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let credential = parts
            .headers
            .get(HEADER_VTEX_ID_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(Credential::new)
            .ok_or_else(|| {
                ApiError::Unauthorized("missing platform credential".to_string())
            })?;

        let account = parts
            .headers
            .get(HEADER_VTEX_ACCOUNT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        Ok(Self {
            account,
            credential,
        })
    }
}
