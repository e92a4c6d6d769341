//! HTTP client for the Masterdata v2 API.

use std::sync::Arc;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use wishlist_core::DocumentId;

use crate::config::MasterdataConfig;
use crate::error::MasterdataError;
use crate::store::{DocumentStore, ScrollPage, ScrollToken};

/// Bearer credential header.
const HEADER_AUTHORIZATION: &str = "Authorization";
/// Id-cookie variant of the credential.
const HEADER_VTEX_ID_COOKIE: &str = "VtexIdclientAutCookie";
/// Proxy-authorization variant of the credential.
const HEADER_PROXY_AUTHORIZATION: &str = "Proxy-Authorization";
/// Tenant-routing header.
const HEADER_VTEX_ACCOUNT: &str = "X-Vtex-Account";
/// Response header carrying the scroll continuation token.
const HEADER_SCROLL_TOKEN: &str = "X-VTEX-MD-TOKEN";

/// An opaque platform credential.
///
/// Propagated from the caller's inbound request; this crate never mints or
/// refreshes credentials, it only attaches them to outgoing calls.
#[derive(Clone)]
pub struct Credential(SecretString);

impl Credential {
    /// Wrap a credential value taken from an inbound request.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}

/// Masterdata API client for one tenant and one data entity.
///
/// Cheap to construct per request: the underlying `reqwest::Client` is
/// shared, only the tenant routing and credential differ between instances.
#[derive(Clone)]
pub struct MasterdataClient {
    inner: Arc<MasterdataClientInner>,
}

struct MasterdataClientInner {
    http: reqwest::Client,
    base_url: String,
    account: String,
    schema_name: String,
    credential: Credential,
}

impl MasterdataClient {
    /// Create a client routing to `account` on the configured environment.
    #[must_use]
    pub fn new(
        http: reqwest::Client,
        config: &MasterdataConfig,
        account: &str,
        credential: Credential,
    ) -> Self {
        let base_url = format!(
            "https://{account}.{environment}/api/dataentities/{entity}",
            environment = config.environment,
            entity = config.data_entity,
        );

        Self {
            inner: Arc::new(MasterdataClientInner {
                http,
                base_url,
                account: account.to_string(),
                schema_name: config.schema_name.clone(),
                credential,
            }),
        }
    }

    /// Get the tenant account this client routes to.
    #[must_use]
    pub fn account(&self) -> &str {
        &self.inner.account
    }

    /// Attach the tenant and credential headers every Masterdata call requires.
    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self.inner.credential.expose();
        builder
            .header(HEADER_AUTHORIZATION, token)
            .header(HEADER_VTEX_ID_COOKIE, token)
            .header(HEADER_PROXY_AUTHORIZATION, token)
            .header(HEADER_VTEX_ACCOUNT, &self.inner.account)
    }

    /// Map non-success statuses to typed errors.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, MasterdataError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(MasterdataError::Unauthorized);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(MasterdataError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Parse a checked response body as JSON.
    async fn parse_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, MasterdataError> {
        response
            .json()
            .await
            .map_err(|e| MasterdataError::Parse(format!("Failed to parse response: {e}")))
    }
}

impl DocumentStore for MasterdataClient {
    async fn get_document(&self, id: &DocumentId) -> Result<Option<Value>, MasterdataError> {
        let url = format!("{}/documents/{id}", self.inner.base_url);
        let response = self
            .authed(self.inner.http.get(&url))
            .header("Cache-Control", "no-cache")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::check(response).await?;
        Ok(Some(Self::parse_json(response).await?))
    }

    async fn patch_document(&self, body: &Value) -> Result<(), MasterdataError> {
        let url = format!("{}/documents", self.inner.base_url);
        let response = self
            .authed(self.inner.http.patch(&url))
            .json(body)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn delete_document(&self, id: &DocumentId) -> Result<(), MasterdataError> {
        let url = format!("{}/documents/{id}", self.inner.base_url);
        let response = self.authed(self.inner.http.delete(&url)).send().await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn search(&self, email: &str, fields: &str) -> Result<Vec<Value>, MasterdataError> {
        let url = format!(
            "{}/search?_fields={fields}&_schema={schema}&email={email}",
            self.inner.base_url,
            schema = self.inner.schema_name,
            email = urlencoding::encode(email),
        );
        let response = self
            .authed(self.inner.http.get(&url))
            .header("Cache-Control", "no-cache")
            .send()
            .await?;

        let response = Self::check(response).await?;
        Self::parse_json(response).await
    }

    async fn open_scroll(&self, size: usize, fields: &str) -> Result<ScrollPage, MasterdataError> {
        let url = format!(
            "{}/scroll?_size={size}&_fields={fields}",
            self.inner.base_url
        );
        let response = self
            .authed(self.inner.http.get(&url))
            .header("Cache-Control", "no-cache")
            .send()
            .await?;

        let response = Self::check(response).await?;
        let token = response
            .headers()
            .get(HEADER_SCROLL_TOKEN)
            .and_then(|v| v.to_str().ok())
            .map(ScrollToken::new);

        let documents = Self::parse_json(response).await?;
        Ok(ScrollPage { documents, token })
    }

    async fn continue_scroll(&self, token: &ScrollToken) -> Result<Vec<Value>, MasterdataError> {
        let url = format!(
            "{}/scroll?_token={token}",
            self.inner.base_url,
            token = token.as_str(),
        );
        let response = self
            .authed(self.inner.http.get(&url))
            .header("Cache-Control", "no-cache")
            .send()
            .await?;

        let response = Self::check(response).await?;
        Self::parse_json(response).await
    }

    async fn get_schema(&self) -> Result<Option<Value>, MasterdataError> {
        let url = format!("{}/schemas/{}", self.inner.base_url, self.inner.schema_name);
        let response = self.authed(self.inner.http.get(&url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::check(response).await?;
        Ok(Some(Self::parse_json(response).await?))
    }

    async fn put_schema(&self, schema: &Value) -> Result<(), MasterdataError> {
        let url = format!("{}/schemas/{}", self.inner.base_url, self.inner.schema_name);
        let response = self
            .authed(self.inner.http.put(&url))
            .json(schema)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}

impl std::fmt::Debug for MasterdataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterdataClient")
            .field("base_url", &self.inner.base_url)
            .field("account", &self.inner.account)
            .finish_non_exhaustive()
    }
}
