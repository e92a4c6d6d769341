//! The document-store capability consumed by the repository.

use serde_json::Value;

use wishlist_core::DocumentId;

use crate::error::MasterdataError;

/// Opaque continuation token for a collection scroll.
///
/// Issued by the store on the opening scroll call and consumed by every
/// continuation call. The token lives for one scan - it is threaded through
/// the scan loop as a value, never stored on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollToken(String);

impl ScrollToken {
    /// Wrap a token returned by the store.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The opening page of a collection scroll.
#[derive(Debug)]
pub struct ScrollPage {
    /// Documents in this page, in store order.
    pub documents: Vec<Value>,
    /// Continuation token, absent when the store did not issue one.
    pub token: Option<ScrollToken>,
}

/// Typed calls against one Masterdata data-entity/schema pair.
///
/// [`MasterdataClient`](crate::MasterdataClient) implements this over HTTP;
/// tests substitute an in-memory store. Each implementation is bound to a
/// single collection and schema, so the calls carry no entity parameters.
#[allow(async_fn_in_trait)]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document by id. `Ok(None)` when the store has no such document.
    async fn get_document(&self, id: &DocumentId) -> Result<Option<Value>, MasterdataError>;

    /// Upsert a document. The body carries an `id` field when updating and
    /// omits it when creating.
    async fn patch_document(&self, body: &Value) -> Result<(), MasterdataError>;

    /// Delete a document by id.
    async fn delete_document(&self, id: &DocumentId) -> Result<(), MasterdataError>;

    /// Search documents by owner email. Bounded result set, no pagination
    /// guarantee.
    async fn search(&self, email: &str, fields: &str) -> Result<Vec<Value>, MasterdataError>;

    /// Open a collection scroll, returning the first page and a continuation
    /// token.
    async fn open_scroll(&self, size: usize, fields: &str) -> Result<ScrollPage, MasterdataError>;

    /// Fetch the next scroll page for a previously issued token.
    async fn continue_scroll(&self, token: &ScrollToken) -> Result<Vec<Value>, MasterdataError>;

    /// Fetch the collection's declared schema. `Ok(None)` when none is
    /// registered.
    async fn get_schema(&self) -> Result<Option<Value>, MasterdataError>;

    /// Replace the collection's schema. Full overwrite, no merge.
    async fn put_schema(&self, schema: &Value) -> Result<(), MasterdataError>;
}
