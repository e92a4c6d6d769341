//! Wishlist repository: the domain operations over a document store.

use tracing::{instrument, warn};

use wishlist_core::{DocumentId, WishList};

use crate::error::WishlistError;
use crate::schema::ensure_schema;
use crate::scroll::scan_all;
use crate::store::DocumentStore;
use crate::wire::WishListDocument;

/// Fields requested when searching by owner.
const SEARCH_FIELDS: &str = "id,email,ListItemsWrapper";

/// Wishlist persistence built on a [`DocumentStore`].
///
/// Every operation first verifies the remote schema (a cheap, idempotent
/// round trip) and then issues the store calls it needs. Nothing here
/// retries; a failed call surfaces as a typed error and the caller decides.
#[derive(Debug, Clone)]
pub struct WishlistRepository<S> {
    store: S,
}

impl<S: DocumentStore> WishlistRepository<S> {
    /// Create a repository over a document store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Persist a wishlist, creating it when it has no id yet.
    ///
    /// The stored document is replaced wholesale - items and metadata both.
    /// The store assigns the id on first save; fetch the list back to learn
    /// it.
    ///
    /// # Errors
    ///
    /// Returns an error when the upsert call fails or the list cannot be
    /// encoded.
    #[instrument(skip(self, list), fields(shopper = %list.email))]
    pub async fn save(&self, list: &WishList) -> Result<(), WishlistError> {
        ensure_schema(&self.store).await;

        let body = serde_json::to_value(WishListDocument::from(list))
            .map_err(|e| WishlistError::Decode(e.to_string()))?;
        self.store.patch_document(&body).await?;

        Ok(())
    }

    /// Fetch the wishlist owned by `shopper`.
    ///
    /// An empty shopper id short-circuits to `Ok(None)` without touching the
    /// store. When the search returns several documents for the same owner,
    /// the first is canonical and every other one is deleted as a repair
    /// side effect; a failed repair delete is logged and does not fail the
    /// fetch.
    ///
    /// # Errors
    ///
    /// Returns an error when the search call fails or the canonical document
    /// cannot be decoded.
    #[instrument(skip(self))]
    pub async fn fetch_by_owner(&self, shopper: &str) -> Result<Option<WishList>, WishlistError> {
        if shopper.is_empty() {
            warn!("empty shopper id, returning no wishlist");
            return Ok(None);
        }

        ensure_schema(&self.store).await;

        let results = self.store.search(shopper, SEARCH_FIELDS).await?;
        let mut results = results.into_iter();

        let Some(canonical) = results.next() else {
            return Ok(None);
        };
        let canonical = WishListDocument::from_value(canonical)?;

        for duplicate in results {
            match WishListDocument::from_value(duplicate) {
                Ok(doc) => {
                    let Some(id) = doc.id else { continue };
                    if let Err(err) = self.store.delete_document(&id).await {
                        warn!(%id, error = %err, "failed to delete duplicate wishlist");
                    }
                }
                Err(err) => {
                    warn!(error = %err, "skipping undecodable duplicate wishlist");
                }
            }
        }

        Ok(Some(canonical.into()))
    }

    /// Delete a wishlist by document id.
    ///
    /// # Errors
    ///
    /// Returns an error when the delete call fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &DocumentId) -> Result<(), WishlistError> {
        ensure_schema(&self.store).await;

        self.store.delete_document(id).await?;
        Ok(())
    }

    /// Fetch every wishlist in the collection.
    ///
    /// Drives a full scroll of the collection and decodes each element.
    /// Elements that do not decode as wishlist documents are skipped and
    /// logged rather than failing the whole fetch.
    ///
    /// # Errors
    ///
    /// Returns an error when a scroll page cannot be retrieved.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<WishList>, WishlistError> {
        ensure_schema(&self.store).await;

        let elements = scan_all(&self.store).await?;
        let mut lists = Vec::with_capacity(elements.len());

        for element in elements {
            match WishListDocument::from_value(element) {
                Ok(doc) => lists.push(doc.into()),
                Err(err) => warn!(error = %err, "skipping undecodable wishlist document"),
            }
        }

        Ok(lists)
    }
}
