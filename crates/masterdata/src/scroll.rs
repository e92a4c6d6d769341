//! Scroll-based retrieval of the whole wishlist collection.

use serde_json::Value;
use tracing::debug;

use crate::error::MasterdataError;
use crate::store::DocumentStore;

/// Page size requested on every scroll call.
pub const SCROLL_PAGE_SIZE: usize = 200;

/// Fields requested from scrolled documents.
pub const SCROLL_FIELDS: &str = "email,ListItemsWrapper";

/// Fetch every document in the collection, page by page.
///
/// Opens a scroll cursor, then follows the continuation token until the
/// store returns a page shorter than [`SCROLL_PAGE_SIZE`] - including when
/// the very first page is already short. The short page is part of the
/// result; no further call is made after it. The token is a local value
/// threaded through the loop, so concurrent scans cannot interfere.
///
/// The whole collection is materialized in memory.
///
/// # Errors
///
/// Returns an error when any page request fails or returns malformed JSON.
/// No partial result is produced in that case.
pub async fn scan_all<S: DocumentStore>(store: &S) -> Result<Vec<Value>, MasterdataError> {
    let first = store.open_scroll(SCROLL_PAGE_SIZE, SCROLL_FIELDS).await?;
    let mut merged = first.documents;

    if merged.len() >= SCROLL_PAGE_SIZE
        && let Some(token) = first.token
    {
        loop {
            let page = store.continue_scroll(&token).await?;
            let page_len = page.len();
            merged.extend(page);

            if page_len < SCROLL_PAGE_SIZE {
                break;
            }
        }
    }

    debug!(documents = merged.len(), "collection scan complete");
    Ok(merged)
}
