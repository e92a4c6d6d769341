//! In-memory document store used by the unit tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::{Value, json};

use wishlist_core::DocumentId;

use crate::error::MasterdataError;
use crate::store::{DocumentStore, ScrollPage, ScrollToken};

/// Scripted [`DocumentStore`] recording every call it receives.
///
/// Documents live in an in-memory collection so save/search/delete behave
/// like a tiny store; scroll pages are scripted up front.
pub(crate) struct MockStore {
    calls: Mutex<Vec<&'static str>>,
    documents: Mutex<Vec<Value>>,
    schema: Mutex<Option<Value>>,
    scroll_pages: Mutex<VecDeque<Vec<Value>>>,
    next_id: Mutex<u32>,
    emit_scroll_token: bool,
    fail_schema_fetch: bool,
    fail_continue_scroll: bool,
}

impl MockStore {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            documents: Mutex::new(Vec::new()),
            schema: Mutex::new(None),
            scroll_pages: Mutex::new(VecDeque::new()),
            next_id: Mutex::new(1),
            emit_scroll_token: true,
            fail_schema_fetch: false,
            fail_continue_scroll: false,
        }
    }

    pub(crate) fn with_scroll_pages(self, pages: Vec<Vec<Value>>) -> Self {
        *self.scroll_pages.lock().unwrap() = pages.into();
        self
    }

    pub(crate) const fn without_scroll_token(mut self) -> Self {
        self.emit_scroll_token = false;
        self
    }

    pub(crate) const fn with_failing_schema_fetch(mut self) -> Self {
        self.fail_schema_fetch = true;
        self
    }

    pub(crate) const fn with_failing_continue_scroll(mut self) -> Self {
        self.fail_continue_scroll = true;
        self
    }

    pub(crate) fn set_schema(&self, schema: Value) {
        *self.schema.lock().unwrap() = Some(schema);
    }

    pub(crate) fn schema(&self) -> Option<Value> {
        self.schema.lock().unwrap().clone()
    }

    pub(crate) fn insert_document(&self, document: Value) {
        self.documents.lock().unwrap().push(document);
    }

    pub(crate) fn document_count(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub(crate) fn count_calls(&self, name: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == name).count()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }

    fn next_page(&self) -> Vec<Value> {
        self.scroll_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default()
    }

    fn unavailable() -> MasterdataError {
        MasterdataError::Api {
            status: 503,
            message: "store unavailable".to_string(),
        }
    }
}

impl DocumentStore for MockStore {
    async fn get_document(&self, id: &DocumentId) -> Result<Option<Value>, MasterdataError> {
        self.record("get_document");
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .find(|d| d["id"] == json!(id.as_str()))
            .cloned())
    }

    async fn patch_document(&self, body: &Value) -> Result<(), MasterdataError> {
        self.record("patch_document");
        let mut documents = self.documents.lock().unwrap();

        if let Some(id) = body.get("id").filter(|id| !id.is_null())
            && let Some(existing) = documents.iter_mut().find(|d| &d["id"] == id)
        {
            *existing = body.clone();
            return Ok(());
        }

        let mut next_id = self.next_id.lock().unwrap();
        let mut created = body.clone();
        created["id"] = json!(format!("wl-{}", *next_id));
        *next_id += 1;
        documents.push(created);
        Ok(())
    }

    async fn delete_document(&self, id: &DocumentId) -> Result<(), MasterdataError> {
        self.record("delete_document");
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        documents.retain(|d| d["id"] != json!(id.as_str()));

        if documents.len() == before {
            return Err(MasterdataError::Api {
                status: 404,
                message: "document not found".to_string(),
            });
        }
        Ok(())
    }

    async fn search(&self, email: &str, _fields: &str) -> Result<Vec<Value>, MasterdataError> {
        self.record("search");
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .filter(|d| d["email"] == json!(email))
            .cloned()
            .collect())
    }

    async fn open_scroll(
        &self,
        _size: usize,
        _fields: &str,
    ) -> Result<ScrollPage, MasterdataError> {
        self.record("open_scroll");
        let token = self
            .emit_scroll_token
            .then(|| ScrollToken::new("scroll-token-1"));
        Ok(ScrollPage {
            documents: self.next_page(),
            token,
        })
    }

    async fn continue_scroll(&self, _token: &ScrollToken) -> Result<Vec<Value>, MasterdataError> {
        self.record("continue_scroll");
        if self.fail_continue_scroll {
            return Err(Self::unavailable());
        }
        Ok(self.next_page())
    }

    async fn get_schema(&self) -> Result<Option<Value>, MasterdataError> {
        self.record("get_schema");
        if self.fail_schema_fetch {
            return Err(Self::unavailable());
        }
        Ok(self.schema())
    }

    async fn put_schema(&self, schema: &Value) -> Result<(), MasterdataError> {
        self.record("put_schema");
        *self.schema.lock().unwrap() = Some(schema.clone());
        Ok(())
    }
}

/// A scroll page of `count` minimal documents starting at shopper `start`.
pub(crate) fn document_page(start: usize, count: usize) -> Vec<Value> {
    (start..start + count)
        .map(|i| json!({"email": format!("shopper{i}@example.com"), "ListItemsWrapper": []}))
        .collect()
}

/// A stored wishlist document with one wrapper element.
pub(crate) fn wishlist_document(id: &str, email: &str, product_ids: &[&str]) -> Value {
    let items: Vec<Value> = product_ids
        .iter()
        .map(|p| json!({"productId": p}))
        .collect();
    json!({
        "id": id,
        "email": email,
        "ListItemsWrapper": [{"ListItems": items, "IsPublic": false, "Name": null}],
    })
}
