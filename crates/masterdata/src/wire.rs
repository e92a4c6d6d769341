//! Wire shapes of the wishlist data entity.
//!
//! The remote schema pins the document layout, so every field name here is
//! part of the external contract and renamed explicitly rather than derived
//! from the Rust field names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use wishlist_core::{DocumentId, ListItem, WishList};

use crate::error::WishlistError;

/// A wishlist document as stored in the data entity.
///
/// The items and their metadata live in a single-element
/// [`ListItemsWrapper`] array; decoding takes element 0 and ignores the
/// rest, matching what the storefront has always written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishListDocument {
    /// Store-assigned id, omitted when creating.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<DocumentId>,
    /// Owner lookup key.
    #[serde(default)]
    pub email: String,
    /// Item collection and list metadata.
    #[serde(rename = "ListItemsWrapper", default)]
    pub list_items_wrapper: Vec<ListItemsWrapper>,
}

/// Items plus list metadata inside a [`WishListDocument`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListItemsWrapper {
    /// Ordered list entries.
    #[serde(rename = "ListItems", default)]
    pub list_items: Vec<ListItem>,
    /// Visibility flag, absent on legacy documents.
    #[serde(rename = "IsPublic", skip_serializing_if = "Option::is_none", default)]
    pub is_public: Option<bool>,
    /// Display name, absent on legacy documents.
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
}

impl WishListDocument {
    /// Decode a raw search/scroll element into a document.
    ///
    /// # Errors
    ///
    /// Returns [`WishlistError::Decode`] when the element does not have the
    /// document shape.
    pub fn from_value(value: Value) -> Result<Self, WishlistError> {
        serde_json::from_value(value).map_err(|e| WishlistError::Decode(e.to_string()))
    }
}

impl From<&WishList> for WishListDocument {
    fn from(list: &WishList) -> Self {
        Self {
            id: list.id.clone(),
            email: list.email.clone(),
            list_items_wrapper: vec![ListItemsWrapper {
                list_items: list.items.clone(),
                is_public: Some(list.is_public),
                name: list.name.clone(),
            }],
        }
    }
}

impl From<WishListDocument> for WishList {
    fn from(doc: WishListDocument) -> Self {
        let wrapper = doc
            .list_items_wrapper
            .into_iter()
            .next()
            .unwrap_or_default();

        Self {
            id: doc.id,
            email: doc.email,
            name: wrapper.name,
            is_public: wrapper.is_public.unwrap_or(false),
            items: wrapper.list_items,
        }
    }
}
