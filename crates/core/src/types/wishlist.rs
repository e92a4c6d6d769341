//! Wishlist domain entities.

use serde::{Deserialize, Serialize};

use crate::types::id::DocumentId;

/// A single entry in a wishlist.
///
/// The payload (product reference plus whatever metadata the storefront
/// attaches) is only understood by the caller; this backend carries it as an
/// opaque attribute bag and never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListItem(serde_json::Value);

impl ListItem {
    /// Wrap an arbitrary JSON value as a list item.
    #[must_use]
    pub const fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Returns the underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consumes the `ListItem` and returns its inner value.
    #[must_use]
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for ListItem {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// A shopper's wishlist.
///
/// Identity is the store-assigned [`DocumentId`]; a list that has never been
/// saved has none. The lookup key is the shopper's email-like identifier,
/// which the store does not enforce as unique - the repository repairs
/// duplicates on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishList {
    /// Store-assigned document id, absent until first save.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<DocumentId>,
    /// Shopper identifier used as the lookup key.
    pub email: String,
    /// Display name of the list.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// Whether the list is visible to other shoppers.
    #[serde(default)]
    pub is_public: bool,
    /// Ordered list entries.
    #[serde(default)]
    pub items: Vec<ListItem>,
}

impl WishList {
    /// Create an empty, unsaved wishlist for a shopper.
    #[must_use]
    pub const fn new(email: String) -> Self {
        Self {
            id: None,
            email,
            name: None,
            is_public: false,
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_list_item_transparent_serde() {
        let item = ListItem::new(json!({"productId": "42", "sku": "42-a"}));
        let encoded = serde_json::to_value(&item).unwrap();
        assert_eq!(encoded, json!({"productId": "42", "sku": "42-a"}));

        let decoded: ListItem = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, item);
    }

    #[test]
    fn test_wishlist_json_shape() {
        let list = WishList {
            id: Some(DocumentId::parse("wl-1").unwrap()),
            email: "a@b.com".to_string(),
            name: Some("My List".to_string()),
            is_public: true,
            items: vec![ListItem::new(json!({"productId": "42"}))],
        };

        let encoded = serde_json::to_value(&list).unwrap();
        assert_eq!(
            encoded,
            json!({
                "id": "wl-1",
                "email": "a@b.com",
                "name": "My List",
                "isPublic": true,
                "items": [{"productId": "42"}],
            })
        );
    }

    #[test]
    fn test_wishlist_defaults_on_decode() {
        let decoded: WishList = serde_json::from_value(json!({"email": "a@b.com"})).unwrap();
        assert_eq!(decoded.email, "a@b.com");
        assert!(decoded.id.is_none());
        assert!(decoded.name.is_none());
        assert!(!decoded.is_public);
        assert!(decoded.items.is_empty());
    }

    #[test]
    fn test_new_is_unsaved_and_private() {
        let list = WishList::new("a@b.com".to_string());
        assert!(list.id.is_none());
        assert!(!list.is_public);
        assert!(list.items.is_empty());
    }
}
