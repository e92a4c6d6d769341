//! Schema verification and reconciliation.
//!
//! Every repository operation calls [`ensure_schema`] first: reads are only
//! meaningful against a collection whose declared schema matches the one
//! this build was compiled with. When the remote schema drifts, the expected
//! definition is pushed back wholesale - no partial merge.

use std::sync::LazyLock;

use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::store::DocumentStore;

/// The schema the wishlist data entity must declare.
///
/// Compared structurally against the remote document, so formatting and
/// field order on the remote side do not matter.
static EXPECTED_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "name": "wishlist",
        "properties": {
            "email": {
                "type": "string",
                "title": "Email"
            },
            "ListItemsWrapper": {
                "type": "array",
                "title": "List Items"
            }
        },
        "v-indexed": ["email"],
        "v-immediate-indexing": true,
        "v-cache": false
    })
});

/// The schema definition this build expects the store to declare.
#[must_use]
pub fn expected_schema() -> &'static Value {
    &EXPECTED_SCHEMA
}

/// Outcome of a schema check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaState {
    /// The remote schema already matches the expected definition.
    Verified,
    /// The remote schema differed (or was absent) and has been overwritten.
    Reconciled,
    /// The schema could not be read or written; the caller proceeds
    /// optimistically.
    Unreachable,
}

/// Verify the remote schema, overwriting it when it differs.
///
/// Idempotent and safe to call before every operation: once reconciled, the
/// next call observes equality and performs no write. Failures never
/// propagate - an unreachable schema endpoint degrades to
/// [`SchemaState::Unreachable`] and the operation continues.
pub async fn ensure_schema<S: DocumentStore>(store: &S) -> SchemaState {
    let current = match store.get_schema().await {
        Ok(current) => current,
        Err(err) => {
            warn!(error = %err, "schema check failed, proceeding without verification");
            return SchemaState::Unreachable;
        }
    };

    if current.as_ref() == Some(expected_schema()) {
        debug!("schema verified");
        return SchemaState::Verified;
    }

    match store.put_schema(expected_schema()).await {
        Ok(()) => {
            debug!("schema reconciled");
            SchemaState::Reconciled
        }
        Err(err) => {
            warn!(error = %err, "schema overwrite failed, proceeding without verification");
            SchemaState::Unreachable
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::MockStore;

    #[tokio::test]
    async fn test_matching_schema_is_verified_without_write() {
        let store = MockStore::new();
        store.set_schema(expected_schema().clone());

        assert_eq!(ensure_schema(&store).await, SchemaState::Verified);
        assert_eq!(store.count_calls("put_schema"), 0);
    }

    #[tokio::test]
    async fn test_drifted_schema_is_overwritten() {
        let store = MockStore::new();
        store.set_schema(json!({"name": "wishlist", "properties": {}}));

        assert_eq!(ensure_schema(&store).await, SchemaState::Reconciled);
        assert_eq!(store.count_calls("put_schema"), 1);
        assert_eq!(store.schema(), Some(expected_schema().clone()));
    }

    #[tokio::test]
    async fn test_absent_schema_is_pushed() {
        let store = MockStore::new();

        assert_eq!(ensure_schema(&store).await, SchemaState::Reconciled);
        assert_eq!(store.schema(), Some(expected_schema().clone()));
    }

    #[tokio::test]
    async fn test_second_call_performs_no_second_write() {
        let store = MockStore::new();

        assert_eq!(ensure_schema(&store).await, SchemaState::Reconciled);
        assert_eq!(ensure_schema(&store).await, SchemaState::Verified);
        assert_eq!(store.count_calls("put_schema"), 1);
    }

    #[tokio::test]
    async fn test_unreachable_store_degrades_silently() {
        let store = MockStore::new().with_failing_schema_fetch();

        assert_eq!(ensure_schema(&store).await, SchemaState::Unreachable);
        assert_eq!(store.count_calls("put_schema"), 0);
    }

    #[test]
    fn test_expected_schema_indexes_the_owner_key() {
        assert_eq!(expected_schema()["v-indexed"], json!(["email"]));
    }
}
