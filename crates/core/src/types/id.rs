//! Document identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`DocumentId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum DocumentIdError {
    /// The input string is empty.
    #[error("document id cannot be empty")]
    Empty,
}

/// The identifier of a wishlist document in the remote store.
///
/// Ids are assigned by the store on first save; a wishlist that has never
/// been persisted has no id. The value is opaque - this type only rejects
/// empty strings, which the store would route to the wrong endpoint.
///
/// ## Examples
///
/// ```
/// use wishlist_core::DocumentId;
///
/// assert!(DocumentId::parse("9b1ed763-97e0-11ec-835d-0ac29d452d44").is_ok());
/// assert!(DocumentId::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Parse a `DocumentId` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentIdError::Empty`] if the input is empty.
    pub fn parse(s: &str) -> Result<Self, DocumentIdError> {
        if s.is_empty() {
            return Err(DocumentIdError::Empty);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `DocumentId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DocumentId {
    type Err = DocumentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id = DocumentId::parse("abc-123").unwrap();
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(DocumentId::parse(""), Err(DocumentIdError::Empty)));
    }

    #[test]
    fn test_display() {
        let id = DocumentId::parse("abc-123").unwrap();
        assert_eq!(format!("{id}"), "abc-123");
    }

    #[test]
    fn test_from_str() {
        let id: DocumentId = "abc-123".parse().unwrap();
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn test_serde_transparent() {
        let id = DocumentId::parse("abc-123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");

        let parsed: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
