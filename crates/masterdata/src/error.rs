//! Error types for the Masterdata client and the wishlist repository.

use thiserror::Error;

/// Errors that can occur when talking to the Masterdata API.
#[derive(Debug, Error)]
pub enum MasterdataError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Unauthorized (missing or expired credential).
    #[error("Unauthorized: invalid credential")]
    Unauthorized,

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Errors returned by [`WishlistRepository`](crate::WishlistRepository)
/// operations.
#[derive(Debug, Error)]
pub enum WishlistError {
    /// The document store call failed.
    #[error("document store error: {0}")]
    Store(#[from] MasterdataError),

    /// A wishlist document could not be decoded.
    #[error("failed to decode wishlist document: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = MasterdataError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 502 - bad gateway");
    }

    #[test]
    fn test_store_error_wraps_masterdata() {
        let err = WishlistError::from(MasterdataError::Unauthorized);
        assert!(matches!(
            err,
            WishlistError::Store(MasterdataError::Unauthorized)
        ));
    }
}
