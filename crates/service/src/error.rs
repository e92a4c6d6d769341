//! Unified error handling for the service routes.
//!
//! All route handlers return `Result<T, ApiError>`; the `IntoResponse`
//! implementation maps errors to status codes without leaking internal
//! detail to clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use wishlist_masterdata::WishlistError;

/// Application-level error type for the wishlist service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Repository operation failed.
    #[error("Wishlist error: {0}")]
    Wishlist(#[from] WishlistError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller did not supply a usable credential.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Wishlist(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Wishlist(WishlistError::Store(_)) => StatusCode::BAD_GATEWAY,
            Self::Wishlist(WishlistError::Decode(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Wishlist(WishlistError::Store(_)) => "Document store error".to_string(),
            Self::Wishlist(WishlistError::Decode(_)) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
