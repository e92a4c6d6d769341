//! Wishlist route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use wishlist_core::{DocumentId, WishList};

use crate::error::{ApiError, Result};
use crate::middleware::StoreContext;
use crate::state::AppState;

/// `GET /api/wishlist/{key}` - fetch the wishlist owned by a shopper.
pub async fn fetch_by_owner(
    State(state): State<AppState>,
    ctx: StoreContext,
    Path(shopper): Path<String>,
) -> Result<Json<WishList>> {
    let repository = state.repository(ctx.account.as_deref(), ctx.credential);

    match repository.fetch_by_owner(&shopper).await? {
        Some(list) => Ok(Json(list)),
        None => Err(ApiError::NotFound(format!("no wishlist for {shopper}"))),
    }
}

/// `POST /api/wishlist` - create or replace a wishlist.
///
/// The body is the wishlist itself; an `id` field makes this an update of
/// the existing document, its absence a create.
pub async fn save(
    State(state): State<AppState>,
    ctx: StoreContext,
    Json(list): Json<WishList>,
) -> Result<StatusCode> {
    if list.email.is_empty() {
        return Err(ApiError::BadRequest("email must not be empty".to_string()));
    }

    let repository = state.repository(ctx.account.as_deref(), ctx.credential);
    repository.save(&list).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/wishlist/{key}` - delete a wishlist by document id.
pub async fn remove(
    State(state): State<AppState>,
    ctx: StoreContext,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = DocumentId::parse(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let repository = state.repository(ctx.account.as_deref(), ctx.credential);
    repository.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/wishlists` - fetch every wishlist in the collection.
pub async fn fetch_all(
    State(state): State<AppState>,
    ctx: StoreContext,
) -> Result<Json<Vec<WishList>>> {
    let repository = state.repository(ctx.account.as_deref(), ctx.credential);
    let lists = repository.fetch_all().await?;

    Ok(Json(lists))
}
