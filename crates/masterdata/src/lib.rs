//! Masterdata client and wishlist repository.
//!
//! This crate persists wishlist documents to a VTEX Masterdata (v2) data
//! entity over HTTP. It provides:
//!
//! - [`DocumentStore`] - the capability the repository consumes, one fixed
//!   data-entity/schema pair per store
//! - [`MasterdataClient`] - the reqwest implementation, attaching the tenant
//!   account and the caller's credential to every outbound call
//! - [`schema::ensure_schema`] - verifies the remote schema and overwrites
//!   it with the compiled-in definition when it drifts
//! - [`scroll::scan_all`] - scroll-based retrieval of the whole collection
//! - [`WishlistRepository`] - the domain operations (save, fetch by owner,
//!   delete, fetch all)
//!
//! # API Reference
//!
//! - Base URL: `https://{account}.{environment}/api/dataentities/{entity}`
//! - Authentication: opaque credential propagated from the inbound request,
//!   sent as `Authorization`, `VtexIdclientAutCookie`, and
//!   `Proxy-Authorization`

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
pub mod config;
mod error;
mod repository;
pub mod schema;
pub mod scroll;
mod store;
mod wire;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{Credential, MasterdataClient};
pub use config::{ConfigError, MasterdataConfig};
pub use error::{MasterdataError, WishlistError};
pub use repository::WishlistRepository;
pub use schema::SchemaState;
pub use store::{DocumentStore, ScrollPage, ScrollToken};
pub use wire::{ListItemsWrapper, WishListDocument};
