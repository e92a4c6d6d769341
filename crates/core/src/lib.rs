//! Wishlist Core - Shared domain types.
//!
//! This crate provides the entities shared by the wishlist components:
//! - `masterdata` - Document-store client and repository
//! - `service` - HTTP service exposing the repository operations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - `WishList`, `ListItem`, and the `DocumentId` newtype

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
