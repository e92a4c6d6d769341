//! Core types for the wishlist backend.
//!
//! This module provides the domain entities and type-safe wrappers shared
//! across the workspace.

pub mod id;
pub mod wishlist;

pub use id::{DocumentId, DocumentIdError};
pub use wishlist::{ListItem, WishList};
