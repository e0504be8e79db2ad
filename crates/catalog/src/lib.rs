//! Catalog domain module.
//!
//! An in-memory item registry with sequential identifiers, the backing store
//! for whatever surface ends up exposing it. No IO beyond log events.

pub mod error;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use store::{CatalogItem, CatalogItemId, ItemStore};
