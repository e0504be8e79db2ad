//! Catalog error model.

use thiserror::Error;

use crate::store::CatalogItemId;

/// Result type used across the catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Deterministic, caller-correctable catalog failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No item with the given identifier exists.
    #[error("item {0} not found")]
    NotFound(CatalogItemId),

    /// Another item already uses the given name.
    #[error("item name `{0}` already exists")]
    DuplicateName(String),

    /// A value failed validation (e.g. blank name).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
