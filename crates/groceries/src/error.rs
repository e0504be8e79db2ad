//! Cart error model.

use thiserror::Error;

/// Result type used across the cart operations.
pub type CartResult<T> = Result<T, CartError>;

/// Deterministic, caller-correctable cart failures.
///
/// A failed operation never leaves the cart partially mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// An item with the same product name (case-insensitive) is already held.
    #[error("product `{0}` is already in the cart")]
    DuplicateProduct(String),

    /// The cart is at its craving ceiling and the item is a craving.
    #[error("cart already holds {max} craving items")]
    MaxCravingsReached { max: usize },

    /// No held item has the given product name.
    #[error("product `{0}` is not in the cart")]
    NotFound(String),

    /// An index fell outside the cart bounds.
    #[error("index {index} is out of range for a cart of {len} items")]
    OutOfRange { index: isize, len: usize },
}
