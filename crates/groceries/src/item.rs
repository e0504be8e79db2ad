use bodega_core::ValueObject;
use serde::{Deserialize, Serialize};

/// A named, priced entry in the cart, optionally flagged as a craving.
///
/// Items are immutable once constructed; to change one, build a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Product name, case-preserved. The cart compares names case-insensitively.
    pub product: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    /// Counts against the cart's craving ceiling.
    pub craving: bool,
}

impl Item {
    pub fn new(product: impl Into<String>, price: u64, craving: bool) -> Self {
        Self {
            product: product.into(),
            price,
            craving,
        }
    }
}

impl ValueObject for Item {}
