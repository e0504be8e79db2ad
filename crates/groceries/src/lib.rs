//! Grocery cart domain module.
//!
//! This crate contains the business rules for a grocery cart, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod cart;
pub mod error;
pub mod item;

pub use cart::{Groceries, MAX_CRAVINGS};
pub use error::{CartError, CartResult};
pub use item::Item;
