use bodega_core::Entity;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};

/// Catalog item identifier, assigned sequentially by the store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogItemId(u32);

impl CatalogItemId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for CatalogItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A registered catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub name: String,
    /// Value in smallest currency unit (e.g., cents).
    pub value: u64,
}

impl Entity for CatalogItem {
    type Id = CatalogItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// In-memory item registry.
///
/// Insertion order is preserved. Identifiers start at 1, grow
/// monotonically, and are never reused after a deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<CatalogItem>,
    last_id: u32,
}

impl ItemStore {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the three starter items.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (name, value) in [("chair", 300), ("table", 120), ("lamp", 45)] {
            store.insert(name.to_string(), value);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, in insertion order.
    pub fn all(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, id: CatalogItemId) -> CatalogResult<&CatalogItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Register a new item under the next free identifier.
    ///
    /// Names must be non-blank and unused by any other item.
    pub fn create(&mut self, name: impl Into<String>, value: u64) -> CatalogResult<&CatalogItem> {
        let name = name.into();
        self.ensure_valid_name(&name, None)?;

        let item = self.insert(name, value);
        debug!(id = %item.id, name = %item.name, value = item.value, "catalog item created");
        Ok(item)
    }

    /// Replace the name and value of an existing item.
    pub fn update(
        &mut self,
        id: CatalogItemId,
        name: impl Into<String>,
        value: u64,
    ) -> CatalogResult<&CatalogItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        let name = name.into();
        self.ensure_valid_name(&name, Some(id))?;

        let item = &mut self.items[index];
        item.name = name;
        item.value = value;
        debug!(id = %id, name = %item.name, value = item.value, "catalog item updated");
        Ok(&self.items[index])
    }

    /// Remove an item and return it.
    pub fn delete(&mut self, id: CatalogItemId) -> CatalogResult<CatalogItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        let item = self.items.remove(index);
        debug!(id = %id, name = %item.name, "catalog item deleted");
        Ok(item)
    }

    fn insert(&mut self, name: String, value: u64) -> &CatalogItem {
        self.last_id += 1;
        self.items.push(CatalogItem {
            id: CatalogItemId(self.last_id),
            name,
            value,
        });
        &self.items[self.items.len() - 1]
    }

    fn ensure_valid_name(&self, name: &str, exclude: Option<CatalogItemId>) -> CatalogResult<()> {
        if name.trim().is_empty() {
            return Err(CatalogError::validation("name cannot be empty"));
        }
        let taken = self
            .items
            .iter()
            .any(|item| Some(item.id) != exclude && item.name == name);
        if taken {
            return Err(CatalogError::DuplicateName(name.to_string()));
        }
        Ok(())
    }
}
