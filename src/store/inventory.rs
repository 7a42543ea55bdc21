use crate::models::{Item, UpdateItem};
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared handle passed to the handlers through axum state
pub type SharedInventory = Arc<Inventory>;

/// The single in-memory item store, keyed by caller-assigned ID.
///
/// All access goes through one lock, so concurrent requests that target
/// the same ID serialize. No method holds the lock across an await or
/// any call outside the map. Entries are kept in a `BTreeMap`, so the
/// name scan always visits ascending IDs.
#[derive(Debug, Default)]
pub struct Inventory {
    items: RwLock<BTreeMap<u32, Item>>,
}

/// The two failure kinds the store can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryError {
    /// The referenced ID or name is not in the store
    NotFound,
    /// Create was asked to reuse an ID that is already taken
    Conflict,
}

impl std::fmt::Display for InventoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryError::NotFound => write!(f, "item does not exist"),
            InventoryError::Conflict => write!(f, "item ID already exists"),
        }
    }
}

impl std::error::Error for InventoryError {}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<u32, Item>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<u32, Item>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up an item by its ID
    pub fn get(&self, id: u32) -> Option<Item> {
        self.read().get(&id).cloned()
    }

    /// Scan all entries in ascending ID order and return the first item
    /// whose name equals `name` exactly. With duplicate names the
    /// lowest-ID match wins.
    pub fn find_by_name(&self, name: &str) -> Option<Item> {
        self.read()
            .values()
            .find(|item| item.name == name)
            .cloned()
    }

    /// Insert a new item under `id`. Fails with `Conflict` when the ID
    /// is already taken, leaving the store unchanged.
    pub fn insert(&self, id: u32, item: Item) -> Result<Item, InventoryError> {
        let mut items = self.write();
        if items.contains_key(&id) {
            return Err(InventoryError::Conflict);
        }
        items.insert(id, item.clone());
        Ok(item)
    }

    /// Apply a partial patch to the item under `id`. Only fields present
    /// in the patch overwrite the stored item; everything else is kept.
    pub fn update(&self, id: u32, patch: UpdateItem) -> Result<Item, InventoryError> {
        let mut items = self.write();
        let item = items.get_mut(&id).ok_or(InventoryError::NotFound)?;
        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(price) = patch.price {
            item.price = price;
        }
        if let Some(brand) = patch.brand {
            item.brand = brand;
        }
        Ok(item.clone())
    }

    /// Remove the item under `id`
    pub fn remove(&self, id: u32) -> Result<(), InventoryError> {
        self.write()
            .remove(&id)
            .map(|_| ())
            .ok_or(InventoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Item {
        Item {
            name: "Widget".to_string(),
            price: 9.99,
            brand: None,
        }
    }

    fn branded(name: &str, price: f64, brand: &str) -> Item {
        Item {
            name: name.to_string(),
            price,
            brand: Some(brand.to_string()),
        }
    }

    #[test]
    fn create_then_get_returns_equivalent_item() {
        let inventory = Inventory::new();
        let stored = inventory.insert(1, widget()).unwrap();
        assert_eq!(stored, widget());
        assert_eq!(inventory.get(1), Some(widget()));
    }

    #[test]
    fn create_on_taken_id_fails_and_leaves_store_unchanged() {
        let inventory = Inventory::new();
        inventory.insert(1, widget()).unwrap();
        let result = inventory.insert(1, branded("Gadget", 1.0, "Acme"));
        assert_eq!(result, Err(InventoryError::Conflict));
        assert_eq!(inventory.get(1), Some(widget()));
    }

    #[test]
    fn update_with_only_price_changes_only_price() {
        let inventory = Inventory::new();
        inventory.insert(1, branded("Widget", 9.99, "Acme")).unwrap();
        let patch = UpdateItem {
            price: Some(12.5),
            ..UpdateItem::default()
        };
        let updated = inventory.update(1, patch).unwrap();
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.price, 12.5);
        assert_eq!(updated.brand.as_deref(), Some("Acme"));
    }

    #[test]
    fn update_distinguishes_explicit_null_brand_from_omitted() {
        let inventory = Inventory::new();
        inventory.insert(1, branded("Widget", 9.99, "Acme")).unwrap();

        // Patch without brand keeps the stored one
        let kept = inventory
            .update(
                1,
                UpdateItem {
                    price: Some(10.0),
                    ..UpdateItem::default()
                },
            )
            .unwrap();
        assert_eq!(kept.brand.as_deref(), Some("Acme"));

        // Explicit null clears it
        let cleared = inventory
            .update(
                1,
                UpdateItem {
                    brand: Some(None),
                    ..UpdateItem::default()
                },
            )
            .unwrap();
        assert_eq!(cleared.brand, None);
    }

    #[test]
    fn update_on_missing_id_fails_not_found() {
        let inventory = Inventory::new();
        let result = inventory.update(
            7,
            UpdateItem {
                price: Some(1.0),
                ..UpdateItem::default()
            },
        );
        assert_eq!(result, Err(InventoryError::NotFound));
        assert_eq!(inventory.get(7), None);
    }

    #[test]
    fn remove_then_get_misses() {
        let inventory = Inventory::new();
        inventory.insert(1, widget()).unwrap();
        assert_eq!(inventory.remove(1), Ok(()));
        assert_eq!(inventory.get(1), None);
    }

    #[test]
    fn remove_on_missing_id_fails_not_found() {
        let inventory = Inventory::new();
        assert_eq!(inventory.remove(1), Err(InventoryError::NotFound));
    }

    #[test]
    fn find_by_name_matches_exactly() {
        let inventory = Inventory::new();
        inventory.insert(1, widget()).unwrap();
        assert_eq!(inventory.find_by_name("Widget"), Some(widget()));
        assert_eq!(inventory.find_by_name("widget"), None);
        assert_eq!(inventory.find_by_name("Wid"), None);
    }

    #[test]
    fn find_by_name_prefers_lowest_id_on_duplicates() {
        let inventory = Inventory::new();
        inventory.insert(5, branded("Widget", 2.0, "Later")).unwrap();
        inventory.insert(2, branded("Widget", 1.0, "First")).unwrap();
        let found = inventory.find_by_name("Widget").unwrap();
        assert_eq!(found.brand.as_deref(), Some("First"));
    }
}
