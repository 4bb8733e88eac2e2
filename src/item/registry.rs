use std::collections::HashMap;
use std::sync::Arc;

use crate::inventory::InventoryError;
use super::definition::ItemDefinition;

/// Central registry of all item definitions
///
/// This is the single source of truth for what item types exist.
/// Registering a definition wraps it in an `Arc` so containers and
/// stacks can share the immutable data without copying it around.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    items: HashMap<String, Arc<ItemDefinition>>,
}

impl ItemRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        ItemRegistry {
            items: HashMap::new(),
        }
    }

    /// Registers a new item definition and returns the shared handle
    ///
    /// Returns an error if an item with this id already exists.
    pub fn register(
        &mut self,
        definition: ItemDefinition,
    ) -> Result<Arc<ItemDefinition>, InventoryError> {
        if self.items.contains_key(&definition.id) {
            return Err(InventoryError::DuplicateItem(definition.id));
        }

        let definition = Arc::new(definition);
        self.items.insert(definition.id.clone(), Arc::clone(&definition));
        Ok(definition)
    }

    /// Gets an item definition by id
    ///
    /// Returns None if no item with this id exists.
    pub fn get(&self, id: &str) -> Option<Arc<ItemDefinition>> {
        self.items.get(id).cloned()
    }

    /// Returns true if an item with this id exists
    pub fn exists(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Returns all registered item definitions
    pub fn all_items(&self) -> impl Iterator<Item = &Arc<ItemDefinition>> {
        self.items.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Footprint, ItemProperties};

    fn scrap() -> ItemDefinition {
        ItemDefinition::new(
            "scrap", "Scrap", "Rusty metal.", Footprint::SINGLE, 20, true,
            ItemProperties::Material,
        )
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ItemRegistry::new();
        let handle = registry.register(scrap()).unwrap();

        let looked_up = registry.get("scrap").unwrap();
        assert!(Arc::ptr_eq(&handle, &looked_up));
        assert!(registry.exists("scrap"));
        assert!(!registry.exists("gold"));
    }

    #[test]
    fn test_register_duplicate_fails() {
        let mut registry = ItemRegistry::new();
        registry.register(scrap()).unwrap();

        let err = registry.register(scrap()).unwrap_err();
        assert!(matches!(err, InventoryError::DuplicateItem(ref id) if id == "scrap"));
    }
}
