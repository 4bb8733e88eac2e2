use std::sync::Arc;

use serde::{Serialize, Deserialize};

use crate::inventory::InventoryError;
use super::definition::{Footprint, ItemDefinition};

/// An instance of an item with quantity
///
/// This represents a specific amount of an item type. It's stored in
/// container slots and can be split/merged during placement. A stack
/// placed over multiple grid cells is copied into each covered slot;
/// the slots are tied together by their shared root index and the
/// container keeps the copies' amounts in sync.
///
/// The definition reference is only ever `None` after `clear()`; a
/// cleared stack is treated as empty by every slot query.
///
/// No stack-size clamping happens here. `add_amount` and `remove_amount`
/// trust the caller, so the container is responsible for respecting
/// `max_stack_size` before delegating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemStack {
    definition: Option<Arc<ItemDefinition>>,
    amount: u32,
    is_rotated: bool,
}

impl ItemStack {
    /// Creates a new, unrotated item stack
    pub fn new(definition: Arc<ItemDefinition>, amount: u32) -> Self {
        ItemStack {
            definition: Some(definition),
            amount,
            is_rotated: false,
        }
    }

    /// The definition this stack refers to, or `None` once cleared
    pub fn definition(&self) -> Option<&Arc<ItemDefinition>> {
        self.definition.as_ref()
    }

    /// Current quantity in this stack
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Whether the footprint axes are swapped
    pub fn is_rotated(&self) -> bool {
        self.is_rotated
    }

    /// Sets the quantity directly
    pub fn set_amount(&mut self, amount: u32) {
        self.amount = amount;
    }

    /// Adds to the quantity, returning the new amount
    pub fn add_amount(&mut self, amount: u32) -> u32 {
        self.amount += amount;
        self.amount
    }

    /// Removes from the quantity, returning the new amount
    ///
    /// Saturates at zero rather than wrapping; callers that care about
    /// over-removal should compare against `amount()` first.
    pub fn remove_amount(&mut self, amount: u32) -> u32 {
        self.amount = self.amount.saturating_sub(amount);
        self.amount
    }

    /// Toggles the rotation flag
    pub fn rotate(&mut self) {
        self.is_rotated = !self.is_rotated;
    }

    /// Releases the definition reference and zeroes the quantity
    pub fn clear(&mut self) {
        self.definition = None;
        self.amount = 0;
    }

    /// Copy of this stack with a different quantity (same definition and rotation)
    pub fn with_amount(&self, amount: u32) -> ItemStack {
        ItemStack {
            definition: self.definition.clone(),
            amount,
            is_rotated: self.is_rotated,
        }
    }

    /// Footprint after rotation adjustment
    pub fn effective_footprint(&self) -> Result<Footprint, InventoryError> {
        let definition = self.definition.as_ref().ok_or(InventoryError::MissingDefinition)?;
        if self.is_rotated {
            Ok(definition.footprint.rotated())
        } else {
            Ok(definition.footprint)
        }
    }

    /// Returns true if this stack refers to the given definition
    ///
    /// Identity is the definition id; two registry entries with the same
    /// id are the same item type for stacking purposes.
    pub fn matches_definition(&self, definition: &ItemDefinition) -> bool {
        self.definition
            .as_ref()
            .is_some_and(|own| own.id == definition.id)
    }

    /// Returns true if both stacks refer to the same item type
    pub fn same_definition(&self, other: &ItemStack) -> bool {
        match other.definition() {
            Some(definition) => self.matches_definition(definition),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemProperties;

    fn coin() -> Arc<ItemDefinition> {
        Arc::new(ItemDefinition::new(
            "coin", "Coin", "", Footprint::SINGLE, 50, true, ItemProperties::Material,
        ))
    }

    #[test]
    fn test_add_and_remove_amount() {
        let mut stack = ItemStack::new(coin(), 10);

        assert_eq!(stack.add_amount(5), 15);
        assert_eq!(stack.remove_amount(3), 12);
        assert_eq!(stack.amount(), 12);
    }

    #[test]
    fn test_remove_amount_saturates() {
        let mut stack = ItemStack::new(coin(), 2);
        assert_eq!(stack.remove_amount(10), 0);
    }

    #[test]
    fn test_rotation_swaps_effective_footprint() {
        let crate_def = Arc::new(ItemDefinition::new(
            "crate", "Crate", "", Footprint::new(2, 3), 1, false, ItemProperties::Material,
        ));
        let mut stack = ItemStack::new(crate_def, 1);

        assert_eq!(stack.effective_footprint().unwrap(), Footprint::new(2, 3));
        stack.rotate();
        assert_eq!(stack.effective_footprint().unwrap(), Footprint::new(3, 2));
        stack.rotate();
        assert!(!stack.is_rotated());
    }

    #[test]
    fn test_clear_releases_definition() {
        let mut stack = ItemStack::new(coin(), 10);
        stack.clear();

        assert!(stack.definition().is_none());
        assert_eq!(stack.amount(), 0);
        assert!(stack.effective_footprint().is_err());
    }

    #[test]
    fn test_clone_shares_definition() {
        let stack = ItemStack::new(coin(), 7);
        let copy = stack.clone();

        assert!(stack.same_definition(&copy));
        assert_eq!(copy.amount(), 7);
    }

    #[test]
    fn test_with_amount_keeps_rotation() {
        let mut stack = ItemStack::new(coin(), 7);
        stack.rotate();

        let copy = stack.with_amount(3);
        assert_eq!(copy.amount(), 3);
        assert!(copy.is_rotated());
    }
}
