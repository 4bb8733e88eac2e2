use serde::{Serialize, Deserialize};

use crate::item::{Footprint, ItemStack};
use super::error::InventoryError;
use super::events::SlotEvent;

/// A position in a container grid, also used for offsets within an
/// item's footprint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    /// The origin cell
    pub const ZERO: GridPos = GridPos { x: 0, y: 0 };

    /// Creates a new grid position
    pub fn new(x: u32, y: u32) -> Self {
        GridPos { x, y }
    }
}

/// One grid cell of a container
///
/// A slot either holds a stack or is empty. Every cell covered by a
/// multi-cell item holds a copy of the same stack plus the index of the
/// root slot anchoring the item; only the root is authoritative for
/// amount and removal, and the container keeps the copies in sync.
///
/// Mutating operations return the [`SlotEvent`] describing the change so
/// the owning container can queue it for subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    index: usize,
    position: GridPos,
    stack: Option<ItemStack>,
    root_index: usize,
    offset_in_footprint: GridPos,
}

impl Slot {
    /// Creates a new empty slot
    pub fn new(index: usize, position: GridPos) -> Self {
        Slot {
            index,
            position,
            stack: None,
            root_index: 0,
            offset_in_footprint: GridPos::ZERO,
        }
    }

    /// Linear index of this slot in its container
    pub fn index(&self) -> usize {
        self.index
    }

    /// Grid position of this slot in its container
    pub fn position(&self) -> GridPos {
        self.position
    }

    /// Index of the slot anchoring the item occupying this cell
    ///
    /// For a 1x1 item this is the slot's own index. Meaningless while
    /// the slot is empty.
    pub fn root_index(&self) -> usize {
        self.root_index
    }

    /// This cell's (dx, dy) offset within the occupying item's footprint
    pub fn offset_in_footprint(&self) -> GridPos {
        self.offset_in_footprint
    }

    /// The held stack, if any
    pub fn stack(&self) -> Option<&ItemStack> {
        self.stack.as_ref()
    }

    /// Returns true if the slot holds a stack reference, even one of
    /// amount zero
    pub fn has_stack(&self) -> bool {
        self.stack.is_some()
    }

    /// Returns true if the slot holds nothing usable: no stack, a
    /// zero-amount stack, or a cleared stack with no definition
    pub fn is_empty(&self) -> bool {
        match &self.stack {
            Some(stack) => stack.amount() == 0 || stack.definition().is_none(),
            None => true,
        }
    }

    /// Returns true if the held stack is at or above its max stack size
    ///
    /// Asking an empty slot whether it is full is a caller bug; it
    /// reports `InvalidSlotState` instead of guessing an answer.
    pub fn is_full(&self) -> Result<bool, InventoryError> {
        let stack = self
            .stack
            .as_ref()
            .ok_or(InventoryError::InvalidSlotState(self.index))?;
        let definition = stack.definition().ok_or(InventoryError::MissingDefinition)?;
        Ok(stack.amount() >= definition.max_stack_size)
    }

    /// Quantity held in this slot, zero when empty
    pub fn amount(&self) -> u32 {
        self.stack.as_ref().map_or(0, |stack| stack.amount())
    }

    /// Rotation-adjusted footprint of the occupying item
    pub fn item_size(&self) -> Option<Footprint> {
        self.stack
            .as_ref()
            .and_then(|stack| stack.effective_footprint().ok())
    }

    /// Assigns a stack to this slot with its placement metadata
    pub fn set_stack(
        &mut self,
        stack: ItemStack,
        offset_in_footprint: GridPos,
        root_index: usize,
    ) -> SlotEvent {
        self.stack = Some(stack);
        self.offset_in_footprint = offset_in_footprint;
        self.root_index = root_index;
        SlotEvent::changed(self.index)
    }

    /// Adds to the held stack's quantity
    ///
    /// No max-stack clamping happens here; the container computes the
    /// space left before delegating.
    pub fn add_amount(&mut self, amount: u32) -> Result<SlotEvent, InventoryError> {
        let stack = self
            .stack
            .as_mut()
            .ok_or(InventoryError::InvalidSlotState(self.index))?;
        stack.add_amount(amount);
        Ok(SlotEvent::changed(self.index))
    }

    /// Removes from the held stack's quantity
    pub fn remove_amount(&mut self, amount: u32) -> Result<SlotEvent, InventoryError> {
        let stack = self
            .stack
            .as_mut()
            .ok_or(InventoryError::InvalidSlotState(self.index))?;
        stack.remove_amount(amount);
        Ok(SlotEvent::removed(self.index))
    }

    /// Releases the stack and resets placement metadata
    pub fn clear(&mut self) -> SlotEvent {
        self.stack = None;
        self.offset_in_footprint = GridPos::ZERO;
        self.root_index = 0;
        SlotEvent::changed(self.index)
    }

    /// Overwrites the held stack's amount without emitting an event
    ///
    /// Used by the container to keep the covered-cell copies of a
    /// multi-cell item in step with the authoritative root slot.
    pub(crate) fn sync_amount(&mut self, amount: u32) {
        if let Some(stack) = self.stack.as_mut() {
            stack.set_amount(amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::inventory::events::SlotEventKind;
    use crate::item::{ItemDefinition, ItemProperties};

    fn coin_stack(amount: u32) -> ItemStack {
        let coin = Arc::new(ItemDefinition::new(
            "coin", "Coin", "", Footprint::SINGLE, 10, true, ItemProperties::Material,
        ));
        ItemStack::new(coin, amount)
    }

    #[test]
    fn test_new_slot_is_empty() {
        let slot = Slot::new(3, GridPos::new(1, 1));

        assert!(slot.is_empty());
        assert!(!slot.has_stack());
        assert_eq!(slot.amount(), 0);
        assert!(slot.item_size().is_none());
    }

    #[test]
    fn test_is_full_on_empty_slot_is_an_error() {
        let slot = Slot::new(0, GridPos::ZERO);
        assert_eq!(slot.is_full(), Err(InventoryError::InvalidSlotState(0)));
    }

    #[test]
    fn test_set_stack_occupies_slot() {
        let mut slot = Slot::new(2, GridPos::new(2, 0));
        let event = slot.set_stack(coin_stack(4), GridPos::ZERO, 2);

        assert_eq!(event.index, 2);
        assert_eq!(event.kind, SlotEventKind::Changed);
        assert!(slot.has_stack());
        assert!(!slot.is_empty());
        assert_eq!(slot.root_index(), 2);
        assert_eq!(slot.is_full(), Ok(false));
    }

    #[test]
    fn test_full_at_max_stack_size() {
        let mut slot = Slot::new(0, GridPos::ZERO);
        let _ = slot.set_stack(coin_stack(10), GridPos::ZERO, 0);
        assert_eq!(slot.is_full(), Ok(true));
    }

    #[test]
    fn test_amount_changes_emit_events() {
        let mut slot = Slot::new(1, GridPos::new(1, 0));
        let _ = slot.set_stack(coin_stack(4), GridPos::ZERO, 1);

        let added = slot.add_amount(3).unwrap();
        assert_eq!(added.kind, SlotEventKind::Changed);
        assert_eq!(slot.amount(), 7);

        let removed = slot.remove_amount(2).unwrap();
        assert_eq!(removed.kind, SlotEventKind::Removed);
        assert_eq!(slot.amount(), 5);
    }

    #[test]
    fn test_zero_amount_stack_counts_as_empty() {
        let mut slot = Slot::new(0, GridPos::ZERO);
        let _ = slot.set_stack(coin_stack(1), GridPos::ZERO, 0);
        let _ = slot.remove_amount(1).unwrap();

        assert!(slot.has_stack());
        assert!(slot.is_empty());
    }

    #[test]
    fn test_clear_resets_metadata() {
        let mut slot = Slot::new(5, GridPos::new(1, 1));
        let _ = slot.set_stack(coin_stack(4), GridPos::new(1, 0), 4);

        let event = slot.clear();
        assert_eq!(event.kind, SlotEventKind::Changed);
        assert!(slot.is_empty());
        assert_eq!(slot.root_index(), 0);
        assert_eq!(slot.offset_in_footprint(), GridPos::ZERO);
    }
}
