use std::collections::VecDeque;

use log::{debug, warn};
use serde::{Serialize, Deserialize};

use crate::item::{Footprint, ItemDefinition, ItemStack};
use super::error::InventoryError;
use super::events::SlotEvent;
use super::slot::{GridPos, Slot};

/// Result of an [`Container::add_item`] call
///
/// `success` and `remaining` are independent: placing a non-stackable
/// stack of amount 5 places one copy and reports success with a
/// remainder of 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// Whether a placement or merge satisfied the request
    pub success: bool,

    /// Quantity that was not placed
    pub remaining: u32,
}

/// A fixed-width grid of slots with placement search, stacking,
/// and removal
///
/// Multi-cell items cover a rectangular region of slots; every covered
/// slot holds a copy of the stack plus the index of the root slot that
/// anchors the item. The root is authoritative for amount and removal.
///
/// Mutating operations are not transactional: `add_item` and
/// `remove_item` may merge into or drain some slots and still report
/// failure, leaving those partial effects in place. Callers that need
/// all-or-nothing semantics should check capacity up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    name: String,
    width: u32,
    slots: Vec<Slot>,
    #[serde(skip)]
    events: VecDeque<SlotEvent>,
}

impl Container {
    /// Creates a new empty container
    ///
    /// `slot_count` must be a positive multiple of `width`, so the slots
    /// form whole rows; anything else is a `MalformedGrid` error.
    pub fn new(
        name: impl Into<String>,
        slot_count: usize,
        width: u32,
    ) -> Result<Self, InventoryError> {
        if width == 0 || slot_count == 0 || slot_count % width as usize != 0 {
            return Err(InventoryError::MalformedGrid { slot_count, width });
        }

        let slots = (0..slot_count)
            .map(|index| {
                let position = GridPos::new(index as u32 % width, index as u32 / width);
                Slot::new(index, position)
            })
            .collect();

        Ok(Container {
            name: name.into(),
            width,
            slots,
            events: VecDeque::new(),
        })
    }

    /// Creates a container pre-filled with initial items
    ///
    /// Each item is added via [`add_item`](Self::add_item); items that do
    /// not fit are dropped with a warning rather than failing the
    /// construction.
    pub fn with_items(
        name: impl Into<String>,
        slot_count: usize,
        width: u32,
        initial_items: impl IntoIterator<Item = ItemStack>,
    ) -> Result<Self, InventoryError> {
        let mut container = Self::new(name, slot_count, width)?;

        for stack in initial_items {
            match container.add_item(stack) {
                Ok(outcome) if !outcome.success => {
                    warn!(
                        "container '{}': initial item dropped, {} left over",
                        container.name, outcome.remaining
                    );
                }
                Err(error) => {
                    warn!("container '{}': initial item rejected: {}", container.name, error);
                }
                Ok(_) => {}
            }
        }

        Ok(container)
    }

    /// Container name, used for logging and UI
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of slots in the grid
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Grid width in cells
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> u32 {
        (self.slots.len() / self.width as usize) as u32
    }

    /// Returns true if no slot is empty
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    /// Number of empty slots
    pub fn remaining_space(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_empty()).count()
    }

    /// All slots in index order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// One slot by linear index
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Drains the queued slot events
    ///
    /// Presentation layers call this after a batch of operations; each
    /// slot mutation queued exactly one event, in operation order.
    pub fn drain_events(&mut self) -> impl Iterator<Item = SlotEvent> + '_ {
        self.events.drain(..)
    }

    /// Converts a linear slot index to its grid position
    pub fn grid_pos(&self, index: usize) -> GridPos {
        GridPos::new(index as u32 % self.width, index as u32 / self.width)
    }

    /// Converts a grid position to its linear slot index
    ///
    /// Exact inverse of [`grid_pos`](Self::grid_pos) for valid indices.
    pub fn index_from_grid_pos(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Returns true if any slot holds a stack of this item type
    pub fn has_item(&self, definition: &ItemDefinition) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.stack().is_some_and(|stack| stack.matches_definition(definition)))
    }

    /// Total quantity of this item type across the container
    ///
    /// Only root slots are summed, so a multi-cell item counts once no
    /// matter how many cells it covers.
    pub fn get_item_count(&self, definition: &ItemDefinition) -> u32 {
        self.slots
            .iter()
            .enumerate()
            .filter(|(index, slot)| slot.has_stack() && slot.root_index() == *index)
            .filter_map(|(_, slot)| slot.stack())
            .filter(|stack| stack.matches_definition(definition))
            .map(|stack| stack.amount())
            .sum()
    }

    /// Checks whether a footprint fits with its top-left corner at (x, y)
    ///
    /// Fails if any covered cell falls outside the grid or is occupied by
    /// an item anchored at a root other than `ignored_root`. Passing the
    /// occupying item's own root allows re-placement over its current
    /// cells, the move/rotate case.
    pub fn can_place_item_at(
        &self,
        x: u32,
        y: u32,
        footprint: Footprint,
        ignored_root: Option<usize>,
    ) -> bool {
        let height = self.height();

        for dx in 0..footprint.width {
            for dy in 0..footprint.height {
                let grid_x = x + dx;
                let grid_y = y + dy;

                if grid_x >= self.width || grid_y >= height {
                    return false;
                }

                let index = self.index_from_grid_pos(grid_x, grid_y);
                let Some(slot) = self.slots.get(index) else {
                    return false;
                };

                if slot.has_stack() && Some(slot.root_index()) != ignored_root {
                    return false;
                }
            }
        }

        true
    }

    /// Fills every cell covered by the footprint with a copy of the stack
    ///
    /// Precondition: the region was validated with `can_place_item_at`.
    /// No occupancy check happens here.
    fn place_item_at(&mut self, stack: &ItemStack, x: u32, y: u32, footprint: Footprint) {
        let root_index = self.index_from_grid_pos(x, y);

        for dx in 0..footprint.width {
            for dy in 0..footprint.height {
                let index = self.index_from_grid_pos(x + dx, y + dy);
                let event =
                    self.slots[index].set_stack(stack.clone(), GridPos::new(dx, dy), root_index);
                self.events.push_back(event);
            }
        }
    }

    /// Adds a stack to the container, searching for space
    ///
    /// Tried in fixed order: merge into existing stacks of the same item
    /// first, then fill empty slots (1x1 footprints only), then search the
    /// grid for a region admitting the footprint. Merging before creating
    /// new stacks keeps existing stacks consolidated.
    ///
    /// Partial progress is kept even when the call reports failure; the
    /// outcome's `remaining` is the quantity that found no home.
    pub fn add_item(&mut self, mut stack: ItemStack) -> Result<AddOutcome, InventoryError> {
        let definition = stack
            .definition()
            .cloned()
            .ok_or(InventoryError::MissingDefinition)?;
        let mut remaining = stack.amount();

        debug!(
            "container '{}': adding {} x{}",
            self.name, definition.name, remaining
        );

        // Pass 1: top up existing stacks of the same item, in index order.
        // Only root slots are considered so a multi-cell stack is merged
        // into once; its covered copies are synced afterwards.
        for index in 0..self.slots.len() {
            let slot = &self.slots[index];
            if !slot.has_stack() || slot.root_index() != index {
                continue;
            }
            if !slot.stack().is_some_and(|held| held.matches_definition(&definition)) {
                continue;
            }
            if slot.is_full()? {
                continue;
            }

            let space_left = definition.max_stack_size.saturating_sub(slot.amount());
            let amount_to_add = space_left.min(remaining);
            let event = self.slots[index].add_amount(amount_to_add)?;
            self.events.push_back(event);
            self.sync_footprint_amount(index);
            remaining -= amount_to_add;

            if remaining == 0 {
                return Ok(AddOutcome { success: true, remaining: 0 });
            }
        }

        if definition.footprint.is_single_cell() {
            // Pass 2: create new stacks in empty slots, continuing across
            // slots until the amount is exhausted.
            for index in 0..self.slots.len() {
                if !self.slots[index].is_empty() {
                    continue;
                }

                let amount_to_add = remaining.min(definition.max_stack_size);
                let new_stack = stack.with_amount(amount_to_add);
                let event = self.slots[index].set_stack(new_stack, GridPos::ZERO, index);
                self.events.push_back(event);
                remaining -= amount_to_add;

                if remaining == 0 {
                    return Ok(AddOutcome { success: true, remaining: 0 });
                }
            }
        } else {
            // Pass 3: search the grid for a region admitting the footprint.
            if !definition.is_stackable && stack.amount() > 1 {
                warn!(
                    "container '{}': non-stackable item '{}' added with amount {}, clamping to 1",
                    self.name,
                    definition.name,
                    stack.amount()
                );
                stack.set_amount(1);
            }

            let footprint = stack.effective_footprint()?;

            for index in 0..self.slots.len() {
                let position = self.grid_pos(index);
                if self.can_place_item_at(position.x, position.y, footprint, None) {
                    self.place_item_at(&stack, position.x, position.y, footprint);
                    remaining = remaining.saturating_sub(stack.amount());
                    debug!(
                        "container '{}': placed {} at ({}, {})",
                        self.name, definition.name, position.x, position.y
                    );
                    return Ok(AddOutcome { success: true, remaining });
                }
            }
        }

        warn!(
            "container '{}': could not add {}, {} left over",
            self.name, definition.name, remaining
        );
        Ok(AddOutcome { success: false, remaining })
    }

    /// Places a stack at an exact position, bypassing the search
    ///
    /// Honors the stack's rotation flag. Returns false without side
    /// effects when the region does not admit the footprint.
    pub fn add_item_at(
        &mut self,
        stack: ItemStack,
        x: u32,
        y: u32,
    ) -> Result<bool, InventoryError> {
        let footprint = stack.effective_footprint()?;

        if !self.can_place_item_at(x, y, footprint, None) {
            return Ok(false);
        }

        self.place_item_at(&stack, x, y, footprint);
        Ok(true)
    }

    /// Removes up to `stack.amount()` of the stack's item type
    ///
    /// Root slots matching the definition are drained in index order. A
    /// stack drained to zero has its whole footprint cleared; a partially
    /// drained multi-cell stack has its covered copies re-synced.
    ///
    /// Returns whether the full requested amount was removed. Partial
    /// removal is kept either way.
    pub fn remove_item(&mut self, stack: &ItemStack) -> bool {
        let Some(definition) = stack.definition().cloned() else {
            return false;
        };
        let mut amount_to_remove = stack.amount();

        for index in 0..self.slots.len() {
            if amount_to_remove == 0 {
                break;
            }

            let slot = &self.slots[index];
            if !slot.has_stack() || slot.root_index() != index {
                continue;
            }
            if !slot.stack().is_some_and(|held| held.matches_definition(&definition)) {
                continue;
            }

            let amount_removed = amount_to_remove.min(slot.amount());
            let Ok(event) = self.slots[index].remove_amount(amount_removed) else {
                continue;
            };
            self.events.push_back(event);
            amount_to_remove -= amount_removed;

            if self.slots[index].amount() == 0 {
                let _ = self.remove_item_at_root(index);
            } else {
                self.sync_footprint_amount(index);
            }
        }

        amount_to_remove == 0
    }

    /// Removes the item anchored at `root_index`, clearing its footprint
    ///
    /// Returns false if the index is out of bounds or the slot holds no
    /// stack. Covered cells are cleared only while their stack still
    /// matches the root's definition; a desynced cell is skipped with a
    /// warning rather than treated as a hard error. Returns true once the
    /// root itself is processed.
    pub fn remove_item_at_root(&mut self, root_index: usize) -> bool {
        let Some(root_slot) = self.slots.get(root_index) else {
            return false;
        };
        if !root_slot.has_stack() {
            return false;
        }
        let Some(definition) = root_slot.stack().and_then(|stack| stack.definition()).cloned()
        else {
            return false;
        };
        let Some(item_size) = root_slot.item_size() else {
            return false;
        };
        let root_pos = root_slot.position();

        for dx in 0..item_size.width {
            for dy in 0..item_size.height {
                let grid_x = root_pos.x + dx;
                let grid_y = root_pos.y + dy;
                let index = self.index_from_grid_pos(grid_x, grid_y);

                let matches = self.slots.get(index).is_some_and(|slot| {
                    slot.stack()
                        .is_some_and(|stack| stack.matches_definition(&definition))
                });

                if matches {
                    let event = self.slots[index].clear();
                    self.events.push_back(event);
                } else {
                    warn!(
                        "container '{}': slot at ({}, {}) does not match the item being removed",
                        self.name, grid_x, grid_y
                    );
                }
            }
        }

        true
    }

    /// Clears every slot unconditionally
    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            let event = self.slots[index].clear();
            self.events.push_back(event);
        }
    }

    /// Copies the root slot's amount into the other cells of its footprint
    fn sync_footprint_amount(&mut self, root_index: usize) {
        let Some(item_size) = self.slots[root_index].item_size() else {
            return;
        };
        if item_size.is_single_cell() {
            return;
        }

        let amount = self.slots[root_index].amount();
        let root_pos = self.slots[root_index].position();

        for dx in 0..item_size.width {
            for dy in 0..item_size.height {
                let index = self.index_from_grid_pos(root_pos.x + dx, root_pos.y + dy);
                if index != root_index {
                    if let Some(slot) = self.slots.get_mut(index) {
                        slot.sync_amount(amount);
                    }
                }
            }
        }
    }
}
