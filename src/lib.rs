//! Grid inventory engine
//!
//! An engine-agnostic inventory data structure: items with rectangular
//! grid footprints are packed into fixed-width slot grids, with stacking
//! rules and root-index grouping for items that span multiple cells.
//! Rendering, input, and save-file handling are left to the host; the
//! engine exposes query and mutation operations plus a per-slot change
//! event queue a UI can drain.
//!
//! ```
//! use std::sync::Arc;
//! use grid_inventory::{Container, Footprint, ItemDefinition, ItemProperties, ItemStack};
//!
//! let apple = Arc::new(ItemDefinition::new(
//!     "apple", "Apple", "A crisp apple.",
//!     Footprint::SINGLE, 10, true, ItemProperties::Material,
//! ));
//!
//! let mut backpack = Container::new("backpack", 6, 3).unwrap();
//! let outcome = backpack.add_item(ItemStack::new(Arc::clone(&apple), 4)).unwrap();
//!
//! assert!(outcome.success);
//! assert_eq!(backpack.get_item_count(&apple), 4);
//! ```

pub mod inventory;
pub mod item;

// Re-export the full public surface at the crate root
pub use inventory::{
    AddOutcome, Container, GridPos, InventoryError, Slot, SlotEvent, SlotEventKind,
};
pub use item::{Footprint, ItemDefinition, ItemProperties, ItemRegistry, ItemStack};
