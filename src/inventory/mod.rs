// Inventory system module
//
// This module provides the grid side of the inventory engine, including:
// - Containers with fixed-width slot grids and placement search
// - Slots with root-index grouping for multi-cell items
// - Slot change events for presentation layers

pub mod container;
pub mod error;
pub mod events;
pub mod slot;

// Re-export main types
pub use container::{AddOutcome, Container};
pub use error::InventoryError;
pub use events::{SlotEvent, SlotEventKind};
pub use slot::{GridPos, Slot};
