// Item system module
//
// This module provides the item side of the inventory engine, including:
// - Item definitions with grid footprints
// - Item registry for centralized, shared definitions
// - Item stacks for quantity and rotation state

pub mod definition;
pub mod properties;
pub mod registry;
pub mod stack;

// Re-export main types for convenient access
pub use definition::{Footprint, ItemDefinition};
pub use properties::ItemProperties;
pub use registry::ItemRegistry;
pub use stack::ItemStack;
