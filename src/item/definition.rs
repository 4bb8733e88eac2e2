use serde::{Serialize, Deserialize};
use super::properties::ItemProperties;

/// The (width, height) span of grid cells an item occupies
///
/// A footprint of 1x1 is a plain single-cell item; anything larger is
/// placed into the grid as a rectangular region anchored at a root slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    /// Width in grid cells (>= 1)
    pub width: u32,

    /// Height in grid cells (>= 1)
    pub height: u32,
}

impl Footprint {
    /// A 1x1 footprint, the common case for stackable items
    pub const SINGLE: Footprint = Footprint { width: 1, height: 1 };

    /// Creates a new footprint
    pub fn new(width: u32, height: u32) -> Self {
        Footprint { width, height }
    }

    /// Returns this footprint with width and height swapped (90 degree rotation)
    pub fn rotated(self) -> Self {
        Footprint {
            width: self.height,
            height: self.width,
        }
    }

    /// Returns true if this footprint covers exactly one cell
    pub fn is_single_cell(self) -> bool {
        self.width == 1 && self.height == 1
    }

    /// Total number of cells covered
    pub fn cell_count(self) -> u32 {
        self.width * self.height
    }
}

/// The blueprint for an item type
///
/// This defines the static properties of an item that are shared
/// across all instances. Think of it as the "class" and ItemStack
/// as the "instance". Definitions are created at content-authoring
/// time, never mutated, and shared behind an `Arc` so they outlive
/// every stack that references them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique identifier (used for lookups and stacking equality)
    pub id: String,

    /// Display name shown in UI
    pub name: String,

    /// Description shown in tooltips
    pub description: String,

    /// Grid cells this item occupies before rotation
    pub footprint: Footprint,

    /// Maximum stack size (1 = effectively non-stackable, 64 = typical)
    pub max_stack_size: u32,

    /// Whether multiple copies may share one stack
    pub is_stackable: bool,

    /// Item-specific properties and behaviors
    pub properties: ItemProperties,
}

impl ItemDefinition {
    /// Creates a new item definition
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        footprint: Footprint,
        max_stack_size: u32,
        is_stackable: bool,
        properties: ItemProperties,
    ) -> Self {
        ItemDefinition {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            footprint,
            max_stack_size,
            is_stackable,
            properties,
        }
    }

    /// Returns true if this item can stack with another
    ///
    /// Items can only stack if they're the same type and stackable.
    pub fn can_stack_with(&self, other: &ItemDefinition) -> bool {
        self.id == other.id && self.is_stackable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_rotation_swaps_axes() {
        let footprint = Footprint::new(2, 3);
        let rotated = footprint.rotated();

        assert_eq!(rotated.width, 3);
        assert_eq!(rotated.height, 2);
        assert_eq!(rotated.rotated(), footprint);
    }

    #[test]
    fn test_footprint_single_cell() {
        assert!(Footprint::SINGLE.is_single_cell());
        assert!(!Footprint::new(1, 2).is_single_cell());
        assert_eq!(Footprint::new(2, 3).cell_count(), 6);
    }

    #[test]
    fn test_can_stack_with_same_id() {
        let a = ItemDefinition::new(
            "scrap", "Scrap", "", Footprint::SINGLE, 20, true, ItemProperties::Material,
        );
        let b = a.clone();
        assert!(a.can_stack_with(&b));
    }

    #[test]
    fn test_cannot_stack_when_non_stackable() {
        let rifle = ItemDefinition::new(
            "rifle", "Rifle", "", Footprint::new(4, 2), 1, false, ItemProperties::Material,
        );
        assert!(!rifle.can_stack_with(&rifle.clone()));
    }
}
