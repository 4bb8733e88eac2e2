use serde::{Serialize, Deserialize};

/// Different categories of items with type-specific data
///
/// This enum enables different item types to have different behaviors
/// while sharing the core ItemDefinition structure. An item that needs
/// several behaviors at once should grow a new variant combining them
/// rather than stacking variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemProperties {
    /// Basic material (no special properties)
    Material,

    /// Item that can be equipped by the holder
    Equippable,

    /// Consumable item
    Consumable {
        /// Amount of health or energy restored on use
        value: f32,
    },

    /// Item that can be deployed into the world
    Deployable {
        /// Seconds the deploy action takes
        time_to_deploy: f32,
    },
}

impl Default for ItemProperties {
    fn default() -> Self {
        ItemProperties::Material
    }
}
