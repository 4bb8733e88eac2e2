use std::fmt;

/// Errors that can occur during inventory operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Container slot count is not a whole number of rows
    MalformedGrid {
        slot_count: usize,
        width: u32,
    },

    /// Slot index out of bounds
    InvalidSlot(usize),

    /// Operation needs an occupied slot but the slot holds no stack
    InvalidSlotState(usize),

    /// Stack has been cleared and no longer refers to a definition
    MissingDefinition,

    /// Item id already registered
    DuplicateItem(String),
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InventoryError::MalformedGrid { slot_count, width } => {
                write!(f, "{} slots cannot form a grid of width {}", slot_count, width)
            }
            InventoryError::InvalidSlot(index) => {
                write!(f, "Invalid slot index: {}", index)
            }
            InventoryError::InvalidSlotState(index) => {
                write!(f, "Slot {} holds no stack", index)
            }
            InventoryError::MissingDefinition => {
                write!(f, "Item stack has no definition")
            }
            InventoryError::DuplicateItem(id) => {
                write!(f, "Item '{}' already registered", id)
            }
        }
    }
}

impl std::error::Error for InventoryError {}

impl From<InventoryError> for String {
    fn from(error: InventoryError) -> Self {
        error.to_string()
    }
}
