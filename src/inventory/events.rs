use serde::{Serialize, Deserialize};

/// What happened to a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotEventKind {
    /// A stack was newly created in the slot (reserved for presentation
    /// layers that distinguish first placement from updates)
    Added,

    /// The slot's stack or placement metadata changed
    Changed,

    /// Quantity was removed from the slot's stack
    Removed,
}

/// Notification emitted by a slot mutation
///
/// Every mutating slot operation yields exactly one event. The container
/// queues them; presentation layers (grid UI) drain the queue with
/// [`Container::drain_events`](crate::Container::drain_events) after each
/// batch of operations. A drained queue replaces the synchronous callback
/// wiring an engine would provide, and keeps subscribers from re-entering
/// the container mid-mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct SlotEvent {
    /// Linear index of the slot that changed
    pub index: usize,

    /// What kind of change occurred
    pub kind: SlotEventKind,
}

impl SlotEvent {
    /// Event for a slot whose contents changed
    pub fn changed(index: usize) -> Self {
        SlotEvent { index, kind: SlotEventKind::Changed }
    }

    /// Event for a slot that had quantity removed
    pub fn removed(index: usize) -> Self {
        SlotEvent { index, kind: SlotEventKind::Removed }
    }
}
