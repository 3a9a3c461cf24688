//! The storage port: named text slots that survive across sessions.

use crate::error::Result;

/// A key-value facility holding whole text values under fixed slot names.
///
/// Writes replace the previous value entirely; there are no partial
/// updates. Implementations must be usable through a shared reference.
pub trait SlotStore {
    /// Read a slot. `Ok(None)` means the slot has never been written or was
    /// removed.
    fn read(&self, slot: &str) -> Result<Option<String>>;

    /// Replace the value of a slot.
    fn write(&self, slot: &str, value: &str) -> Result<()>;

    /// Remove a slot. Removing an absent slot is not an error.
    fn remove(&self, slot: &str) -> Result<()>;
}

impl<S: SlotStore + ?Sized> SlotStore for &S {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, value: &str) -> Result<()> {
        (**self).write(slot, value)
    }

    fn remove(&self, slot: &str) -> Result<()> {
        (**self).remove(slot)
    }
}
