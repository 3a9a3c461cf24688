//! In-process slot storage, used as a test double and for ephemeral runs.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, StoreError};
use crate::slots::SlotStore;

/// Slots kept in a map. Optionally enforces a byte quota over the sum of
/// slot name and value lengths, the way browser storage does.
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.slots
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("Lock poisoned: {e}")))
    }
}

impl SlotStore for MemorySlots {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(slot).cloned())
    }

    fn write(&self, slot: &str, value: &str) -> Result<()> {
        let mut slots = self.lock()?;

        if let Some(quota) = self.quota {
            let others: usize = slots
                .iter()
                .filter(|(name, _)| name.as_str() != slot)
                .map(|(name, v)| name.len() + v.len())
                .sum();
            let needed = others + slot.len() + value.len();
            if needed > quota {
                return Err(StoreError::QuotaExceeded { needed, quota });
            }
        }

        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        self.lock()?.remove(slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_remove() {
        let slots = MemorySlots::new();
        assert!(slots.read("theme").unwrap().is_none());

        slots.write("theme", "dark").unwrap();
        assert_eq!(slots.read("theme").unwrap().as_deref(), Some("dark"));

        slots.remove("theme").unwrap();
        assert!(slots.read("theme").unwrap().is_none());
    }

    #[test]
    fn quota_rejects_oversized_write_and_keeps_old_value() {
        let slots = MemorySlots::with_quota(16);
        slots.write("k", "small").unwrap();

        let err = slots.write("k", &"x".repeat(64)).unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { quota: 16, .. }));
        assert_eq!(slots.read("k").unwrap().as_deref(), Some("small"));
    }

    #[test]
    fn quota_counts_replaced_value_once() {
        let slots = MemorySlots::with_quota(10);
        slots.write("k", "12345678").unwrap();
        // replacing the same slot must not count the old value
        slots.write("k", "87654321").unwrap();
    }
}
