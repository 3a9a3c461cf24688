//! Typed access to the gallery's two slots.
//!
//! The image collection is stored as one JSON array and the theme as a plain
//! `"dark"` / `"light"` string. Both are always written as whole values.
//! Loading never fails: an empty, unreadable or corrupt slot yields the
//! default state and a warning in the log.

use vitrine_shared::constants::{IMAGES_SLOT, THEME_SLOT};
use vitrine_shared::{ImageRecord, Theme};

use crate::error::Result;
use crate::slots::SlotStore;

/// Store adapter for the gallery state, generic over the storage port.
pub struct GalleryStore<S> {
    slots: S,
}

impl<S: SlotStore> GalleryStore<S> {
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Load the persisted collection, or an empty one if nothing usable is
    /// stored.
    pub fn load_images(&self) -> Vec<ImageRecord> {
        let raw = match self.slots.read(IMAGES_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(slot = IMAGES_SLOT, error = %e, "failed to read stored images");
                return Vec::new();
            }
        };

        match parse_images(&raw) {
            Ok(images) => {
                tracing::debug!(count = images.len(), "loaded stored images");
                images
            }
            Err(e) => {
                tracing::warn!(
                    slot = IMAGES_SLOT,
                    error = %e,
                    "stored images are corrupt, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Replace the stored collection with `images`.
    pub fn save_images(&self, images: &[ImageRecord]) -> Result<()> {
        let json = serde_json::to_string(images)?;
        self.slots.write(IMAGES_SLOT, &json)?;
        tracing::debug!(count = images.len(), bytes = json.len(), "saved images");
        Ok(())
    }

    pub fn load_theme(&self) -> Theme {
        match self.slots.read(THEME_SLOT) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(e) => {
                tracing::warn!(slot = THEME_SLOT, error = %e, "failed to read stored theme");
                Theme::default()
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        self.slots.write(THEME_SLOT, theme.as_str())
    }
}

/// Parse the JSON stored in the images slot.
pub fn parse_images(raw: &str) -> serde_json::Result<Vec<ImageRecord>> {
    serde_json::from_str(raw)
}
