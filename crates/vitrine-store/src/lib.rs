//! # vitrine-store
//!
//! Persistent storage for the Vitrine gallery.
//!
//! Persistence is modelled as a set of named text slots (the [`SlotStore`]
//! port). The crate ships a SQLite-backed [`Database`] adapter for real use
//! and an in-memory [`MemorySlots`] fake for tests. [`GalleryStore`] sits on
//! top of any port and reads/writes the image collection and theme flag as
//! whole values.

pub mod backup;
pub mod database;
pub mod gallery;
pub mod memory;
pub mod migrations;
pub mod slots;

mod error;

pub use backup::{BackupPayload, ImportStats};
pub use database::Database;
pub use error::{Result, StoreError};
pub use gallery::GalleryStore;
pub use memory::MemorySlots;
pub use slots::SlotStore;
