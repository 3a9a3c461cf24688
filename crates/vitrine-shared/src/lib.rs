//! # vitrine-shared
//!
//! Data model and pure operations shared by the store and client crates:
//! image records, record ids, the theme flag, data-URL encoding and the
//! collection helpers (search filter, deletion).

pub mod collection;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod types;

pub use error::VitrineError;
pub use types::{ImageRecord, RecordId, Theme};
