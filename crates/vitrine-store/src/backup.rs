use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use vitrine_shared::{ImageRecord, Theme};

use crate::error::Result;

/// Full gallery backup, serialized to JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPayload {
    /// ISO 8601 timestamp of when the backup was created
    pub created_at: String,
    /// App version that produced the backup
    pub version: String,
    #[serde(default)]
    pub theme: Theme,
    pub images: Vec<ImageRecord>,
}

impl BackupPayload {
    pub fn new(theme: Theme, images: Vec<ImageRecord>) -> Self {
        Self {
            created_at: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            theme,
            images,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStats {
    pub images_imported: usize,
    pub images_skipped: usize,
}

/// Append the payload's records whose id is not in `images` yet, in payload
/// order.
pub fn merge_backup(images: &mut Vec<ImageRecord>, payload: &BackupPayload) -> ImportStats {
    let mut known: HashSet<_> = images.iter().map(|r| r.id.clone()).collect();
    let mut stats = ImportStats::default();

    for record in &payload.images {
        if known.insert(record.id.clone()) {
            images.push(record.clone());
            stats.images_imported += 1;
        } else {
            stats.images_skipped += 1;
        }
    }

    stats
}
