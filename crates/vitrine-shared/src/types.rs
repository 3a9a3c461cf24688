use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::collection::display_name;
use crate::constants::ID_SUFFIX_LEN;
use crate::encoding::encode_data_url;
use crate::error::VitrineError;

// Record id = unix millis + random base36 suffix, e.g. "1718000000000-k3j9x0a1b"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    /// Mint a fresh id. Two ids minted in the same millisecond only differ
    /// by their random suffix.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let mut rng = rand::thread_rng();
        let suffix: String = (0..ID_SUFFIX_LEN)
            .filter_map(|_| std::char::from_digit(rng.gen_range(0..36), 36))
            .collect();
        Self(format!("{millis}-{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            return Err(VitrineError::InvalidRecordId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

/// One uploaded image.
///
/// Records are created once during ingestion and never mutated afterwards.
/// Field names match the persisted JSON shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: RecordId,
    /// Original file name without its extension. Not unique.
    pub name: String,
    /// `data:<mime>;base64,<payload>` URL, directly renderable.
    pub data: String,
    /// Original file size in bytes.
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl ImageRecord {
    /// Build a record from a file that was just read.
    pub fn from_file(file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        Self {
            id: RecordId::generate(),
            name: display_name(file_name),
            data: encode_data_url(content_type, bytes),
            size_bytes: bytes.len() as u64,
            uploaded_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored slot value. Only `"dark"` selects the dark theme;
    /// anything else, including an empty slot, is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(VitrineError::InvalidTheme(other.to_string())),
        }
    }
}
