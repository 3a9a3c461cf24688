//! Self-describing text encoding of image bytes.
//!
//! Images are stored as `data:<mime>;base64,<payload>` URLs so that the
//! rendering layer can use them directly and the whole collection can be
//! persisted as plain text.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::constants::{IMAGE_MIME_PREFIX, IMAGE_MIME_TYPES};
use crate::error::VitrineError;

/// A decoded data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Decode a base64 data URL back into its MIME type and bytes.
pub fn decode_data_url(url: &str) -> Result<DataUrl, VitrineError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| VitrineError::InvalidDataUrl("missing 'data:' scheme".into()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| VitrineError::InvalidDataUrl("missing ',' separator".into()))?;

    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| VitrineError::InvalidDataUrl("only base64 payloads are supported".into()))?;

    let bytes = STANDARD.decode(payload)?;

    Ok(DataUrl {
        mime: mime.to_string(),
        bytes,
    })
}

/// Whether a declared content type denotes an image.
pub fn is_image_type(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with(IMAGE_MIME_PREFIX)
}

/// Declared content type for a path, based on its extension.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    IMAGE_MIME_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}
