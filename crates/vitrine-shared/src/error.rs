use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitrineError {
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid record id: {0}")]
    InvalidRecordId(String),

    #[error("Unknown theme: {0}")]
    InvalidTheme(String),
}
