use thiserror::Error;
use vitrine_shared::RecordId;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to read '{file_name}': {source}")]
    Read {
        file_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No record with id {0}")]
    UnknownRecord(RecordId),

    #[error("No deletion is awaiting confirmation")]
    NoPendingDelete,
}
