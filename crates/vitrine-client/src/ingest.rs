//! Turning selected or dropped files into image records.
//!
//! A batch is read concurrently and committed all at once: either every
//! accepted file is read and becomes a record, or the first failed read
//! aborts the whole batch. Files whose declared content type is not an
//! image are dropped before any read starts.

use std::io;
use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use tokio::sync::oneshot;
use tracing::debug;

use vitrine_shared::encoding::{is_image_type, mime_for_path};
use vitrine_shared::ImageRecord;

use crate::error::ClientError;

/// Where a candidate's bytes come from.
#[derive(Debug)]
pub enum FileSource {
    /// A file on disk, read with `tokio::fs`.
    Path(PathBuf),
    /// Bytes already in memory (e.g. a drop payload).
    Bytes(Vec<u8>),
    /// Bytes delivered later by another task.
    Incoming(oneshot::Receiver<io::Result<Vec<u8>>>),
}

impl FileSource {
    async fn read(self) -> io::Result<Vec<u8>> {
        match self {
            Self::Path(path) => tokio::fs::read(&path).await,
            Self::Bytes(bytes) => Ok(bytes),
            Self::Incoming(rx) => rx.await.unwrap_or_else(|_| {
                Err(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "file source dropped before delivering data",
                ))
            }),
        }
    }
}

/// One file offered for upload.
#[derive(Debug)]
pub struct FileCandidate {
    pub file_name: String,
    /// Content type as declared by the picker / drop source.
    pub content_type: Option<String>,
    pub source: FileSource,
}

impl FileCandidate {
    /// A file on disk. Its content type is declared from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Self {
            file_name,
            content_type: mime_for_path(path).map(str::to_string),
            source: FileSource::Path(path.to_path_buf()),
        }
    }

    pub fn from_bytes(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: Some(content_type.into()),
            source: FileSource::Bytes(bytes),
        }
    }

    /// A candidate whose bytes arrive through the returned sender.
    pub fn incoming(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> (Self, oneshot::Sender<io::Result<Vec<u8>>>) {
        let (tx, rx) = oneshot::channel();
        let candidate = Self {
            file_name: file_name.into(),
            content_type: Some(content_type.into()),
            source: FileSource::Incoming(rx),
        };
        (candidate, tx)
    }

    pub fn is_image(&self) -> bool {
        self.content_type.as_deref().is_some_and(is_image_type)
    }
}

/// Read every image in `files` and build one record per file, in input
/// order. Non-images are skipped silently.
pub async fn read_batch(files: Vec<FileCandidate>) -> Result<Vec<ImageRecord>, ClientError> {
    let reads = files
        .into_iter()
        .filter(|file| {
            let accepted = file.is_image();
            if !accepted {
                debug!(
                    file_name = %file.file_name,
                    content_type = ?file.content_type,
                    "skipping non-image file"
                );
            }
            accepted
        })
        .map(|file| async move {
            let FileCandidate {
                file_name,
                content_type,
                source,
            } = file;

            let bytes = source.read().await.map_err(|source| ClientError::Read {
                file_name: file_name.clone(),
                source,
            })?;

            let content_type = content_type.unwrap_or_default();
            Ok::<_, ClientError>(ImageRecord::from_file(&file_name, &content_type, &bytes))
        });

    try_join_all(reads).await
}
