//! Client-side gallery state.
//!
//! [`Gallery`] owns the in-memory collection, hydrated once from the store,
//! and every piece of interaction state the rendering layer needs: the
//! search query, the previewed record, the record awaiting delete
//! confirmation, the theme and the uploading flag. Every mutation of the
//! collection or theme is written back to the store as a whole value.

use tokio::sync::watch;
use tracing::{error, info};

use vitrine_shared::collection::{filter_records, find_record, remove_record};
use vitrine_shared::{ImageRecord, RecordId, Theme};
use vitrine_store::backup::merge_backup;
use vitrine_store::{BackupPayload, GalleryStore, ImportStats, SlotStore};

use crate::error::ClientError;
use crate::ingest::{read_batch, FileCandidate};

pub struct Gallery<S> {
    store: GalleryStore<S>,
    images: Vec<ImageRecord>,
    theme: Theme,
    query: String,
    selected: Option<RecordId>,
    pending_delete: Option<RecordId>,
    uploading: watch::Sender<bool>,
}

/// Holds the uploading flag up while alive. Lowering it on drop covers a
/// batch future that is cancelled before it resolves.
struct UploadingGuard<'a>(&'a watch::Sender<bool>);

impl<'a> UploadingGuard<'a> {
    fn raise(flag: &'a watch::Sender<bool>) -> Self {
        flag.send_replace(true);
        Self(flag)
    }
}

impl Drop for UploadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

impl<S: SlotStore> Gallery<S> {
    /// Hydrate the gallery from storage. Missing or corrupt data starts an
    /// empty gallery.
    pub fn hydrate(slots: S) -> Self {
        let store = GalleryStore::new(slots);
        let images = store.load_images();
        let theme = store.load_theme();
        let (uploading, _) = watch::channel(false);

        info!(images = images.len(), theme = %theme, "gallery hydrated");

        Self {
            store,
            images,
            theme,
            query: String::new(),
            selected: None,
            pending_delete: None,
            uploading,
        }
    }

    pub fn store(&self) -> &GalleryStore<S> {
        &self.store
    }

    /// Full collection in upload order.
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn get(&self, id: &RecordId) -> Option<&ImageRecord> {
        find_record(&self.images, id)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Records matching the current query.
    pub fn visible(&self) -> Vec<&ImageRecord> {
        filter_records(&self.images, &self.query)
    }

    pub fn is_uploading(&self) -> bool {
        *self.uploading.borrow()
    }

    /// Subscribe to the uploading flag. The receiver observes the flag while
    /// a batch is being read.
    pub fn watch_uploading(&self) -> watch::Receiver<bool> {
        self.uploading.subscribe()
    }

    // ------------------------------------------------------------------
    // Ingestion
    // ------------------------------------------------------------------

    /// Read a batch of candidate files and append the resulting records in
    /// one update. Non-images are skipped. If any read fails nothing is
    /// appended. The uploading flag is raised for the duration of the reads
    /// and always cleared afterwards.
    pub async fn ingest(&mut self, files: Vec<FileCandidate>) -> Result<Vec<RecordId>, ClientError> {
        let offered = files.len();

        let result = {
            let _uploading = UploadingGuard::raise(&self.uploading);
            read_batch(files).await
        };

        let batch = match result {
            Ok(batch) => batch,
            Err(e) => {
                error!(error = %e, "upload batch aborted");
                return Err(e);
            }
        };

        if batch.is_empty() {
            info!(offered, "upload batch contained no images");
            return Ok(Vec::new());
        }

        let ids = batch.iter().map(|r| r.id.clone()).collect();
        info!(offered, accepted = batch.len(), "upload batch committed");

        self.images.extend(batch);
        self.persist_images();

        Ok(ids)
    }

    // ------------------------------------------------------------------
    // Preview
    // ------------------------------------------------------------------

    /// Open the full-size preview of a record. Unknown ids leave the
    /// selection unchanged.
    pub fn select(&mut self, id: &RecordId) -> Option<&ImageRecord> {
        let idx = self.images.iter().position(|r| &r.id == id)?;
        self.selected = Some(id.clone());
        Some(&self.images[idx])
    }

    pub fn selected(&self) -> Option<&ImageRecord> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn close_preview(&mut self) {
        self.selected = None;
    }

    // ------------------------------------------------------------------
    // Deletion
    // ------------------------------------------------------------------

    /// Remove a record right away. Deleting an unknown id changes nothing
    /// and returns `None`.
    pub fn delete(&mut self, id: &RecordId) -> Option<ImageRecord> {
        let removed = remove_record(&mut self.images, id)?;

        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        if self.pending_delete.as_ref() == Some(id) {
            self.pending_delete = None;
        }

        info!(id = %id, name = %removed.name, "record deleted");
        self.persist_images();

        Some(removed)
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: &RecordId) -> Result<&ImageRecord, ClientError> {
        let idx = self
            .images
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| ClientError::UnknownRecord(id.clone()))?;
        self.pending_delete = Some(id.clone());
        Ok(&self.images[idx])
    }

    pub fn pending_delete(&self) -> Option<&ImageRecord> {
        self.pending_delete.as_ref().and_then(|id| self.get(id))
    }

    /// Delete the record awaiting confirmation.
    pub fn confirm_delete(&mut self) -> Result<Option<ImageRecord>, ClientError> {
        let id = self
            .pending_delete
            .take()
            .ok_or(ClientError::NoPendingDelete)?;
        Ok(self.delete(&id))
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.store.save_theme(theme) {
            error!(error = %e, "failed to persist theme");
        }
    }

    // ------------------------------------------------------------------
    // Backup
    // ------------------------------------------------------------------

    pub fn export_backup(&self) -> BackupPayload {
        BackupPayload::new(self.theme, self.images.clone())
    }

    /// Append the backup's records that are not in the gallery yet.
    pub fn import_backup(&mut self, payload: &BackupPayload) -> ImportStats {
        let stats = merge_backup(&mut self.images, payload);
        if stats.images_imported > 0 {
            self.persist_images();
        }
        info!(
            imported = stats.images_imported,
            skipped = stats.images_skipped,
            "backup imported"
        );
        stats
    }

    // Save failures are logged only; the in-memory state stays as the user
    // last saw it.
    fn persist_images(&self) {
        if let Err(e) = self.store.save_images(&self.images) {
            error!(error = %e, count = self.images.len(), "failed to persist images");
        }
    }
}
