//! The rendering boundary: user intents going in, view snapshots coming out.

use serde::Serialize;

use vitrine_shared::{ImageRecord, RecordId, Theme};
use vitrine_store::SlotStore;

use crate::error::ClientError;
use crate::ingest::FileCandidate;
use crate::state::Gallery;

/// Everything the user can ask the gallery to do.
#[derive(Debug)]
pub enum Intent {
    Upload(Vec<FileCandidate>),
    Search(String),
    Select(RecordId),
    ClosePreview,
    RequestDelete(RecordId),
    ConfirmDelete,
    CancelDelete,
    ToggleTheme,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Upload(_) => "upload",
            Self::Search(_) => "search",
            Self::Select(_) => "select",
            Self::ClosePreview => "close-preview",
            Self::RequestDelete(_) => "request-delete",
            Self::ConfirmDelete => "confirm-delete",
            Self::CancelDelete => "cancel-delete",
            Self::ToggleTheme => "toggle-theme",
        }
    }
}

/// Snapshot of what should be on screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryView {
    pub theme: Theme,
    pub query: String,
    pub uploading: bool,
    pub total: usize,
    pub images: Vec<ImageRecord>,
    pub selected: Option<ImageRecord>,
    pub pending_delete: Option<ImageRecord>,
}

impl<S: SlotStore> Gallery<S> {
    /// Apply one intent. Handlers run to completion before the next intent
    /// is processed.
    pub async fn dispatch(&mut self, intent: Intent) -> Result<(), ClientError> {
        tracing::debug!(intent = intent.name(), "dispatching intent");

        match intent {
            Intent::Upload(files) => {
                self.ingest(files).await?;
            }
            Intent::Search(query) => self.set_query(query),
            Intent::Select(id) => {
                self.select(&id);
            }
            Intent::ClosePreview => self.close_preview(),
            Intent::RequestDelete(id) => {
                self.request_delete(&id)?;
            }
            Intent::ConfirmDelete => {
                self.confirm_delete()?;
            }
            Intent::CancelDelete => self.cancel_delete(),
            Intent::ToggleTheme => {
                self.toggle_theme();
            }
        }

        Ok(())
    }

    pub fn view(&self) -> GalleryView {
        GalleryView {
            theme: self.theme(),
            query: self.query().to_string(),
            uploading: self.is_uploading(),
            total: self.images().len(),
            images: self.visible().into_iter().cloned().collect(),
            selected: self.selected().cloned(),
            pending_delete: self.pending_delete().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_store::MemorySlots;

    #[tokio::test]
    async fn intents_drive_the_view() {
        let mut gallery = Gallery::hydrate(MemorySlots::new());

        gallery
            .dispatch(Intent::Upload(vec![
                FileCandidate::from_bytes("photo.png", "image/png", vec![0; 2048]),
                FileCandidate::from_bytes("sunset.jpg", "image/jpeg", vec![0; 512]),
            ]))
            .await
            .unwrap();

        gallery.dispatch(Intent::Search("PHO".into())).await.unwrap();
        let view = gallery.view();
        assert_eq!(view.total, 2);
        assert_eq!(view.images.len(), 1);
        assert_eq!(view.images[0].name, "photo");
        assert!(!view.uploading);

        let id = view.images[0].id.clone();
        gallery.dispatch(Intent::Select(id.clone())).await.unwrap();
        assert_eq!(gallery.view().selected.map(|r| r.id), Some(id.clone()));

        gallery.dispatch(Intent::RequestDelete(id.clone())).await.unwrap();
        assert!(gallery.view().pending_delete.is_some());

        gallery.dispatch(Intent::ConfirmDelete).await.unwrap();
        let view = gallery.view();
        assert_eq!(view.total, 1);
        assert!(view.images.is_empty());
        assert!(view.selected.is_none());
        assert!(view.pending_delete.is_none());
    }

    #[tokio::test]
    async fn toggle_and_close_preview() {
        let mut gallery = Gallery::hydrate(MemorySlots::new());
        gallery.dispatch(Intent::ToggleTheme).await.unwrap();
        gallery.dispatch(Intent::ClosePreview).await.unwrap();
        gallery.dispatch(Intent::CancelDelete).await.unwrap();

        let view = gallery.view();
        assert_eq!(view.theme, Theme::Dark);
        assert!(view.selected.is_none());
    }

    #[test]
    fn view_serializes_camel_case() {
        let gallery = Gallery::hydrate(MemorySlots::new());
        let json = serde_json::to_value(gallery.view()).unwrap();
        assert_eq!(json["theme"], "light");
        assert_eq!(json["pendingDelete"], serde_json::Value::Null);
        assert_eq!(json["total"], 0);
    }
}
