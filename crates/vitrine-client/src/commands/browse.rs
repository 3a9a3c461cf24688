use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Context};
use vitrine_shared::encoding::decode_data_url;
use vitrine_shared::RecordId;
use vitrine_store::SlotStore;

use crate::commands::{format_size, record_line};
use crate::state::Gallery;

/// `vitrine list [--search <q>] [--json]`
pub fn list<S: SlotStore>(
    gallery: &mut Gallery<S>,
    query: Option<String>,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if let Some(query) = query {
        gallery.set_query(query);
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &gallery.view())?;
        writeln!(out)?;
        return Ok(());
    }

    let visible = gallery.visible();
    for record in &visible {
        writeln!(out, "{}", record_line(record))?;
    }

    if gallery.query().is_empty() {
        writeln!(out, "{} image(s)", visible.len())?;
    } else {
        writeln!(
            out,
            "{} of {} image(s) match \"{}\"",
            visible.len(),
            gallery.images().len(),
            gallery.query()
        )?;
    }

    Ok(())
}

/// `vitrine show <id> [--data] [--out <path>]`
///
/// Prints the metadata of one record and optionally its data URL, or writes
/// the decoded image to `save_to`. The preview selection is left alone.
pub fn show<S: SlotStore>(
    gallery: &Gallery<S>,
    id: &RecordId,
    with_data: bool,
    save_to: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let record = gallery
        .get(id)
        .ok_or_else(|| anyhow!("no image with id {id}"))?;

    let decoded = decode_data_url(&record.data).context("stored image data is unreadable")?;

    writeln!(out, "id:        {}", record.id)?;
    writeln!(out, "name:      {}", record.name)?;
    writeln!(out, "type:      {}", decoded.mime)?;
    writeln!(out, "size:      {} ({} bytes)", format_size(record.size_bytes), record.size_bytes)?;
    writeln!(out, "uploaded:  {}", record.uploaded_at.to_rfc3339())?;

    if with_data {
        writeln!(out, "{}", record.data)?;
    }

    if let Some(path) = save_to {
        std::fs::write(path, &decoded.bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        writeln!(out, "saved to {}", path.display())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::FileCandidate;
    use vitrine_store::MemorySlots;

    async fn sample() -> Gallery<MemorySlots> {
        let mut gallery = Gallery::hydrate(MemorySlots::new());
        gallery
            .ingest(vec![
                FileCandidate::from_bytes("Beach.png", "image/png", vec![1; 100]),
                FileCandidate::from_bytes("city.jpg", "image/jpeg", vec![2; 200]),
            ])
            .await
            .unwrap();
        gallery
    }

    #[tokio::test]
    async fn list_filters_by_query() {
        let mut gallery = sample().await;
        let mut out = Vec::new();
        list(&mut gallery, Some("beach".into()), false, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Beach"));
        assert!(!out.contains("city"));
        assert!(out.contains("1 of 2 image(s) match \"beach\""));
    }

    #[tokio::test]
    async fn list_json_is_a_view() {
        let mut gallery = sample().await;
        let mut out = Vec::new();
        list(&mut gallery, None, true, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["images"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn show_writes_decoded_image() {
        let gallery = sample().await;
        let id = gallery.images()[1].id.clone();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("city.jpg");

        let mut out = Vec::new();
        show(&gallery, &id, false, Some(&target), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("image/jpeg"));
        assert_eq!(std::fs::read(&target).unwrap(), vec![2; 200]);
        assert!(gallery.selected().is_none());
    }

    #[tokio::test]
    async fn show_unknown_id_fails() {
        let gallery = sample().await;
        let result = show(&gallery, &RecordId("nope".into()), false, None, &mut Vec::new());
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn show_keeps_open_preview() {
        let mut gallery = sample().await;
        let previewed = gallery.images()[0].id.clone();
        let shown = gallery.images()[1].id.clone();
        gallery.select(&previewed).unwrap();

        let mut out = Vec::new();
        show(&gallery, &shown, true, None, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("city"));
        assert!(out.contains("data:image/jpeg;base64,"));
        assert_eq!(gallery.selected().map(|r| &r.id), Some(&previewed));
    }
}
