use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use vitrine_store::SlotStore;

use crate::commands::record_line;
use crate::ingest::FileCandidate;
use crate::state::Gallery;

/// `vitrine add <file>...`
pub async fn add<S: SlotStore>(
    gallery: &mut Gallery<S>,
    paths: Vec<PathBuf>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if paths.is_empty() {
        bail!("no files given");
    }

    let candidates: Vec<_> = paths.iter().map(FileCandidate::from_path).collect();
    let offered = candidates.len();

    let ids = gallery
        .ingest(candidates)
        .await
        .context("upload aborted, nothing was added")?;

    for record in ids.iter().filter_map(|id| gallery.get(id)) {
        writeln!(out, "added  {}", record_line(record))?;
    }

    let skipped = offered - ids.len();
    if skipped > 0 {
        writeln!(out, "skipped {skipped} non-image file(s)")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_store::MemorySlots;

    #[tokio::test]
    async fn adds_images_and_reports_skips() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("holiday.jpg");
        let text = dir.path().join("notes.txt");
        std::fs::write(&image, [0xFFu8, 0xD8, 0xFF]).unwrap();
        std::fs::write(&text, b"hello").unwrap();

        let mut gallery = Gallery::hydrate(MemorySlots::new());
        let mut out = Vec::new();
        add(&mut gallery, vec![image, text], &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("holiday"));
        assert!(out.contains("skipped 1 non-image file(s)"));
        assert_eq!(gallery.images().len(), 1);
    }

    #[tokio::test]
    async fn missing_file_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let mut gallery = Gallery::hydrate(MemorySlots::new());
        let mut out = Vec::new();

        let result = add(&mut gallery, vec![dir.path().join("gone.png")], &mut out).await;
        assert!(result.is_err());
        assert!(gallery.images().is_empty());
    }

    #[tokio::test]
    async fn empty_argument_list_is_rejected() {
        let mut gallery = Gallery::hydrate(MemorySlots::new());
        assert!(add(&mut gallery, Vec::new(), &mut Vec::new()).await.is_err());
    }
}
