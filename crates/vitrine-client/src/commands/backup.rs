use std::io::Write;
use std::path::Path;

use anyhow::Context;
use vitrine_store::{BackupPayload, SlotStore};

use crate::state::Gallery;

/// `vitrine backup export <path>`
pub fn export<S: SlotStore>(
    gallery: &Gallery<S>,
    path: &Path,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let payload = gallery.export_backup();
    let json = payload.to_json()?;

    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;

    writeln!(
        out,
        "exported {} image(s) to {}",
        payload.images.len(),
        path.display()
    )?;
    Ok(())
}

/// `vitrine backup import <path>`
pub fn import<S: SlotStore>(
    gallery: &mut Gallery<S>,
    path: &Path,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let payload = BackupPayload::from_json(&raw)
        .with_context(|| format!("{} is not a gallery backup", path.display()))?;

    let stats = gallery.import_backup(&payload);
    writeln!(
        out,
        "imported {} image(s), skipped {} already present",
        stats.images_imported, stats.images_skipped
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::FileCandidate;
    use vitrine_store::MemorySlots;

    #[tokio::test]
    async fn export_then_import_into_other_gallery() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backup.json");

        let mut source = Gallery::hydrate(MemorySlots::new());
        source
            .ingest(vec![FileCandidate::from_bytes("a.png", "image/png", vec![1; 4])])
            .await
            .unwrap();
        export(&source, &path, &mut Vec::new()).unwrap();

        let mut target = Gallery::hydrate(MemorySlots::new());
        let mut out = Vec::new();
        import(&mut target, &path, &mut out).unwrap();

        assert_eq!(target.images(), source.images());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "imported 1 image(s), skipped 0 already present\n"
        );
    }

    #[test]
    fn import_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.json");
        std::fs::write(&path, "not json").unwrap();

        let mut gallery = Gallery::hydrate(MemorySlots::new());
        assert!(import(&mut gallery, &path, &mut Vec::new()).is_err());
    }
}
