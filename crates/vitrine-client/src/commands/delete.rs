use std::io::{self, BufRead, Write};

use vitrine_shared::{ImageRecord, RecordId};
use vitrine_store::SlotStore;

use crate::commands::format_size;
use crate::error::ClientError;
use crate::state::Gallery;

/// `vitrine delete <id> [--yes]`
///
/// `confirm` is asked once with the target record; the record is removed
/// only if it answers yes. An unknown id is reported and changes nothing.
pub fn delete<S: SlotStore>(
    gallery: &mut Gallery<S>,
    id: &RecordId,
    confirm: impl FnOnce(&ImageRecord) -> io::Result<bool>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let record = match gallery.request_delete(id) {
        Ok(record) => record.clone(),
        Err(ClientError::UnknownRecord(_)) => {
            writeln!(out, "no image with id {id}, nothing deleted")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let confirmed = match confirm(&record) {
        Ok(answer) => answer,
        Err(e) => {
            gallery.cancel_delete();
            return Err(e.into());
        }
    };

    if !confirmed {
        gallery.cancel_delete();
        writeln!(out, "kept {}", record.name)?;
        return Ok(());
    }

    gallery.confirm_delete()?;
    writeln!(out, "deleted {} ({})", record.name, record.id)?;
    Ok(())
}

/// Ask on stderr, read the answer from `input`. Only `y`/`yes` confirms.
pub fn prompt(record: &ImageRecord, input: &mut impl BufRead) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(
        stderr,
        "Delete \"{}\" ({})? [y/N] ",
        record.name,
        format_size(record.size_bytes)
    )?;
    stderr.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::FileCandidate;
    use vitrine_store::MemorySlots;

    async fn sample() -> (Gallery<MemorySlots>, RecordId) {
        let mut gallery = Gallery::hydrate(MemorySlots::new());
        let ids = gallery
            .ingest(vec![
                FileCandidate::from_bytes("a.png", "image/png", vec![0; 8]),
                FileCandidate::from_bytes("b.png", "image/png", vec![0; 8]),
            ])
            .await
            .unwrap();
        (gallery, ids[0].clone())
    }

    #[tokio::test]
    async fn confirmed_delete_removes_record() {
        let (mut gallery, id) = sample().await;
        let mut out = Vec::new();
        delete(&mut gallery, &id, |_| Ok(true), &mut out).unwrap();

        assert_eq!(gallery.images().len(), 1);
        assert!(gallery.get(&id).is_none());
        assert!(String::from_utf8(out).unwrap().starts_with("deleted a"));
    }

    #[tokio::test]
    async fn declined_delete_keeps_record() {
        let (mut gallery, id) = sample().await;
        let mut out = Vec::new();
        delete(&mut gallery, &id, |_| Ok(false), &mut out).unwrap();

        assert_eq!(gallery.images().len(), 2);
        assert!(gallery.pending_delete().is_none());
    }

    #[tokio::test]
    async fn unknown_id_is_noop() {
        let (mut gallery, _) = sample().await;
        let mut out = Vec::new();
        delete(&mut gallery, &RecordId("x".into()), |_| Ok(true), &mut out).unwrap();

        assert_eq!(gallery.images().len(), 2);
        assert!(String::from_utf8(out).unwrap().contains("nothing deleted"));
    }

    #[test]
    fn prompt_accepts_only_yes() {
        let record = ImageRecord::from_file("a.png", "image/png", b"a");
        assert!(prompt(&record, &mut "y\n".as_bytes()).unwrap());
        assert!(prompt(&record, &mut "YES\n".as_bytes()).unwrap());
        assert!(!prompt(&record, &mut "\n".as_bytes()).unwrap());
        assert!(!prompt(&record, &mut "nope\n".as_bytes()).unwrap());
    }
}
