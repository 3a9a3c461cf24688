//! Pure operations over the ordered image collection.

use crate::types::{ImageRecord, RecordId};

/// Display name for an uploaded file: the file name minus its final
/// extension. `"photo.png"` becomes `"photo"`, `"a.tar.gz"` becomes `"a.tar"`,
/// names without an extension are kept whole.
pub fn display_name(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) => {
            let ext = &file_name[idx + 1..];
            if ext.is_empty() || ext.contains('/') {
                file_name.to_string()
            } else {
                file_name[..idx].to_string()
            }
        }
        None => file_name.to_string(),
    }
}

/// Records whose name contains `query`, ignoring case, in collection order.
/// An empty query matches everything.
pub fn filter_records<'a>(records: &'a [ImageRecord], query: &str) -> Vec<&'a ImageRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}

/// Remove the record with `id`, keeping the survivors in their order.
/// Returns the removed record, or `None` (collection untouched) if no
/// record has that id.
pub fn remove_record(records: &mut Vec<ImageRecord>, id: &RecordId) -> Option<ImageRecord> {
    let idx = records.iter().position(|r| &r.id == id)?;
    Some(records.remove(idx))
}

pub fn find_record<'a>(records: &'a [ImageRecord], id: &RecordId) -> Option<&'a ImageRecord> {
    records.iter().find(|r| &r.id == id)
}
