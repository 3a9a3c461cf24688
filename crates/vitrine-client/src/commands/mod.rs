//! Handlers behind the `vitrine` command line. Each one drives a
//! [`crate::Gallery`] and writes human-readable output to `out`.

pub mod backup;
pub mod browse;
pub mod delete;
pub mod theme;
pub mod upload;

use vitrine_shared::ImageRecord;

pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;

    let b = bytes as f64;
    if b >= MIB {
        format!("{:.1} MiB", b / MIB)
    } else if b >= KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// One line per record: id, name, size, upload time.
pub fn record_line(record: &ImageRecord) -> String {
    format!(
        "{}  {}  {}  {}",
        record.id,
        record.name,
        format_size(record.size_bytes),
        record.uploaded_at.format("%Y-%m-%d %H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(2048), "2.0 KiB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MiB");
    }
}
