/// Namesake Report: rendering of similarity groups for people and tools.
///
/// This crate contains all presentation code. Business logic lives in
/// `namesake-core`; nothing here touches the filesystem except through the
/// writer it is handed.
pub mod export;
pub mod format;
pub mod text;

pub use export::{write_csv, write_json};
pub use format::{format_count, format_megabytes, format_modified, format_size};
pub use text::{render_text, NO_GROUPS_MESSAGE};

use namesake_core::ScanReport;

/// One-line summary printed after a scan.
pub fn completion_line(report: &ScanReport) -> String {
    let mut line = format!(
        "Scan completed! {} groups found. Total {} items.",
        format_count(report.groups.len() as u64),
        format_count(report.items_found)
    );
    if report.error_count > 0 {
        line.push_str(&format!(
            " {} unreadable entries skipped.",
            format_count(report.error_count)
        ));
    }
    let reclaimable: u64 = report.groups.iter().map(|g| g.reclaimable_size()).sum();
    if reclaimable > 0 {
        line.push_str(&format!(
            " Up to {} held by redundant copies.",
            format_size(reclaimable)
        ));
    }
    line
}
