/// CSV and JSON export of scan results.
///
/// CSV is flat, one row per member with the group's 1-based rank and label
/// repeated on every row, so it opens cleanly in a spreadsheet. JSON keeps
/// the nested group structure as produced by the core.
use crate::format::format_modified;
use anyhow::{Context, Result};
use namesake_core::Group;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    group: usize,
    label: &'a str,
    kind: &'static str,
    name: &'a str,
    relative_path: &'a str,
    size_bytes: u64,
    modified: String,
    path: String,
}

/// Write one CSV row per group member, with a header row.
pub fn write_csv<W: Write>(groups: &[Group], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    let mut rows = 0usize;

    for (rank, group) in groups.iter().enumerate() {
        for member in &group.members {
            writer
                .serialize(CsvRow {
                    group: rank + 1,
                    label: &group.label,
                    kind: if member.is_file { "file" } else { "folder" },
                    name: &member.display_name,
                    relative_path: &member.relative_path,
                    size_bytes: member.size,
                    modified: format_modified(member.modified.as_ref()),
                    path: member.absolute_path.to_string_lossy().into_owned(),
                })
                .context("failed to write CSV row")?;
            rows += 1;
        }
    }

    // An empty result still gets a header so downstream tools see the schema.
    if rows == 0 {
        writer
            .write_record([
                "group",
                "label",
                "kind",
                "name",
                "relative_path",
                "size_bytes",
                "modified",
                "path",
            ])
            .context("failed to write CSV header")?;
    }

    writer.flush().context("failed to flush CSV output")?;
    debug!("Exported {rows} CSV rows across {} groups", groups.len());
    Ok(())
}

/// Write the groups as a pretty-printed JSON array.
pub fn write_json<W: Write>(groups: &[Group], mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, groups).context("failed to serialize groups")?;
    writeln!(out).context("failed to write JSON output")?;
    out.flush().context("failed to flush JSON output")?;
    debug!("Exported {} groups as JSON", groups.len());
    Ok(())
}
