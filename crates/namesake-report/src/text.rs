/// Plain-text tree rendering of similarity groups.
///
/// One header line per group followed by an indented, column-aligned row
/// per member:
///
/// ```text
/// report_v1.txt (*.txt) (2 items - 10.00 MB)
///   File    report_v1.txt   5.00 MB  2024-03-09 14:05  /data/report_v1.txt
///   File    report_v2.txt   5.00 MB  2024-03-09 14:06  /data/report_v2.txt
/// ```
use crate::format::{format_megabytes, format_modified};
use namesake_core::{EntryRecord, Group};
use std::io::{self, Write};

/// Printed in place of the tree when a scan finds nothing.
pub const NO_GROUPS_MESSAGE: &str = "No groups found matching the criteria.";

/// The Name column: the file name for files, the relative path for folders.
pub fn member_name(member: &EntryRecord) -> &str {
    if member.is_file {
        member.display_name.as_str()
    } else {
        member.relative_path.as_str()
    }
}

fn kind_label(member: &EntryRecord) -> &'static str {
    if member.is_file {
        "File"
    } else {
        "Folder"
    }
}

/// Header line for one group.
pub fn group_header(group: &Group) -> String {
    format!(
        "{} ({} items - {})",
        group.label,
        group.len(),
        format_megabytes(group.total_size)
    )
}

/// Write every group as an indented tree.
pub fn render_text<W: Write>(groups: &[Group], out: &mut W) -> io::Result<()> {
    if groups.is_empty() {
        writeln!(out, "{NO_GROUPS_MESSAGE}")?;
        return Ok(());
    }

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", group_header(group))?;

        let name_width = group
            .members
            .iter()
            .map(|m| member_name(m).chars().count())
            .max()
            .unwrap_or(0);
        let sizes: Vec<String> = group
            .members
            .iter()
            .map(|m| format_megabytes(m.size))
            .collect();
        let size_width = sizes.iter().map(String::len).max().unwrap_or(0);

        for (member, size) in group.members.iter().zip(&sizes) {
            writeln!(
                out,
                "  {:<6}  {:<name_width$}  {:>size_width$}  {:<16}  {}",
                kind_label(member),
                member_name(member),
                size,
                format_modified(member.modified.as_ref()),
                member.absolute_path.display(),
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use namesake_core::GroupKind;
    use std::path::PathBuf;

    fn file(name: &str, size: u64) -> EntryRecord {
        EntryRecord::file(
            name,
            format!("docs/{name}"),
            PathBuf::from("/data/docs").join(name),
            size,
            None,
        )
    }

    fn sample_group() -> Group {
        Group {
            members: vec![
                file("report_v1.txt", 5 * 1024 * 1024),
                file("report_v2.txt", 5 * 1024 * 1024),
            ],
            label: "report_v1.txt (*.txt)".into(),
            total_size: 10 * 1024 * 1024,
            kind: GroupKind::Files,
        }
    }

    fn render(groups: &[Group]) -> String {
        let mut buf = Vec::new();
        render_text(groups, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_result_prints_explicit_message() {
        assert_eq!(render(&[]), format!("{NO_GROUPS_MESSAGE}\n"));
    }

    #[test]
    fn header_shows_count_and_total() {
        let text = render(&[sample_group()]);
        let first = text.lines().next().unwrap();
        assert_eq!(first, "report_v1.txt (*.txt) (2 items - 10.00 MB)");
    }

    #[test]
    fn one_row_per_member_with_all_columns() {
        let text = render(&[sample_group()]);
        let rows: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("  File    report_v1.txt"));
        assert!(rows[0].contains("5.00 MB"));
        assert!(rows[0].contains("Unknown"));
        assert!(rows[0].ends_with("report_v1.txt"));
    }

    #[test]
    fn folders_show_relative_path() {
        let folder = EntryRecord::folder(
            "photos",
            "2023/photos".into(),
            PathBuf::from("/data/2023/photos"),
            0,
            None,
        );
        assert_eq!(member_name(&folder), "2023/photos");
        assert_eq!(kind_label(&folder), "Folder");
    }

    #[test]
    fn groups_are_separated_by_blank_lines() {
        let text = render(&[sample_group(), sample_group()]);
        assert_eq!(text.lines().filter(|l| l.is_empty()).count(), 1);
    }
}
