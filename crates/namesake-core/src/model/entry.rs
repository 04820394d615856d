/// A single file or folder found during a scan.
///
/// Records are created once by the collector and never mutated. The
/// `comparison_key`, not the display name, is what the grouper compares.
use chrono::{DateTime, Local};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Lower-cased name; the final extension is stripped for files.
    pub comparison_key: CompactString,

    /// The name exactly as it appears on disk.
    pub display_name: CompactString,

    /// Path relative to the scan root, always `/`-separated.
    pub relative_path: String,

    pub absolute_path: PathBuf,

    /// File length, or the summed size of every regular file below a folder.
    pub size: u64,

    /// Last-modified time. `None` when the platform could not supply one.
    pub modified: Option<DateTime<Local>>,

    pub is_file: bool,

    /// Lower-cased extension with its leading dot (`.txt`). Empty for folders
    /// and for files without an extension.
    pub extension: CompactString,
}

impl EntryRecord {
    /// Build a file record, deriving the comparison key and extension from `name`.
    pub fn file(
        name: &str,
        relative_path: String,
        absolute_path: PathBuf,
        size: u64,
        modified: Option<DateTime<Local>>,
    ) -> Self {
        let (stem, extension) = split_extension(name);
        Self {
            comparison_key: CompactString::from(stem.to_lowercase()),
            display_name: CompactString::new(name),
            relative_path,
            absolute_path,
            size,
            modified,
            is_file: true,
            extension: CompactString::from(extension.to_lowercase()),
        }
    }

    /// Build a folder record; the whole name is the comparison key.
    pub fn folder(
        name: &str,
        relative_path: String,
        absolute_path: PathBuf,
        size: u64,
        modified: Option<DateTime<Local>>,
    ) -> Self {
        Self {
            comparison_key: CompactString::from(name.to_lowercase()),
            display_name: CompactString::new(name),
            relative_path,
            absolute_path,
            size,
            modified,
            is_file: false,
            extension: CompactString::default(),
        }
    }
}

/// Split `name` into `(stem, extension)` where the extension keeps its dot.
///
/// Leading dots are part of the stem, so `.bashrc` has no extension and
/// `..cfg` neither. `archive.tar.gz` splits into `archive.tar` and `.gz`.
pub fn split_extension(name: &str) -> (&str, &str) {
    let body_start = name.len() - name.trim_start_matches('.').len();
    match name[body_start..].rfind('.') {
        Some(dot) => name.split_at(body_start + dot),
        None => (name, ""),
    }
}
