/// Entry collector: the depth-first walk that turns a directory tree into
/// a flat list of [`EntryRecord`]s.
///
/// The walk is single-threaded and deterministic: entries of one directory
/// are visited in byte order of their names, and with recursion enabled a
/// folder's children are emitted before the folder itself. That order also
/// lets folder sizes be accumulated bottom-up without a second pass.
///
/// Symlinks are never followed or recorded. Anything that is neither a
/// regular file nor a directory (FIFOs, sockets, devices) is skipped too.
/// Unreadable directories are reported and skipped; they never fail the scan.
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::model::EntryRecord;
use crate::scanner::progress::{Reporter, ScanProgress};
use chrono::{DateTime, Local};
use crossbeam_channel::Sender;
use std::fs::{self, DirEntry, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Records produced by one walk, in traversal order.
#[derive(Debug, Default)]
pub struct CollectOutcome {
    pub records: Vec<EntryRecord>,
    /// Directories and entries that could not be read.
    pub error_count: u64,
}

/// Walk `config.root` and collect every record that passes the filters.
///
/// Fails only with [`ScanError::InvalidRoot`], before anything is read.
pub fn collect(
    config: &ScanConfig,
    progress: Option<&Sender<ScanProgress>>,
) -> Result<CollectOutcome, ScanError> {
    let root = resolve_root(&config.root)?;
    debug!("Collecting entries under {}", root.display());

    let mut collector = Collector {
        config,
        reporter: Reporter::new(progress),
        outcome: CollectOutcome::default(),
    };
    if collector.visit_dir(&root, "").is_none() {
        warn!("Root {} could not be listed; nothing collected", root.display());
    }
    Ok(collector.outcome)
}

/// Make the root absolute and check that it is an existing directory.
fn resolve_root(root: &Path) -> Result<PathBuf, ScanError> {
    let invalid = || ScanError::InvalidRoot {
        path: root.to_path_buf(),
    };
    if root.as_os_str().is_empty() {
        return Err(invalid());
    }
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => std::path::absolute(root).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

struct Collector<'a> {
    config: &'a ScanConfig,
    reporter: Reporter<'a>,
    outcome: CollectOutcome,
}

impl Collector<'_> {
    /// Visit `dir` and return the summed size of every regular file below it.
    ///
    /// `relative` is `dir`'s `/`-separated path from the root (empty for the root).
    /// `None` when `dir` itself cannot be listed; the caller must then skip it.
    fn visit_dir(&mut self, dir: &Path, relative: &str) -> Option<u64> {
        let entries = self.read_sorted(dir)?;

        let mut subtree_size: u64 = 0;
        for entry in entries {
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(err) => {
                    self.note_error(&path, &err);
                    continue;
                }
            };

            if file_type.is_symlink() {
                trace!("Skipping symlink {}", path.display());
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let child_relative = join_relative(relative, &name);

            if file_type.is_dir() {
                let nested = if self.config.recursive {
                    let Some(size) = self.visit_dir(&path, &child_relative) else {
                        continue;
                    };
                    subtree_size += size;
                    Some(size)
                } else {
                    None
                };

                if !self.config.item_kind.emits_folders() {
                    continue;
                }

                let size = match nested {
                    Some(size) => size,
                    None => match self.unvisited_folder_size(&path) {
                        Some(size) => size,
                        None => continue,
                    },
                };
                let modified = entry.metadata().ok().as_ref().and_then(modified_time);
                self.emit(EntryRecord::folder(
                    &name,
                    child_relative,
                    path,
                    size,
                    modified,
                ));
            } else if file_type.is_file() {
                let metadata = match entry.metadata() {
                    Ok(meta) => meta,
                    Err(err) => {
                        self.note_error(&path, &err);
                        continue;
                    }
                };
                let size = metadata.len();
                subtree_size += size;

                if !self.config.item_kind.emits_files() {
                    continue;
                }

                let record = EntryRecord::file(
                    &name,
                    child_relative,
                    path,
                    size,
                    modified_time(&metadata),
                );
                if !self.config.extensions.accepts(&record.extension) {
                    continue;
                }
                if record.size < self.config.min_file_size {
                    continue;
                }
                self.emit(record);
            } else {
                trace!("Skipping special file {}", path.display());
            }
        }

        Some(subtree_size)
    }

    /// Size of a folder the walk does not descend into, or `None` if it
    /// cannot be listed.
    fn unvisited_folder_size(&mut self, dir: &Path) -> Option<u64> {
        if let Err(err) = fs::read_dir(dir) {
            warn!("Error reading directory {}: {}", dir.display(), err);
            self.note_error(dir, &err);
            return None;
        }
        Some(folder_size(dir))
    }

    /// List a directory, sorted by name. `None` if it cannot be read.
    fn read_sorted(&mut self, dir: &Path) -> Option<Vec<DirEntry>> {
        let read_dir = match fs::read_dir(dir) {
            Ok(rd) => rd,
            Err(err) => {
                if err.kind() == io::ErrorKind::PermissionDenied {
                    warn!("Access denied reading directory {}: {}", dir.display(), err);
                } else {
                    warn!("Error reading directory {}: {}", dir.display(), err);
                }
                self.note_error(dir, &err);
                return None;
            }
        };

        let mut entries = Vec::new();
        for entry in read_dir {
            match entry {
                Ok(e) => entries.push(e),
                Err(err) => self.note_error(dir, &err),
            }
        }
        entries.sort_by_key(|e| e.file_name());
        Some(entries)
    }

    fn emit(&mut self, record: EntryRecord) {
        self.reporter.offer(ScanProgress::Update {
            items_found: self.outcome.records.len() as u64 + 1,
            current_path: record.relative_path.clone(),
        });
        self.outcome.records.push(record);
    }

    fn note_error(&mut self, path: &Path, err: &io::Error) {
        self.outcome.error_count += 1;
        self.reporter.offer(ScanProgress::Error {
            path: path.to_string_lossy().into_owned(),
            message: err.to_string(),
        });
    }
}

fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

/// Best-effort modification time; `None` when the platform refuses.
fn modified_time(meta: &Metadata) -> Option<DateTime<Local>> {
    meta.modified().ok().map(DateTime::<Local>::from)
}

/// Total size of the regular files below `dir`, used when recursion is off
/// and the folder's children are not walked by the collector itself.
fn folder_size(dir: &Path) -> u64 {
    jwalk::WalkDir::new(dir)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                debug!("Skipping unreadable entry while sizing {}: {err}", dir.display());
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
