/// Scan configuration: the immutable description of one run.
///
/// A presentation layer fills in a [`ScanRequest`] with raw user input and
/// calls [`ScanRequest::validate`] to obtain a [`ScanConfig`]. Library callers
/// may also build a `ScanConfig` directly with [`ScanConfig::new`] and the
/// `with_*` helpers. Nothing mutates a `ScanConfig` once a scan has started.
pub mod extensions;

pub use extensions::{normalize_extension, ExtensionCategory, ExtensionFilter, FilterMode};

use crate::error::{ParseOptionError, ScanError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Bytes per megabyte, as used by the minimum-size option.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Which kinds of entries are emitted as records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    #[default]
    Files,
    Folders,
    All,
}

impl ItemKind {
    pub fn emits_files(self) -> bool {
        matches!(self, Self::Files | Self::All)
    }

    pub fn emits_folders(self) -> bool {
        matches!(self, Self::Folders | Self::All)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Files => "files",
            Self::Folders => "folders",
            Self::All => "all",
        })
    }
}

impl FromStr for ItemKind {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "files" | "file" => Ok(Self::Files),
            "folders" | "folder" | "dirs" => Ok(Self::Folders),
            "all" | "both" => Ok(Self::All),
            _ => Err(ParseOptionError {
                kind: "item kind",
                value: s.to_string(),
                expected: "files, folders, all",
            }),
        }
    }
}

/// Rule set deciding whether two records belong together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupingPolicy {
    /// Identical comparison keys, same kind, and same extension for files.
    #[default]
    ExactNameSameExtension,
    /// Edit distance in `(0, threshold]`, same kind, and same extension for files.
    SimilarNameSameExtension,
    /// Edit distance in `(0, threshold]`; kind and extension are ignored.
    SimilarNameOnly,
}

impl GroupingPolicy {
    /// Does this policy use the similarity threshold?
    pub fn uses_threshold(self) -> bool {
        !matches!(self, Self::ExactNameSameExtension)
    }
}

impl fmt::Display for GroupingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ExactNameSameExtension => "exact",
            Self::SimilarNameSameExtension => "similar-ext",
            Self::SimilarNameOnly => "similar",
        })
    }
}

impl FromStr for GroupingPolicy {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::ExactNameSameExtension),
            "similar-ext" => Ok(Self::SimilarNameSameExtension),
            "similar" => Ok(Self::SimilarNameOnly),
            _ => Err(ParseOptionError {
                kind: "grouping policy",
                value: s.to_string(),
                expected: "exact, similar-ext, similar",
            }),
        }
    }
}

/// Validated, immutable input to one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub recursive: bool,
    pub item_kind: ItemKind,
    pub policy: GroupingPolicy,
    /// Maximum edit distance; ignored by [`GroupingPolicy::ExactNameSameExtension`].
    pub threshold: u32,
    /// Files smaller than this many bytes are dropped. Folders are never size-filtered.
    pub min_file_size: u64,
    pub extensions: ExtensionFilter,
}

impl ScanConfig {
    /// A recursive, files-only, exact-name scan of `root` with no size or
    /// extension filtering.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: true,
            item_kind: ItemKind::Files,
            policy: GroupingPolicy::ExactNameSameExtension,
            threshold: 0,
            min_file_size: 0,
            extensions: ExtensionFilter::allow_all(),
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_item_kind(mut self, kind: ItemKind) -> Self {
        self.item_kind = kind;
        self
    }

    pub fn with_policy(mut self, policy: GroupingPolicy, threshold: u32) -> Self {
        self.policy = policy;
        self.threshold = threshold;
        self
    }

    pub fn with_min_file_size(mut self, bytes: u64) -> Self {
        self.min_file_size = bytes;
        self
    }

    pub fn with_extensions(mut self, filter: ExtensionFilter) -> Self {
        self.extensions = filter;
        self
    }
}

/// Raw options as a user interface collects them, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanRequest {
    pub root: PathBuf,
    pub recursive: bool,
    pub item_kind: ItemKind,
    pub policy: GroupingPolicy,
    /// Free text; must parse as a non-negative integer for similarity policies.
    pub threshold: String,
    /// Minimum file size in megabytes (1 MB = 1 048 576 bytes).
    pub min_size_mb: f64,
    pub categories: Vec<ExtensionCategory>,
    /// Free-text extension list, e.g. `".tmp log -txt"`.
    pub extra_extensions: String,
    pub filter_mode: FilterMode,
}

impl Default for ScanRequest {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            recursive: true,
            item_kind: ItemKind::Files,
            policy: GroupingPolicy::ExactNameSameExtension,
            threshold: "4".to_string(),
            min_size_mb: 1.0,
            categories: Vec::new(),
            extra_extensions: String::new(),
            filter_mode: FilterMode::Include,
        }
    }
}

impl ScanRequest {
    /// Check the numeric options and resolve the extension filter.
    ///
    /// The root is checked later, at scan start, so that a request can be
    /// validated before the directory is created.
    pub fn validate(self) -> Result<ScanConfig, ScanError> {
        let threshold = if self.policy.uses_threshold() {
            parse_threshold(&self.threshold)?
        } else {
            0
        };
        let min_file_size = megabytes_to_bytes(self.min_size_mb)?;
        let extensions =
            ExtensionFilter::new(&self.categories, &self.extra_extensions, self.filter_mode);

        Ok(ScanConfig {
            root: self.root,
            recursive: self.recursive,
            item_kind: self.item_kind,
            policy: self.policy,
            threshold,
            min_file_size,
            extensions,
        })
    }
}

/// Parse a similarity threshold typed by the user.
pub fn parse_threshold(text: &str) -> Result<u32, ScanError> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| ScanError::InvalidThreshold {
            value: text.to_string(),
        })
}

/// Convert a size in MB to a byte count, rounding up.
///
/// Rounding up keeps the comparison `size < min` identical to comparing
/// against the fractional byte value.
pub fn megabytes_to_bytes(mb: f64) -> Result<u64, ScanError> {
    if !mb.is_finite() || mb < 0.0 {
        return Err(ScanError::InvalidMinimumSize { value: mb });
    }
    Ok((mb * BYTES_PER_MB).ceil() as u64)
}
