/// Command-line arguments and their mapping onto a [`ScanRequest`].
use clap::{ArgAction, Parser, ValueEnum};
use namesake_core::{ExtensionCategory, FilterMode, GroupingPolicy, ItemKind, ScanRequest};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented tree, one block per group
    Text,
    /// One row per group member
    Csv,
    /// Nested array of groups
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "namesake")]
#[command(version, about = "Find files and folders with identical or near-identical names", long_about = None)]
pub struct Cli {
    /// Folder to scan
    pub root: PathBuf,

    /// Only look at the root's direct children
    #[arg(long)]
    pub no_recursive: bool,

    /// Which entries to compare: files, folders or all
    #[arg(long, default_value = "files")]
    pub kind: ItemKind,

    /// Grouping rule: exact, similar-ext or similar
    #[arg(long, default_value = "exact")]
    pub policy: GroupingPolicy,

    /// Maximum edit distance for the similar policies
    #[arg(long, default_value = "4")]
    pub threshold: String,

    /// Ignore files smaller than this many megabytes
    #[arg(long, default_value_t = 1.0)]
    pub min_size_mb: f64,

    /// Extension categories to select: image, video, document, archive, audio, other
    #[arg(long = "category", value_delimiter = ',')]
    pub categories: Vec<ExtensionCategory>,

    /// Extra extensions, e.g. ".tmp log -txt" (a leading '-' removes one)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub extensions: String,

    /// Drop the selected extensions instead of keeping only them
    #[arg(long)]
    pub exclude: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn scan_request(&self) -> ScanRequest {
        ScanRequest {
            root: self.root.clone(),
            recursive: !self.no_recursive,
            item_kind: self.kind,
            policy: self.policy,
            threshold: self.threshold.clone(),
            min_size_mb: self.min_size_mb,
            categories: self.categories.clone(),
            extra_extensions: self.extensions.clone(),
            filter_mode: if self.exclude {
                FilterMode::Exclude
            } else {
                FilterMode::Include
            },
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        match (self.quiet, self.verbose) {
            (true, _) => tracing::Level::WARN,
            (false, 0) => tracing::Level::INFO,
            (false, 1) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        }
    }
}
