/// Namesake Core: collection, similarity grouping, and summary.
///
/// This crate contains all business logic with zero UI dependencies.
/// A frontend supplies a [`ScanConfig`] and consumes the ranked
/// [`Group`] list; everything in between lives here.
///
/// # Modules
///
/// - [`config`]: Scan configuration, raw request validation, extension filters.
/// - [`model`]: Entry records and summarized groups.
/// - [`scanner`]: The pipeline entry points, directory walk and progress messages.
/// - [`analysis`]: Edit distance, seed-based grouping, group summaries.
/// - [`error`]: Configuration errors that abort a scan.
pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod scanner;

pub use config::{
    ExtensionCategory, ExtensionFilter, FilterMode, GroupingPolicy, ItemKind, ScanConfig,
    ScanRequest,
};
pub use error::{ParseOptionError, ScanError};
pub use model::{EntryRecord, Group, GroupKind};
pub use scanner::progress::ScanProgress;
pub use scanner::{scan, scan_with_progress, start_scan, ScanHandle, ScanReport};
