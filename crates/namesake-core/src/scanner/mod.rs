/// Scanner module: runs the collect → group → summarize pipeline.
///
/// The pipeline itself is synchronous and single-threaded. [`scan`] and
/// [`scan_with_progress`] block the caller; [`start_scan`] runs the same
/// pipeline on one background thread so a frontend can drain progress
/// messages while it works. There is no cancellation: a scan always runs
/// to completion.
pub mod collector;
pub mod progress;

use crate::analysis::{group_entries, summarize};
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::model::Group;
use progress::ScanProgress;

use crossbeam_channel::{Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Maximum number of progress messages that may queue up in the channel.
///
/// Updates beyond this are dropped rather than blocking the walk, so the
/// value only bounds memory, never correctness.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Everything one finished scan produced.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Ranked groups, largest total first.
    pub groups: Vec<Group>,
    /// Records that passed the filters and were considered for grouping.
    pub items_found: u64,
    /// Unreadable directories and entries that were skipped.
    pub error_count: u64,
    pub duration: Duration,
}

/// Scan `config.root` and return its similarity groups.
///
/// Reads the filesystem and nothing else; repeated calls over an unchanged
/// tree return identical groups in identical order.
pub fn scan(config: &ScanConfig) -> Result<Vec<Group>, ScanError> {
    scan_with_progress(config, None).map(|report| report.groups)
}

/// [`scan`] with an optional progress channel and run statistics.
///
/// Progress messages are offered without blocking; see [`progress`].
pub fn scan_with_progress(
    config: &ScanConfig,
    progress: Option<&Sender<ScanProgress>>,
) -> Result<ScanReport, ScanError> {
    let start = Instant::now();
    info!(
        "Starting scan of {} (policy {}, threshold {})",
        config.root.display(),
        config.policy,
        config.threshold
    );

    let collected = collector::collect(config, progress)?;
    let items_found = collected.records.len() as u64;
    debug!(
        "Collection complete: {} records, {} errors in {:?}",
        items_found,
        collected.error_count,
        start.elapsed()
    );

    let clusters = group_entries(collected.records, config.policy, config.threshold);
    let groups = summarize(clusters);

    let duration = start.elapsed();
    info!(
        "Scan complete: {} groups from {} items in {:?}",
        groups.len(),
        items_found,
        duration
    );

    Ok(ScanReport {
        groups,
        items_found,
        error_count: collected.error_count,
        duration,
    })
}

/// Handle to a scan running on a background thread.
pub struct ScanHandle {
    /// Receiver for progress updates. Ends with `ScanProgress::Complete`
    /// on success, then disconnects.
    pub progress_rx: Receiver<ScanProgress>,
    thread: thread::JoinHandle<Result<ScanReport, ScanError>>,
}

impl ScanHandle {
    /// Block until the scan finishes and return its report.
    ///
    /// Any progress messages not yet received are discarded.
    pub fn wait(self) -> Result<ScanReport, ScanError> {
        let ScanHandle {
            progress_rx,
            thread,
        } = self;
        // Unblocks a pending `Complete` send if nobody drained the channel.
        drop(progress_rx);
        thread.join().map_err(|_| ScanError::WorkerPanicked)?
    }
}

/// Start a scan on a background thread.
///
/// The config is moved into the thread; nothing is shared with other scans.
pub fn start_scan(config: ScanConfig) -> Result<ScanHandle, ScanError> {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);

    let thread = thread::Builder::new()
        .name("namesake-scanner".into())
        .spawn(move || {
            let report = scan_with_progress(&config, Some(&progress_tx))?;
            let _ = progress_tx.send(ScanProgress::Complete {
                duration: report.duration,
                items_found: report.items_found,
                group_count: report.groups.len(),
                error_count: report.error_count,
            });
            Ok(report)
        })
        .map_err(ScanError::Spawn)?;

    Ok(ScanHandle {
        progress_rx,
        thread,
    })
}
