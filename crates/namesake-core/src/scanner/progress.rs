/// Scan progress reporting: lightweight messages sent from the pipeline
/// to whoever is presenting it, via a crossbeam channel.
///
/// Progress is advisory: `Update` and `Error` messages are offered with
/// `try_send` and silently dropped when the channel is full, so a slow
/// consumer can never stall or change the outcome of a scan. Only the
/// background thread started by [`start_scan`](super::start_scan) sends
/// `Complete`, and it does so with a blocking `send`.
use crossbeam_channel::Sender;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum ScanProgress {
    /// Running total of records emitted so far.
    Update {
        items_found: u64,
        current_path: String,
    },
    /// A non-fatal error (e.g. permission denied on one directory).
    Error { path: String, message: String },
    /// The whole pipeline finished. Sent only by background scans.
    Complete {
        duration: Duration,
        items_found: u64,
        group_count: usize,
        error_count: u64,
    },
}

/// Optional progress sink threaded through the pipeline.
#[derive(Clone, Copy)]
pub(crate) struct Reporter<'a> {
    tx: Option<&'a Sender<ScanProgress>>,
}

impl<'a> Reporter<'a> {
    pub(crate) fn new(tx: Option<&'a Sender<ScanProgress>>) -> Self {
        Self { tx }
    }

    /// Offer a message; never blocks.
    pub(crate) fn offer(&self, msg: ScanProgress) {
        if let Some(tx) = self.tx {
            let _ = tx.try_send(msg);
        }
    }
}
