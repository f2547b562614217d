/// Scanner module — orchestrates the single-pass aggregation scan.
///
/// [`scan`] runs synchronously on the calling thread. [`start_scan`]
/// spawns the engine on a named background thread and hands back a
/// [`ScanHandle`] for progress messages, cancellation, and the final
/// result — the pattern a progress-bar frontend wants.
pub mod engine;
pub mod progress;

pub use engine::{count_files, run_scan, ScanOptions};
pub use progress::ScanProgress;

use crate::error::ScanError;
use crate::model::ScanResult;
use crossbeam_channel::Receiver;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// Maximum number of progress messages that may queue up in the channel.
///
/// The CLI drains the channel in a tight loop, so this is generous
/// headroom; if a frontend stalls, the scanner blocks on `send` briefly
/// rather than consuming unbounded heap.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Run a scan synchronously, without progress reporting or cancellation.
pub fn scan(options: &ScanOptions) -> Result<ScanResult, ScanError> {
    run_scan(options, None, &AtomicBool::new(false))
}

/// Handle to a running scan: progress receiver, cancellation, and the
/// final result via [`ScanHandle::join`].
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle carrying the scan outcome.
    thread: Option<thread::JoinHandle<Result<ScanResult, ScanError>>>,
}

impl ScanHandle {
    /// Request the scan to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// Wait for the scan thread and return its result. A cancelled scan
    /// yields `Err(ScanError::Cancelled)` — partial counters are never
    /// returned as if they were complete.
    pub fn join(mut self) -> Result<ScanResult, ScanError> {
        self.thread
            .take()
            .expect("join called once")
            .join()
            .expect("scanner thread panicked")
    }
}

/// Start a new scan on a background thread.
pub fn start_scan(options: ScanOptions) -> ScanHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("dirsift-scanner".into())
        .spawn(move || run_scan(&options, Some(&progress_tx), &cancel_clone))
        .expect("failed to spawn scanner thread");

    ScanHandle {
        progress_rx,
        cancel_flag,
        thread: Some(thread),
    }
}
