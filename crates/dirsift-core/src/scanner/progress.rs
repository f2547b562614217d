/// Scan progress reporting — lightweight messages sent from the scan
/// thread to the frontend via a crossbeam channel.
///
/// The actual counters live inside the engine and arrive with the final
/// `ScanResult`; these messages carry only what a progress display needs.
use std::time::Duration;

#[derive(Debug)]
pub enum ScanProgress {
    /// Periodic update with the running file count.
    Update {
        files_scanned: u64,
        current_path: String,
    },
    /// A non-fatal error (e.g. permission denied on one entry). The scan
    /// keeps going; the error is also folded into the final error count.
    Error { path: String, message: String },
    /// Scanning completed successfully.
    Complete {
        duration: Duration,
        error_count: u64,
    },
    /// Scan was cancelled by the user; partial results are discarded.
    Cancelled,
}
