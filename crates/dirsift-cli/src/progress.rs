//! Progress display — a counting spinner for the preliminary pass and a
//! bar tracking the scan itself, fed from the scanner's progress channel.

use dirsift_core::scanner::{count_files, ScanHandle, ScanProgress};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Count files under `root` for the bar total, with a transient spinner
/// while the pre-pass runs.
pub fn count_with_spinner(root: &Path, quiet: bool) -> u64 {
    if quiet {
        return count_files(root);
    }
    let spinner = ProgressBar::new_spinner()
        .with_message(format!("Counting files in `{}`...", root.display()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    let total = count_files(root);
    spinner.finish_and_clear();
    total
}

/// Drain the progress channel until the scan finishes, driving the bar.
///
/// Returns when the scanner sends `Complete`/`Cancelled` or hangs up; the
/// final result is then collected via `ScanHandle::join`.
pub fn drive(handle: &ScanHandle, total_files: u64, quiet: bool) {
    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(total_files).with_style(
            ProgressStyle::with_template("{spinner} [{eta}] {bar:40} {pos}/{len} {wide_msg}")
                .expect("valid progress template"),
        )
    };

    loop {
        match handle.progress_rx.recv() {
            Ok(ScanProgress::Update {
                files_scanned,
                current_path,
            }) => {
                bar.set_position(files_scanned);
                bar.set_message(current_path);
            }
            Ok(ScanProgress::Error { path, message }) => {
                tracing::warn!("skipped `{path}`: {message}");
            }
            Ok(ScanProgress::Complete { .. }) | Ok(ScanProgress::Cancelled) | Err(_) => {
                bar.finish_and_clear();
                return;
            }
        }
    }
}
