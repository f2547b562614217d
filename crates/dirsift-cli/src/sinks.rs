//! Side-file output — the oversized-path list and the permission-warning
//! list. Both files are truncated and rewritten on every run.

use dirsift_core::model::ScanResult;
use std::fs;
use std::io;
use std::path::Path;

/// Write oversized file paths, one per line, newline-joined (no trailing
/// newline beyond the join).
pub fn write_oversized_list(path: &Path, result: &ScanResult) -> io::Result<()> {
    let body = result
        .oversized
        .paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(path, body)
}

/// Write permission warnings, one per line, in visitation order.
pub fn write_warning_list(path: &Path, result: &ScanResult) -> io::Result<()> {
    let body = result
        .warnings
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(path, body)
}
