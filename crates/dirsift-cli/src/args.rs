//! Command-line definition for `dirsift`.

use clap::Parser;
use dirsift_core::config::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;

/// dirsift — single-pass directory analyser: media-type classification,
/// risky-permission flagging, and oversized-file tracking.
#[derive(Debug, Parser)]
#[command(name = "dirsift", version, about)]
pub struct Cli {
    /// Path to the directory that needs to be analysed.
    pub dir_path: PathBuf,

    /// File size in GiB above which a file is recorded as oversized
    /// (fractional values allowed, must be non-negative).
    #[arg(long, default_value_t = 1.0)]
    pub size_threshold: f64,

    /// Sniff file content (magic bytes) instead of guessing from the
    /// extension. Slower, but sees through misnamed files.
    #[arg(long)]
    pub thorough: bool,

    /// Configuration file; created with defaults when missing.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Write the summary report to the configured analysis output file
    /// instead of displaying it on stdout.
    #[arg(long)]
    pub output: bool,

    /// Suppress the progress display.
    #[arg(long, short)]
    pub quiet: bool,
}
