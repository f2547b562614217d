/// CLI frontend for dirsift — argument parsing, progress display, report
/// rendering, and side-file output around the `dirsift-core` engine.
pub mod args;
pub mod progress;
pub mod report;
pub mod sinks;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use dirsift_core::analysis::{DetectionMode, SizeThreshold};
use dirsift_core::config::Config;
use dirsift_core::error::ScanError;
use dirsift_core::scanner::{start_scan, ScanOptions};
use std::fs;

/// Parse arguments and run one analysis end to end.
pub fn run() -> anyhow::Result<()> {
    execute(Cli::parse())
}

/// Validate input, scan, write side files, and emit the report.
///
/// Input validation happens before the config file is touched and before
/// any traversal: a bad root or negative threshold exits without writing
/// or overwriting anything.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let threshold = SizeThreshold::from_gib(cli.size_threshold)?;
    if !cli.dir_path.exists() {
        return Err(ScanError::RootNotFound(cli.dir_path).into());
    }
    if !cli.dir_path.is_dir() {
        return Err(ScanError::RootNotDirectory(cli.dir_path).into());
    }

    let config = Config::load(&cli.config)?;
    let detection = if cli.thorough {
        DetectionMode::Thorough
    } else {
        DetectionMode::Fast
    };

    let total = progress::count_with_spinner(&cli.dir_path, cli.quiet);
    if !cli.quiet {
        println!("Preliminary file count: {total}");
    }

    let options = ScanOptions::new(&cli.dir_path, config.searchable_types.clone())
        .detection(detection)
        .threshold(threshold);
    let handle = start_scan(options);
    progress::drive(&handle, total, cli.quiet);
    let result = handle.join()?;

    sinks::write_oversized_list(&config.paths.bigfiles_output_path, &result).with_context(
        || {
            format!(
                "writing {}",
                config.paths.bigfiles_output_path.display()
            )
        },
    )?;
    sinks::write_warning_list(&config.paths.permissions_output_path, &result).with_context(
        || {
            format!(
                "writing {}",
                config.paths.permissions_output_path.display()
            )
        },
    )?;

    let rendered = report::render(&result);
    if cli.output {
        fs::write(&config.paths.analysis_output_path, &rendered).with_context(|| {
            format!("writing {}", config.paths.analysis_output_path.display())
        })?;
    } else {
        println!("{rendered}");
    }

    Ok(())
}
