//! dirsift — single-pass directory analyser.
//!
//! Thin binary entry point. All logic lives in the `dirsift-core`
//! and `dirsift-cli` crates.

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so the report and progress display own stdout.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("dirsift starting");

    dirsift_cli::run()
}
