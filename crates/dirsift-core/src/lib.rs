/// dirsift Core — scanning, classification, and aggregation.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (CLI, GUI, TUI).
///
/// # Modules
///
/// - [`model`] — Category specs, counters, warnings, and size formatting.
/// - [`analysis`] — Per-entry analyzers: mime classification, permission
///   inspection, oversized tracking.
/// - [`scanner`] — The single-pass aggregation engine plus background
///   scanning with progress reporting.
/// - [`config`] — JSON configuration loading and validation.
/// - [`error`] — Fatal error taxonomy.
pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod scanner;
