/// Data model for dirsift scan results.
///
/// Re-exports category specs, counters, warnings, and size formatting.
pub mod category;
pub mod size;

pub use category::{
    CategoryCounter, CategorySpec, OversizedBucket, PermissionWarning, RiskyBit, ScanResult,
};
pub use size::{format_count, format_size};
