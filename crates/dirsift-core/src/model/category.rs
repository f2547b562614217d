/// Category specs, per-category counters, and the final scan result.
///
/// All counters are mutated exclusively by the aggregation engine while a
/// scan runs and are plain read-only values afterwards — `ScanResult` is
/// returned by value and owned by the caller.
use crate::analysis::oversized::SizeThreshold;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// One configured searchable media type: a display name plus the mimetype
/// prefix that files are matched against (e.g. `Image` / `image/`).
///
/// Specs are created from configuration at scan start and immutable for the
/// duration of a scan. Names are unique; prefixes may overlap — overlap is
/// resolved first-match-wins by configuration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: CompactString,
    /// Mimetype prefix, matched with `str::starts_with`.
    #[serde(rename = "tag")]
    pub prefix: CompactString,
}

impl CategorySpec {
    pub fn new(name: impl Into<CompactString>, prefix: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
        }
    }
}

/// Running file/byte totals for one bucket (a configured category, `Other`,
/// or `Totals`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounter {
    pub name: CompactString,
    pub files_found: u64,
    pub bytes_found: u64,
}

impl CategoryCounter {
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            files_found: 0,
            bytes_found: 0,
        }
    }

    /// Record one file of `size` bytes in this bucket.
    pub fn record(&mut self, size: u64) {
        self.files_found += 1;
        self.bytes_found += size;
    }
}

/// The size-threshold bucket: totals plus the matched paths themselves,
/// kept in visitation order for the big-files output file.
#[derive(Debug, Clone)]
pub struct OversizedBucket {
    pub files_found: u64,
    pub bytes_found: u64,
    pub paths: Vec<PathBuf>,
    pub threshold: SizeThreshold,
}

impl OversizedBucket {
    pub fn new(threshold: SizeThreshold) -> Self {
        Self {
            files_found: 0,
            bytes_found: 0,
            paths: Vec::new(),
            threshold,
        }
    }

    /// Record a file that strictly exceeds the threshold.
    pub fn record(&mut self, path: PathBuf, size: u64) {
        self.files_found += 1;
        self.bytes_found += size;
        self.paths.push(path);
    }
}

/// Which risky permission bit triggered a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskyBit {
    WorldWritable,
    SetUid,
    SetGid,
}

impl RiskyBit {
    pub fn label(self) -> &'static str {
        match self {
            Self::WorldWritable => "world-writable",
            Self::SetUid => "setuid",
            Self::SetGid => "setgid",
        }
    }
}

/// One risky-permission finding. Appended to the warning list during the
/// walk, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionWarning {
    pub path: PathBuf,
    pub reason: RiskyBit,
}

impl std::fmt::Display for PermissionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is {}", self.path.display(), self.reason.label())
    }
}

/// The engine's sole output: every counter, the warning list, and the
/// recovered-error count for one completed scan.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Per-category counters, in configuration order.
    pub categories: Vec<CategoryCounter>,
    /// Files whose mimetype matched no configured category.
    pub other: CategoryCounter,
    /// Every successfully classified file, regardless of bucket.
    pub totals: CategoryCounter,
    /// Files strictly exceeding the size threshold.
    pub oversized: OversizedBucket,
    /// Risky-permission findings, in visitation order.
    pub warnings: Vec<PermissionWarning>,
    /// Entries that failed with an I/O error and were skipped.
    pub error_count: u64,
    /// Wall-clock duration of the walk.
    pub duration: Duration,
}

impl ScanResult {
    /// `totals == sum(categories) + other`, for both files and bytes.
    /// Errored entries are excluded from totals and counted separately.
    pub fn totals_are_consistent(&self) -> bool {
        let files: u64 = self.categories.iter().map(|c| c.files_found).sum();
        let bytes: u64 = self.categories.iter().map(|c| c.bytes_found).sum();
        self.totals.files_found == files + self.other.files_found
            && self.totals.bytes_found == bytes + self.other.bytes_found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_record_accumulates() {
        let mut c = CategoryCounter::new("Image");
        c.record(100);
        c.record(50);
        assert_eq!(c.files_found, 2);
        assert_eq!(c.bytes_found, 150);
    }

    #[test]
    fn oversized_record_keeps_paths_in_order() {
        let mut b = OversizedBucket::new(SizeThreshold::from_gib(0.0).unwrap());
        b.record(PathBuf::from("/a"), 1);
        b.record(PathBuf::from("/b"), 2);
        assert_eq!(b.files_found, 2);
        assert_eq!(b.bytes_found, 3);
        assert_eq!(b.paths, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn warning_display_names_the_bit() {
        let w = PermissionWarning {
            path: PathBuf::from("/tmp/x"),
            reason: RiskyBit::SetGid,
        };
        assert_eq!(w.to_string(), "/tmp/x is setgid");
    }
}
