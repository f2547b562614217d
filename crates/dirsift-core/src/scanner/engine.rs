/// The single-pass aggregation engine.
///
/// One `jwalk` traversal (rayon-backed discovery, links not followed) is
/// consumed by one aggregating loop. Every entry passes through the three
/// per-entry analyzers — permission inspection, mime classification,
/// oversized check — and results fold into owned counters. Serializing
/// all counter mutation through the single consumer keeps warnings and
/// oversized paths in visitation order without any locking.
///
/// # Failure semantics
///
/// A per-entry I/O failure (permission denied, vanished file, broken
/// stat) aborts the rest of *that entry's* checks, increments the error
/// count once, and the walk continues. Only a root that cannot be
/// traversed at all is fatal.
use crate::analysis::{mime, permissions, DetectionMode, SizeThreshold};
use crate::error::ScanError;
use crate::model::{CategoryCounter, CategorySpec, OversizedBucket, PermissionWarning, ScanResult};
use crate::scanner::progress::ScanProgress;
use crossbeam_channel::Sender;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, info};

/// How often (in visited entries) the cancellation flag is polled and a
/// progress update is emitted.
const PROGRESS_INTERVAL: u64 = 512;

/// Everything the engine needs for one run. Owned exclusively by the scan
/// for its lifetime; no state is shared across runs.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub root: PathBuf,
    /// Configured categories, in tie-break order.
    pub categories: Vec<CategorySpec>,
    pub detection: DetectionMode,
    pub threshold: SizeThreshold,
}

impl ScanOptions {
    pub fn new(root: impl Into<PathBuf>, categories: Vec<CategorySpec>) -> Self {
        Self {
            root: root.into(),
            categories,
            detection: DetectionMode::Fast,
            threshold: SizeThreshold::from_gib(1.0).expect("1 GiB is a valid threshold"),
        }
    }

    pub fn detection(mut self, detection: DetectionMode) -> Self {
        self.detection = detection;
        self
    }

    pub fn threshold(mut self, threshold: SizeThreshold) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Owned accumulation state, passed by exclusive ownership through the
/// walk — the explicit-aggregator replacement for the original's global
/// mutable counters.
struct Aggregator {
    specs: Vec<CategorySpec>,
    counters: Vec<CategoryCounter>,
    other: CategoryCounter,
    totals: CategoryCounter,
    oversized: OversizedBucket,
    warnings: Vec<PermissionWarning>,
    error_count: u64,
    detection: DetectionMode,
}

impl Aggregator {
    fn new(options: &ScanOptions) -> Self {
        let counters = options
            .categories
            .iter()
            .map(|spec| CategoryCounter::new(spec.name.clone()))
            .collect();
        Self {
            specs: options.categories.clone(),
            counters,
            other: CategoryCounter::new("Other"),
            totals: CategoryCounter::new("Totals"),
            oversized: OversizedBucket::new(options.threshold),
            warnings: Vec::new(),
            error_count: 0,
            detection: options.detection,
        }
    }

    /// Directory check: world-writability only. A stat failure is counted
    /// and the walk moves on.
    fn visit_dir(&mut self, path: &Path) {
        match permissions::inspect(path) {
            Ok(Some(warning)) => self.warnings.push(warning),
            Ok(None) => {}
            Err(err) => {
                debug!("cannot inspect {}: {err}", path.display());
                self.error_count += 1;
            }
        }
    }

    /// The full per-file sequence: permissions → classification + totals →
    /// oversized. An `io::Error` anywhere aborts the rest of the sequence;
    /// the file is then counted only in the error count, never in totals.
    fn visit_file(&mut self, path: &Path) -> std::io::Result<()> {
        // Stat through the link: a symlink's own mode is meaningless
        // (0o777 on Linux) and a dangling link is a per-entry stat failure.
        let meta = std::fs::metadata(path)?;

        if let Some(warning) = permissions::inspect_metadata(path, &meta) {
            self.warnings.push(warning);
        }

        // A symlink to a directory walks as a non-dir entry but stats as a
        // directory; it gets the directory permission check and nothing else.
        if meta.is_dir() {
            return Ok(());
        }

        let resolved = mime::classify(path, self.detection)?;
        let size = meta.len();
        self.totals.record(size);
        match resolved.and_then(|m| mime::match_category(&self.specs, &m)) {
            Some(idx) => self.counters[idx].record(size),
            None => self.other.record(size),
        }

        if self.oversized.threshold.exceeds(size) {
            self.oversized.record(path.to_path_buf(), size);
        }
        Ok(())
    }

    fn finish(self, duration: std::time::Duration) -> ScanResult {
        ScanResult {
            categories: self.counters,
            other: self.other,
            totals: self.totals,
            oversized: self.oversized,
            warnings: self.warnings,
            error_count: self.error_count,
            duration,
        }
    }
}

/// Run one scan to completion (or cancellation).
///
/// `progress` is optional so library callers and tests can scan without a
/// channel; `cancel` is polled every [`PROGRESS_INTERVAL`] entries.
pub fn run_scan(
    options: &ScanOptions,
    progress: Option<&Sender<ScanProgress>>,
    cancel: &AtomicBool,
) -> Result<ScanResult, ScanError> {
    let start = Instant::now();
    let root = &options.root;

    // Fail fast on invalid input — before any traversal or output.
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.clone()));
    }
    if !root.is_dir() {
        return Err(ScanError::RootNotDirectory(root.clone()));
    }
    // An unreadable root is the one traversal failure that is fatal.
    std::fs::read_dir(root).map_err(|source| ScanError::RootTraversal {
        path: root.clone(),
        source,
    })?;

    info!("scanning {} ({:?} detection)", root.display(), options.detection);
    let mut agg = Aggregator::new(options);
    let mut visited: u64 = 0;

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus::get()));

    for entry_result in walker {
        visited += 1;
        if visited.is_multiple_of(PROGRESS_INTERVAL) && cancel.load(Ordering::Relaxed) {
            if let Some(tx) = progress {
                let _ = tx.send(ScanProgress::Cancelled);
            }
            return Err(ScanError::Cancelled);
        }

        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // jwalk errors are typically access-denied on directories.
                agg.error_count += 1;
                let err_path = err
                    .path()
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_default();
                debug!("walk error at `{err_path}`: {err}");
                if let Some(tx) = progress {
                    let _ = tx.send(ScanProgress::Error {
                        path: err_path,
                        message: format!("{err}"),
                    });
                }
                continue;
            }
        };

        let path = entry.path();

        // The root is never inspected; every other directory is.
        if path == *root {
            continue;
        }

        if entry.file_type().is_dir() {
            agg.visit_dir(&path);
        } else if let Err(err) = agg.visit_file(&path) {
            agg.error_count += 1;
            debug!("skipping `{}`: {err}", path.display());
            if let Some(tx) = progress {
                let _ = tx.send(ScanProgress::Error {
                    path: path.to_string_lossy().into_owned(),
                    message: format!("{err}"),
                });
            }
        }

        if visited.is_multiple_of(PROGRESS_INTERVAL) {
            if let Some(tx) = progress {
                let _ = tx.send(ScanProgress::Update {
                    files_scanned: agg.totals.files_found,
                    current_path: path.to_string_lossy().into_owned(),
                });
            }
        }
    }

    let duration = start.elapsed();
    debug_assert!(agg_totals_consistent(&agg), "bucket totals drifted");
    info!(
        "scan complete: {} files, {} errors in {duration:?}",
        agg.totals.files_found, agg.error_count
    );
    if let Some(tx) = progress {
        let _ = tx.send(ScanProgress::Complete {
            duration,
            error_count: agg.error_count,
        });
    }
    Ok(agg.finish(duration))
}

fn agg_totals_consistent(agg: &Aggregator) -> bool {
    let files: u64 = agg.counters.iter().map(|c| c.files_found).sum();
    agg.totals.files_found == files + agg.other.files_found
}

/// Preliminary file count used to size the progress bar. Walk errors are
/// ignored here; the real scan reports them.
pub fn count_files(root: &Path) -> u64 {
    jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus::get()))
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| !entry.file_type().is_dir())
        .count() as u64
}
