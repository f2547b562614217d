/// Oversized-file tracking — the size threshold and its strict-greater
/// comparison.
use crate::error::ScanError;

const BYTES_PER_GIB: f64 = (1u64 << 30) as f64;

/// A byte threshold, configured in (fractional) gibibytes.
///
/// Comparison is strict: a file of exactly the threshold size is NOT
/// oversized. A zero threshold therefore flags every non-empty file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeThreshold {
    bytes: u64,
}

impl SizeThreshold {
    /// Build a threshold from a GiB value. Negative values are rejected
    /// before any scanning starts.
    pub fn from_gib(gib: f64) -> Result<Self, ScanError> {
        if gib < 0.0 || !gib.is_finite() {
            return Err(ScanError::InvalidThreshold(gib));
        }
        Ok(Self {
            bytes: (gib * BYTES_PER_GIB) as u64,
        })
    }

    pub fn bytes(self) -> u64 {
        self.bytes
    }

    /// Whether a file of `size` bytes strictly exceeds the threshold.
    pub fn exceeds(self, size: u64) -> bool {
        size > self.bytes
    }
}
