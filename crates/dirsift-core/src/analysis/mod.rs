/// Analysis modules — per-entry classification checks run during the walk.

pub mod mime;
pub mod oversized;
pub mod permissions;

pub use mime::{classify, match_category, DetectionMode};
pub use oversized::SizeThreshold;
pub use permissions::inspect;
