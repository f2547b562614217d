/// Risky-permission inspection — flags world-writable, setuid, and setgid
/// entries from their Unix mode bits.
///
/// Directories are only checked for world-writability; files are checked
/// for all three bits. Check order is world-writable → setuid → setgid,
/// and a later finding OVERWRITES an earlier one, so an entry produces at
/// most one warning reflecting the last-checked set bit. Downstream
/// consumers depend on that reported ordering, so it is reproduced as-is
/// rather than accumulating all set bits (see DESIGN.md).
use crate::model::{PermissionWarning, RiskyBit};
use std::fs;
use std::io;
use std::path::Path;

const WORLD_WRITABLE: u32 = 0o002;
const SETUID: u32 = 0o4000;
const SETGID: u32 = 0o2000;

/// Stat `path` and report its risky permission bit, if any.
///
/// Symlinks are inspected through the link: a symlink's own mode is
/// meaningless (`0o777` on Linux) and would flag every link as
/// world-writable. Fails with an I/O error when the entry cannot be
/// stat'ed (removed mid-scan, broken symlink, permission denied); the
/// engine counts such failures and moves on.
pub fn inspect(path: &Path) -> io::Result<Option<PermissionWarning>> {
    let meta = fs::metadata(path)?;
    Ok(inspect_metadata(path, &meta))
}

/// Classify already-stat'ed metadata. The engine stats each entry once
/// (through the link, see [`inspect`]) and shares the result between the
/// permission and size checks.
#[cfg(unix)]
pub fn inspect_metadata(path: &Path, meta: &fs::Metadata) -> Option<PermissionWarning> {
    use std::os::unix::fs::PermissionsExt;
    risky_bit(meta.permissions().mode(), meta.is_dir()).map(|reason| PermissionWarning {
        path: path.to_path_buf(),
        reason,
    })
}

/// Mode bits have no risky-bit semantics off Unix.
#[cfg(not(unix))]
pub fn inspect_metadata(_path: &Path, _meta: &fs::Metadata) -> Option<PermissionWarning> {
    None
}

/// Classify raw mode bits. Later checks overwrite earlier findings.
pub fn risky_bit(mode: u32, is_dir: bool) -> Option<RiskyBit> {
    let mut found = None;
    if mode & WORLD_WRITABLE != 0 {
        found = Some(RiskyBit::WorldWritable);
    }
    if !is_dir {
        if mode & SETUID != 0 {
            found = Some(RiskyBit::SetUid);
        }
        if mode & SETGID != 0 {
            found = Some(RiskyBit::SetGid);
        }
    }
    found
}
