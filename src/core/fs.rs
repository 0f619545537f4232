// ─── Filesystem helpers ───
// Directory creation and atomic file replacement with path-aware errors.

use std::io::Write;
use std::path::Path;

use tempfile::Builder;
use tracing::debug;

use crate::core::error::{BuildError, BuildResult};

/// Create `path` and any missing parents. No-op when it already exists.
pub fn ensure_dir(path: &Path) -> BuildResult<()> {
    std::fs::create_dir_all(path).map_err(BuildError::io(path))
}

/// Replace the full content of `dest` with `contents`.
///
/// The bytes go to a temporary file next to `dest` which is then renamed
/// over it, so readers see either the old file or the new one, never a
/// truncated mix. Parent directories are created as needed.
///
/// An existing `dest` keeps its permissions. A new one gets the same mode a
/// plain `File::create` would (0666 minus the umask on Unix).
pub fn write_atomic(dest: &Path, contents: &[u8]) -> BuildResult<()> {
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let existing = std::fs::metadata(dest).ok().map(|m| m.permissions());

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(parent).map_err(BuildError::io(parent))?;
    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(BuildError::io(tmp.path()))?;
    }
    tmp.write_all(contents).map_err(BuildError::io(tmp.path()))?;
    tmp.as_file().sync_all().map_err(BuildError::io(tmp.path()))?;

    tmp.persist(dest).map_err(|e| BuildError::Io {
        path: dest.to_path_buf(),
        source: e.error,
    })?;

    debug!("Wrote {} bytes to {:?}", contents.len(), dest);
    Ok(())
}
