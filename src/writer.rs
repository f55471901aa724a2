use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::error::Result;

/// Writes `contents` to `path` through a temp file in the same directory.
///
/// The target only appears once every byte is flushed, so a failed run never
/// leaves a truncated dump behind. A new file gets the usual umask-derived
/// mode; an existing file keeps its mode.
pub fn write_atomically(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = create_temp(dir)?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    debug!(tmp = %tmp.path().display(), target = %path.display(), "persisting dump");
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

// tempfile defaults to 0600; ask for 0666 so the umask decides, like a plain create.
#[cfg(unix)]
fn create_temp(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .prefix(".ccsv2sql")
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_temp(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().prefix(".ccsv2sql").tempfile_in(dir)
}
