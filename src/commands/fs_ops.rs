use anyhow::{bail, Context, Result};
use std::io::ErrorKind;
use std::path::Path;

// One verb, one filesystem call. Nothing here rolls back.

/// An existing directory at `path` is not an error.
pub fn make_dir(path: &Path) -> Result<()> {
    match std::fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => {
            Err(e).with_context(|| format!("failed to create directory {}", path.display()))
        }
    }
}

/// Removes a directory and everything under it, or a single file.
/// A path that doesn't exist is not an error.
pub fn remove_tree(path: &Path) -> Result<()> {
    let meta = match std::fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e).with_context(|| format!("failed to stat {}", path.display())),
    };
    if meta.is_dir() {
        std::fs::remove_dir_all(path)
            .with_context(|| format!("failed to remove directory {}", path.display()))
    } else {
        std::fs::remove_file(path)
            .with_context(|| format!("failed to remove {}", path.display()))
    }
}

/// Removes a file or an empty directory. A path that doesn't exist is not an error.
pub fn remove_file(path: &Path) -> Result<()> {
    let meta = match std::fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e).with_context(|| format!("failed to stat {}", path.display())),
    };
    if meta.is_dir() {
        std::fs::remove_dir(path)
            .with_context(|| format!("failed to remove {}", path.display()))
    } else {
        std::fs::remove_file(path).with_context(|| format!("failed to remove {}", path.display()))
    }
}

/// Creates an empty file, truncating one that already exists.
pub fn touch(path: &Path) -> Result<()> {
    std::fs::File::create(path)
        .with_context(|| format!("failed to create file {}", path.display()))?;
    Ok(())
}

pub fn move_path(from: &Path, to: &Path) -> Result<()> {
    std::fs::rename(from, to)
        .with_context(|| format!("failed to move {} to {}", from.display(), to.display()))
}

/// Copies file contents, overwriting `to` if present.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if from.is_dir() {
        bail!("cannot copy {}: is a directory", from.display());
    }
    std::fs::copy(from, to)
        .with_context(|| format!("failed to copy {} to {}", from.display(), to.display()))?;
    Ok(())
}
