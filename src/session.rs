use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Per-process shell state. Every relative path a command receives is resolved
/// against `cwd`; the process working directory is never changed.
#[derive(Debug, Clone)]
pub struct Session {
    cwd: PathBuf,
}

impl Session {
    pub fn new(start: &Path) -> Result<Self> {
        let cwd = start
            .canonicalize()
            .with_context(|| format!("cannot open start directory {}", start.display()))?;
        if !cwd.is_dir() {
            bail!("{} is not a directory", cwd.display());
        }
        Ok(Self { cwd })
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Arguments are taken literally: `~/x` is a path under `cwd`.
    pub fn resolve(&self, arg: &str) -> PathBuf {
        let path = PathBuf::from(arg);
        if path.is_absolute() {
            path
        } else {
            self.cwd.join(path)
        }
    }

    pub fn change_dir(&mut self, arg: &str) -> Result<()> {
        let target = self.resolve(arg);
        let canonical = target
            .canonicalize()
            .with_context(|| format!("cannot change directory to {}", target.display()))?;
        if !canonical.is_dir() {
            bail!("not a directory: {}", target.display());
        }
        self.cwd = canonical;
        debug_assert!(self.cwd.is_absolute(), "cwd must stay absolute");
        Ok(())
    }
}
