#![cfg(test)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::session::Session;

/// A scratch directory to run shell commands against.
pub struct TestEnv {
    _dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        // Canonical so comparisons with Session::cwd hold where /tmp is a symlink.
        let root = dir.path().canonicalize().expect("failed to canonicalize temp dir");
        Self { _dir: dir, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn session(&self) -> Session {
        Session::new(&self.root).expect("failed to open session")
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.root.join(rel);
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn write_file(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.root.join(rel);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn read_file(&self, rel: &str) -> Vec<u8> {
        std::fs::read(self.root.join(rel)).unwrap()
    }
}

pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
