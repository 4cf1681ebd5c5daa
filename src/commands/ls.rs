use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::table::{self, TableReport};

/// Options accepted by `ls`/`fd`. Built fresh for every invocation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListingFlags {
    pub show_hidden: bool,
    pub exclude_extensioned: bool,
    pub extension_filter: Option<String>,
    pub sort_alphabetically: bool,
}

impl ListingFlags {
    /// Unknown tokens are ignored. `-p` takes the next token, or an attached
    /// value as in `-ptxt`.
    pub fn parse(args: &[String]) -> Self {
        let mut flags = ListingFlags::default();
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            match arg {
                "--hidden" => flags.show_hidden = true,
                "-e" => flags.exclude_extensioned = true,
                "--sort" | "-s" => flags.sort_alphabetically = true,
                "-p" => {
                    if let Some(value) = args.get(i + 1) {
                        flags.extension_filter = normalize_extension(value);
                    }
                    i += 1;
                }
                _ => {
                    if let Some(value) = arg.strip_prefix("-p") {
                        flags.extension_filter = normalize_extension(value);
                    } else {
                        debug!(token = arg, "ignoring unknown listing argument");
                    }
                }
            }
            i += 1;
        }
        flags
    }
}

fn normalize_extension(value: &str) -> Option<String> {
    let ext = value.strip_prefix('.').unwrap_or(value);
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirEntry {
    /// Lossy form of the file name, for display and filtering.
    pub name: String,
    pub is_dir: bool,
    /// Exact on-disk path; `name` may not round-trip to it.
    #[serde(skip)]
    pub path: PathBuf,
}

impl DirEntry {
    fn extension(&self) -> Option<&str> {
        Path::new(&self.name).extension().and_then(|e| e.to_str())
    }

    fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub cwd: PathBuf,
    pub entries: Vec<DirEntry>,
}

pub fn build_listing(cwd: &Path, flags: &ListingFlags) -> Result<Listing> {
    let dir = std::fs::read_dir(cwd)
        .with_context(|| format!("failed to read directory {}", cwd.display()))?;

    let mut entries = Vec::new();
    for entry in dir {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        let candidate = DirEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            // Follows symlinks, so a link to a directory lists as a directory.
            is_dir: path.is_dir(),
            path,
        };
        if keep(&candidate, flags) {
            entries.push(candidate);
        }
    }

    if flags.sort_alphabetically {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(Listing {
        cwd: cwd.to_path_buf(),
        entries,
    })
}

fn keep(entry: &DirEntry, flags: &ListingFlags) -> bool {
    if !flags.show_hidden && entry.is_hidden() {
        return false;
    }
    if entry.is_dir {
        return true;
    }
    if flags.exclude_extensioned && entry.extension().is_some() {
        return false;
    }
    match &flags.extension_filter {
        Some(wanted) => entry.extension() == Some(wanted.as_str()),
        None => true,
    }
}

pub fn cmd_ls(cwd: &Path, args: &[String]) -> Result<TableReport> {
    let flags = ListingFlags::parse(args);
    debug!(?flags, cwd = %cwd.display(), "listing");
    let listing = build_listing(cwd, &flags)?;
    Ok(table::report(&listing))
}
