use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::commands::Listing;
use crate::style::{Palette, Role};

const KIB: u64 = 1 << 10;
const MIB: u64 = 1 << 20;

pub const NAME_WIDTH: usize = 25;
pub const SIZE_WIDTH: usize = 7;

const HEADER: &str = "-name-----------------------size-----------------------";
const FOOTER: &str = "--------------------------------------------------------";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedRow {
    pub display_name: String,
    pub size_bytes: u64,
    pub size_label: String,
    pub is_dir: bool,
}

/// A listing with sizes resolved, ready to print as a table or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub cwd: PathBuf,
    pub rows: Vec<FormattedRow>,
}

pub fn human_size(bytes: u64) -> String {
    let b = bytes as f64;
    if bytes >= MIB {
        format!("{:.1}MB", b / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1}KB", b / KIB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Directories are never sized. A file whose metadata can't be read counts as 0.
fn file_size(path: &Path) -> u64 {
    match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "size lookup failed");
            0
        }
    }
}

pub fn report(listing: &Listing) -> TableReport {
    let rows = listing
        .entries
        .iter()
        .map(|entry| {
            let size_bytes = if entry.is_dir {
                0
            } else {
                file_size(&entry.path)
            };
            FormattedRow {
                display_name: entry.name.clone(),
                size_bytes,
                size_label: human_size(size_bytes),
                is_dir: entry.is_dir,
            }
        })
        .collect();

    TableReport {
        cwd: listing.cwd.clone(),
        rows,
    }
}

/// Names wider than the column are cut and marked with an ellipsis.
fn fit_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        return name.to_string();
    }
    let mut cut: String = name.chars().take(NAME_WIDTH - 1).collect();
    cut.push('…');
    cut
}

pub fn render(report: &TableReport, palette: Palette) -> String {
    let mut lines = Vec::new();
    lines.push(palette.paint(Role::Path, &report.cwd.display().to_string()));
    lines.push(String::new());
    lines.push(palette.paint(Role::Frame, HEADER));

    for row in &report.rows {
        let name = format!("{:<NAME_WIDTH$}", fit_name(&row.display_name));
        let size = format!("{:>SIZE_WIDTH$}", row.size_label);
        let name_role = if row.is_dir { Role::Directory } else { Role::File };
        lines.push(format!(
            "{}{}{}{}",
            palette.paint(Role::Frame, "| "),
            palette.paint(name_role, &name),
            palette.paint(Role::Frame, "| "),
            palette.paint(Role::Size, &size),
        ));
    }

    lines.push(palette.paint(Role::Frame, FOOTER));
    lines.join("\n")
}
