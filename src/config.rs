use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::cli::Cli;

pub const LOG_ENV: &str = "FIRED_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Only the `--dir` flag goes through tilde expansion; shell arguments never do.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    } else if path == "~" {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home);
        }
    }
    PathBuf::from(path)
}

/// Startup options after merging command-line flags with the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub json: bool,
    pub color: bool,
    pub start_dir: PathBuf,
    pub log_filter: String,
}

pub fn resolve(cli: &Cli) -> Result<Settings> {
    let start_dir = match &cli.dir {
        Some(dir) => expand_tilde(&dir.to_string_lossy()),
        None => std::env::current_dir().context("could not determine current directory")?,
    };

    let color = color_enabled(
        cli.no_color,
        std::env::var("NO_COLOR").ok(),
        std::io::stdout().is_terminal(),
    );

    let log_filter = std::env::var(LOG_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    Ok(Settings {
        json: cli.json,
        color,
        start_dir,
        log_filter,
    })
}

/// `NO_COLOR` only counts when set to a non-empty value (no-color.org).
fn color_enabled(no_color_flag: bool, no_color_env: Option<String>, is_tty: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if no_color_env.is_some_and(|v| !v.is_empty()) {
        return false;
    }
    is_tty
}
