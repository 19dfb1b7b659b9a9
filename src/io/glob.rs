//! Glob expansion for snapshot file sets.
//!
//! Merges typically run over a whole directory of per-period snapshots
//! (`RC-2015-*.csv.gz`), so the CLI accepts glob patterns alongside plain
//! paths. Matches are returned sorted so the ingest order (and therefore the
//! log output) is deterministic regardless of filesystem enumeration order.

use anyhow::{Context, Result, bail};
use glob::glob;
use std::path::PathBuf;

/// Expand a glob pattern into a sorted vector of matching file paths.
///
/// Supports standard glob syntax (`*`, `?`, `**`, `[abc]`). Directories are
/// filtered out; only plain files are returned.
///
/// # Errors
/// Returns an error if the pattern is invalid or a matched entry cannot be
/// read. Zero matches is not an error here; see [`expand_glob_required`].
pub fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob(pattern).with_context(|| format!("invalid glob pattern: {pattern}"))?;

    let mut result = Vec::new();
    for entry in paths {
        let path =
            entry.with_context(|| format!("error reading glob entry for pattern: {pattern}"))?;
        if path.is_file() {
            result.push(path);
        }
    }

    result.sort();

    Ok(result)
}

/// Expand a glob pattern, treating zero matches as an error.
///
/// A merge run over a pattern that matches nothing would silently produce an
/// empty table, so the CLI uses this stricter variant.
///
/// # Errors
/// As [`expand_glob`], plus an error when no files match.
pub fn expand_glob_required(pattern: &str) -> Result<Vec<PathBuf>> {
    let files = expand_glob(pattern)?;
    if files.is_empty() {
        bail!("no files found matching pattern: {pattern}");
    }
    Ok(files)
}
