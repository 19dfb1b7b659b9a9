//! Run summary reporting.
//!
//! Every merge run produces a [`MergeSummary`] with the numbers an operator
//! wants after a batch job: how much came in, how much survived, where it
//! went. By default the summary is only logged; `save_to_file` exports it as
//! JSON for scripted pipelines that chart corpus growth across runs.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Statistics from one completed merge run.
#[derive(Debug, Clone, Serialize)]
pub struct MergeSummary {
    /// Where the merged table was written.
    pub output: PathBuf,
    /// Total of all increments across all inputs, pre-filter.
    pub records_seen: u64,
    /// Unique words in the merged table, pre-filter.
    pub unique_keys: usize,
    /// Words that passed the filter and were written.
    pub surviving_keys: usize,
    /// Wall-clock duration of the run.
    pub elapsed_ms: u64,
}

impl MergeSummary {
    /// Emit the human-readable summary line.
    pub fn log(&self) {
        log::info!(
            "done: wrote {} ({} surviving of {} unique words, {} records seen, {}ms)",
            self.output.display(),
            self.surviving_keys,
            self.unique_keys,
            self.records_seen,
            self.elapsed_ms,
        );
    }

    /// Write the summary as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
        f.write_all(json.as_bytes())
            .with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}
