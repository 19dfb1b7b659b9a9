//! Merge orchestration: ingest, filter, sort, emit.
//!
//! A [`MergeJob`] owns everything one run needs (input paths, output path,
//! filter thresholds, capacity hint) and threads a single [`FreqTable`]
//! through the pipeline. No ambient state: tests drive jobs against scratch
//! files and inspect the returned [`MergeSummary`].
//!
//! Two ingest modes produce bit-identical output:
//! - [`MergeJob::run`] — sequential, one snapshot at a time, in the order
//!   given (the baseline).
//! - [`MergeJob::run_par`] (feature `parallel-io`) — per-file partial tables
//!   built on the rayon pool, then folded together. Sound because table
//!   merge is commutative, and the output sort erases any residual ordering.

use crate::filter::FilterConfig;
use crate::io::records::{open_records, write_records};
use crate::metrics::MergeSummary;
use crate::table::{DEFAULT_CAPACITY_HINT, FreqTable};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// One configured merge run.
#[derive(Debug, Clone)]
pub struct MergeJob {
    /// Destination path; created or overwritten on emit.
    pub output: PathBuf,
    /// Snapshot files to fold, processed in this order.
    pub inputs: Vec<PathBuf>,
    /// Thresholds applied to every merged entry.
    pub filter: FilterConfig,
    /// Pre-sizing hint for the merged table.
    pub capacity_hint: usize,
}

impl MergeJob {
    /// A job with default filter thresholds and capacity hint.
    pub fn new(output: impl Into<PathBuf>, inputs: Vec<PathBuf>) -> Self {
        Self {
            output: output.into(),
            inputs,
            filter: FilterConfig::default(),
            capacity_hint: DEFAULT_CAPACITY_HINT,
        }
    }

    /// Replace the filter thresholds.
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Replace the table capacity hint.
    pub fn with_capacity_hint(mut self, capacity_hint: usize) -> Self {
        self.capacity_hint = capacity_hint;
        self
    }

    /// Run the merge sequentially and write the output file.
    ///
    /// Snapshots are folded strictly one at a time, in the order given. The
    /// first failure of any kind (open, decompress, parse, write) aborts
    /// the run; there is no skip-and-continue.
    ///
    /// # Errors
    /// Any source or sink failure, with the offending path (and for parse
    /// errors, the raw line) in the error chain.
    pub fn run(&self) -> Result<MergeSummary> {
        let start = Instant::now();
        let mut table = FreqTable::with_capacity(self.capacity_hint);
        for path in &self.inputs {
            info!("loading {}", path.display());
            let folded = table
                .merge_records(open_records(path)?)
                .with_context(|| format!("ingest {}", path.display()))?;
            debug!("folded {} records from {}", folded, path.display());
        }
        self.emit(&table, start)
    }

    /// Run the merge with per-file parallel ingest.
    ///
    /// Each snapshot is folded into its own partial table on the rayon pool;
    /// partials are then merged into one. Final output is bit-identical to
    /// [`MergeJob::run`]. Still fail-fast: any file error aborts the run.
    #[cfg(feature = "parallel-io")]
    pub fn run_par(&self) -> Result<MergeSummary> {
        use rayon::prelude::*;

        let start = Instant::now();
        let partials = self
            .inputs
            .par_iter()
            .map(|path| -> Result<FreqTable> {
                info!("loading {}", path.display());
                let mut partial = FreqTable::new();
                let folded = partial
                    .merge_records(open_records(path)?)
                    .with_context(|| format!("ingest {}", path.display()))?;
                debug!("folded {} records from {}", folded, path.display());
                Ok(partial)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut table = FreqTable::with_capacity(self.capacity_hint);
        for partial in partials {
            table.absorb(partial);
        }
        self.emit(&table, start)
    }

    /// Filter, sort, and write the merged table; build the run summary.
    fn emit(&self, table: &FreqTable, start: Instant) -> Result<MergeSummary> {
        let records_seen = table.total();

        let mut survivors: Vec<&str> = table
            .iter()
            .filter(|&(word, count)| self.filter.include(word, count))
            .map(|(word, _)| word)
            .collect();
        survivors.sort_unstable();

        // Counts are looked up post-sort rather than carried through the
        // filter, so the emit path only ever depends on the sorted key list.
        let surviving_keys = write_records(
            &self.output,
            survivors.iter().map(|&word| (word, table.get(word))),
        )
        .with_context(|| format!("emit {}", self.output.display()))?;

        let summary = MergeSummary {
            output: self.output.clone(),
            records_seen,
            unique_keys: table.len(),
            surviving_keys,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };
        summary.log();
        Ok(summary)
    }
}
