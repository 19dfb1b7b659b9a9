//! # Freqmerge
//!
//! A **word-frequency table merger** for compressed line-oriented snapshots.
//! Freqmerge folds any number of per-period frequency files (`WORD,COUNT` per
//! line, typically gzip-compressed) into one cumulative table, discards noise
//! terms, and writes the result as a deterministically sorted compressed file.
//!
//! ## Key Features
//!
//! - **Streaming ingestion** - snapshots are decompressed and parsed line by
//!   line, never buffered whole
//! - **Order-independent merge** - addition is commutative, so snapshot order
//!   and record order never change the result
//! - **Composable noise filter** - count floor, length floor, repeated-run
//!   and laughter heuristics, each an independently testable predicate
//! - **Deterministic output** - surviving words are emitted in strict
//!   byte-lexicographic order, one `word,count` line each
//! - **Pluggable compression** - gzip by default; zstd, bzip2, and xz behind
//!   feature flags, auto-detected from extensions or magic bytes
//! - **Optional parallel ingest** - per-file partial tables on the rayon
//!   pool, bit-identical to the sequential run (feature: `parallel-io`)
//!
//! ## Quick Start
//!
//! ```no_run
//! use freqmerge::{FilterConfig, MergeJob};
//! # use anyhow::Result;
//!
//! # fn main() -> Result<()> {
//! let job = MergeJob::new(
//!     "RC-total.csv.gz",
//!     vec!["RC-2015-01.csv.gz".into(), "RC-2015-02.csv.gz".into()],
//! )
//! .with_filter(FilterConfig {
//!     min_count: 2,
//!     min_len: 7,
//!     ..FilterConfig::default()
//! });
//!
//! let summary = job.run()?;
//! println!("kept {} words", summary.surviving_keys);
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline Shape
//!
//! One linear pass per run, entirely in memory:
//!
//! 1. Each input is opened through the codec layer and streamed as records
//!    ([`io::records`]).
//! 2. Every record is folded into a single [`FreqTable`] ([`table`]).
//! 3. Every merged entry is tested against the [`FilterConfig`] ([`filter`]).
//! 4. Survivors are sorted and emitted, counts looked up post-sort
//!    ([`runner`]).
//!
//! The dataset must fit in memory; there is no external sort or spill path.
//! Any error (open, decompress, parse, write) aborts the whole run, since
//! a silently skipped line would silently corrupt the merged totals.
//!
//! ## Feature Flags
//!
//! - `compression-gzip` *(default)* - gzip codec via `flate2`
//! - `compression-zstd` - zstd codec
//! - `compression-bzip2` - bzip2 codec
//! - `compression-xz` - xz codec
//! - `parallel-io` *(default)* - [`MergeJob::run_par`] parallel ingest
//!
//! ## Module Overview
//!
//! - [`table`] - the cumulative frequency table
//! - [`filter`] - noise-filter predicates and thresholds
//! - [`runner`] - merge orchestration and emission
//! - [`metrics`] - run summary reporting
//! - [`io`] - compressed record IO and glob expansion

pub mod filter;
pub mod io;
pub mod metrics;
pub mod runner;
pub mod table;

pub use filter::{FilterConfig, has_repeated_run, looks_like_laughter};
pub use io::glob::{expand_glob, expand_glob_required};
pub use io::records::{RecordReader, open_records, write_records};
pub use metrics::MergeSummary;
pub use runner::MergeJob;
pub use table::{DEFAULT_CAPACITY_HINT, FreqTable};
