//! freqmerge CLI
//!
//! Merges compressed `WORD,COUNT` snapshots into one filtered, sorted table.
//!
//! ```text
//! freqmerge -o RC-total.csv.gz RC-2015-*.csv.gz
//! ```

use anyhow::{Result, bail};
use clap::Parser;
use freqmerge::filter::{DEFAULT_MAX_RUN, FilterConfig};
use freqmerge::{MergeJob, expand_glob_required};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "freqmerge")]
#[command(about = "Merge compressed word-frequency snapshots into one table")]
#[command(version)]
struct Cli {
    /// Output file name
    #[arg(short = 'o', long, default_value = "RC-total.csv.gz")]
    output: PathBuf,

    /// Only keep words with a merged count of at least N (0 = keep all)
    #[arg(long, default_value_t = freqmerge::filter::DEFAULT_MIN_COUNT)]
    min_count: u64,

    /// Only keep words at least N bytes long (0 = keep all)
    #[arg(long, default_value_t = freqmerge::filter::DEFAULT_MIN_LEN)]
    min_len: usize,

    /// Write the run summary to this path as JSON
    #[arg(long)]
    stats_json: Option<PathBuf>,

    /// Ingest input files in parallel (output is identical to sequential)
    #[cfg(feature = "parallel-io")]
    #[arg(long)]
    parallel: bool,

    /// Input snapshots: paths or glob patterns like 'RC-2015-*.csv.gz'
    #[arg(required = true)]
    inputs: Vec<String>,
}

/// Expand glob patterns among the positional inputs; pass plain paths through.
///
/// A pattern matching nothing is fatal here. A plain path that does not exist
/// fails later at open, which keeps the diagnostics pointed at the file.
fn resolve_inputs(raw: &[String]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::with_capacity(raw.len());
    for arg in raw {
        if arg.contains(['*', '?', '[']) {
            inputs.extend(expand_glob_required(arg)?);
        } else {
            inputs.push(PathBuf::from(arg));
        }
    }
    Ok(inputs)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.output.as_os_str().is_empty() {
        bail!("output path must not be empty");
    }

    let inputs = resolve_inputs(&cli.inputs)?;
    let job = MergeJob::new(cli.output, inputs).with_filter(FilterConfig {
        min_count: cli.min_count,
        min_len: cli.min_len,
        max_run: DEFAULT_MAX_RUN,
    });

    #[cfg(feature = "parallel-io")]
    let summary = if cli.parallel {
        job.run_par()?
    } else {
        job.run()?
    };
    #[cfg(not(feature = "parallel-io"))]
    let summary = job.run()?;

    if let Some(path) = &cli.stats_json {
        summary.save_to_file(path)?;
    }

    Ok(())
}
