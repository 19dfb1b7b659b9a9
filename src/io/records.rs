//! Line-oriented `WORD,COUNT` record IO.
//!
//! This module provides:
//! - **Streaming ingestion**: [`RecordReader`] and [`open_records`], yielding
//!   one `(word, count)` record per decompressed line
//! - **Serialization**: [`write_records`], emitting `word,count` lines through
//!   the codec layer
//!
//! # Format
//! One record per line, `WORD,COUNT\n`. A line is split at its **first** comma
//! into exactly two fields; the second must be a base-10 non-negative integer
//! with no surrounding whitespace. Anything else (no comma, a second comma
//! leaking into the count field, a non-numeric count) is a hard parse error:
//! a snapshot either ingests completely or not at all, since skipping lines
//! would silently skew the merged totals.

use crate::io::compression::{compress_writer, decompress_reader};
use anyhow::{Context, Result, bail};
use std::fs::{File, create_dir_all};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Streaming reader over the records of one snapshot file.
///
/// Yields `Result<(String, u64)>` per line. Forward-only; reopen the file to
/// read it again. The iterator is fused by the underlying line reader: after
/// an IO or parse error the caller is expected to abort the run.
pub struct RecordReader {
    path: PathBuf,
    lines: std::io::Lines<BufReader<Box<dyn std::io::Read>>>,
    line_no: u64,
}

/// Open a snapshot file and stream its records.
///
/// The byte stream is decompressed per the codec layer (extension first, then
/// magic bytes), so both `words.csv.gz` and a plain `words.csv` work.
///
/// # Errors
/// Returns an error if the file cannot be opened or the decompressor cannot
/// be set up. Per-line errors surface through the iterator.
pub fn open_records(path: impl AsRef<Path>) -> Result<RecordReader> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rdr = decompress_reader(f, path)
        .with_context(|| format!("setup decompression for {}", path.display()))?;
    Ok(RecordReader {
        path: path.to_path_buf(),
        lines: BufReader::new(rdr).lines(),
        line_no: 0,
    })
}

impl RecordReader {
    fn parse(&self, line: &str) -> Result<(String, u64)> {
        let Some((word, count)) = line.split_once(',') else {
            bail!(
                "malformed record line {} in {}: {:?} (expected WORD,COUNT)",
                self.line_no,
                self.path.display(),
                line
            );
        };
        let count: u64 = count.parse().with_context(|| {
            format!(
                "bad count on line {} in {}: {:?}",
                self.line_no,
                self.path.display(),
                line
            )
        })?;
        Ok((word.to_string(), count))
    }
}

impl Iterator for RecordReader {
    type Item = Result<(String, u64)>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(match line {
            Ok(line) => self.parse(&line),
            Err(e) => Err(e).with_context(|| {
                format!("read line {} in {}", self.line_no, self.path.display())
            }),
        })
    }
}

/// Write `(word, count)` records as `word,count` lines.
///
/// Output is compressed per the codec layer when the path extension asks for
/// it (e.g. `.gz`). Parent directories are created as needed. Records are
/// written in iteration order; callers wanting deterministic files sort first.
///
/// # Returns
/// The number of records written.
///
/// # Errors
/// Returns an error if the file/dirs cannot be created or any write fails.
pub fn write_records<'a, I>(path: impl AsRef<Path>, records: I) -> Result<usize>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).with_context(|| format!("mkdir -p {}", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = compress_writer(f, path)
        .with_context(|| format!("setup compression for {}", path.display()))?;
    let mut written = 0usize;
    for (word, count) in records {
        writeln!(w, "{word},{count}")
            .with_context(|| format!("write record #{} to {}", written + 1, path.display()))?;
        written += 1;
    }
    w.flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(written)
}
