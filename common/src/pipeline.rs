//! # Pipeline
//!
//! Drives a whole run: read candidate lines, collect the valid ones, sort,
//! and write the report. Generic over the reader and writer so the binary
//! can hand in stdin/stdout and tests can hand in buffers.

use std::io::{BufRead, Write};

use tracing::{debug, error, info, warn};

use crate::address::pool::{AddressPool, LineOutcome};
use crate::config::Config;
use crate::error::PipelineError;
use crate::report;

/// Line counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub lines: usize,
    pub accepted: usize,
    pub skipped: usize,
}

/// Reads `reader` to the end and returns the unsorted pool.
///
/// A trailing `\r` is dropped from every line so CRLF input behaves like LF input.
pub fn collect<R: BufRead>(
    reader: R,
    cfg: &Config,
) -> Result<(AddressPool, Stats), PipelineError> {
    let mut pool = AddressPool::new();
    let mut stats = Stats::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        let line_no = idx + 1;
        stats.lines += 1;

        match pool.ingest_line(line, cfg.policy) {
            Ok(LineOutcome::Accepted) => stats.accepted += 1,
            Ok(LineOutcome::Skipped(reason)) => {
                stats.skipped += 1;
                debug!("Skipping line {line_no}: {reason}");
            }
            Err(source) => {
                error!("Aborting at line {line_no}: {source}");
                return Err(PipelineError::Fatal { line_no, source });
            }
        }
    }

    Ok((pool, stats))
}

/// Collects, sorts and writes the full report.
///
/// Nothing is written when collection fails.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    cfg: &Config,
) -> Result<Stats, PipelineError> {
    let (mut pool, stats) = collect(reader, cfg)?;
    pool.sort_descending();

    report::write_report(&mut writer, pool.as_slice())?;
    writer.flush()?;

    summarize(&stats, cfg);
    Ok(stats)
}

fn summarize(stats: &Stats, cfg: &Config) {
    if cfg.quiet == 0 {
        let unit = if stats.accepted == 1 { "address" } else { "addresses" };
        info!("{} {unit} sorted from {} lines", stats.accepted, stats.lines);
    }
    if stats.skipped > 0 && cfg.quiet < 2 {
        warn!("{} malformed lines skipped", stats.skipped);
    }
}
