// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Feeding exchanges from the interception layer into the capture core.
//!
//! A proxy addon hands over finished exchanges as JSON: one object per file,
//! or one object per line (JSONL) in a file or on stdin.

use crate::diagnostic::print_warning;
use crate::error::CliError;
use llmtap_capture::{CaptureExtractor, CaptureOutcome, Exchange, SkipReason};
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

/// Tally of outcomes for one ingest run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub captured: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Records that were not valid exchange JSON
    pub invalid: usize,
}

impl IngestStats {
    fn record(&mut self, outcome: &CaptureOutcome) {
        match outcome {
            CaptureOutcome::Captured { .. } => self.captured += 1,
            CaptureOutcome::Skipped(_) => self.skipped += 1,
            CaptureOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Parse file content as a single exchange, falling back to JSONL.
pub fn parse_exchanges(content: &str) -> Vec<Result<Exchange, serde_json::Error>> {
    if let Ok(exchange) = serde_json::from_str::<Exchange>(content) {
        return vec![Ok(exchange)];
    }
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(serde_json::from_str::<Exchange>)
        .collect()
}

/// One-line description of an outcome
pub fn format_outcome(outcome: &CaptureOutcome) -> String {
    match outcome {
        CaptureOutcome::Captured { model, status_code } => {
            format!("captured {} {}", model.as_deref().unwrap_or("-"), status_code)
        }
        CaptureOutcome::Skipped(reason) => format!("skipped ({})", skip_label(*reason)),
        CaptureOutcome::Failed(e) => format!("failed: {}", e),
    }
}

fn skip_label(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::NotPost => "not a POST",
        SkipReason::NoModelField => "no model field",
        SkipReason::FilteredUrl => "url filtered",
    }
}

/// Offer one parsed record to the extractor and report the outcome.
fn handle<W: Write>(
    extractor: &CaptureExtractor,
    record: Result<Exchange, serde_json::Error>,
    origin: &str,
    out: &mut W,
    stats: &mut IngestStats,
) -> Result<(), CliError> {
    match record {
        Ok(exchange) => {
            let outcome = extractor.process(&exchange);
            writeln!(out, "{}", format_outcome(&outcome))?;
            stats.record(&outcome);
        }
        Err(e) => {
            print_warning(format_args!("{}: not an exchange record: {}", origin, e));
            stats.invalid += 1;
        }
    }
    Ok(())
}

/// Ingest every exchange found in `files`, in order.
pub async fn ingest_files<W: Write>(
    extractor: &CaptureExtractor,
    files: &[impl AsRef<Path>],
    out: &mut W,
) -> Result<IngestStats, CliError> {
    let mut stats = IngestStats::default();
    for path in files {
        let path: &Path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let origin = path.display().to_string();
        for record in parse_exchanges(&content) {
            handle(extractor, record, &origin, out, &mut stats)?;
        }
    }
    log_stats(&stats);
    Ok(stats)
}

/// Ingest JSONL exchanges line by line as they arrive on `reader`.
pub async fn ingest_lines<R, W>(
    extractor: &CaptureExtractor,
    reader: R,
    out: &mut W,
) -> Result<IngestStats, CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut stats = IngestStats::default();
    let mut lines = reader.lines();
    let mut line_no = 0usize;
    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }
        let origin = format!("stdin:{}", line_no);
        handle(extractor, serde_json::from_str(&line), &origin, out, &mut stats)?;
        out.flush()?;
    }
    log_stats(&stats);
    Ok(stats)
}

fn log_stats(stats: &IngestStats) {
    info!(
        captured = stats.captured,
        skipped = stats.skipped,
        failed = stats.failed,
        invalid = stats.invalid,
        "ingest finished"
    );
}

#[cfg(test)]
#[path = "ingest_tests.rs"]
mod tests;
