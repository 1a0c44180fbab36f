// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal views over a capture directory.

use crate::error::CliError;
use chrono::{DateTime, Local};
use llmtap_capture::{Artifact, CapturePayload, CaptureStore, Cursor};
use std::io::Write;
use std::time::SystemTime;

/// Wrap width for preview blocks
const WRAP_WIDTH: usize = 100;
const INDENT: &str = "    ";

/// Local time for a capture timestamp (seconds since the epoch)
pub fn format_timestamp(timestamp: f64) -> String {
    if !timestamp.is_finite() || timestamp <= 0.0 {
        return "-".to_string();
    }
    let secs = timestamp.floor() as i64;
    let nanos = ((timestamp - timestamp.floor()) * 1e9) as u32;
    DateTime::from_timestamp(secs, nanos)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_system_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

fn index_label(idx: Option<usize>) -> String {
    idx.map_or_else(|| "-".to_string(), |i| i.to_string())
}

fn wrap_block(text: &str) -> String {
    let options = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent(INDENT)
        .subsequent_indent(INDENT);
    textwrap::fill(text, options)
}

/// `list`: metadata for the most recent entries, oldest first
pub fn write_list<W: Write>(
    out: &mut W,
    store: &CaptureStore,
    limit: usize,
) -> Result<(), CliError> {
    let (items, last_idx) = store.history_meta(limit);
    if last_idx.is_none() {
        writeln!(out, "No captures in {}", store.dir().display())?;
        return Ok(());
    }
    for item in items {
        let marker = if Some(item.idx) == last_idx { "*" } else { " " };
        writeln!(
            out,
            "{}{:>5}  {}  {:>3}  {}",
            marker,
            item.idx,
            format_timestamp(item.timestamp),
            item.status_code.map_or_else(|| "-".to_string(), |c| c.to_string()),
            item.model.as_deref().unwrap_or("-"),
        )?;
    }
    Ok(())
}

/// Pick the payload and cursor for `show`.
///
/// Without an index this is the newest history entry, falling back to
/// `latest.json` when the last history line is unreadable.
fn select(
    store: &CaptureStore,
    index: Option<usize>,
) -> Result<(CapturePayload, Option<Cursor>), CliError> {
    let len = store.history_len();
    match index {
        Some(idx) => {
            let cursor = Cursor::at(idx, len).ok_or_else(|| {
                CliError::NotFound(format!("no capture #{} ({} in history)", idx, len))
            })?;
            let payload = store
                .entry(idx)
                .ok_or_else(|| CliError::NotFound(format!("capture #{} is unreadable", idx)))?;
            Ok((payload, Some(cursor)))
        }
        None => {
            let cursor = Cursor::latest(len);
            if let Some(payload) = cursor.and_then(|c| store.entry(c.index())) {
                return Ok((payload, cursor));
            }
            store.latest().map(|p| (p, None)).ok_or_else(|| {
                CliError::NotFound(format!("no captures in {}", store.dir().display()))
            })
        }
    }
}

/// `show`: human-readable summary of one capture, or its full JSON
pub fn write_show<W: Write>(
    out: &mut W,
    store: &CaptureStore,
    index: Option<usize>,
    json: bool,
) -> Result<(), CliError> {
    let (payload, cursor) = select(store, index)?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
        return Ok(());
    }

    let summary = &payload.summary;
    match cursor {
        Some(c) => {
            let latest = if c.is_latest() { " (latest)" } else { "" };
            writeln!(
                out,
                "Capture #{}{}  {}",
                c.index(),
                latest,
                format_timestamp(payload.timestamp)
            )?;
            writeln!(out, "  prev: {}  next: {}", index_label(c.prev()), index_label(c.next()))?;
        }
        None => writeln!(out, "Capture (latest)  {}", format_timestamp(payload.timestamp))?,
    }
    writeln!(out, "Endpoint: {} {}", summary.method, summary.endpoint)?;
    writeln!(out, "Model:    {}", payload.model_label())?;
    writeln!(
        out,
        "Status:   {}  stream: {}  duration: {} ms",
        summary.status_code,
        if summary.is_stream { "yes" } else { "no" },
        summary.duration_ms
    )?;
    writeln!(
        out,
        "Messages: {}  tools: {}  system prompt: {} chars",
        summary.messages_count, summary.tools_count, summary.system_prompt_chars
    )?;

    let sections = [
        ("Last user message", &summary.last_user_message_preview),
        ("Assistant", &summary.assistant_text_preview),
        ("Reasoning", &summary.assistant_reasoning_preview),
    ];
    for (title, text) in sections {
        if let Some(text) = text {
            writeln!(out, "{}:", title)?;
            writeln!(out, "{}", wrap_block(text))?;
        }
    }
    if let Some(events) = &payload.response.events {
        writeln!(out, "Stream events: {}", events.len())?;
    }
    Ok(())
}

/// `raw`: a snapshot file, verbatim
pub fn write_raw<W: Write>(
    out: &mut W,
    store: &CaptureStore,
    artifact: Artifact,
) -> Result<(), CliError> {
    let content = store.raw(artifact).ok_or_else(|| {
        CliError::NotFound(format!(
            "{} not found in {}",
            artifact.file_name(),
            store.dir().display()
        ))
    })?;
    out.write_all(content.as_bytes())?;
    Ok(())
}

/// `status`: where captures go and what was captured last
pub fn write_status<W: Write>(out: &mut W, store: &CaptureStore) -> Result<(), CliError> {
    writeln!(out, "Capture dir: {}", store.dir().display())?;
    writeln!(out, "Entries:     {}", store.history_len())?;
    let updated = store
        .latest_modified()
        .map_or_else(|| "-".to_string(), format_system_time);
    writeln!(out, "Updated:     {}", updated)?;
    if let Some(latest) = store.latest() {
        writeln!(
            out,
            "Latest:      {} {} {}",
            format_timestamp(latest.timestamp),
            latest.model_label(),
            latest.summary.status_code
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
