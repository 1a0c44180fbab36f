// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flat-file capture store.
//!
//! Layout of a capture directory:
//!
//! - `latest.json` - most recent payload, pretty-printed
//! - `latest.request.json` - most recent request body (pretty JSON or raw text)
//! - `latest.response.txt` - most recent raw response body
//! - `history.jsonl` - every payload, one compact JSON line each, oldest first
//!
//! Files are written one after another; a failure part way through leaves
//! the earlier files updated and the later ones untouched. There is no
//! locking, so a directory must only have one writer. Readers may see a torn
//! update and treat anything unreadable as absent.

use crate::error::StoreError;
use crate::payload::CapturePayload;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub const LATEST_FILE: &str = "latest.json";
pub const LATEST_REQUEST_FILE: &str = "latest.request.json";
pub const LATEST_RESPONSE_FILE: &str = "latest.response.txt";
pub const HISTORY_FILE: &str = "history.jsonl";

/// Snapshot files that can be read back verbatim
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artifact {
    Latest,
    Request,
    Response,
}

impl Artifact {
    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::Latest => LATEST_FILE,
            Artifact::Request => LATEST_REQUEST_FILE,
            Artifact::Response => LATEST_RESPONSE_FILE,
        }
    }
}

/// List-view metadata for one history line
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryMeta {
    pub idx: usize,
    pub timestamp: f64,
    pub model: Option<String>,
    pub status_code: Option<u16>,
}

/// Append-only capture store rooted at one directory
#[derive(Clone, Debug)]
pub struct CaptureStore {
    dir: PathBuf,
}

impl CaptureStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }

    pub fn artifact_path(&self, artifact: Artifact) -> PathBuf {
        self.dir.join(artifact.file_name())
    }

    // ---- Writing ----

    /// Persist a payload: refresh the three snapshots, then append to history.
    pub fn append(&self, payload: &CapturePayload) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let pretty = serde_json::to_string_pretty(payload)?;
        self.overwrite(Artifact::Latest, &pretty)?;

        let request = match payload.request_object() {
            Some(json) => serde_json::to_string_pretty(json)?,
            None => payload.request.body_text.clone(),
        };
        self.overwrite(Artifact::Request, &request)?;
        self.overwrite(Artifact::Response, &payload.response.body_text)?;

        let line = serde_json::to_string(payload)?;
        let path = self.history_path();
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .and_then(|mut f| writeln!(f, "{}", line))
            .map_err(|source| StoreError::Append { path, source })
    }

    fn overwrite(&self, artifact: Artifact, contents: &str) -> Result<(), StoreError> {
        let path = self.artifact_path(artifact);
        fs::write(&path, contents).map_err(|source| StoreError::Write { path, source })
    }

    // ---- Reading ----

    /// Most recent payload from `latest.json`
    pub fn latest(&self) -> Option<CapturePayload> {
        let content = self.raw(Artifact::Latest)?;
        serde_json::from_str(&content).ok()
    }

    /// Contents of a snapshot file, if it exists and is readable
    pub fn raw(&self, artifact: Artifact) -> Option<String> {
        fs::read_to_string(self.artifact_path(artifact)).ok()
    }

    /// Modification time of `latest.json`
    pub fn latest_modified(&self) -> Option<SystemTime> {
        fs::metadata(self.artifact_path(Artifact::Latest))
            .and_then(|m| m.modified())
            .ok()
    }

    fn history_lines(&self) -> Vec<String> {
        fs::read_to_string(self.history_path())
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Number of lines in `history.jsonl`
    pub fn history_len(&self) -> usize {
        self.history_lines().len()
    }

    /// History entry at zero-based `idx`, if present and parsable
    pub fn entry(&self, idx: usize) -> Option<CapturePayload> {
        let lines = self.history_lines();
        serde_json::from_str(lines.get(idx)?).ok()
    }

    /// Metadata for the last `max_items` history lines, plus the last index.
    ///
    /// Lines that do not parse are left out of the list but still count
    /// towards indexes.
    pub fn history_meta(&self, max_items: usize) -> (Vec<HistoryMeta>, Option<usize>) {
        let lines = self.history_lines();
        let last_idx = lines.len().checked_sub(1);
        let start = lines.len().saturating_sub(max_items);
        let items = lines
            .iter()
            .enumerate()
            .skip(start)
            .filter_map(|(idx, line)| {
                let value: serde_json::Value = serde_json::from_str(line).ok()?;
                Some(meta_from_value(idx, &value))
            })
            .collect();
        (items, last_idx)
    }
}

fn meta_from_value(idx: usize, value: &serde_json::Value) -> HistoryMeta {
    let summary = value.get("summary");
    HistoryMeta {
        idx,
        timestamp: value
            .get("timestamp")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or_default(),
        model: summary
            .and_then(|s| s.get("model"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_string),
        status_code: summary
            .and_then(|s| s.get("status_code"))
            .and_then(serde_json::Value::as_u64)
            .and_then(|c| u16::try_from(c).ok()),
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
