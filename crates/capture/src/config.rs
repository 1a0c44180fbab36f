// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the capture directory
pub const CAPTURE_DIR_ENV: &str = "LLMTAP_CAPTURE_DIR";

/// Directory name used when nothing else is configured
pub const DEFAULT_CAPTURE_DIR_NAME: &str = "captures";

/// Options recognized by the capture core
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CaptureConfig {
    /// Only capture exchanges whose URL contains this substring (empty = all)
    #[serde(default)]
    pub capture_filter: String,

    /// Explicit output directory
    #[serde(default)]
    pub capture_dir: Option<PathBuf>,
}

impl CaptureConfig {
    /// Whether `url` passes the configured filter
    pub fn matches_url(&self, url: &str) -> bool {
        self.capture_filter.is_empty() || url.contains(&self.capture_filter)
    }

    /// Resolve the output directory.
    ///
    /// # Priority
    ///
    /// 1. `capture_dir`
    /// 2. `LLMTAP_CAPTURE_DIR`
    /// 3. `captures/` next to the directory holding the running executable
    /// 4. `./captures`
    pub fn resolve_dir(&self) -> PathBuf {
        if let Some(dir) = &self.capture_dir {
            return dir.clone();
        }
        if let Some(dir) = std::env::var_os(CAPTURE_DIR_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }
        std::env::current_exe()
            .ok()
            .as_deref()
            .and_then(Path::parent)
            .map(default_dir_beside)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CAPTURE_DIR_NAME))
    }
}

/// `<bin_dir>/../captures`
fn default_dir_beside(bin_dir: &Path) -> PathBuf {
    match bin_dir.parent() {
        Some(parent) => parent.join(DEFAULT_CAPTURE_DIR_NAME),
        None => bin_dir.join(DEFAULT_CAPTURE_DIR_NAME),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
