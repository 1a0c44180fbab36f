// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by the CLI are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

pub use names::*;

use std::path::PathBuf;

/// `LLMTAP_CAPTURE_DIR` — Capture directory override.
pub fn capture_dir() -> Option<PathBuf> {
    var_non_empty(names::LLMTAP_CAPTURE_DIR).map(PathBuf::from)
}

/// `LLMTAP_CAPTURE_FILTER` — URL substring an exchange must contain.
pub fn capture_filter() -> Option<String> {
    var_non_empty(names::LLMTAP_CAPTURE_FILTER)
}

/// `LLMTAP_CONFIG` — Path to a TOML config file.
pub fn config_path() -> Option<PathBuf> {
    var_non_empty(names::LLMTAP_CONFIG).map(PathBuf::from)
}

fn var_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
