// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture configuration assembled from flags, environment and config file.
//!
//! # Priority
//!
//! 1. Command line flags (`--capture-dir`, `--filter`)
//! 2. Environment (`LLMTAP_CAPTURE_DIR`, `LLMTAP_CAPTURE_FILTER`)
//! 3. TOML config file (`--config` or `LLMTAP_CONFIG`)
//! 4. Built-in defaults (no filter, `captures/` beside the binary)

use crate::cli::Cli;
use crate::env;
use crate::error::CliError;
use llmtap_capture::CaptureConfig;
use std::path::{Path, PathBuf};

/// Values that can override the config file
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub capture_dir: Option<PathBuf>,
    pub capture_filter: Option<String>,
}

impl Overrides {
    /// Flags first, then the environment
    pub fn from_cli_and_env(cli: &Cli) -> Self {
        Self {
            capture_dir: cli.capture_dir.clone().or_else(env::capture_dir),
            capture_filter: cli.filter.clone().or_else(env::capture_filter),
        }
    }

    pub fn apply(self, mut config: CaptureConfig) -> CaptureConfig {
        if let Some(dir) = self.capture_dir {
            config.capture_dir = Some(dir);
        }
        if let Some(filter) = self.capture_filter {
            config.capture_filter = filter;
        }
        config
    }
}

/// Parse a TOML config file.
pub fn load_file(path: &Path) -> Result<CaptureConfig, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_toml(&content).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_toml(content: &str) -> Result<CaptureConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Build the effective capture configuration for this invocation.
pub fn resolve(cli: &Cli) -> Result<CaptureConfig, CliError> {
    let base = match cli.config.clone().or_else(env::config_path) {
        Some(path) => load_file(&path)?,
        None => CaptureConfig::default(),
    };
    Ok(Overrides::from_cli_and_env(cli).apply(base))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
