// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Parser, Subcommand, ValueEnum};
use llmtap_capture::Artifact;
use std::path::PathBuf;

/// Default number of entries shown by `list`
pub const DEFAULT_LIST_LIMIT: usize = 25;

/// Capture and inspect LLM chat completion traffic
#[derive(Parser, Debug)]
#[command(name = "llmtap", version, about = "Capture and inspect LLM chat completion traffic")]
pub struct Cli {
    /// Capture directory (overrides LLMTAP_CAPTURE_DIR and the config file)
    #[arg(long, global = true, value_name = "DIR")]
    pub capture_dir: Option<PathBuf>,

    /// Only capture exchanges whose URL contains this substring
    #[arg(long, global = true, value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// TOML config file with `capture_dir` and `capture_filter`
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Capture exchanges from JSON files, or JSONL on stdin when no files are given
    Ingest {
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// List recent captures
    List {
        /// Maximum number of entries
        #[arg(long, short = 'n', default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
    },

    /// Show the latest capture, or entry INDEX of the history
    Show {
        #[arg(value_name = "INDEX")]
        index: Option<usize>,

        /// Print the full payload as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one of the latest snapshot files verbatim
    Raw {
        #[arg(value_enum)]
        artifact: RawArtifact,
    },

    /// Show capture directory and latest capture information
    Status,
}

/// CLI-friendly snapshot file selector
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RawArtifact {
    /// Full payload of the latest capture
    Latest,
    /// Latest request body
    Request,
    /// Latest response body
    Response,
}

impl From<RawArtifact> for Artifact {
    fn from(artifact: RawArtifact) -> Self {
        match artifact {
            RawArtifact::Latest => Artifact::Latest,
            RawArtifact::Request => Artifact::Request,
            RawArtifact::Response => Artifact::Response,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
