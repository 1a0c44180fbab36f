// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand dispatch.

use crate::cli::{Cli, Command};
use crate::config;
use crate::error::CliError;
use crate::ingest::{ingest_files, ingest_lines};
use crate::viewer::{write_list, write_raw, write_show, write_status};
use llmtap_capture::CaptureExtractor;
use std::io::{self, Write};
use tokio::io::BufReader;
use tracing::debug;

/// Run one CLI invocation, writing command output to stdout.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let config = config::resolve(&cli)?;
    let extractor = CaptureExtractor::from_config(config);
    let store = extractor.store();
    debug!(dir = %store.dir().display(), "using capture directory");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Ingest { files } if files.is_empty() => {
            let reader = BufReader::new(tokio::io::stdin());
            ingest_lines(&extractor, reader, &mut out).await?;
        }
        Command::Ingest { files } => {
            ingest_files(&extractor, &files, &mut out).await?;
        }
        Command::List { limit } => write_list(&mut out, store, limit)?,
        Command::Show { index, json } => write_show(&mut out, store, index, json)?,
        Command::Raw { artifact } => write_raw(&mut out, store, artifact.into())?,
        Command::Status => write_status(&mut out, store)?,
    }
    out.flush()?;
    Ok(())
}
