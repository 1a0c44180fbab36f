// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! llmtap binary entry point.

use clap::Parser;

use llmtap::cli::Cli;
use llmtap::commands::run;
use llmtap::diagnostic::print_error;
use llmtap::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        print_error(e);
        std::process::exit(1);
    }
}
