// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_parse_ingest_files() {
    let cli = Cli::try_parse_from(["llmtap", "ingest", "a.json", "b.jsonl"]).unwrap();
    match cli.command {
        Command::Ingest { files } => {
            assert_eq!(files, vec![PathBuf::from("a.json"), PathBuf::from("b.jsonl")]);
        }
        other => unreachable!("unexpected command {:?}", other),
    }
}

#[test]
fn test_parse_ingest_stdin() {
    let cli = Cli::try_parse_from(["llmtap", "ingest"]).unwrap();
    assert!(matches!(cli.command, Command::Ingest { ref files } if files.is_empty()));
}

#[test]
fn test_parse_list_default_limit() {
    let cli = Cli::try_parse_from(["llmtap", "list"]).unwrap();
    assert!(matches!(cli.command, Command::List { limit: DEFAULT_LIST_LIMIT }));
}

#[test]
fn test_parse_show_index_and_json() {
    let cli = Cli::try_parse_from(["llmtap", "show", "3", "--json"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Show {
            index: Some(3),
            json: true
        }
    ));
}

#[test]
fn test_parse_show_latest() {
    let cli = Cli::try_parse_from(["llmtap", "show"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Show {
            index: None,
            json: false
        }
    ));
}

#[test]
fn test_parse_raw_artifact() {
    let cli = Cli::try_parse_from(["llmtap", "raw", "response"]).unwrap();
    match cli.command {
        Command::Raw { artifact } => assert_eq!(Artifact::from(artifact), Artifact::Response),
        other => unreachable!("unexpected command {:?}", other),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "llmtap",
        "status",
        "--capture-dir",
        "/tmp/caps",
        "--filter",
        "/v1/chat",
        "-v",
    ])
    .unwrap();

    assert_eq!(cli.capture_dir, Some(PathBuf::from("/tmp/caps")));
    assert_eq!(cli.filter.as_deref(), Some("/v1/chat"));
    assert!(cli.verbose);
    assert!(matches!(cli.command, Command::Status));
}

#[test]
fn test_negative_index_rejected() {
    assert!(Cli::try_parse_from(["llmtap", "show", "-1"]).is_err());
}
