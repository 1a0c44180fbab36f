// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use llmtap_capture::{CaptureConfig, CaptureStore};
use serde_json::json;
use tempfile::{tempdir, TempDir};

fn exchange_json(method: &str, request_body: &str) -> String {
    json!({
        "method": method,
        "url": "http://127.0.0.1:11434/v1/chat/completions",
        "request_body": request_body,
        "status_code": 200,
        "response_body": "data: {\"choices\":[{\"delta\":{\"content\":\"ok\"}}]}\n\ndata: [DONE]\n",
        "request_start": 10.0,
        "response_end": 10.5
    })
    .to_string()
}

fn extractor_in(dir: &TempDir) -> CaptureExtractor {
    CaptureExtractor::new(
        CaptureConfig::default(),
        CaptureStore::new(dir.path().join("captures")),
    )
}

#[test]
fn test_parse_single_object() {
    let content = exchange_json("POST", r#"{"model":"m"}"#);
    let records = parse_exchanges(&content);

    assert_eq!(records.len(), 1);
    assert!(records[0].is_ok());
}

#[test]
fn test_parse_jsonl_with_bad_line() {
    let content = format!(
        "{}\n\nnot json\n{}\n",
        exchange_json("POST", r#"{"model":"m"}"#),
        exchange_json("GET", "")
    );
    let records = parse_exchanges(&content);

    assert_eq!(records.len(), 3);
    assert!(records[0].is_ok());
    assert!(records[1].is_err());
    assert_eq!(records[2].as_ref().unwrap().method, "GET");
}

#[test]
fn test_format_outcome() {
    assert_eq!(
        format_outcome(&CaptureOutcome::Captured {
            model: Some("llama3".to_string()),
            status_code: 200
        }),
        "captured llama3 200"
    );
    assert_eq!(
        format_outcome(&CaptureOutcome::Captured {
            model: None,
            status_code: 500
        }),
        "captured - 500"
    );
    assert_eq!(
        format_outcome(&CaptureOutcome::Skipped(SkipReason::NotPost)),
        "skipped (not a POST)"
    );
}

#[tokio::test]
async fn test_ingest_files_mixed_records() {
    let dir = tempdir().unwrap();
    let extractor = extractor_in(&dir);
    let input = dir.path().join("flows.jsonl");
    std::fs::write(
        &input,
        format!(
            "{}\n{}\n{{broken\n",
            exchange_json("POST", r#"{"model":"m","messages":[]}"#),
            exchange_json("GET", r#"{"model":"m"}"#)
        ),
    )
    .unwrap();

    let mut out = Vec::new();
    let stats = ingest_files(&extractor, &[&input], &mut out).await.unwrap();

    assert_eq!(
        stats,
        IngestStats {
            captured: 1,
            skipped: 1,
            failed: 0,
            invalid: 1
        }
    );
    let printed = String::from_utf8(out).unwrap();
    assert_eq!(printed, "captured m 200\nskipped (not a POST)\n");
    assert_eq!(extractor.store().history_len(), 1);
    assert_eq!(
        extractor
            .store()
            .latest()
            .unwrap()
            .summary
            .assistant_text_preview
            .as_deref(),
        Some("ok")
    );
}

#[tokio::test]
async fn test_ingest_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let extractor = extractor_in(&dir);
    let mut out = Vec::new();

    let result = ingest_files(&extractor, &[dir.path().join("nope.json")], &mut out).await;

    assert!(matches!(result, Err(CliError::Io(_))));
}

#[tokio::test]
async fn test_ingest_lines_appends_in_order() {
    let dir = tempdir().unwrap();
    let extractor = extractor_in(&dir);
    let input = format!(
        "{}\n\n{}\n",
        exchange_json("POST", r#"{"model":"first"}"#),
        exchange_json("POST", r#"{"model":"second"}"#)
    );

    let mut out = Vec::new();
    let stats = ingest_lines(&extractor, input.as_bytes(), &mut out)
        .await
        .unwrap();

    assert_eq!(stats.captured, 2);
    let store = extractor.store();
    assert_eq!(store.history_len(), 2);
    assert_eq!(store.entry(0).unwrap().summary.model.as_deref(), Some("first"));
    assert_eq!(store.latest().unwrap().summary.model.as_deref(), Some("second"));
}
