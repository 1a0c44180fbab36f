// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::payload::{CapturedRequest, CapturedResponse};
use crate::summary::CaptureSummary;
use rstest::rstest;
use serde_json::json;
use tempfile::tempdir;

fn make_payload(n: usize, request_body: &str) -> CapturePayload {
    CapturePayload {
        timestamp: 1_700_000_000.5 + n as f64,
        summary: CaptureSummary {
            endpoint: "http://localhost/v1/chat/completions".to_string(),
            method: "POST".to_string(),
            model: Some(format!("model-{}", n)),
            status_code: 200,
            ..Default::default()
        },
        request: CapturedRequest {
            url: "http://localhost/v1/chat/completions".to_string(),
            method: "POST".to_string(),
            headers: Default::default(),
            body_text: request_body.to_string(),
            json: serde_json::from_str(request_body).ok(),
        },
        response: CapturedResponse {
            status_code: 200,
            headers: Default::default(),
            body_text: format!("response {}\nsecond line", n),
            events: None,
        },
    }
}

#[test]
fn test_append_creates_missing_directory() {
    let dir = tempdir().unwrap();
    let store = CaptureStore::new(dir.path().join("nested").join("captures"));

    store.append(&make_payload(0, "{}")).unwrap();

    assert!(store.dir().is_dir());
    assert!(store.history_path().exists());
    for artifact in [Artifact::Latest, Artifact::Request, Artifact::Response] {
        assert!(store.artifact_path(artifact).exists());
    }
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(10)]
fn test_history_has_one_line_per_append(#[case] n: usize) {
    let dir = tempdir().unwrap();
    let store = CaptureStore::new(dir.path());

    let payloads: Vec<_> = (0..n).map(|i| make_payload(i, r#"{"model":"m"}"#)).collect();
    for payload in &payloads {
        store.append(payload).unwrap();
    }

    let content = std::fs::read_to_string(store.history_path()).unwrap();
    assert_eq!(content.lines().count(), n);
    assert_eq!(store.history_len(), n);
    assert_eq!(store.latest().as_ref(), payloads.last());
    assert_eq!(store.entry(n - 1).as_ref(), payloads.last());
    assert_eq!(store.entry(0).as_ref(), payloads.first());
}

#[test]
fn test_latest_is_pretty_and_history_is_compact() {
    let dir = tempdir().unwrap();
    let store = CaptureStore::new(dir.path());
    store.append(&make_payload(0, "{}")).unwrap();

    let latest = store.raw(Artifact::Latest).unwrap();
    assert!(latest.contains("\n  \"summary\""));

    let history = std::fs::read_to_string(store.history_path()).unwrap();
    assert_eq!(history.lines().count(), 1);
    assert!(history.ends_with('\n'));
}

#[test]
fn test_request_snapshot_pretty_json_or_raw() {
    let dir = tempdir().unwrap();
    let store = CaptureStore::new(dir.path());

    store
        .append(&make_payload(0, r#"{"model":"m","messages":[]}"#))
        .unwrap();
    let request = store.raw(Artifact::Request).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&request).unwrap();
    assert_eq!(reparsed, json!({"model": "m", "messages": []}));
    assert!(request.contains('\n'));

    let raw_body = "\"model\" but not json {";
    store.append(&make_payload(1, raw_body)).unwrap();
    assert_eq!(store.raw(Artifact::Request).unwrap(), raw_body);
}

#[test]
fn test_response_snapshot_is_verbatim() {
    let dir = tempdir().unwrap();
    let store = CaptureStore::new(dir.path());
    store.append(&make_payload(4, "{}")).unwrap();

    assert_eq!(
        store.raw(Artifact::Response).unwrap(),
        "response 4\nsecond line"
    );
}

#[test]
fn test_reads_on_empty_directory() {
    let dir = tempdir().unwrap();
    let store = CaptureStore::new(dir.path().join("missing"));

    assert!(store.latest().is_none());
    assert!(store.entry(0).is_none());
    assert_eq!(store.history_len(), 0);
    assert!(store.latest_modified().is_none());
    assert_eq!(store.history_meta(25), (vec![], None));
}

#[test]
fn test_torn_files_read_as_absent() {
    let dir = tempdir().unwrap();
    let store = CaptureStore::new(dir.path());
    store.append(&make_payload(0, "{}")).unwrap();
    store.append(&make_payload(1, "{}")).unwrap();

    std::fs::write(store.artifact_path(Artifact::Latest), "{\"timestamp\": 1, \"summ").unwrap();
    let mut history = std::fs::read_to_string(store.history_path()).unwrap();
    history.push_str("{\"timestamp\":");
    std::fs::write(store.history_path(), history).unwrap();

    assert!(store.latest().is_none());
    assert!(store.entry(2).is_none());
    assert!(store.entry(1).is_some());

    let (items, last_idx) = store.history_meta(25);
    assert_eq!(last_idx, Some(2));
    assert_eq!(items.len(), 2);
}

#[test]
fn test_history_meta_limits_to_recent_entries() {
    let dir = tempdir().unwrap();
    let store = CaptureStore::new(dir.path());
    for i in 0..5 {
        store.append(&make_payload(i, "{}")).unwrap();
    }

    let (items, last_idx) = store.history_meta(2);

    assert_eq!(last_idx, Some(4));
    assert_eq!(
        items,
        vec![
            HistoryMeta {
                idx: 3,
                timestamp: 1_700_000_003.5,
                model: Some("model-3".to_string()),
                status_code: Some(200),
            },
            HistoryMeta {
                idx: 4,
                timestamp: 1_700_000_004.5,
                model: Some("model-4".to_string()),
                status_code: Some(200),
            },
        ]
    );
}

#[test]
fn test_append_fails_when_directory_is_a_file() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("captures");
    std::fs::write(&blocker, "not a directory").unwrap();
    let store = CaptureStore::new(&blocker);

    let err = store.append(&make_payload(0, "{}")).unwrap_err();

    assert!(matches!(err, StoreError::CreateDir { .. }));
    assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "not a directory");
}
