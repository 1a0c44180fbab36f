// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server-Sent-Event body parsing.
//!
//! Capture only happens once an exchange has finished, so the parser works on
//! the complete body and returns every event eagerly.

use serde::{Deserialize, Serialize};

/// Line prefix carrying an event payload
const DATA_PREFIX: &str = "data:";

/// Sentinel payload terminating an OpenAI-style stream
const DONE_SENTINEL: &str = "[DONE]";

/// One event from a streaming response body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// The `data: [DONE]` terminator
    Done { raw: String },
    /// A data line, with its payload decoded when it was valid JSON
    Data {
        raw: String,
        #[serde(rename = "json")]
        parsed: Option<serde_json::Value>,
    },
}

impl StreamEvent {
    /// The original line this event was read from
    pub fn raw(&self) -> &str {
        match self {
            StreamEvent::Done { raw } | StreamEvent::Data { raw, .. } => raw,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, StreamEvent::Done { .. })
    }

    /// Decoded JSON payload, if this is a data event that parsed
    pub fn json(&self) -> Option<&serde_json::Value> {
        match self {
            StreamEvent::Data { parsed, .. } => parsed.as_ref(),
            StreamEvent::Done { .. } => None,
        }
    }
}

/// Parse a raw response body into stream events, in line order.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Lines without the `data:`
/// prefix (`event:`, `id:`, comments, blank separators) are dropped.
/// Payloads that fail to decode still produce a [`StreamEvent::Data`] with
/// no parsed value.
pub fn parse_sse(body: &str) -> Vec<StreamEvent> {
    body.split(['\r', '\n'])
        .filter_map(|line| {
            let payload = line.strip_prefix(DATA_PREFIX)?.trim();
            let raw = line.to_string();
            if payload == DONE_SENTINEL {
                return Some(StreamEvent::Done { raw });
            }
            let parsed = serde_json::from_str(payload).ok();
            Some(StreamEvent::Data { raw, parsed })
        })
        .collect()
}

/// Whether a body looks like an SSE stream even without a content type.
pub fn looks_like_sse(body: &str) -> bool {
    body.trim_start().starts_with(DATA_PREFIX)
}

#[cfg(test)]
#[path = "sse_tests.rs"]
mod tests;
