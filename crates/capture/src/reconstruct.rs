// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reassembly of assistant output from streamed or complete responses.

use crate::schema::ChatResponse;
use crate::sse::StreamEvent;
use serde_json::Value;

/// Assistant output recovered from a response body
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconstruction {
    /// Final answer text
    pub text: String,
    /// Separate reasoning trace, when the backend sends one
    pub reasoning: String,
}

impl Reconstruction {
    /// Concatenate streamed deltas in event order.
    ///
    /// Per choice, `delta.content` wins over `delta.text`; `delta.reasoning`
    /// is collected independently of either.
    pub fn from_events(events: &[StreamEvent]) -> Self {
        let mut out = Self::default();
        let chunks = events.iter().filter_map(StreamEvent::json);
        for choice in chunks.filter_map(ChatResponse::new).flat_map(|c| c.choices()) {
            let Some(delta) = choice.delta() else {
                continue;
            };
            if let Some(text) = delta.text() {
                out.text.push_str(text);
            }
            if let Some(reasoning) = delta.reasoning() {
                out.reasoning.push_str(reasoning);
            }
        }
        out
    }

    /// Read a complete (non-streaming) response document.
    ///
    /// Reasoning takes `choices[].reasoning` and `choices[].message.reasoning`
    /// from every choice; the top-level `reasoning` field is only consulted
    /// when no choice contributed anything.
    pub fn from_document(document: &Value) -> Self {
        let mut out = Self::default();
        let Some(response) = ChatResponse::new(document) else {
            return out;
        };

        for choice in response.choices() {
            if let Some(text) = choice.message_content().or_else(|| choice.text()) {
                out.text.push_str(text);
            }
        }
        for choice in response.choices() {
            if let Some(reasoning) = choice.reasoning() {
                out.reasoning.push_str(reasoning);
            }
            if let Some(reasoning) = choice.message_reasoning() {
                out.reasoning.push_str(reasoning);
            }
        }
        if out.reasoning.is_empty() {
            if let Some(reasoning) = response.reasoning() {
                out.reasoning.push_str(reasoning);
            }
        }
        out
    }

    /// Parse a raw non-streaming body; anything that is not JSON yields nothing.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str::<Value>(body)
            .map(|doc| Self::from_document(&doc))
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "reconstruct_tests.rs"]
mod tests;
