// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded-size summary of one captured exchange.

use crate::schema::ChatRequest;
use serde::{Deserialize, Serialize};

/// Cap for the last user message preview
pub const USER_PREVIEW_CHARS: usize = 300;
/// Cap for assistant text and reasoning previews
pub const ASSISTANT_PREVIEW_CHARS: usize = 800;
/// Appended to a preview that was cut short
pub const ELLIPSIS: char = '…';

/// Summary record embedded in every capture payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureSummary {
    pub endpoint: String,
    pub method: String,
    pub model: Option<String>,
    pub messages_count: usize,
    pub last_user_message_preview: Option<String>,
    pub system_prompt_chars: usize,
    pub tools_count: usize,
    pub status_code: u16,
    pub is_stream: bool,
    pub assistant_text_preview: Option<String>,
    pub assistant_reasoning_preview: Option<String>,
    pub duration_ms: u64,
}

impl CaptureSummary {
    /// Fill the request-derived fields from a parsed request body.
    ///
    /// Leaves the fields at their defaults when the body is not a JSON object.
    pub fn apply_request(&mut self, request: Option<&serde_json::Value>) {
        let Some(req) = request.and_then(ChatRequest::new) else {
            return;
        };
        self.model = req.model().map(str::to_string);
        self.messages_count = req.message_count();
        self.last_user_message_preview = req
            .last_user_message()
            .and_then(|m| m.content_text())
            .map(|text| preview(&text, USER_PREVIEW_CHARS));
        self.system_prompt_chars = req.system_prompt_chars();
        self.tools_count = req.tool_count();
        self.is_stream |= req.stream();
    }

    /// Set the assistant previews; empty text yields no preview.
    pub fn apply_assistant(&mut self, text: &str, reasoning: &str) {
        self.assistant_text_preview = non_empty_preview(text, ASSISTANT_PREVIEW_CHARS);
        self.assistant_reasoning_preview = non_empty_preview(reasoning, ASSISTANT_PREVIEW_CHARS);
    }
}

/// Truncate `text` to `max_chars` characters, marking the cut with `…`.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len_utf8());
            out.push_str(&text[..cut]);
            out.push(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}

fn non_empty_preview(text: &str, max_chars: usize) -> Option<String> {
    (!text.is_empty()).then(|| preview(text, max_chars))
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
