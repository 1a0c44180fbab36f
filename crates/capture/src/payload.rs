// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Full capture records as persisted in the capture directory.

use crate::exchange::Headers;
use crate::sse::StreamEvent;
use crate::summary::CaptureSummary;
use serde::{Deserialize, Serialize};

/// Full record of one captured exchange
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapturePayload {
    /// Capture time, seconds since the epoch
    pub timestamp: f64,
    pub summary: CaptureSummary,
    pub request: CapturedRequest,
    pub response: CapturedResponse,
}

/// Request half of a capture, with the body kept verbatim
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapturedRequest {
    pub url: String,
    pub method: String,
    pub headers: Headers,
    pub body_text: String,
    /// Parsed body, when it was valid JSON
    pub json: Option<serde_json::Value>,
}

/// Response half of a capture, with the body kept verbatim
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapturedResponse {
    pub status_code: u16,
    pub headers: Headers,
    pub body_text: String,
    /// Parsed stream events; only present for SSE responses
    pub events: Option<Vec<StreamEvent>>,
}

impl CapturePayload {
    /// Model name from the summary, or `-` for display
    pub fn model_label(&self) -> &str {
        self.summary.model.as_deref().unwrap_or("-")
    }

    /// Parsed request body when it is a JSON object
    pub fn request_object(&self) -> Option<&serde_json::Value> {
        self.request.json.as_ref().filter(|v| v.is_object())
    }
}
