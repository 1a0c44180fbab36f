// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turns intercepted exchanges into persisted captures.

use crate::config::CaptureConfig;
use crate::error::StoreError;
use crate::exchange::{unix_now, Exchange};
use crate::mojibake::repair;
use crate::payload::{CapturePayload, CapturedRequest, CapturedResponse};
use crate::reconstruct::Reconstruction;
use crate::sse::{looks_like_sse, parse_sse};
use crate::store::CaptureStore;
use crate::summary::CaptureSummary;
use tracing::{debug, info, warn};

/// Request body marker that makes an exchange look like an LLM call
const MODEL_FIELD_MARKER: &str = "\"model\"";

const EVENT_STREAM: &str = "text/event-stream";

/// Why an exchange was not captured
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    NotPost,
    NoModelField,
    FilteredUrl,
}

/// Result of offering one exchange to the extractor
#[derive(Debug)]
pub enum CaptureOutcome {
    Captured {
        model: Option<String>,
        status_code: u16,
    },
    Skipped(SkipReason),
    Failed(StoreError),
}

impl CaptureOutcome {
    pub fn is_captured(&self) -> bool {
        matches!(self, CaptureOutcome::Captured { .. })
    }
}

/// Capture orchestrator for one capture directory
#[derive(Clone, Debug)]
pub struct CaptureExtractor {
    config: CaptureConfig,
    store: CaptureStore,
}

impl CaptureExtractor {
    pub fn new(config: CaptureConfig, store: CaptureStore) -> Self {
        Self { config, store }
    }

    /// Build a store from the config's resolved directory
    pub fn from_config(config: CaptureConfig) -> Self {
        let store = CaptureStore::new(config.resolve_dir());
        Self::new(config, store)
    }

    pub fn store(&self) -> &CaptureStore {
        &self.store
    }

    /// Check relevance, build the payload and persist it.
    ///
    /// Never fails outright: write errors are logged and reported as
    /// [`CaptureOutcome::Failed`] so the observed exchange is unaffected.
    pub fn process(&self, exchange: &Exchange) -> CaptureOutcome {
        if let Some(reason) = self.skip_reason(exchange) {
            debug!(url = %exchange.url, ?reason, "skipping exchange");
            return CaptureOutcome::Skipped(reason);
        }

        let payload = build_payload(exchange, unix_now());
        let model = payload.summary.model.clone();
        let status_code = payload.summary.status_code;

        match self.store.append(&payload) {
            Ok(()) => {
                info!(
                    "Captured flow: {} {}",
                    model.as_deref().unwrap_or("-"),
                    status_code
                );
                CaptureOutcome::Captured { model, status_code }
            }
            Err(e) => {
                warn!("failed writing capture files: {}", e);
                CaptureOutcome::Failed(e)
            }
        }
    }

    fn skip_reason(&self, exchange: &Exchange) -> Option<SkipReason> {
        if !exchange.is_post() {
            Some(SkipReason::NotPost)
        } else if !exchange.request_body.contains(MODEL_FIELD_MARKER) {
            Some(SkipReason::NoModelField)
        } else if !self.config.matches_url(&exchange.url) {
            Some(SkipReason::FilteredUrl)
        } else {
            None
        }
    }
}

/// Whether the response should be read as an SSE stream
pub fn is_event_stream(exchange: &Exchange) -> bool {
    exchange.response_content_type().contains(EVENT_STREAM)
        || looks_like_sse(&exchange.response_body)
}

/// Assemble the full payload for a relevant exchange captured at `now`.
pub fn build_payload(exchange: &Exchange, now: f64) -> CapturePayload {
    let request_json: Option<serde_json::Value> =
        serde_json::from_str(&exchange.request_body).ok();

    let is_stream = is_event_stream(exchange);
    let (events, reconstruction) = if is_stream {
        let events = parse_sse(&exchange.response_body);
        let reconstruction = Reconstruction::from_events(&events);
        (Some(events), reconstruction)
    } else {
        (None, Reconstruction::from_body(&exchange.response_body))
    };

    let mut summary = CaptureSummary {
        endpoint: exchange.url.clone(),
        method: exchange.method.clone(),
        status_code: exchange.status_code,
        is_stream,
        duration_ms: exchange.duration_ms(now),
        ..Default::default()
    };
    summary.apply_request(request_json.as_ref());
    summary.apply_assistant(
        &repair(&reconstruction.text),
        &repair(&reconstruction.reasoning),
    );

    CapturePayload {
        timestamp: now,
        summary,
        request: CapturedRequest {
            url: exchange.url.clone(),
            method: exchange.method.clone(),
            headers: exchange.request_headers.clone(),
            body_text: exchange.request_body.clone(),
            json: request_json,
        },
        response: CapturedResponse {
            status_code: exchange.status_code,
            headers: exchange.response_headers.clone(),
            body_text: exchange.response_body.clone(),
            events,
        },
    }
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
