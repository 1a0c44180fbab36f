// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture core for intercepted LLM chat completion exchanges.
//!
//! An interception layer hands each finished request/response pair to a
//! [`CaptureExtractor`], which filters out irrelevant traffic, reassembles
//! the assistant's answer from SSE or JSON bodies, and writes a summary plus
//! the full payload into a [`CaptureStore`].

mod config;
mod error;
mod exchange;
mod extractor;
mod history;
mod mojibake;
mod payload;
mod reconstruct;
mod schema;
mod sse;
mod store;
mod summary;

pub use config::{CaptureConfig, CAPTURE_DIR_ENV, DEFAULT_CAPTURE_DIR_NAME};
pub use error::StoreError;
pub use exchange::{header, unix_now, Exchange, Headers};
pub use extractor::{build_payload, is_event_stream, CaptureExtractor, CaptureOutcome, SkipReason};
pub use history::Cursor;
pub use mojibake::{marker_count, repair, MOJIBAKE_MARKERS};
pub use payload::{CapturePayload, CapturedRequest, CapturedResponse};
pub use reconstruct::Reconstruction;
pub use schema::{ChatMessage, ChatRequest, ChatResponse, Choice, Delta};
pub use sse::{looks_like_sse, parse_sse, StreamEvent};
pub use store::{
    Artifact, CaptureStore, HistoryMeta, HISTORY_FILE, LATEST_FILE, LATEST_REQUEST_FILE,
    LATEST_RESPONSE_FILE,
};
pub use summary::{preview, CaptureSummary, ASSISTANT_PREVIEW_CHARS, USER_PREVIEW_CHARS};
