// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! llmtap command line interface
//!
//! Feeds intercepted LLM exchanges into the capture core and reads the
//! resulting capture directory back for inspection.

/// Re-exported capture types from the llmtap-capture crate.
pub mod capture {
    pub use llmtap_capture::{
        CaptureConfig, CaptureExtractor, CaptureOutcome, CapturePayload, CaptureStore,
        CaptureSummary, Exchange,
    };
}

#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod commands;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod diagnostic;
#[doc(hidden)]
pub mod env;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod ingest;
#[doc(hidden)]
pub mod logging;
#[doc(hidden)]
pub mod viewer;
