// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Finished request/response pairs handed over by the interception layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Header name/value map. Names keep the casing the proxy reported.
pub type Headers = BTreeMap<String, String>;

/// One complete HTTP exchange observed by the proxy
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub request_headers: Headers,
    #[serde(default)]
    pub request_body: String,
    pub status_code: u16,
    #[serde(default)]
    pub response_headers: Headers,
    #[serde(default)]
    pub response_body: String,
    /// Seconds since the epoch when the request started
    #[serde(default)]
    pub request_start: Option<f64>,
    /// Seconds since the epoch when the response finished
    #[serde(default)]
    pub response_end: Option<f64>,
}

impl Exchange {
    pub fn is_post(&self) -> bool {
        self.method.eq_ignore_ascii_case("POST")
    }

    /// Response `content-type`, lower-cased; header name lookup ignores case
    pub fn response_content_type(&self) -> String {
        header(&self.response_headers, "content-type")
            .map(str::to_ascii_lowercase)
            .unwrap_or_default()
    }

    /// Milliseconds from request start to response end.
    ///
    /// A missing or non-positive timestamp is taken as `now`; negative spans
    /// clamp to zero.
    pub fn duration_ms(&self, now: f64) -> u64 {
        let end = self.response_end.filter(|t| *t > 0.0).unwrap_or(now);
        let start = self.request_start.filter(|t| *t > 0.0).unwrap_or(now);
        let ms = ((end - start) * 1000.0).floor();
        if ms.is_finite() && ms > 0.0 {
            ms as u64
        } else {
            0
        }
    }
}

/// Case-insensitive header lookup
pub fn header<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Current wall-clock time as fractional seconds since the epoch
pub fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "exchange_tests.rs"]
mod tests;
