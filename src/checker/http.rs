// src/checker/http.rs
// =============================================================================
// This module checks whether a single URL is alive.
//
// Key functionality:
// - Sends one HTTP HEAD request per URL (headers only, no body download)
// - Records the status code exactly as the server sent it
// - Turns every transport failure (DNS, refused, timeout, TLS) into code 0
//
// A failed probe is an answer, not an error. probe() never returns Err, so
// one dead host can't stop the rest of the run.
//
// Rust concepts:
// - async/await: the request suspends while waiting on the network
// - Serde attributes: rename fields to match the JSON output format
// - Borrowing: all probes share one &Client (and its connection pool)
// =============================================================================

use anyhow::{Context, Result};
use reqwest::{redirect, Client};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::classify::{classify, Classification};

/// Per-probe timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Status code recorded when the server could not be reached at all
pub const UNKNOWN_STATUS: u16 = 0;

// The outcome of probing one URL
//
// Serialized as {"URL": "...", "Status": 404}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlStatus {
    /// The URL that was probed
    #[serde(rename = "URL")]
    pub url: String,
    /// HTTP status code, or 0 when the probe failed before a response
    #[serde(rename = "Status")]
    pub status: u16,
}

impl UrlStatus {
    pub fn new(url: impl Into<String>, status: u16) -> Self {
        UrlStatus {
            url: url.into(),
            status,
        }
    }

    /// Result for a URL whose server never answered
    pub fn unknown(url: impl Into<String>) -> Self {
        UrlStatus::new(url, UNKNOWN_STATUS)
    }

    pub fn is_unreachable(&self) -> bool {
        self.status == UNKNOWN_STATUS
    }

    pub fn classification(&self) -> Classification {
        classify(self.status)
    }
}

// Builds the HTTP client shared by every probe in a run
//
// `timeout` bounds the whole request: connect, send and wait for headers.
// Redirects are followed the way a stock HTTP client does (up to 10 hops);
// the status recorded is the one at the end of the chain.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .redirect(redirect::Policy::limited(10))
        .user_agent(concat!("linkprobe/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to create HTTP client")
}

// Probes a single URL with a HEAD request
//
// Returns UrlStatus { url, status } where status is the response code, or 0
// if the request failed for any reason (including the client timeout).
pub async fn probe(client: &Client, url: String) -> UrlStatus {
    match client.head(&url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            debug!(url = %url, status, "probe answered");
            UrlStatus::new(url, status)
        }
        Err(e) => {
            debug!(
                url = %url,
                error = %e,
                timeout = e.is_timeout(),
                connect = e.is_connect(),
                "probe failed, recording unknown status"
            );
            UrlStatus::unknown(url)
        }
    }
}
