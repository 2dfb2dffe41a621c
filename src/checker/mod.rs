// src/checker/mod.rs
// =============================================================================
// This module contains the link checking engine.
//
// Submodules, leaf to root:
// - extract: finds http/https URLs in text and drops duplicates
// - http: probes one URL with a HEAD request
// - classify: maps a status code to a category and label
// - aggregate: runs the probes concurrently and gathers the results
// =============================================================================

mod aggregate;
mod classify;
mod extract;
mod http;

pub use aggregate::{collect_statuses, probe_all};
pub use classify::StatusCategory;
pub use http::{build_client, UrlStatus, DEFAULT_TIMEOUT};

use extract::{dedup_urls, extract_urls};

// Extracts the URLs from `text` and removes repeats, keeping first-seen order
pub fn unique_urls(text: &str) -> Vec<String> {
    dedup_urls(extract_urls(text))
}
