// src/checker/aggregate.rs
// =============================================================================
// This module fans probes out over every unique URL.
//
// probe_all() gives back a stream that yields one UrlStatus per URL as soon
// as that probe finishes. The caller decides what to do with it:
// - text mode prints each item the moment it arrives (see report.rs)
// - JSON mode collects everything first (collect_statuses below)
//
// Either way each URL produces exactly one result, in completion order,
// which depends on network latency rather than on input order.
//
// Rust concepts:
// - Streams: like async iterators, items arrive over time
// - buffer_unordered(N): keep up to N futures running, yield whichever
//   finishes first
// - Lifetimes: the stream borrows the client, so it can't outlive it
// =============================================================================

use futures::stream::{self, Stream, StreamExt};
use reqwest::Client;

use super::http::{probe, UrlStatus};
use crate::config::Concurrency;

// Starts probing `urls` and yields results as they complete
//
// With Concurrency::Unbounded every probe is in flight at once, so a URL
// that never answers costs one timeout no matter how many URLs there are.
pub fn probe_all<'a>(
    client: &'a Client,
    urls: Vec<String>,
    concurrency: Concurrency,
) -> impl Stream<Item = UrlStatus> + 'a {
    let limit = concurrency.limit_for(urls.len());

    stream::iter(urls)
        .map(move |url| probe(client, url))
        .buffer_unordered(limit)
}

// Probes every URL and waits for all N results
pub async fn collect_statuses(
    client: &Client,
    urls: Vec<String>,
    concurrency: Concurrency,
) -> Vec<UrlStatus> {
    probe_all(client, urls, concurrency).collect().await
}
