// src/report.rs
// =============================================================================
// This module writes probe results to an output sink (normally stdout).
//
// Two shapes of output:
// - Text: one line per URL, written and flushed the moment the probe ends
// - JSON: a single array written after every probe has ended
//
// Colour and plain text go through the same code path. The only difference
// is which LineFormatter is plugged in.
//
// Rust concepts:
// - Traits: LineFormatter is the pluggable "how does a line look" piece
// - Box<dyn Trait>: pick an implementation at runtime
// - Generic writers (impl Write): tests write into a Vec<u8>
// =============================================================================

use anyhow::{Context, Result};
use colored::Colorize;
use futures::{Stream, StreamExt};
use std::io::{self, Write};

use crate::checker::{StatusCategory, UrlStatus};
use crate::config::ColorMode;

// Renders one result as one line of text (without the trailing newline)
pub trait LineFormatter: Send + Sync {
    fn format(&self, status: &UrlStatus) -> String;
}

// "<code> <url> <label>", or "<url> is unknown" when there was no response
fn plain_line(status: &UrlStatus) -> String {
    let label = status.classification().label;
    if status.is_unreachable() {
        format!("{} {}", status.url, label)
    } else {
        format!("{} {} {}", status.status, status.url, label)
    }
}

pub struct PlainFormatter;

impl LineFormatter for PlainFormatter {
    fn format(&self, status: &UrlStatus) -> String {
        plain_line(status)
    }
}

// Same text as PlainFormatter, coloured by category
pub struct ColorFormatter;

impl LineFormatter for ColorFormatter {
    fn format(&self, status: &UrlStatus) -> String {
        let line = plain_line(status);
        let painted = match status.classification().category {
            StatusCategory::Success => line.green(),
            StatusCategory::Redirect => line.yellow(),
            StatusCategory::ClientError | StatusCategory::ServerError => line.red(),
            StatusCategory::Unknown => line.bright_black(),
        };
        painted.to_string()
    }
}

pub fn formatter_for(mode: ColorMode) -> Box<dyn LineFormatter> {
    match mode {
        ColorMode::Color => Box::new(ColorFormatter),
        ColorMode::Plain => Box::new(PlainFormatter),
    }
}

/// Running count of outcomes, used for the end-of-run log line
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub alive: usize,
    pub bad: usize,
    pub unknown: usize,
}

impl Tally {
    pub fn record(&mut self, status: &UrlStatus) {
        let category = status.classification().category;
        if category.is_alive() {
            self.alive += 1;
        } else if category.is_bad() {
            self.bad += 1;
        } else {
            self.unknown += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.alive + self.bad + self.unknown
    }
}

// Writes each result as a line as soon as it comes out of `results`
//
// Returns once the stream is exhausted, i.e. after every probe has finished.
pub async fn stream_report<S, W>(
    results: S,
    formatter: &dyn LineFormatter,
    out: &mut W,
) -> io::Result<Tally>
where
    S: Stream<Item = UrlStatus>,
    W: Write,
{
    let mut results = std::pin::pin!(results);
    let mut tally = Tally::default();

    while let Some(status) = results.next().await {
        writeln!(out, "{}", formatter.format(&status))?;
        out.flush()?;
        tally.record(&status);
    }

    Ok(tally)
}

// Writes all results as one compact JSON array followed by a newline
//
// Example: [{"URL":"http://a.com","Status":200},{"URL":"http://b.com","Status":0}]
pub fn write_json<W: Write>(statuses: &[UrlStatus], out: &mut W) -> Result<()> {
    serde_json::to_writer(&mut *out, statuses).context("JSON marshaling failed")?;
    writeln!(out).context("failed to write JSON output")?;
    out.flush().context("failed to write JSON output")?;
    Ok(())
}
