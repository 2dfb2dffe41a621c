// src/cli.rs
// =============================================================================
// This file defines the command-line interface using clap's derive API.
//
//   linkprobe -f notes.txt            human-readable lines, one per URL
//   linkprobe -f notes.txt --json     a single JSON array on stdout
//   linkprobe -v                      print the version and exit
//
// Colour is chosen by CLICOLOR=1 / CLICOLOR=0 (or --color), and only
// matters for the human-readable output.
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates the parsing code
// - Option<T>: arguments that may be missing; config.rs decides if that's ok
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::checker::DEFAULT_TIMEOUT;

/// Fixed string printed by --version
pub fn version_string() -> String {
    format!("linkprobe version {}", env!("CARGO_PKG_VERSION"))
}

// The whole CLI is a single command with flags, no subcommands.
//
// clap's own -V/--version is switched off so that -v can be ours.
#[derive(Parser, Debug)]
#[command(
    name = "linkprobe",
    about = "Find every http(s) URL in a text file and check whether it is alive",
    long_about = "linkprobe extracts all http:// and https:// URLs from a text file, removes \
                  duplicates, and sends one HEAD request per URL concurrently. Each URL is \
                  reported as alive, bad or unknown, either as text lines or as JSON.",
    after_help = "Examples:\n  CLICOLOR=1 linkprobe -f urls.txt\n  linkprobe -f urls.txt --json",
    disable_version_flag = true
)]
pub struct Cli {
    /// Text file to scan for URLs
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print results as a JSON array instead of text lines
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Print version info and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Colour mode for text output: 1 = colour, 0 = plain
    ///
    /// Falls back to the CLICOLOR environment variable.
    #[arg(long = "color", env = "CLICOLOR", value_name = "0|1")]
    pub color: Option<String>,

    /// Seconds to wait for each HEAD request before calling the URL unknown
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Maximum number of requests in flight at once (0 = no limit)
    ///
    /// URLs are checked in batches of at most N, so a run where every URL
    /// hangs takes about one timeout per batch of N. Use 0 to check every URL
    /// at once and bound the whole run by a single timeout.
    #[arg(short = 'c', long, value_name = "N", default_value_t = 64)]
    pub concurrency: usize,
}
