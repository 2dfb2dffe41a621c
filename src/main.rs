// src/main.rs
// =============================================================================
// This is the entry point of the linkprobe CLI.
//
// What happens here:
// 1. Parse command-line arguments and validate them into a Config
// 2. Read the input file and pull out the unique URLs
// 3. Probe every URL concurrently
// 4. Print text lines as results arrive, or one JSON array at the end
// 5. Exit with 0 on a completed run, 2 on a usage or fatal error
//
// Dead links do not change the exit code; they are reported, not fatal.
// =============================================================================

mod checker;
mod cli;
mod config;
mod logging;
mod report;
#[cfg(test)]
mod testutil;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use cli::Cli;
use config::{ColorMode, Config, ConfigError, OutputMode};

const EXIT_OK: i32 = 0;
const EXIT_ERROR: i32 = 2;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // --version short-circuits everything else
    if cli.version {
        println!("{}", cli::version_string());
        return Ok(EXIT_OK);
    }

    logging::init_logging();

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(ConfigError::MissingFile) => {
            eprintln!("{}", Cli::command().render_help());
            return Ok(EXIT_ERROR);
        }
        Err(e) => return Err(e.into()),
    };

    let text = read_input(&config.file).await?;
    let urls = checker::unique_urls(&text);

    info!(
        file = %config.file.display(),
        urls = urls.len(),
        output = ?config.output,
        concurrency = ?config.concurrency,
        "starting link check"
    );

    let client = checker::build_client(config.timeout)?;
    let started = Instant::now();
    let mut out = io::stdout();

    match config.output {
        OutputMode::Json => {
            let statuses = checker::collect_statuses(&client, urls, config.concurrency).await;
            report::write_json(&statuses, &mut out)?;
            info!(
                checked = statuses.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "link check finished"
            );
        }
        OutputMode::Text(color) => {
            // The toggle was already validated; make colored follow it
            // instead of guessing from the terminal.
            colored::control::set_override(color == ColorMode::Color);

            let formatter = report::formatter_for(color);
            let results = checker::probe_all(&client, urls, config.concurrency);
            let tally = report::stream_report(results, formatter.as_ref(), &mut out)
                .await
                .context("failed to write report")?;
            info!(
                checked = tally.total(),
                alive = tally.alive,
                bad = tally.bad,
                unknown = tally.unknown,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "link check finished"
            );
        }
    }

    Ok(EXIT_OK)
}

// Reads the whole input file
//
// Invalid UTF-8 is replaced rather than rejected; URLs are ASCII anyway.
async fn read_input(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
