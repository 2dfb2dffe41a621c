// src/config.rs
// =============================================================================
// Turns parsed CLI arguments into a validated run configuration.
//
// All configuration problems are caught here, before the input file is read
// and before any request goes out. The colour toggle ends up as a plain
// value inside Config, so nothing downstream reads the environment.
// =============================================================================

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::cli::Cli;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no input file given")]
    MissingFile,

    #[error("please set your CLICOLOR env variable to 1 (colour) or 0 (plain)")]
    MissingColorMode,

    #[error("CLICOLOR must be exactly \"1\" or \"0\", got {0:?}")]
    InvalidColorMode(String),

    #[error("--timeout must be at least 1 second")]
    ZeroTimeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Color,
    Plain,
}

impl FromStr for ColorMode {
    type Err = ConfigError;

    // Only the exact strings "1" and "0" are accepted; " 1", "true" and ""
    // are all errors.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(ColorMode::Color),
            "0" => Ok(ColorMode::Plain),
            other => Err(ConfigError::InvalidColorMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One line per URL, written as soon as its probe finishes
    Text(ColorMode),
    /// One JSON array once every probe has finished
    Json,
}

/// How many probes may be in flight at the same time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concurrency {
    /// One in-flight probe per URL
    Unbounded,
    Limit(NonZeroUsize),
}

impl Concurrency {
    /// 0 means no limit
    pub fn from_limit(limit: usize) -> Self {
        NonZeroUsize::new(limit).map_or(Concurrency::Unbounded, Concurrency::Limit)
    }

    // Effective cap for a run over `jobs` URLs; never 0 so the stream makes progress
    pub fn limit_for(self, jobs: usize) -> usize {
        match self {
            Concurrency::Unbounded => jobs.max(1),
            Concurrency::Limit(n) => n.get(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file: PathBuf,
    pub output: OutputMode,
    pub timeout: Duration,
    pub concurrency: Concurrency,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Config, ConfigError> {
        let file = cli.file.clone().ok_or(ConfigError::MissingFile)?;

        // The colour toggle is only required when there is text to colour
        let output = if cli.json {
            OutputMode::Json
        } else {
            let raw = cli.color.as_deref().ok_or(ConfigError::MissingColorMode)?;
            OutputMode::Text(raw.parse()?)
        };

        if cli.timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Config {
            file,
            output,
            timeout: Duration::from_secs(cli.timeout),
            concurrency: Concurrency::from_limit(cli.concurrency),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(file: Option<&str>, json: bool, color: Option<&str>) -> Cli {
        Cli {
            file: file.map(PathBuf::from),
            json,
            version: false,
            color: color.map(str::to_string),
            timeout: 5,
            concurrency: 64,
        }
    }

    #[test]
    fn test_color_mode_accepts_only_one_and_zero() {
        assert_eq!("1".parse::<ColorMode>(), Ok(ColorMode::Color));
        assert_eq!("0".parse::<ColorMode>(), Ok(ColorMode::Plain));

        for bad in ["", "2", "true", " 1", "yes"] {
            assert_eq!(
                bad.parse::<ColorMode>(),
                Err(ConfigError::InvalidColorMode(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_text_mode_config() {
        let config = Config::from_cli(&cli(Some("urls.txt"), false, Some("1"))).unwrap();
        assert_eq!(config.file, PathBuf::from("urls.txt"));
        assert_eq!(config.output, OutputMode::Text(ColorMode::Color));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.concurrency, Concurrency::from_limit(64));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_cli(&cli(None, false, Some("1"))).unwrap_err();
        assert_eq!(err, ConfigError::MissingFile);
    }

    #[test]
    fn test_text_mode_needs_color_toggle() {
        let err = Config::from_cli(&cli(Some("urls.txt"), false, None)).unwrap_err();
        assert_eq!(err, ConfigError::MissingColorMode);

        let err = Config::from_cli(&cli(Some("urls.txt"), false, Some("yes"))).unwrap_err();
        assert_eq!(err, ConfigError::InvalidColorMode("yes".to_string()));
    }

    #[test]
    fn test_json_mode_ignores_color_toggle() {
        let config = Config::from_cli(&cli(Some("urls.txt"), true, None)).unwrap();
        assert_eq!(config.output, OutputMode::Json);

        let config = Config::from_cli(&cli(Some("urls.txt"), true, Some("bogus"))).unwrap();
        assert_eq!(config.output, OutputMode::Json);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut args = cli(Some("urls.txt"), true, None);
        args.timeout = 0;
        assert_eq!(Config::from_cli(&args).unwrap_err(), ConfigError::ZeroTimeout);
    }

    #[test]
    fn test_concurrency_limits() {
        assert_eq!(Concurrency::from_limit(0), Concurrency::Unbounded);
        assert_eq!(Concurrency::Unbounded.limit_for(250), 250);
        assert_eq!(Concurrency::Unbounded.limit_for(0), 1);
        assert_eq!(Concurrency::from_limit(8).limit_for(250), 8);
    }
}
