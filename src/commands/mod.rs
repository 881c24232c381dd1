//! CLI command implementations for givebank.
//!
//! Available commands:
//! - **leaderboard**: All-time and trailing-window contributor rankings
//! - **directory**: Filtered give listing with contacts disclosed by role
//! - **stats**: Per-category counts scoped to the viewer, plus their standing
//! - **init**: Write a default `.givebank.toml`

pub mod directory;
pub mod init;
pub mod leaderboard;
pub mod stats;

pub use directory::{handle_directory, DirectoryCommand};
pub use init::init_config;
pub use leaderboard::{handle_leaderboard, LeaderboardCommand};
pub use stats::{handle_stats, StatsCommand};

use crate::config::GivebankConfig;
use crate::io::output::{create_writer, OutputFormat, OutputWriter};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use std::path::Path;

/// Where and how a command renders its result.
#[derive(Debug, Clone, Default)]
pub struct OutputTarget {
    pub format: Option<crate::cli::OutputFormat>,
    pub output: Option<std::path::PathBuf>,
}

impl OutputTarget {
    /// CLI flag first, then `output.default_format`, then terminal.
    pub fn resolve_format(&self, config: &GivebankConfig) -> OutputFormat {
        self.format
            .map(OutputFormat::from)
            .or_else(|| config.default_format().and_then(OutputFormat::parse))
            .unwrap_or_default()
    }

    pub fn open(&self, config: &GivebankConfig) -> Result<Box<dyn OutputWriter>> {
        let format = self.resolve_format(config);
        let sink: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(create_output_file(path)?)),
            None => Box::new(std::io::stdout()),
        };
        let use_color = self.output.is_none() && should_use_color(config);
        Ok(create_writer(format, sink, use_color))
    }
}

/// `--now` as RFC 3339, or the wall clock when absent.
pub(crate) fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(text) => DateTime::parse_from_rfc3339(text)
            .map(|at| at.with_timezone(&Utc))
            .with_context(|| format!("Invalid --now timestamp '{text}', expected RFC 3339")),
        None => Ok(Utc::now()),
    }
}

fn create_output_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create output file {}", path.display()))
}

fn should_use_color(config: &GivebankConfig) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    config
        .use_color()
        .unwrap_or_else(|| std::io::stdout().is_terminal())
}
