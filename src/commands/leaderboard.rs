use super::{parse_now, OutputTarget};
use crate::config::GivebankConfig;
use crate::io::records::load_records;
use crate::leaderboard::{build_dashboard, LeaderboardConfig};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct LeaderboardCommand {
    pub file: PathBuf,
    pub window_days: Option<u32>,
    pub now: Option<String>,
    pub top: Option<usize>,
    pub target: OutputTarget,
}

pub fn handle_leaderboard(command: LeaderboardCommand, config: &GivebankConfig) -> Result<()> {
    let settings = effective_settings(&command, config)?;
    let now = parse_now(command.now.as_deref())?;

    let records = load_records(&command.file)
        .with_context(|| format!("Failed to load gives from {}", command.file.display()))?;
    let dashboard = build_dashboard(&records, now, &settings).truncated(command.top);

    info!(
        all_time = dashboard.all_time.len(),
        trailing = dashboard.trailing.len(),
        window_days = dashboard.window_days,
        "Leaderboard ready"
    );

    let mut writer = command.target.open(config)?;
    writer.write_dashboard(&dashboard)
}

fn effective_settings(
    command: &LeaderboardCommand,
    config: &GivebankConfig,
) -> Result<LeaderboardConfig> {
    let mut settings = config.leaderboard();
    if let Some(days) = command.window_days {
        settings.window_days = days;
    }
    settings
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid leaderboard options: {e}"))?;
    Ok(settings)
}
