use super::{parse_now, OutputTarget};
use crate::config::GivebankConfig;
use crate::core::{ContributorId, Viewer, ViewerRole};
use crate::io::records::load_records;
use crate::leaderboard::member_standing;
use crate::stats::compute_stats;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct StatsCommand {
    pub file: PathBuf,
    pub role: ViewerRole,
    pub viewer_id: Option<u64>,
    pub now: Option<String>,
    pub target: OutputTarget,
}

impl StatsCommand {
    fn viewer(&self) -> Viewer {
        Viewer::new(self.viewer_id.map(ContributorId), self.role)
    }
}

pub fn handle_stats(command: StatsCommand, config: &GivebankConfig) -> Result<()> {
    let now = parse_now(command.now.as_deref())?;
    let records = load_records(&command.file)
        .with_context(|| format!("Failed to load gives from {}", command.file.display()))?;
    let viewer = command.viewer();
    let stats = compute_stats(&records, &viewer);

    // Standing only means something for an identified member.
    let standing = viewer.id.map(|_| {
        let standing =
            member_standing(&records, &viewer, now, config.leaderboard().window_days);
        info!(
            total = standing.total_gives,
            rank = ?standing.rank,
            "Member standing ready"
        );
        standing
    });

    let mut writer = command.target.open(config)?;
    writer.write_stats(&stats, standing.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_from_command() {
        let command = StatsCommand {
            file: PathBuf::from("gives.json"),
            role: ViewerRole::Standard,
            viewer_id: Some(7),
            now: None,
            target: OutputTarget::default(),
        };
        let viewer = command.viewer();
        assert_eq!(viewer.id, Some(ContributorId(7)));
        assert!(!viewer.is_elevated());
    }

    #[test]
    fn test_invalid_now_fails_before_loading() {
        let command = StatsCommand {
            file: PathBuf::from("/definitely/not/here.json"),
            role: ViewerRole::Standard,
            viewer_id: Some(1),
            now: Some("last week".to_string()),
            target: OutputTarget::default(),
        };
        let err = handle_stats(command, &GivebankConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--now"));
    }
}
